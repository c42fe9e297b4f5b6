use serde::Deserialize;

/// User-facing strings of the widget, overridable from the `[messages]` table
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Messages {
    /// Tooltip on the delete affordance of a dropdown row
    pub delete_tooltip: String,
    /// Tooltip on the button that opens the recent entries
    pub recent_entries_tooltip: String,
    /// Placeholder shown in an empty input
    pub placeholder: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            delete_tooltip: "Click or use delete key to delete the search term".to_string(),
            recent_entries_tooltip: "Show previous entries".to_string(),
            placeholder: String::new(),
        }
    }
}
