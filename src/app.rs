use std::sync::Arc;

use iced::widget::{column, container, text};
use iced::{Element, Fill, Padding, Subscription, Task, Theme};

use crate::combo::{self, Action, ComboTextInput, Options};
use crate::config::Config;
use crate::storage::{FileStore, KeyValueStore, MemoryStore};

/// Identifier of the demo's search box; also names its storage key
pub const SEARCH_ID: &str = "search";

/// Demo window hosting one combo input
pub struct State {
    search: ComboTextInput,
    last_search: Option<String>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Search(combo::Message),
}

impl State {
    pub fn new(config: Config) -> (Self, Task<Message>) {
        let store = open_store(&config);
        let search = ComboTextInput::new(
            Options::new(SEARCH_ID)
                .with_button(Some("Search".to_string()))
                .with_input_completion(store)
                .messages(config.messages.clone())
                .max_entries(config.recent.max_entries)
                .notify_delay(config.recent.notify_delay()),
        );
        let focus = iced::widget::operation::focus(search.text_input_id().clone());

        (
            Self {
                search,
                last_search: None,
            },
            focus,
        )
    }

    pub fn title(&self) -> String {
        String::from("Combo Input")
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Search(msg) => match self.search.update(msg) {
                Action::None => Task::none(),
                Action::Run(task) => task.map(Message::Search),
                Action::ButtonPressed(value) | Action::Submitted(value) => {
                    self.run_search(value);
                    Task::none()
                }
            },
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let status = match &self.last_search {
            Some(value) => format!("Last search: {value}"),
            None => String::from("Type a value and press Enter or Search"),
        };

        let content = column![
            self.search.view().map(Message::Search),
            text(status).size(13),
        ]
        .spacing(12)
        .padding(Padding::new(16.0));

        container(content).width(Fill).height(Fill).into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        self.search.subscription().map(Message::Search)
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn run_search(&mut self, value: String) {
        if value.is_empty() {
            return;
        }
        match self.search.add_text_input_value_to_recent_entries() {
            Ok(true) => tracing::debug!("Remembered '{}'", value),
            Ok(false) => {}
            Err(e) => tracing::error!("Failed to remember '{}': {}", value, e),
        }
        tracing::info!("Searching for '{}'", value);
        self.last_search = Some(value);
    }
}

/// File store at the configured directory, or an in-memory one if it cannot be opened
fn open_store(config: &Config) -> Arc<dyn KeyValueStore> {
    let dir = config.storage.resolved_dir();
    match FileStore::open(&dir) {
        Ok(store) => {
            tracing::info!("Storing recent entries in {}", dir.display());
            Arc::new(store)
        }
        Err(e) => {
            tracing::warn!(
                "Failed to open store at {}: {}, recent entries will not persist",
                dir.display(),
                e
            );
            Arc::new(MemoryStore::new())
        }
    }
}
