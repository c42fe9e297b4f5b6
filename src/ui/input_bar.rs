use iced::widget::{button, container, row, text, text_input, tooltip, Id};
use iced::{Element, Fill};

use crate::combo::{ComboButton, Message, RecentEntryButton};
use crate::ui::theme;

/// Build the input row: text field, recent-entry button, attached button
pub fn view<'a>(
    input_id: &Id,
    placeholder: &str,
    value: &str,
    recent_entry_button: Option<&'a RecentEntryButton>,
    combo_button: Option<&'a ComboButton>,
) -> Element<'a, Message> {
    let input = text_input(placeholder, value)
        .on_input(Message::InputChanged)
        .on_submit(Message::Submitted)
        .id(input_id.clone())
        .padding(10)
        .size(16)
        .width(Fill)
        .style(theme::text_input);

    let mut bar = row![input].spacing(4);

    if let Some(recent) = recent_entry_button {
        let opener = button(text("\u{25BE}").size(14))
            .on_press(Message::RecentEntryButtonPressed)
            .padding([10, 8])
            .style(theme::recent_entry_button);
        bar = bar.push(tooltip(
            opener,
            container(text(&recent.tooltip).size(12))
                .padding(6)
                .style(theme::tooltip),
            tooltip::Position::Bottom,
        ));
    }

    if let Some(attached) = combo_button.filter(|b| !b.hidden) {
        let label = attached.text.as_deref().unwrap_or_default();
        bar = bar.push(
            button(text(label).size(14))
                .on_press(Message::ButtonPressed)
                .padding([10, 14])
                .style(theme::combo_button),
        );
    }

    container(bar)
        .width(Fill)
        .padding(2)
        .style(theme::wrapper)
        .into()
}
