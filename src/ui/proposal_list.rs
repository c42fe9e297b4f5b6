use iced::widget::{button, container, mouse_area, row, scrollable, text, tooltip, Column};
use iced::{Element, Fill, Padding};

use crate::combo::Message;
use crate::completion::InputCompletion;
use crate::ui::theme;

/// Height past which the dropdown scrolls
const MAX_HEIGHT: f32 = 280.0;

/// Build the dropdown rows for an open completion
pub fn view(completion: &InputCompletion) -> Element<'_, Message> {
    let proposals = completion.visible();
    if proposals.is_empty() {
        return container(text("No previous entries").size(13).style(theme::proposal_hint))
            .padding(Padding::from([6, 12]))
            .width(Fill)
            .style(theme::dropdown)
            .into();
    }

    let selected = completion.selected_index();
    let rows: Vec<Element<'_, Message>> = proposals
        .iter()
        .enumerate()
        .map(|(i, proposal)| {
            let style = if selected == Some(i) {
                theme::proposal_row_selected as fn(&iced::Theme) -> container::Style
            } else {
                theme::proposal_row
            };

            let label = container(text(&proposal.label).size(14).style(theme::proposal_label))
                .padding(Padding::from([6, 12]))
                .width(Fill);
            let pick = mouse_area(label).on_press(Message::ProposalSelected(i));

            let delete = tooltip(
                button(text("\u{00D7}").size(14))
                    .on_press(Message::ProposalDeleted(i))
                    .padding([4, 8])
                    .style(theme::delete_button),
                container(text(completion.delete_tooltip()).size(12))
                    .padding(6)
                    .style(theme::tooltip),
                tooltip::Position::Right,
            );

            container(row![pick, delete])
                .width(Fill)
                .style(style)
                .into()
        })
        .collect();

    container(scrollable(Column::from_vec(rows).spacing(2)))
        .max_height(MAX_HEIGHT)
        .padding(4)
        .width(Fill)
        .style(theme::dropdown)
        .into()
}
