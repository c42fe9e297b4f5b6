//! The combo text input: a text field with an optional attached button and an
//! optional dropdown of recent entries.
//!
//! The widget follows iced's component shape: the parent stores a
//! [`ComboTextInput`], maps [`ComboTextInput::view`] and
//! [`ComboTextInput::subscription`] into its own message type, and reacts to
//! the [`Action`] returned from [`ComboTextInput::update`].

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use iced::keyboard::{self, key::Named};
use iced::widget::{column, Id};
use iced::{event, window, Element, Subscription, Task};

use crate::completion::InputCompletion;
use crate::error::Result;
use crate::messages::Messages;
use crate::provider::{
    delete_stored, stored_proposals, DataListChanged, DeleteHandler, ProposalProvider,
    DEFAULT_NOTIFY_DELAY,
};
use crate::recent::{Proposal, RecentEntries};
use crate::storage::KeyValueStore;
use crate::ui::{input_bar, proposal_list};

/// Construction options for a [`ComboTextInput`]
pub struct Options {
    id: String,
    has_button: bool,
    button_text: Option<String>,
    store: Option<Arc<dyn KeyValueStore>>,
    messages: Messages,
    max_entries: usize,
    notify_delay: Duration,
    proposal_provider: Option<Box<dyn ProposalProvider>>,
    extended_provider: Option<Box<dyn ProposalProvider>>,
    on_recent_entry_delete: Option<Box<dyn DeleteHandler>>,
}

impl Options {
    /// Plain text input identified by `id`; no button, no completion
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            has_button: false,
            button_text: None,
            store: None,
            messages: Messages::default(),
            max_entries: 0,
            notify_delay: DEFAULT_NOTIFY_DELAY,
            proposal_provider: None,
            extended_provider: None,
            on_recent_entry_delete: None,
        }
    }

    /// Attach a button, labelled with `text` when given
    pub fn with_button(mut self, text: Option<String>) -> Self {
        self.has_button = true;
        self.button_text = text;
        self
    }

    /// Enable recent-entry completion backed by `store`
    pub fn with_input_completion(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    pub fn max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries;
        self
    }

    pub fn notify_delay(mut self, delay: Duration) -> Self {
        self.notify_delay = delay;
        self
    }

    /// Replace the stored recent entries as the dropdown's data source
    pub fn proposal_provider(mut self, provider: impl ProposalProvider + 'static) -> Self {
        self.proposal_provider = Some(Box::new(provider));
        self
    }

    /// Extra proposals listed after the recent entries
    pub fn extended_provider(mut self, provider: impl ProposalProvider + 'static) -> Self {
        self.extended_provider = Some(Box::new(provider));
        self
    }

    /// Replace the default delete handler (remove from the stored entries)
    pub fn on_recent_entry_delete(mut self, handler: impl DeleteHandler + 'static) -> Self {
        self.on_recent_entry_delete = Some(Box::new(handler));
        self
    }
}

/// The attached button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboButton {
    pub text: Option<String>,
    pub hidden: bool,
}

/// The button opening the recent-entry dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentEntryButton {
    pub tooltip: String,
}

struct Completion {
    recent: RecentEntries,
    provider: Box<dyn ProposalProvider>,
    extended: Option<Box<dyn ProposalProvider>>,
    on_delete: Box<dyn DeleteHandler>,
    notify_delay: Duration,
    dropdown: InputCompletion,
    button: RecentEntryButton,
}

impl Completion {
    /// Proposals from the main provider followed by the extended one.
    /// A failing provider contributes nothing.
    fn proposals(&self) -> Vec<Proposal> {
        let mut proposals = self.provider.proposals(&self.recent).unwrap_or_else(|e| {
            tracing::error!("Failed to load {}: {}", self.recent.key(), e);
            Vec::new()
        });
        if let Some(extended) = &self.extended {
            match extended.proposals(&self.recent) {
                Ok(more) => proposals.extend(more),
                Err(e) => tracing::warn!("Extended proposals failed: {}", e),
            }
        }
        proposals
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(String),
    Submitted,
    ButtonPressed,
    RecentEntryButtonPressed,
    ProposalSelected(usize),
    ProposalDeleted(usize),
    DataListChanged(DataListChanged),
    KeyPressed(Named),
}

/// What the parent should do after [`ComboTextInput::update`]
pub enum Action {
    None,
    /// Run this task, mapped into the parent's message type
    Run(Task<Message>),
    /// The attached button was pressed while the input held this value
    ButtonPressed(String),
    /// Enter was pressed with no proposal selected
    Submitted(String),
}

pub struct ComboTextInput {
    id: String,
    input_id: Id,
    value: String,
    placeholder: String,
    button: Option<ComboButton>,
    completion: Option<Completion>,
}

impl ComboTextInput {
    pub fn new(options: Options) -> Self {
        let Options {
            id,
            has_button,
            button_text,
            store,
            messages,
            max_entries,
            notify_delay,
            proposal_provider,
            extended_provider,
            on_recent_entry_delete,
        } = options;

        let button = has_button.then(|| ComboButton {
            text: button_text,
            hidden: false,
        });

        let completion = store.map(|store| Completion {
            recent: RecentEntries::new(&id, store).with_max_entries(max_entries),
            provider: proposal_provider.unwrap_or_else(|| Box::new(stored_proposals)),
            extended: extended_provider,
            on_delete: on_recent_entry_delete.unwrap_or_else(|| Box::new(delete_stored)),
            notify_delay,
            dropdown: InputCompletion::new(&id, messages.delete_tooltip.clone()),
            button: RecentEntryButton {
                tooltip: messages.recent_entries_tooltip.clone(),
            },
        });

        tracing::debug!(
            "Created combo input '{}' (button: {}, completion: {})",
            id,
            button.is_some(),
            completion.is_some()
        );

        Self {
            id,
            input_id: Id::unique(),
            value: String::new(),
            placeholder: messages.placeholder,
            button,
            completion,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Widget id of the text field, for focus operations
    pub fn text_input_id(&self) -> &Id {
        &self.input_id
    }

    pub fn button(&self) -> Option<&ComboButton> {
        self.button.as_ref()
    }

    pub fn recent_entry_button(&self) -> Option<&RecentEntryButton> {
        self.completion.as_ref().map(|c| &c.button)
    }

    pub fn recent_entries(&self) -> Option<&RecentEntries> {
        self.completion.as_ref().map(|c| &c.recent)
    }

    pub fn completion(&self) -> Option<&InputCompletion> {
        self.completion.as_ref().map(|c| &c.dropdown)
    }

    pub fn text_input_value(&self) -> &str {
        &self.value
    }

    pub fn set_text_input_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        if let Some(completion) = &mut self.completion {
            completion.dropdown.set_query(&self.value);
        }
    }

    pub fn show_button(&mut self) {
        if let Some(button) = &mut self.button {
            button.hidden = false;
        }
    }

    pub fn hide_button(&mut self) {
        if let Some(button) = &mut self.button {
            button.hidden = true;
        }
    }

    /// Remember the current value as a recent entry.
    ///
    /// Returns whether it was added; empty values, duplicates and widgets
    /// without completion add nothing.
    pub fn add_text_input_value_to_recent_entries(&self) -> Result<bool> {
        match &self.completion {
            Some(completion) => completion.recent.add(&self.value),
            None => Ok(false),
        }
    }

    /// Run the delete handler for `entry`.
    ///
    /// With `notify` set and an entry actually removed, the returned task
    /// yields [`Message::DataListChanged`] after the configured delay.
    pub fn delete_recent_entry(&mut self, entry: &Proposal, notify: bool) -> Action {
        match self.deletion_notice(entry, notify) {
            Some(notice) => Action::Run(Task::perform(notice, Message::DataListChanged)),
            None => Action::None,
        }
    }

    /// Run the delete handler for `entry` and drop its row from the dropdown.
    ///
    /// Returns the delayed change notice when `notify` is set and an entry was
    /// removed.
    pub fn deletion_notice(
        &mut self,
        entry: &Proposal,
        notify: bool,
    ) -> Option<impl Future<Output = DataListChanged> + Send + 'static> {
        let completion = self.completion.as_mut()?;
        match completion.on_delete.delete(entry, &completion.recent) {
            Ok(true) => {
                completion.dropdown.remove(&entry.value);
                notify.then(|| DataListChanged::deletion_after(completion.notify_delay))
            }
            Ok(false) => None,
            Err(e) => {
                tracing::error!("Failed to delete '{}': {}", entry.value, e);
                None
            }
        }
    }

    /// Focus the input and open the dropdown over the current proposals
    pub fn propose_on(&mut self) -> Action {
        let Some(completion) = &mut self.completion else {
            return Action::None;
        };
        let proposals = completion.proposals();
        completion.dropdown.propose_on(proposals, &self.value);
        Action::Run(iced::widget::operation::focus(self.input_id.clone()))
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::InputChanged(value) => {
                self.set_text_input_value(value);
                Action::None
            }
            Message::Submitted => {
                if self.accept_selected() {
                    return Action::None;
                }
                self.dismiss();
                Action::Submitted(self.value.clone())
            }
            Message::ButtonPressed => {
                if self.button.is_none() {
                    return Action::None;
                }
                self.dismiss();
                Action::ButtonPressed(self.value.clone())
            }
            Message::RecentEntryButtonPressed => self.propose_on(),
            Message::ProposalSelected(index) => {
                if let Some(completion) = &mut self.completion {
                    completion.dropdown.select(index);
                }
                if self.accept_selected() {
                    Action::Run(iced::widget::operation::focus(self.input_id.clone()))
                } else {
                    Action::None
                }
            }
            Message::ProposalDeleted(index) => match self.visible_proposal(index) {
                Some(entry) => self.delete_recent_entry(&entry, true),
                None => Action::None,
            },
            Message::DataListChanged(change) => {
                if let Some(completion) = &mut self.completion {
                    if change.deleting && completion.dropdown.is_open() {
                        let proposals = completion.proposals();
                        completion.dropdown.refresh(proposals);
                    }
                }
                Action::None
            }
            Message::KeyPressed(named) => self.handle_key(named),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let bar = input_bar::view(
            &self.input_id,
            &self.placeholder,
            &self.value,
            self.recent_entry_button(),
            self.button.as_ref(),
        );

        match self.completion() {
            Some(dropdown) if dropdown.is_open() => {
                column![bar, proposal_list::view(dropdown)].spacing(4).into()
            }
            _ => bar,
        }
    }

    /// Keyboard navigation for the dropdown
    pub fn subscription(&self) -> Subscription<Message> {
        match self.completion() {
            Some(dropdown) if dropdown.is_open() => event::listen_with(open_dropdown_key),
            Some(_) => event::listen_with(closed_dropdown_key),
            None => Subscription::none(),
        }
    }

    fn handle_key(&mut self, named: Named) -> Action {
        let Some(completion) = &mut self.completion else {
            return Action::None;
        };
        match named {
            Named::Escape => {
                completion.dropdown.dismiss();
                Action::None
            }
            Named::ArrowDown if !completion.dropdown.is_open() => self.propose_on(),
            Named::ArrowDown => {
                completion.dropdown.select_next();
                Action::None
            }
            Named::ArrowUp => {
                completion.dropdown.select_previous();
                Action::None
            }
            Named::Delete => match completion.dropdown.selected().cloned() {
                Some(entry) => self.delete_recent_entry(&entry, true),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn visible_proposal(&self, index: usize) -> Option<Proposal> {
        self.completion()?.visible().get(index).cloned()
    }

    /// Put the selected proposal into the input and close the dropdown
    fn accept_selected(&mut self) -> bool {
        let Some(completion) = &mut self.completion else {
            return false;
        };
        let Some(entry) = completion.dropdown.selected().cloned() else {
            return false;
        };
        completion.dropdown.dismiss();
        self.set_text_input_value(entry.value);
        true
    }

    fn dismiss(&mut self) {
        if let Some(completion) = &mut self.completion {
            completion.dropdown.dismiss();
        }
    }
}

fn open_dropdown_key(
    event: iced::Event,
    status: event::Status,
    _window: window::Id,
) -> Option<Message> {
    pressed_key(event).and_then(|named| forwarded_key(named, status, true))
}

fn closed_dropdown_key(
    event: iced::Event,
    status: event::Status,
    _window: window::Id,
) -> Option<Message> {
    pressed_key(event).and_then(|named| forwarded_key(named, status, false))
}

fn pressed_key(event: iced::Event) -> Option<Named> {
    match event {
        iced::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(named),
            ..
        }) => Some(named),
        _ => None,
    }
}

/// Message for a named key press, if the dropdown cares about it.
///
/// Arrow Down always passes so it can open a closed dropdown. The other keys
/// only matter while it is open; the focused input swallows Delete, the
/// navigation keys pass anyway.
fn forwarded_key(named: Named, status: event::Status, open: bool) -> Option<Message> {
    let wanted = match named {
        Named::ArrowDown => true,
        Named::ArrowUp | Named::Escape => open,
        _ => open && matches!(status, event::Status::Ignored),
    };
    wanted.then_some(Message::KeyPressed(named))
}
