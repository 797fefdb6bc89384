//! Global busy overlay handlers

use iced::Task;

use crate::app::{App, Message};

impl App {
    pub(super) fn handle_busy(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ShowGlobalBusy => {
                if self.ui.busy.show() {
                    tracing::debug!("Global busy overlay shown");
                }
                Some(Task::none())
            }

            Message::HideGlobalBusy => {
                if self.ui.busy.hide() {
                    tracing::debug!("Global busy overlay hidden");
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}
