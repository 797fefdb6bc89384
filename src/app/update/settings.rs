//! Settings handlers

use iced::Task;

use crate::app::{App, Message};

impl App {
    pub(super) fn handle_settings(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ToggleDarkMode(on) => {
                self.core.settings.display.dark_mode = *on;
                if let Err(e) = self.core.settings.save() {
                    tracing::warn!("Failed to save settings: {}", e);
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}
