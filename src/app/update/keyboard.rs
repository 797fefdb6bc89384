//! Keyboard handlers

use iced::Task;
use iced::keyboard::{Key, key::Named};

use crate::app::{App, Message};

impl App {
    pub(super) fn handle_keyboard(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::KeyPressed(key, _modifiers) => {
                // Escape closes the active dialog
                if matches!(key, Key::Named(Named::Escape)) && self.ui.dialog.is_active() {
                    return Some(Task::done(Message::CloseDialog));
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}
