//! Message update handlers - thin dispatcher delegating to submodules

mod busy;
mod dialog;
mod form;
mod keyboard;
mod settings;
mod toast;

use std::time::Instant;

use iced::Task;

use super::{App, Message};

impl App {
    /// Handle messages by delegating to appropriate submodule handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        // Animation frames advance every transition in one place
        if let Message::AnimationTick = message {
            self.ui.tick(Instant::now());
            return Task::none();
        }

        if let Some(task) = self.handle_form(&message) {
            return task;
        }
        if let Some(task) = self.handle_toast(&message) {
            return task;
        }
        if let Some(task) = self.handle_dialog(&message) {
            return task;
        }
        if let Some(task) = self.handle_busy(&message) {
            return task;
        }
        if let Some(task) = self.handle_settings(&message) {
            return task;
        }
        if let Some(task) = self.handle_keyboard(&message) {
            return task;
        }

        // Default: no task
        Task::none()
    }
}
