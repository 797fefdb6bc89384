//! Modal dialog handlers

use iced::Task;

use crate::app::{App, Message};

impl App {
    pub(super) fn handle_dialog(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::OpenDialog(card) => {
                if self.ui.dialog.open(card.clone()) {
                    tracing::debug!("Force-closed previous dialog on open");
                }
                Some(Task::none())
            }

            Message::CloseDialog => {
                // No-op when nothing is active
                if self.ui.dialog.close() {
                    tracing::debug!("Dialog closing");
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{CoreState, DialogCard, UiState};
    use crate::features::Settings;

    fn app() -> App {
        App {
            core: CoreState::new(Settings::default()),
            ui: UiState::new(),
        }
    }

    #[test]
    fn open_close_roundtrip() {
        let mut app = app();
        let _ = app.update(Message::OpenDialog(
            DialogCard::new("Are you sure?").with_title("Confirm"),
        ));
        assert!(app.ui.dialog.is_active());

        let _ = app.update(Message::CloseDialog);
        assert!(!app.ui.dialog.is_active());
    }

    #[test]
    fn close_without_open_is_harmless() {
        let mut app = app();
        let _ = app.update(Message::CloseDialog);
        assert!(!app.ui.dialog.is_active());
    }

    #[test]
    fn second_open_takes_over_the_slot() {
        let mut app = app();
        let _ = app.update(Message::OpenDialog(DialogCard::new("first")));
        let _ = app.update(Message::OpenDialog(DialogCard::new("second")));
        assert_eq!(app.ui.dialog.card().unwrap().body, "second");
    }
}
