//! Toast notification handlers

use iced::Task;

use crate::app::{App, Message};
use crate::ui::widgets::Toast;

impl App {
    /// Push a toast onto the stack and schedule its auto-dismissal
    pub(crate) fn show_toast(&mut self, toast: Toast) -> Task<Message> {
        let (id, duration) = self.ui.toasts.push(toast);
        tracing::debug!("Toast {} shown, auto-dismiss in {:?}", id, duration);
        Task::perform(
            async move {
                tokio::time::sleep(duration).await;
            },
            move |_| Message::ToastExpired(id),
        )
    }

    pub(super) fn handle_toast(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ShowToast(style, text) => {
                Some(self.show_toast(Toast::new(text.clone(), *style)))
            }

            // Click-to-dismiss and timer expiry share the same idempotent
            // path; a timer firing for an already-dismissed id is a no-op
            Message::DismissToast(id) | Message::ToastExpired(id) => {
                self.ui.toasts.dismiss(*id);
                Some(Task::none())
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{CoreState, UiState};
    use crate::features::Settings;
    use crate::ui::widgets::ToastStyle;

    fn app() -> App {
        App {
            core: CoreState::new(Settings::default()),
            ui: UiState::new(),
        }
    }

    #[test]
    fn show_toast_appends_entry() {
        let mut app = app();
        let _ = app.update(Message::ShowToast(ToastStyle::Info, "hello".to_string()));
        assert_eq!(app.ui.toasts.len(), 1);
        assert_eq!(app.ui.toasts.entries()[0].toast.message, "hello");
    }

    #[test]
    fn toasts_stack_in_insertion_order() {
        let mut app = app();
        let _ = app.update(Message::ShowToast(ToastStyle::Info, "first".to_string()));
        let _ = app.update(Message::ShowToast(ToastStyle::Error, "second".to_string()));
        let messages: Vec<&str> = app
            .ui
            .toasts
            .entries()
            .iter()
            .map(|e| e.toast.message.as_str())
            .collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn repeated_dismiss_leaves_other_toasts_alone() {
        let mut app = app();
        let _ = app.update(Message::ShowToast(ToastStyle::Error, "doomed".to_string()));
        let _ = app.update(Message::ShowToast(ToastStyle::Info, "spared".to_string()));
        let id = app.ui.toasts.entries()[0].id;

        let _ = app.update(Message::DismissToast(id));
        let _ = app.update(Message::DismissToast(id));
        let _ = app.update(Message::ToastExpired(id));

        assert_eq!(app.ui.toasts.len(), 2);
        assert!(app.ui.toasts.entries()[0].is_closing());
        assert!(!app.ui.toasts.entries()[1].is_closing());
    }
}
