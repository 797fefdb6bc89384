//! Form validation and submission handlers
//!
//! All form submits funnel through `SubmitForm`; only forms that opted into
//! intercepted submission are serialized and sent over the API bridge. The
//! network round-trip is the one place transport errors are caught; every
//! outcome ends as a toast, and the submit control is always re-enabled
//! before any pending redirect fires.

use std::time::Duration;

use iced::Task;

use crate::api::SubmitOutcome;
use crate::app::state::{Field, Route};
use crate::app::{App, Message};
use crate::ui::widgets::Toast;
use crate::validate;

/// Fallback shown when a 2xx reply carries no message
const SUCCESS_FALLBACK: &str = "Operation completed successfully!";
/// Fallback shown when a non-2xx reply carries no message
const FAILURE_FALLBACK: &str = "An error occurred. Please try again.";
/// Shown for transport-level failures (offline, DNS, malformed JSON)
const NETWORK_ERROR: &str = "Network error. Please check your connection and try again.";
/// Shown when client-side validation blocks the submit
const VALIDATION_PROMPT: &str = "Please fix the highlighted fields.";

/// Delay before following a server-directed redirect, so the success toast
/// can be read
const REDIRECT_DELAY: Duration = Duration::from_millis(1000);

/// Validate a single field, returning the inline error message on failure
fn field_error(field: Field, value: &str) -> Option<&'static str> {
    match field {
        Field::FullName => {
            if value.trim().is_empty() {
                Some("Please enter your full name")
            } else {
                None
            }
        }
        Field::Email => {
            if validate::validate_email(value) {
                None
            } else {
                Some("Please enter a valid email address")
            }
        }
        Field::Phone => {
            if validate::validate_phone(value) {
                None
            } else {
                Some("Enter a 10-digit mobile number starting with 6-9")
            }
        }
        Field::Enrollment => {
            if validate::validate_enrollment(value) {
                None
            } else {
                Some("Enrollment number must be 10 to 12 digits")
            }
        }
        Field::Password => {
            if validate::validate_password(value).is_valid() {
                None
            } else {
                Some("Use 8+ characters with uppercase, lowercase, a number and a special character")
            }
        }
    }
}

impl App {
    pub(super) fn handle_form(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::FieldChanged(field, value) => {
                self.ui.form.set_value(*field, value.clone());
                // Once a field carries a mark, keep it honest while typing
                if self.ui.form.marks.mark(field.name()).is_some() {
                    match field_error(*field, self.ui.form.value(*field)) {
                        Some(msg) => self.ui.form.marks.set_error(field.name(), msg),
                        None => self.ui.form.marks.set_success(field.name()),
                    }
                }
                Some(Task::none())
            }

            Message::SubmitForm => Some(self.submit_form()),

            Message::SubmitFinished(result) => Some(self.finish_submit(result.clone())),

            Message::Redirect(target) => {
                tracing::info!("Navigating to {}", target);
                self.ui.route = Route::Done {
                    location: target.clone(),
                };
                self.ui.busy.hide();
                Some(Task::none())
            }

            Message::ResetForm => {
                self.ui.form.reset();
                self.ui.route = Route::Form;
                Some(Task::none())
            }

            _ => None,
        }
    }

    fn submit_form(&mut self) -> Task<Message> {
        if !self.ui.form.ajax {
            // Not opted in: the bridge leaves the form alone
            tracing::debug!("Form not marked for intercepted submission");
            return Task::none();
        }
        if self.ui.form.submitting {
            return Task::none();
        }

        let mut all_valid = true;
        for field in Field::ALL {
            match field_error(field, self.ui.form.value(field)) {
                Some(msg) => {
                    self.ui.form.marks.set_error(field.name(), msg);
                    all_valid = false;
                }
                None => self.ui.form.marks.set_success(field.name()),
            }
        }
        if !all_valid {
            return self.show_toast(Toast::warning(VALIDATION_PROMPT));
        }

        let Some(api) = self.core.api.clone() else {
            tracing::error!("API client unavailable, cannot submit");
            return self.show_toast(Toast::error(NETWORK_ERROR));
        };

        self.ui.form.submitting = true;
        let action = self.ui.form.action.clone();
        let method = self.ui.form.method;
        let fields = self.ui.form.serialized();

        Task::perform(
            async move {
                api.submit_form(&action, method, &fields)
                    .await
                    .map_err(|e| e.to_string())
            },
            Message::SubmitFinished,
        )
    }

    fn finish_submit(&mut self, result: Result<SubmitOutcome, String>) -> Task<Message> {
        // Restore the submit control first, in every outcome
        self.ui.form.submitting = false;

        match result {
            Ok(outcome) if outcome.ok => {
                let message = outcome
                    .reply
                    .message
                    .clone()
                    .unwrap_or_else(|| SUCCESS_FALLBACK.to_string());
                let toast_task = self.show_toast(Toast::success(message));

                if let Some(target) = outcome.reply.redirect {
                    tracing::info!("Server redirect to {} in {:?}", target, REDIRECT_DELAY);
                    self.ui.busy.show();
                    let redirect_task = Task::perform(
                        async move {
                            tokio::time::sleep(REDIRECT_DELAY).await;
                            target
                        },
                        Message::Redirect,
                    );
                    Task::batch([toast_task, redirect_task])
                } else {
                    toast_task
                }
            }

            Ok(outcome) => {
                tracing::warn!("Form submission rejected with status {}", outcome.status);
                let message = outcome
                    .reply
                    .message
                    .unwrap_or_else(|| FAILURE_FALLBACK.to_string());
                self.show_toast(Toast::error(message))
            }

            Err(e) => {
                tracing::error!("Form submission error: {}", e);
                self.show_toast(Toast::error(NETWORK_ERROR))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ServerReply;
    use crate::app::state::{CoreState, UiState};
    use crate::features::Settings;
    use crate::ui::widgets::ToastStyle;
    use crate::validate::Mark;

    fn app() -> App {
        App {
            core: CoreState::new(Settings::default()),
            ui: UiState::new(),
        }
    }

    fn fill_valid(app: &mut App) {
        let _ = app.update(Message::FieldChanged(
            Field::FullName,
            "Priya Shah".to_string(),
        ));
        let _ = app.update(Message::FieldChanged(
            Field::Email,
            "priya@college.edu".to_string(),
        ));
        let _ = app.update(Message::FieldChanged(Field::Phone, "9876543210".to_string()));
        let _ = app.update(Message::FieldChanged(
            Field::Enrollment,
            "200180107001".to_string(),
        ));
        let _ = app.update(Message::FieldChanged(
            Field::Password,
            "Abcdef1!".to_string(),
        ));
    }

    fn outcome(ok: bool, status: u16, message: Option<&str>, redirect: Option<&str>) -> SubmitOutcome {
        SubmitOutcome {
            ok,
            status,
            reply: ServerReply {
                message: message.map(String::from),
                redirect: redirect.map(String::from),
            },
        }
    }

    mod validation {
        use super::*;

        #[test]
        fn submit_with_invalid_fields_marks_and_blocks() {
            let mut app = app();
            let _ = app.update(Message::FieldChanged(Field::Phone, "12345".to_string()));
            let _ = app.update(Message::SubmitForm);

            assert!(!app.ui.form.submitting);
            assert_eq!(app.ui.form.marks.mark("phone"), Some(Mark::Error));
            assert_eq!(app.ui.form.marks.mark("full_name"), Some(Mark::Error));
            // Blocked submits surface as a warning toast
            assert_eq!(app.ui.toasts.len(), 1);
            assert_eq!(
                app.ui.toasts.entries()[0].toast.style,
                ToastStyle::Warning
            );
        }

        #[test]
        fn valid_submit_marks_success_and_goes_busy() {
            let mut app = app();
            fill_valid(&mut app);
            let _ = app.update(Message::SubmitForm);

            assert!(app.ui.form.submitting);
            for field in Field::ALL {
                assert_eq!(
                    app.ui.form.marks.mark(field.name()),
                    Some(Mark::Success),
                    "field {} should be marked valid",
                    field.name()
                );
            }
        }

        #[test]
        fn editing_a_marked_field_revalidates_live() {
            let mut app = app();
            let _ = app.update(Message::FieldChanged(Field::Email, "nope".to_string()));
            let _ = app.update(Message::SubmitForm);
            assert_eq!(app.ui.form.marks.mark("email"), Some(Mark::Error));

            let _ = app.update(Message::FieldChanged(
                Field::Email,
                "fixed@college.edu".to_string(),
            ));
            assert_eq!(app.ui.form.marks.mark("email"), Some(Mark::Success));
        }

        #[test]
        fn non_ajax_form_is_not_intercepted() {
            let mut app = app();
            app.ui.form.ajax = false;
            fill_valid(&mut app);
            let _ = app.update(Message::SubmitForm);
            assert!(!app.ui.form.submitting);
            assert!(app.ui.toasts.is_empty());
        }

        #[test]
        fn resubmit_while_busy_is_ignored() {
            let mut app = app();
            fill_valid(&mut app);
            let _ = app.update(Message::SubmitForm);
            assert!(app.ui.form.submitting);
            let _ = app.update(Message::SubmitForm);
            assert!(app.ui.form.submitting);
            assert!(app.ui.toasts.is_empty());
        }
    }

    mod outcomes {
        use super::*;

        #[test]
        fn success_with_redirect_toasts_and_unbusies_immediately() {
            let mut app = app();
            app.ui.form.submitting = true;

            let _ = app.update(Message::SubmitFinished(Ok(outcome(
                true,
                200,
                Some("Saved"),
                Some("/done"),
            ))));

            // Submit control restored before the redirect delay elapses
            assert!(!app.ui.form.submitting);
            assert_eq!(app.ui.toasts.len(), 1);
            assert_eq!(app.ui.toasts.entries()[0].toast.message, "Saved");
            assert_eq!(
                app.ui.toasts.entries()[0].toast.style,
                ToastStyle::Success
            );
            // The redirect wait is visualized by the global overlay
            assert!(app.ui.busy.is_visible());
            // Navigation has not happened yet
            assert_eq!(app.ui.route, Route::Form);
        }

        #[test]
        fn redirect_message_navigates_and_clears_overlay() {
            let mut app = app();
            app.ui.busy.show();

            let _ = app.update(Message::Redirect("/done".to_string()));

            assert_eq!(
                app.ui.route,
                Route::Done {
                    location: "/done".to_string()
                }
            );
            assert!(!app.ui.busy.is_visible());
        }

        #[test]
        fn success_without_message_uses_fallback() {
            let mut app = app();
            app.ui.form.submitting = true;
            let _ = app.update(Message::SubmitFinished(Ok(outcome(true, 200, None, None))));
            assert_eq!(
                app.ui.toasts.entries()[0].toast.message,
                SUCCESS_FALLBACK
            );
            assert!(!app.ui.busy.is_visible());
        }

        #[test]
        fn server_rejection_uses_server_message() {
            let mut app = app();
            app.ui.form.submitting = true;
            let _ = app.update(Message::SubmitFinished(Ok(outcome(
                false,
                422,
                Some("Enrollment already registered"),
                None,
            ))));
            assert!(!app.ui.form.submitting);
            assert_eq!(
                app.ui.toasts.entries()[0].toast.message,
                "Enrollment already registered"
            );
            assert_eq!(app.ui.toasts.entries()[0].toast.style, ToastStyle::Error);
        }

        #[test]
        fn server_rejection_without_message_uses_fallback() {
            let mut app = app();
            app.ui.form.submitting = true;
            let _ = app.update(Message::SubmitFinished(Ok(outcome(false, 500, None, None))));
            assert_eq!(
                app.ui.toasts.entries()[0].toast.message,
                FAILURE_FALLBACK
            );
        }

        #[test]
        fn transport_failure_shows_connectivity_message() {
            let mut app = app();
            app.ui.form.submitting = true;
            let _ = app.update(Message::SubmitFinished(Err(
                "connection refused".to_string()
            )));
            assert!(!app.ui.form.submitting);
            assert_eq!(app.ui.toasts.entries()[0].toast.message, NETWORK_ERROR);
            assert_eq!(app.ui.toasts.entries()[0].toast.style, ToastStyle::Error);
        }

        #[test]
        fn reset_returns_to_a_clean_form() {
            let mut app = app();
            fill_valid(&mut app);
            let _ = app.update(Message::Redirect("/done".to_string()));
            let _ = app.update(Message::ResetForm);

            assert_eq!(app.ui.route, Route::Form);
            assert_eq!(app.ui.form.value(Field::Email), "");
            assert_eq!(app.ui.form.marks.mark("email"), None);
        }
    }
}
