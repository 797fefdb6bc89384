//! Application messages

use iced::keyboard::{Key, Modifiers};

use crate::api::SubmitOutcome;
use crate::app::state::{DialogCard, Field};
use crate::ui::widgets::ToastStyle;

/// Application messages
#[derive(Clone)]
pub enum Message {
    /// No-op message for event interception (modal pane clicks)
    Noop,

    // ============ Form ============
    /// A field's text changed
    FieldChanged(Field, String),
    /// The form was submitted
    SubmitForm,
    /// The async submission finished (error stringified for Clone)
    SubmitFinished(Result<SubmitOutcome, String>),
    /// Server-directed navigation after the read-the-toast delay
    Redirect(String),
    /// Clear all field values and annotations, back to the form
    ResetForm,

    // ============ Toasts ============
    /// Show a toast notification
    ShowToast(ToastStyle, String),
    /// A toast was clicked
    DismissToast(u64),
    /// A toast's display duration elapsed
    ToastExpired(u64),

    // ============ Dialog ============
    /// Open a modal dialog (force-closes any active one)
    OpenDialog(DialogCard),
    /// Close the active dialog
    CloseDialog,

    // ============ Busy overlay ============
    /// Show the global busy overlay (idempotent)
    ShowGlobalBusy,
    /// Hide the global busy overlay
    HideGlobalBusy,

    // ============ Settings ============
    /// Toggle dark mode and persist the preference
    ToggleDarkMode(bool),

    // ============ Input & timing ============
    /// Keyboard event (Escape routing)
    KeyPressed(Key, Modifiers),
    /// Animation frame
    AnimationTick,
}

// Manual Debug implementation keeps high-frequency messages cheap to format
impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        macro_rules! simple {
            ($name:literal) => { write!(f, $name) };
            ($name:literal, $($arg:tt)*) => { write!(f, concat!($name, "({})"), format_args!($($arg)*)) };
        }

        match self {
            Self::AnimationTick => simple!("AnimationTick"),
            Self::Noop => simple!("Noop"),

            Self::FieldChanged(field, _) => simple!("FieldChanged", "{}", field.name()),
            Self::SubmitForm => simple!("SubmitForm"),
            Self::SubmitFinished(result) => match result {
                Ok(outcome) => simple!("SubmitFinished", "status {}", outcome.status),
                Err(e) => simple!("SubmitFinished", "error: {}", e),
            },
            Self::Redirect(target) => simple!("Redirect", "{}", target),
            Self::ResetForm => simple!("ResetForm"),

            Self::ShowToast(style, _) => simple!("ShowToast", "{:?}", style),
            Self::DismissToast(id) => simple!("DismissToast", "{}", id),
            Self::ToastExpired(id) => simple!("ToastExpired", "{}", id),

            Self::OpenDialog(_) => simple!("OpenDialog"),
            Self::CloseDialog => simple!("CloseDialog"),

            Self::ShowGlobalBusy => simple!("ShowGlobalBusy"),
            Self::HideGlobalBusy => simple!("HideGlobalBusy"),

            Self::ToggleDarkMode(on) => simple!("ToggleDarkMode", "{}", on),

            Self::KeyPressed(_, _) => simple!("KeyPressed"),
        }
    }
}
