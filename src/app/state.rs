//! Application state definitions

use std::time::Instant;

use crate::api::{ApiClient, FormMethod};
use crate::features::Settings;
use crate::ui::animation::Transition;
use crate::ui::widgets::ToastStack;
use crate::validate::FieldMarks;

/// Main application state
pub struct App {
    /// Core infrastructure (Settings, API client)
    pub core: CoreState,
    /// UI state (form, toasts, dialog, busy overlay)
    pub ui: UiState,
}

/// Core Infrastructure & Services
pub struct CoreState {
    pub settings: Settings,
    /// Portal API client; None when the HTTP client could not be built
    pub api: Option<ApiClient>,
}

impl CoreState {
    /// Initialize core services with loaded settings
    pub fn new(settings: Settings) -> Self {
        let api = match ApiClient::new(&settings.network.base_url) {
            Ok(client) => Some(client),
            Err(e) => {
                tracing::error!("Failed to create API client: {}", e);
                None
            }
        };
        Self { settings, api }
    }
}

/// Which page is showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The registration form
    Form,
    /// Post-submit confirmation for a server-directed location
    Done { location: String },
}

/// Registration form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FullName,
    Email,
    Phone,
    Enrollment,
    Password,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::FullName,
        Field::Email,
        Field::Phone,
        Field::Enrollment,
        Field::Password,
    ];

    /// Wire name used for serialization and annotations
    pub fn name(&self) -> &'static str {
        match self {
            Field::FullName => "full_name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Enrollment => "enrollment",
            Field::Password => "password",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::FullName => "Full name",
            Field::Email => "Email address",
            Field::Phone => "Mobile number",
            Field::Enrollment => "Enrollment number",
            Field::Password => "Password",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::FullName => "Your full name",
            Field::Email => "you@college.edu",
            Field::Phone => "10-digit mobile number",
            Field::Enrollment => "10-12 digit enrollment number",
            Field::Password => "Choose a strong password",
        }
    }
}

/// Registration form state
pub struct FormState {
    /// Action path the form submits to, resolved against the portal base URL
    pub action: String,
    pub method: FormMethod,
    /// Opt-in marker: only forms flagged here are intercepted and submitted
    /// over the API bridge
    pub ajax: bool,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub enrollment: String,
    pub password: String,
    /// Per-field error/success annotations
    pub marks: FieldMarks,
    /// Submit control busy flag: disables the button and swaps its label
    pub submitting: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            action: "/api/register".to_string(),
            method: FormMethod::Post,
            ajax: true,
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
            enrollment: String::new(),
            password: String::new(),
            marks: FieldMarks::new(Field::ALL.iter().map(|f| f.name())),
            submitting: false,
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Enrollment => &self.enrollment,
            Field::Password => &self.password,
        }
    }

    pub fn set_value(&mut self, field: Field, value: String) {
        match field {
            Field::FullName => self.full_name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Enrollment => self.enrollment = value,
            Field::Password => self.password = value,
        }
    }

    /// Serialize all fields in declaration order
    pub fn serialized(&self) -> Vec<(String, String)> {
        Field::ALL
            .iter()
            .map(|f| (f.name().to_string(), self.value(*f).to_string()))
            .collect()
    }

    /// Clear values and annotations
    pub fn reset(&mut self) {
        for field in Field::ALL {
            self.set_value(field, String::new());
        }
        self.marks.clear_all();
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Content of a modal dialog
#[derive(Debug, Clone)]
pub struct DialogCard {
    pub title: Option<String>,
    pub body: String,
    pub max_width: f32,
}

/// Default dialog width
pub const DIALOG_DEFAULT_MAX_WIDTH: f32 = 500.0;

impl DialogCard {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            title: None,
            body: body.into(),
            max_width: DIALOG_DEFAULT_MAX_WIDTH,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_max_width(mut self, max_width: f32) -> Self {
        self.max_width = max_width;
        self
    }
}

/// Single active-dialog slot with its entrance/exit transition
///
/// Opening over an active dialog replaces it (the previous one is
/// force-closed) so the Escape key always addresses the visible dialog and
/// nothing leaks behind the slot.
pub struct DialogState {
    card: Option<DialogCard>,
    pub transition: Transition,
    closing: bool,
}

impl DialogState {
    pub fn new() -> Self {
        Self {
            card: None,
            transition: Transition::hidden(),
            closing: false,
        }
    }

    /// Open a dialog, force-closing any active one. Returns true when a
    /// previous dialog was replaced.
    pub fn open(&mut self, card: DialogCard) -> bool {
        let replaced = self.card.is_some();
        self.card = Some(card);
        self.closing = false;
        self.transition.show();
        replaced
    }

    /// Start the exit transition; no-op when nothing is active
    pub fn close(&mut self) -> bool {
        if self.card.is_none() || self.closing {
            return false;
        }
        self.closing = true;
        self.transition.hide();
        true
    }

    /// Advance the transition; clears the slot once the exit settles
    pub fn tick(&mut self, now: Instant) {
        self.transition.tick(now);
        if self.closing && self.transition.is_settled_hidden() {
            self.card = None;
            self.closing = false;
        }
    }

    /// The card to render (kept alive during the exit transition)
    pub fn card(&self) -> Option<&DialogCard> {
        self.card.as_ref()
    }

    /// Whether a dialog is active (open and not on its way out)
    pub fn is_active(&self) -> bool {
        self.card.is_some() && !self.closing
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_animating() || (self.closing && self.card.is_some())
    }
}

impl Default for DialogState {
    fn default() -> Self {
        Self::new()
    }
}

/// Spinner rotation period
const SPIN_PERIOD_MS: f32 = 900.0;

/// Global busy overlay: a singleton slot toggled by show/hide
pub struct BusyState {
    visible: bool,
    pub transition: Transition,
    /// Spinner rotation phase (0.0 - 1.0)
    pub spin_phase: f32,
    last_tick: Option<Instant>,
}

impl BusyState {
    pub fn new() -> Self {
        Self {
            visible: false,
            transition: Transition::hidden(),
            spin_phase: 0.0,
            last_tick: None,
        }
    }

    /// Show the overlay. Idempotent: a repeated show neither duplicates the
    /// overlay nor restarts its fade. Returns true when visibility changed.
    pub fn show(&mut self) -> bool {
        if self.visible {
            return false;
        }
        self.visible = true;
        self.transition.show();
        true
    }

    /// Fade the overlay out. Returns true when visibility changed.
    pub fn hide(&mut self) -> bool {
        if !self.visible {
            return false;
        }
        self.visible = false;
        self.transition.hide();
        true
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the overlay should still be rendered (visible or fading out)
    pub fn is_rendered(&self) -> bool {
        self.visible || !self.transition.is_settled_hidden()
    }

    /// Advance the fade and the spinner rotation
    pub fn tick(&mut self, now: Instant) {
        self.transition.tick(now);
        if self.is_rendered() {
            if let Some(last) = self.last_tick {
                let dt_ms = now.saturating_duration_since(last).as_secs_f32() * 1000.0;
                self.spin_phase = (self.spin_phase + dt_ms / SPIN_PERIOD_MS).rem_euclid(1.0);
            }
        }
        self.last_tick = Some(now);
    }
}

impl Default for BusyState {
    fn default() -> Self {
        Self::new()
    }
}

/// UI View State
pub struct UiState {
    pub route: Route,
    pub form: FormState,
    pub toasts: ToastStack,
    pub dialog: DialogState,
    pub busy: BusyState,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            route: Route::Form,
            form: FormState::new(),
            toasts: ToastStack::new(),
            dialog: DialogState::new(),
            busy: BusyState::new(),
        }
    }

    /// Advance every transition owned by the UI
    pub fn tick(&mut self, now: Instant) {
        self.toasts.tick(now);
        self.dialog.tick(now);
        self.busy.tick(now);
    }

    /// Whether any surface still needs animation frames
    pub fn has_active_animations(&self) -> bool {
        self.toasts.is_animating() || self.dialog.is_animating()
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn settle(state: &mut DialogState) {
        let deadline = Instant::now() + Duration::from_millis(400);
        state.tick(deadline);
        state.tick(deadline + Duration::from_millis(100));
    }

    mod dialog_slot {
        use super::*;

        #[test]
        fn open_then_close_clears_the_slot() {
            let mut dialog = DialogState::new();
            assert!(!dialog.open(DialogCard::new("hello")));
            assert!(dialog.is_active());

            assert!(dialog.close());
            // The card survives for the exit transition, then detaches
            assert!(dialog.card().is_some());
            settle(&mut dialog);
            assert!(dialog.card().is_none());
            assert!(!dialog.is_active());
        }

        #[test]
        fn close_without_dialog_is_noop() {
            let mut dialog = DialogState::new();
            assert!(!dialog.close());
            assert!(!dialog.close());
        }

        #[test]
        fn reopen_after_close_succeeds() {
            let mut dialog = DialogState::new();
            dialog.open(DialogCard::new("first"));
            dialog.close();
            settle(&mut dialog);

            assert!(!dialog.open(DialogCard::new("second")));
            assert!(dialog.is_active());
            assert_eq!(dialog.card().unwrap().body, "second");
        }

        #[test]
        fn open_over_active_dialog_replaces_it() {
            let mut dialog = DialogState::new();
            dialog.open(DialogCard::new("first"));
            assert!(dialog.open(DialogCard::new("second")));
            assert!(dialog.is_active());
            assert_eq!(dialog.card().unwrap().body, "second");
        }

        #[test]
        fn open_during_exit_revives_the_slot() {
            let mut dialog = DialogState::new();
            dialog.open(DialogCard::new("first"));
            dialog.close();
            // Before the exit settles, a new open retargets the transition
            dialog.open(DialogCard::new("second"));
            assert!(dialog.is_active());
            settle(&mut dialog);
            // Settling no longer detaches: the slot was revived
            assert!(dialog.card().is_some());
        }

        #[test]
        fn default_max_width() {
            let card = DialogCard::new("x");
            assert_eq!(card.max_width, DIALOG_DEFAULT_MAX_WIDTH);
            let wide = DialogCard::new("x").with_max_width(720.0);
            assert_eq!(wide.max_width, 720.0);
        }
    }

    mod busy_singleton {
        use super::*;

        #[test]
        fn show_is_idempotent() {
            let mut busy = BusyState::new();
            assert!(busy.show());
            assert!(!busy.show());
            assert!(busy.is_visible());
            assert!(busy.is_rendered());
        }

        #[test]
        fn hide_without_show_is_noop() {
            let mut busy = BusyState::new();
            assert!(!busy.hide());
            assert!(!busy.is_visible());
        }

        #[test]
        fn show_hide_cycle() {
            let mut busy = BusyState::new();
            busy.show();
            assert!(busy.hide());
            assert!(!busy.is_visible());
            // Still rendered while the fade-out runs
            assert!(busy.is_rendered());
        }

        #[test]
        fn spinner_advances_while_rendered() {
            let mut busy = BusyState::new();
            busy.show();
            let start = Instant::now();
            busy.tick(start);
            busy.tick(start + Duration::from_millis(450));
            assert!(busy.spin_phase > 0.0);
            assert!(busy.spin_phase < 1.0);
        }
    }

    mod form_state {
        use super::*;

        #[test]
        fn serialization_uses_wire_names_in_order() {
            let mut form = FormState::new();
            form.set_value(Field::Email, "a@b.c".to_string());
            let fields = form.serialized();
            let names: Vec<&str> = fields.iter().map(|(n, _)| n.as_str()).collect();
            assert_eq!(
                names,
                vec!["full_name", "email", "phone", "enrollment", "password"]
            );
            assert_eq!(fields[1].1, "a@b.c");
        }

        #[test]
        fn reset_clears_values_and_marks() {
            let mut form = FormState::new();
            form.set_value(Field::Phone, "123".to_string());
            form.marks.set_error("phone", "bad");
            form.reset();
            assert_eq!(form.value(Field::Phone), "");
            assert_eq!(form.marks.mark("phone"), None);
        }
    }
}
