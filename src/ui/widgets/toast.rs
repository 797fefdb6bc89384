//! Toast notification widget and stack
//!
//! Dark minimalist toast notifications, stacked top-right, newest at the
//! bottom. Each entry carries its own dismissal timer and exit transition.

use std::time::{Duration, Instant};

use iced::widget::{Space, container, mouse_area, row, text};
use iced::{Alignment, Element, Padding};

use crate::ui::animation::Transition;
use crate::ui::theme;

/// Toast notification style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastStyle {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastStyle {
    /// Get the accent color for this style (used for icon/indicator only)
    pub fn accent_color(&self) -> iced::Color {
        match self {
            ToastStyle::Success => theme::success(&iced::Theme::Dark),
            ToastStyle::Error => theme::danger(&iced::Theme::Dark),
            ToastStyle::Warning => theme::warning(&iced::Theme::Dark),
            ToastStyle::Info => theme::info(&iced::Theme::Dark),
        }
    }

    /// Get the icon for this style
    pub fn icon(&self) -> &'static str {
        match self {
            ToastStyle::Success => "✓",
            ToastStyle::Error => "✗",
            ToastStyle::Warning => "⚠",
            ToastStyle::Info => "ℹ",
        }
    }

    /// How long a toast of this style stays on screen before auto-dismissal.
    /// Errors linger longer so there is time to read them.
    pub fn display_duration(&self) -> Duration {
        match self {
            ToastStyle::Success => Duration::from_millis(3000),
            ToastStyle::Error => Duration::from_millis(5000),
            ToastStyle::Warning => Duration::from_millis(4000),
            ToastStyle::Info => Duration::from_millis(3000),
        }
    }
}

/// Toast notification data
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub style: ToastStyle,
}

impl Toast {
    pub fn new(message: impl Into<String>, style: ToastStyle) -> Self {
        Self {
            message: message.into(),
            style,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastStyle::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastStyle::Error)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, ToastStyle::Warning)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastStyle::Info)
    }
}

/// One live toast in the stack
#[derive(Debug)]
pub struct ToastEntry {
    pub id: u64,
    pub toast: Toast,
    pub transition: Transition,
    closing: bool,
}

impl ToastEntry {
    fn new(id: u64, toast: Toast) -> Self {
        let mut transition = Transition::hidden();
        transition.show();
        Self {
            id,
            toast,
            transition,
            closing: false,
        }
    }

    pub fn is_closing(&self) -> bool {
        self.closing
    }
}

/// Ordered collection of live toasts
///
/// Insertion order is the only ordering guarantee. Ids are monotonic and
/// never reused, so a dismissal timer that fires after its toast is gone
/// simply finds nothing to act on.
#[derive(Debug, Default)]
pub struct ToastStack {
    entries: Vec<ToastEntry>,
    next_id: u64,
}

impl ToastStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a toast; returns its id and auto-dismiss duration
    pub fn push(&mut self, toast: Toast) -> (u64, Duration) {
        let id = self.next_id;
        self.next_id += 1;
        let duration = toast.style.display_duration();
        self.entries.push(ToastEntry::new(id, toast));
        (id, duration)
    }

    /// Start the exit transition for a toast. Idempotent: unknown ids and
    /// already-closing entries are left alone.
    pub fn dismiss(&mut self, id: u64) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            if !entry.closing {
                entry.closing = true;
                entry.transition.hide();
            }
        }
    }

    /// Advance all transitions and detach entries whose exit has settled
    pub fn tick(&mut self, now: Instant) {
        for entry in &mut self.entries {
            entry.transition.tick(now);
        }
        self.entries
            .retain(|e| !(e.closing && e.transition.is_settled_hidden()));
    }

    /// Whether any entry still needs animation frames
    pub fn is_animating(&self) -> bool {
        self.entries
            .iter()
            .any(|e| e.transition.is_animating() || e.closing)
    }

    pub fn entries(&self) -> &[ToastEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build a toast notification widget
///
/// Dark surface with the accent color confined to a thin bar and the icon.
/// `progress` drives the fade; clicking anywhere on the toast emits
/// `on_dismiss`.
pub fn view_toast<'a, Message: Clone + 'a>(
    toast: &Toast,
    progress: f32,
    on_dismiss: Message,
) -> Element<'a, Message> {
    if progress < 0.01 {
        return Space::new().width(0).height(0).into();
    }

    let accent_color = theme::with_alpha(toast.style.accent_color(), progress);
    let icon = toast.style.icon();
    let message = toast.message.clone();

    // Left accent bar (thin vertical line)
    let accent_bar = container(Space::new().width(3).height(20)).style(move |_theme| {
        iced::widget::container::Style {
            background: Some(iced::Background::Color(accent_color)),
            border: iced::Border {
                radius: 2.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    });

    let icon_widget = text(icon).size(14).color(accent_color);

    let message_widget = text(message).size(13).style(move |theme| text::Style {
        color: Some(theme::with_alpha(theme::text_primary(theme), progress)),
    });

    let content = row![
        accent_bar,
        Space::new().width(12),
        icon_widget,
        Space::new().width(10),
        message_widget,
    ]
    .align_y(Alignment::Center)
    .padding(Padding::new(14.0).left(12.0).right(20.0));

    let body = container(content).style(move |theme| iced::widget::container::Style {
        background: Some(iced::Background::Color(theme::with_alpha(
            theme::surface_elevated(theme),
            progress,
        ))),
        border: iced::Border {
            radius: 8.0.into(),
            width: 1.0,
            color: theme::with_alpha(theme::border_color(theme), progress),
        },
        shadow: iced::Shadow {
            color: theme::with_alpha(theme::shadow_color(theme), progress),
            offset: iced::Vector::new(0.0, 4.0),
            blur_radius: 12.0,
        },
        ..Default::default()
    });

    mouse_area(body).on_press(on_dismiss).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_preserves_insertion_order() {
        let mut stack = ToastStack::new();
        let (first, _) = stack.push(Toast::info("one"));
        let (second, _) = stack.push(Toast::success("two"));
        assert!(first < second);
        let ids: Vec<u64> = stack.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![first, second]);
    }

    #[test]
    fn durations_per_style() {
        assert_eq!(
            ToastStyle::Success.display_duration(),
            Duration::from_millis(3000)
        );
        assert_eq!(
            ToastStyle::Error.display_duration(),
            Duration::from_millis(5000)
        );
        assert_eq!(
            ToastStyle::Warning.display_duration(),
            Duration::from_millis(4000)
        );
        assert_eq!(
            ToastStyle::Info.display_duration(),
            Duration::from_millis(3000)
        );
    }

    #[test]
    fn dismiss_is_idempotent() {
        let mut stack = ToastStack::new();
        let (id, _) = stack.push(Toast::error("boom"));
        let (other, _) = stack.push(Toast::info("still here"));

        stack.dismiss(id);
        // Second dismissal of the same toast must not disturb anything
        stack.dismiss(id);
        // Dismissal of an id that never existed is a no-op as well
        stack.dismiss(9999);

        assert_eq!(stack.len(), 2);
        assert!(stack.entries()[0].is_closing());
        assert!(!stack.entries()[1].is_closing());
        assert_eq!(stack.entries()[1].id, other);
    }

    #[test]
    fn tick_detaches_settled_exits() {
        let mut stack = ToastStack::new();
        let (id, _) = stack.push(Toast::info("bye"));
        stack.dismiss(id);

        // Run the exit transition well past its duration
        let deadline = Instant::now() + Duration::from_millis(400);
        stack.tick(deadline);
        stack.tick(deadline + Duration::from_millis(100));

        assert!(stack.is_empty());
        // Dismissing after detachment is still a no-op
        stack.dismiss(id);
        assert!(stack.is_empty());
    }

    #[test]
    fn ids_are_never_reused() {
        let mut stack = ToastStack::new();
        let (first, _) = stack.push(Toast::info("a"));
        stack.dismiss(first);
        let deadline = Instant::now() + Duration::from_millis(500);
        stack.tick(deadline);
        let (second, _) = stack.push(Toast::info("b"));
        assert!(second > first);
    }
}
