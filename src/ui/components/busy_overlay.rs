//! Global busy overlay component
//!
//! A full-window tint with a spinner ring and label, shown while a blocking
//! operation (such as a post-submit redirect) is in flight. The overlay is
//! opaque: no pointer or keyboard interaction reaches the page beneath it.

use iced::mouse::Interaction;
use iced::widget::{Space, column, container, mouse_area, opaque, text};
use iced::{Alignment, Color, Element, Fill};

use crate::app::Message;
use crate::ui::primitives::{SpinnerRing, view_spinner_ring};
use crate::ui::theme;

/// Spinner diameter in the overlay
const SPINNER_SIZE: f32 = 40.0;

/// Build the busy overlay at the given fade progress and spinner phase
pub fn view(animation_progress: f32, spin_phase: f32) -> Element<'static, Message> {
    if animation_progress < 0.01 {
        return Space::new().height(0).into();
    }

    let opacity = animation_progress;

    let ring = SpinnerRing::new(spin_phase)
        .arc_color(theme::with_alpha(theme::ACCENT, opacity))
        .track_color(Color::from_rgba(1.0, 1.0, 1.0, 0.2 * opacity));

    let content = column![
        view_spinner_ring(ring, SPINNER_SIZE),
        Space::new().height(12),
        text("Loading...")
            .size(14)
            .color(Color::from_rgba(1.0, 1.0, 1.0, 0.9 * opacity)),
    ]
    .align_x(Alignment::Center);

    let backdrop = container(content)
        .width(Fill)
        .height(Fill)
        .center_x(Fill)
        .center_y(Fill)
        .style(move |_theme| container::Style {
            background: Some(iced::Background::Color(Color::from_rgba(
                0.0,
                0.0,
                0.0,
                0.6 * opacity,
            ))),
            ..Default::default()
        });

    // Swallow clicks so the page below stays inert while busy
    let event_blocker = mouse_area(backdrop).interaction(Interaction::Idle);

    opaque(event_blocker).into()
}
