//! Indeterminate spinner ring primitive
//!
//! A rotating arc drawn with iced's Canvas, used by the global busy overlay.
//! This is a primitive component implementing the `canvas::Program` trait;
//! it uses generic Message types and knows nothing about the application.

use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, Path, Program, Stroke};
use iced::{Color, Element, Point, Radians, Renderer, Theme, mouse};

/// Fraction of the full circle covered by the moving arc
const ARC_SWEEP: f32 = 0.75;

/// Spinner ring configuration
#[derive(Debug, Clone, Copy)]
pub struct SpinnerRing {
    /// Rotation phase (0.0 - 1.0, wraps around)
    pub phase: f32,
    /// Ring stroke width
    pub stroke_width: f32,
    /// Track color behind the arc
    pub track_color: Color,
    /// Arc color
    pub arc_color: Color,
}

impl Default for SpinnerRing {
    fn default() -> Self {
        Self {
            phase: 0.0,
            stroke_width: 4.0,
            track_color: crate::ui::theme::border_color(&iced::Theme::Dark),
            arc_color: crate::ui::theme::ACCENT,
        }
    }
}

impl SpinnerRing {
    pub fn new(phase: f32) -> Self {
        Self {
            phase: phase.rem_euclid(1.0),
            ..Default::default()
        }
    }

    pub fn stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn track_color(mut self, color: Color) -> Self {
        self.track_color = color;
        self
    }

    pub fn arc_color(mut self, color: Color) -> Self {
        self.arc_color = color;
        self
    }
}

impl<Message> Program<Message> for SpinnerRing {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: iced::Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);
        let radius = (bounds.width.min(bounds.height) / 2.0) - (self.stroke_width / 2.0) - 1.0;

        // Track circle
        let track = Path::circle(center, radius);
        frame.stroke(
            &track,
            Stroke::default()
                .with_width(self.stroke_width)
                .with_color(self.track_color),
        );

        // Rotating arc
        let start_angle = self.phase * std::f32::consts::TAU - std::f32::consts::FRAC_PI_2;
        let sweep_angle = ARC_SWEEP * std::f32::consts::TAU;

        let arc = Path::new(|builder| {
            builder.arc(iced::widget::canvas::path::Arc {
                center,
                radius,
                start_angle: Radians(start_angle),
                end_angle: Radians(start_angle + sweep_angle),
            });
        });

        frame.stroke(
            &arc,
            Stroke::default()
                .with_width(self.stroke_width)
                .with_color(self.arc_color),
        );

        vec![frame.into_geometry()]
    }
}

/// Create a spinner ring element of the given size
pub fn view_spinner_ring<'a, Message: 'a>(ring: SpinnerRing, size: f32) -> Element<'a, Message> {
    Canvas::new(ring).width(size).height(size).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_wraps_into_unit_range() {
        assert!((SpinnerRing::new(1.25).phase - 0.25).abs() < 1e-6);
        assert!((SpinnerRing::new(-0.25).phase - 0.75).abs() < 1e-6);
        assert_eq!(SpinnerRing::new(0.5).phase, 0.5);
    }
}
