//! Theme system for the portal companion
//! Supports both dark and light modes with a consistent color palette

use iced::color;
use iced::widget::{button, text, text_input};
use iced::{Background, Border, Color, Theme};

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    matches!(
        theme,
        Theme::Dark
            | Theme::Dracula
            | Theme::Nord
            | Theme::SolarizedDark
            | Theme::GruvboxDark
            | Theme::CatppuccinMocha
            | Theme::TokyoNight
            | Theme::TokyoNightStorm
            | Theme::KanagawaWave
            | Theme::KanagawaDragon
            | Theme::Moonfly
            | Theme::Nightfly
            | Theme::Oxocarbon
    )
}

/// Public function to check if theme is dark mode
pub fn is_dark_theme(theme: &Theme) -> bool {
    is_dark(theme)
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x0f0f13);
    pub const SURFACE: Color = color!(0x1a1a1f);
    pub const SURFACE_ELEVATED: Color = color!(0x24242b);
    pub const BORDER: Color = color!(0x2e2e36);
    pub const TEXT_MUTED: Color = color!(0x888890);
    pub const TEXT_SECONDARY: Color = color!(0xb3b3ba);
    pub const TEXT_PRIMARY: Color = color!(0xffffff);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xf9fafb);
    pub const SURFACE: Color = color!(0xffffff);
    pub const SURFACE_ELEVATED: Color = color!(0xf3f4f6);
    pub const BORDER: Color = color!(0xe5e7eb);
    pub const TEXT_MUTED: Color = color!(0x6b7280);
    pub const TEXT_SECONDARY: Color = color!(0x4b5563);
    pub const TEXT_PRIMARY: Color = color!(0x111827);
}

/// Accent color (portal indigo)
pub const ACCENT: Color = color!(0x4f46e5);

/// Get background color based on theme
pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

/// Get surface color based on theme
pub fn surface(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE
    } else {
        light::SURFACE
    }
}

/// Get elevated surface color (cards, toasts, dialogs)
pub fn surface_elevated(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE_ELEVATED
    } else {
        light::SURFACE_ELEVATED
    }
}

/// Get border color based on theme
pub fn border_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BORDER
    } else {
        light::BORDER
    }
}

/// Divider color (slightly softer than border)
pub fn divider(theme: &Theme) -> Color {
    let base = border_color(theme);
    Color { a: 0.8, ..base }
}

/// Get muted text color based on theme
pub fn text_muted(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_MUTED
    } else {
        light::TEXT_MUTED
    }
}

/// Get secondary text color based on theme
pub fn text_secondary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_SECONDARY
    } else {
        light::TEXT_SECONDARY
    }
}

/// Get primary text color based on theme
pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

/// Hover background color
pub fn hover_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, 0.08)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.05)
    }
}

/// Shadow color for floating surfaces
pub fn shadow_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(0.0, 0.0, 0.0, 0.5)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.15)
    }
}

// ============================================================================
// Status colors
// ============================================================================

pub fn success(_theme: &Theme) -> Color {
    color!(0x22c55e)
}

pub fn danger(_theme: &Theme) -> Color {
    color!(0xef4444)
}

pub fn warning(_theme: &Theme) -> Color {
    color!(0xf59e0b)
}

pub fn info(_theme: &Theme) -> Color {
    color!(0x3b82f6)
}

/// Apply an alpha channel to an existing color
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}

// ============================================================================
// Widget styles
// ============================================================================

/// Primary (accent) button style
pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Hovered | button::Status::Pressed => color!(0x6366f1),
        button::Status::Disabled => with_alpha(ACCENT, 0.4),
        _ => ACCENT,
    };
    button::Style {
        background: Some(Background::Color(bg)),
        text_color: Color::WHITE,
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Quiet secondary button style
pub fn secondary_button(theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Hovered => hover_bg(theme),
        _ => Color::TRANSPARENT,
    };
    button::Style {
        background: Some(Background::Color(bg)),
        text_color: text_secondary(theme),
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: divider(theme),
        },
        ..Default::default()
    }
}

/// Primary text style
pub fn primary_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(text_primary(theme)),
    }
}

/// Secondary text style
pub fn secondary_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(text_secondary(theme)),
    }
}

/// Muted text style
pub fn muted_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(text_muted(theme)),
    }
}

/// Text input style with an optional validation outcome tint on the border
pub fn field_input(
    theme: &Theme,
    status: text_input::Status,
    outcome: Option<bool>,
) -> text_input::Style {
    let border_tint = match outcome {
        Some(true) => success(theme),
        Some(false) => danger(theme),
        None => match status {
            text_input::Status::Focused { .. } => ACCENT,
            _ => border_color(theme),
        },
    };
    text_input::Style {
        background: Background::Color(surface(theme)),
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: border_tint,
        },
        icon: text_muted(theme),
        placeholder: text_muted(theme),
        value: text_primary(theme),
        selection: with_alpha(ACCENT, 0.3),
    }
}
