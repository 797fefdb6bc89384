//! Modal dialog overlay component
//!
//! Renders the active dialog card over a dimmed backdrop. Clicking the
//! backdrop or the close control dismisses the dialog; clicks inside the
//! pane are intercepted so they never fall through to the backdrop.

use iced::mouse::Interaction;
use iced::widget::{Space, button, column, container, mouse_area, opaque, row, text};
use iced::{Alignment, Color, Element, Fill};

use crate::app::Message;
use crate::app::state::DialogCard;
use crate::ui::theme;

/// Build the dialog overlay for the active card
pub fn view(card: &DialogCard, animation_progress: f32) -> Element<'_, Message> {
    if animation_progress < 0.01 {
        return Space::new().height(0).into();
    }

    let opacity = animation_progress;

    let close_btn = button(text("\u{2715}").size(14).style(theme::secondary_text))
        .padding([4, 8])
        .style(|theme, status| {
            let bg = match status {
                button::Status::Hovered => theme::hover_bg(theme),
                _ => Color::TRANSPARENT,
            };
            button::Style {
                background: Some(iced::Background::Color(bg)),
                text_color: theme::text_secondary(theme),
                border: iced::Border {
                    radius: 6.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        })
        .on_press(Message::CloseDialog);

    let header: Element<'_, Message> = match &card.title {
        Some(title) => row![
            text(title)
                .size(18)
                .style(theme::primary_text)
                .font(iced::Font {
                    weight: iced::font::Weight::Bold,
                    ..Default::default()
                }),
            Space::new().width(Fill),
            close_btn,
        ]
        .align_y(Alignment::Center)
        .into(),
        None => row![Space::new().width(Fill), close_btn]
            .align_y(Alignment::Center)
            .into(),
    };

    let body = text(card.body.clone())
        .size(14)
        .style(theme::secondary_text);

    let pane_content = column![header, Space::new().height(12), body]
        .width(card.max_width)
        .padding(24);

    let pane = container(pane_content).style(move |theme| container::Style {
        background: Some(iced::Background::Color(theme::with_alpha(
            theme::surface_elevated(theme),
            opacity,
        ))),
        border: iced::Border {
            radius: 12.0.into(),
            width: 1.0,
            color: theme::with_alpha(theme::border_color(theme), opacity),
        },
        shadow: iced::Shadow {
            color: theme::with_alpha(Color::BLACK, 0.3 * opacity),
            offset: iced::Vector::new(0.0, 8.0),
            blur_radius: 24.0,
        },
        ..Default::default()
    });

    // Clicks inside the pane must not reach the backdrop dismiss handler
    let pane = mouse_area(pane).on_press(Message::Noop);

    let backdrop = container(pane)
        .width(Fill)
        .height(Fill)
        .center_x(Fill)
        .center_y(Fill)
        .style(move |_theme| container::Style {
            background: Some(iced::Background::Color(Color::from_rgba(
                0.0,
                0.0,
                0.0,
                0.5 * opacity,
            ))),
            ..Default::default()
        });

    // mouse_area with Idle interaction resets the cursor; opaque stops
    // every event from propagating to the page underneath
    let event_blocker = mouse_area(backdrop)
        .interaction(Interaction::Idle)
        .on_press(Message::CloseDialog);

    opaque(event_blocker).into()
}
