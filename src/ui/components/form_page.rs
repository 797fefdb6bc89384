//! Student registration form page
//!
//! Renders the registration card: labelled inputs with validation tinting,
//! inline error messages, the password requirements dialog trigger, and the
//! submit/reset controls. The submit button disables and swaps its label
//! while a submission is in flight.

use iced::widget::{Space, button, column, container, row, scrollable, text, text_input, toggler};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::app::state::{DialogCard, Field, FormState};
use crate::ui::theme;
use crate::validate::Mark;

/// Body of the password requirements dialog
const PASSWORD_RULES: &str = "At least 8 characters, with an uppercase letter, \
a lowercase letter, a number and a special character (!@#$%^&* etc).";

/// Build the card shown when a dialog explains the password rules
pub fn password_rules_card() -> DialogCard {
    DialogCard::new(PASSWORD_RULES).with_title("Password requirements")
}

fn field_row<'a>(form: &'a FormState, field: Field) -> Element<'a, Message> {
    let mark = form.marks.mark(field.name());
    let outcome = mark.map(|m| m == Mark::Success);

    let label = text(field.label()).size(14).style(theme::secondary_text);

    let mut input = text_input(field.placeholder(), form.value(field))
        .on_input(move |value| Message::FieldChanged(field, value))
        .on_submit(Message::SubmitForm)
        .padding(12)
        .size(15)
        .style(move |theme, status| theme::field_input(theme, status, outcome));

    if field == Field::Password {
        input = input.secure(true);
    }

    let mut rows = column![label, Space::new().height(6), input].width(Fill);

    if mark == Some(Mark::Error) {
        if let Some(message) = form.marks.message(field.name()) {
            rows = rows.push(Space::new().height(4));
            rows = rows.push(
                text(message.to_string()).size(12).style(|theme| {
                    iced::widget::text::Style {
                        color: Some(theme::danger(theme)),
                    }
                }),
            );
        }
    }

    rows.into()
}

/// Build the registration form page
pub fn view<'a>(form: &'a FormState, dark_mode: bool) -> Element<'a, Message> {
    let heading = text("Student Registration")
        .size(24)
        .style(theme::primary_text)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        });

    let subheading = text("Fill in your details to register for the portal")
        .size(14)
        .style(theme::muted_text);

    let dark_toggle = row![
        text("Dark mode").size(13).style(theme::muted_text),
        Space::new().width(8),
        toggler(dark_mode).on_toggle(Message::ToggleDarkMode).size(22),
    ]
    .align_y(Alignment::Center);

    let header = row![
        column![heading, Space::new().height(4), subheading],
        Space::new().width(Fill),
        dark_toggle,
    ]
    .align_y(Alignment::Start);

    let mut fields = column![].spacing(16).width(Fill);
    for field in Field::ALL {
        fields = fields.push(field_row(form, field));
    }

    let rules_btn = button(
        text("Password requirements")
            .size(13)
            .style(theme::secondary_text),
    )
    .padding([6, 12])
    .style(theme::secondary_button)
    .on_press(Message::OpenDialog(password_rules_card()));

    let submit_label = if form.submitting {
        "Submitting..."
    } else {
        "Submit"
    };
    let mut submit_btn = button(text(submit_label).size(15).color(iced::Color::WHITE))
        .padding([12, 32])
        .style(theme::primary_button);
    if !form.submitting {
        submit_btn = submit_btn.on_press(Message::SubmitForm);
    }

    let reset_btn = button(text("Reset").size(15).style(theme::secondary_text))
        .padding([12, 24])
        .style(theme::secondary_button)
        .on_press(Message::ResetForm);

    let actions = row![
        submit_btn,
        Space::new().width(12),
        reset_btn,
        Space::new().width(Fill),
        rules_btn,
    ]
    .align_y(Alignment::Center);

    let card_content = column![
        header,
        Space::new().height(24),
        fields,
        Space::new().height(24),
        actions,
    ]
    .max_width(560)
    .padding(32);

    let card = container(card_content).style(|theme| container::Style {
        background: Some(iced::Background::Color(theme::surface(theme))),
        border: iced::Border {
            radius: 16.0.into(),
            width: 1.0,
            color: theme::border_color(theme),
        },
        ..Default::default()
    });

    let page = container(scrollable(
        container(card).width(Fill).center_x(Fill).padding(40),
    ))
    .width(Fill)
    .height(Fill)
    .style(|theme| container::Style {
        background: Some(iced::Background::Color(theme::background(theme))),
        ..Default::default()
    });

    page.into()
}

/// Build the post-submit confirmation page
pub fn view_done(location: &str) -> Element<'_, Message> {
    let heading = text("Registration complete")
        .size(22)
        .style(theme::primary_text)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        });

    let detail = text(format!("You have been redirected to {location}"))
        .size(14)
        .style(theme::secondary_text);

    let again_btn = button(text("New registration").size(15).color(iced::Color::WHITE))
        .padding([12, 32])
        .style(theme::primary_button)
        .on_press(Message::ResetForm);

    let card_content = column![
        heading,
        Space::new().height(8),
        detail,
        Space::new().height(24),
        again_btn,
    ]
    .align_x(Alignment::Center)
    .max_width(480)
    .padding(32);

    let card = container(card_content).style(|theme| container::Style {
        background: Some(iced::Background::Color(theme::surface(theme))),
        border: iced::Border {
            radius: 16.0.into(),
            width: 1.0,
            color: theme::border_color(theme),
        },
        ..Default::default()
    });

    container(card)
        .width(Fill)
        .height(Fill)
        .center_x(Fill)
        .center_y(Fill)
        .style(|theme| container::Style {
            background: Some(iced::Background::Color(theme::background(theme))),
            ..Default::default()
        })
        .into()
}
