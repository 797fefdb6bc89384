//! Main application module

mod message;
pub mod state;
mod update;
mod view;

use iced::{Task, Theme};

pub use message::Message;
pub use state::{App, CoreState, UiState};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        // Settings first so the theme and API base are right from frame one
        let settings = crate::features::Settings::load();
        let core = CoreState::new(settings);
        let ui = UiState::new();

        (Self { core, ui }, Task::none())
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn title(&self) -> String {
        "CampusDesk - Student Portal".to_string()
    }

    /// Subscriptions for animation frames and keyboard events
    pub fn subscription(&self) -> iced::Subscription<Message> {
        use iced::keyboard;

        let keyboard_sub = keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Some(Message::KeyPressed(key, modifiers))
            }
            _ => None,
        });

        // Animation frames (~60fps) only while something moves on screen
        let animation_sub = if subscription_logic::needs_animation_subscription(
            self.ui.has_active_animations(),
            self.ui.busy.is_rendered(),
        ) {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            iced::Subscription::none()
        };

        iced::Subscription::batch([keyboard_sub, animation_sub])
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new().0
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    pub fn needs_animation_subscription(has_transitions: bool, busy_rendered: bool) -> bool {
        // The busy spinner rotates continuously, so a rendered overlay needs
        // frames even after its fade transition settles
        has_transitions || busy_rendered
    }
}
