//! CampusDesk - desktop companion for the college student portal
//! Built with iced for a clean dark mode UI

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod api;
mod app;
mod features;
mod ui;
mod validate;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::application(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .antialiasing(true)
        .window(iced::window::Settings {
            size: iced::Size::new(900.0, 760.0),
            min_size: Some(iced::Size::new(640.0, 520.0)),
            ..Default::default()
        })
        .run()
}
