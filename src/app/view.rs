//! Application view rendering

use iced::widget::{Space, column, container, stack};
use iced::{Alignment, Element, Fill};

use super::App;
use super::message::Message;
use super::state::Route;
use crate::ui::components;
use crate::ui::widgets::view_toast;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        // Page content per route
        let page: Element<'_, Message> = match &self.ui.route {
            Route::Form => components::form_page::view(
                &self.ui.form,
                self.core.settings.display.dark_mode,
            ),
            Route::Done { location } => components::form_page::view_done(location),
        };

        // Toast overlay: stacked top-right, newest at the bottom
        let toast_overlay: Element<'_, Message> = if self.ui.toasts.is_empty() {
            Space::new().width(0).height(0).into()
        } else {
            let mut toasts = column![].spacing(10).align_x(Alignment::End);
            for entry in self.ui.toasts.entries() {
                toasts = toasts.push(view_toast(
                    &entry.toast,
                    entry.transition.progress(),
                    Message::DismissToast(entry.id),
                ));
            }
            container(toasts)
                .width(Fill)
                .align_x(Alignment::End)
                .padding(20)
                .into()
        };

        // Dialog overlay (empty space while no card is attached)
        let dialog_overlay: Element<'_, Message> = match self.ui.dialog.card() {
            Some(card) => components::dialog::view(card, self.ui.dialog.transition.progress()),
            None => Space::new().width(0).height(0).into(),
        };

        // Busy overlay sits above everything, including dialogs
        let busy_overlay: Element<'_, Message> = if self.ui.busy.is_rendered() {
            components::busy_overlay::view(
                self.ui.busy.transition.progress(),
                self.ui.busy.spin_phase,
            )
        } else {
            Space::new().width(0).height(0).into()
        };

        // Consistent stack structure so widget state survives overlay churn
        stack![page, toast_overlay, dialog_overlay, busy_overlay]
            .width(Fill)
            .height(Fill)
            .into()
    }
}
