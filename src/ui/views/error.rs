use egui::{Button, Context};

use crate::QuizApp;
use crate::ui::layout::centered_panel;

/// Banner de fallo de red con reintento de la última petición.
pub fn ui_error(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 200.0, 480.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("⚠ No se pudo contactar con el servidor");
            ui.add_space(10.0);
            if !app.error.is_empty() {
                ui.label(&app.error);
            }
            ui.add_space(16.0);
            if ui
                .add_enabled(!app.is_pending(), Button::new("Reintentar"))
                .clicked()
            {
                app.reintentar();
            }
            if app.is_pending() {
                ui.add_space(8.0);
                ui.spinner();
            }
        });
    });
}
