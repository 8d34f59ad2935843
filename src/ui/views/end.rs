use egui::Context;

use crate::QuizApp;
use crate::ui::layout::centered_panel;

/// Pantalla final: sin opciones ni botón de envío. El ciclo de preguntas
/// termina aquí; desde el panel superior se puede abrir una sesión nueva.
pub fn ui_end(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 220.0, 420.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("🏁 ¡Fin del quiz!");
            ui.add_space(10.0);
            if !app.end_message.is_empty() {
                ui.label(&app.end_message);
            }
            ui.add_space(10.0);
            ui.label(format!(
                "Resumen de la sesión: {} contestadas, {} correctas.",
                app.answered, app.correct_count
            ));
        });
    });
}
