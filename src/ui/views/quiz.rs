use egui::{Button, CentralPanel, Context, ScrollArea};

use crate::QuizApp;
use crate::app::view_models::verdict_line;
use crate::ui::layout::two_button_row;

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 650.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);
        let total_height = 150.0 + 220.0 + 48.0 + 24.0;
        let extra_space = (ui.available_height() - total_height).max(0.0) / 2.0;
        ui.add_space(extra_space / 4.0);

        egui::Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(120, 20))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    let Some(question) = app.question.clone() else {
                        return;
                    };

                    ui.heading(format!("📘 Pregunta {}", question.display_number()));
                    if let Some(category) = &question.category {
                        let subtitle = match &question.subcategory {
                            Some(sub) => format!("{category} › {sub}"),
                            None => category.clone(),
                        };
                        ui.weak(subtitle);
                    }
                    ui.add_space(10.0);

                    // Enunciado con scroll fijo
                    let stem_max_height = 150.0;
                    ScrollArea::vertical()
                        .max_height(stem_max_height)
                        .show(ui, |ui| {
                            ui.label(&question.stem);
                        });

                    ui.add_space(10.0);

                    // Opciones: una fila pulsable por opción, solo la elegida
                    // se pinta activa
                    let mut clicked = None;
                    for row in app.option_rows() {
                        let mut button =
                            Button::new(format!("{}. {}", row.index + 1, row.text));
                        if row.selected {
                            button = button.fill(ui.visuals().selection.bg_fill);
                        }
                        if ui.add_sized([panel_width, 32.0], button).clicked() {
                            clicked = Some(row.index);
                        }
                    }
                    if let Some(idx) = clicked {
                        app.seleccionar_opcion(idx);
                    }

                    // Bloque de resultado
                    if let Some(result) = app.result.clone() {
                        ui.add_space(8.0);
                        ui.separator();
                        ui.label(verdict_line(&result));
                        if let Some(explanation) = &result.explanation {
                            ui.label(format!("💡 Explicación: {explanation}"));
                        }
                        if !result.similar.is_empty() {
                            ui.add_space(4.0);
                            ui.label("Preguntas parecidas para repasar:");
                            for similar in &result.similar {
                                ui.label(format!("  • ({}) {}", similar.id, similar.stem));
                            }
                        }
                        ui.separator();
                    }

                    ui.add_space(8.0);

                    let mut enviar = false;
                    let mut siguiente = false;
                    ui.add_enabled_ui(!app.is_pending(), |ui| {
                        let (left, right) =
                            two_button_row(ui, panel_width, "Enviar respuesta", "Siguiente pregunta");
                        enviar = left;
                        siguiente = right;
                    });
                    if enviar {
                        app.enviar_respuesta();
                    }
                    if siguiente {
                        app.siguiente_pregunta();
                    }

                    ui.add_space(8.0);
                    if app.is_pending() {
                        ui.spinner();
                    }
                    if !app.message.is_empty() {
                        ui.label(&app.message);
                    }
                });
            });

        ui.add_space(extra_space);
    });
}
