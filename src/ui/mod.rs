pub mod layout;
pub mod views;

use std::time::Duration;

use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};

use crate::app::QuizApp;
use crate::model::AppState;

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Primero recoger lo que haya devuelto el hilo de red; mientras haya
        // algo en vuelo hay que repintar aunque no llegue ningún evento.
        self.poll_server_reply();
        if self.is_pending() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        if matches!(self.state, AppState::Quiz | AppState::End) {
            top_panel(self, ctx);
        }

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        // Dispatch por estado a las vistas
        match self.state {
            AppState::Loading => views::loading::ui_loading(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::End => views::end::ui_end(self, ctx),
            AppState::Error => views::error::ui_error(self, ctx),
        }
    }
}
