use super::*;

impl QuizApp {
    /// Pide una pregunta concreta, o la primera disponible si no se indica id.
    pub fn cargar_pregunta(&mut self, id: Option<u32>) {
        if self.is_pending() {
            self.message = "⏳ Ya hay una petición en curso. Espera el resultado.".into();
            return;
        }

        self.state = AppState::Loading;
        self.lanzar_peticion(Peticion::Cargar(id));
    }

    /// Pide la pregunta siguiente a la actual.
    pub fn siguiente_pregunta(&mut self) {
        if self.is_pending() {
            self.message = "⏳ Ya hay una petición en curso. Espera el resultado.".into();
            return;
        }

        let Some(question) = &self.question else {
            return;
        };

        let current_id = question.id;
        self.state = AppState::Loading;
        self.lanzar_peticion(Peticion::Siguiente(current_id));
    }

    /// Sesión nueva desde la primera pregunta: cursor y contadores a cero.
    pub fn empezar_de_nuevo(&mut self) {
        if self.is_pending() {
            return;
        }

        self.question = None;
        self.selection = None;
        self.result = None;
        self.message.clear();
        self.end_message.clear();
        self.error.clear();
        self.answered = 0;
        self.correct_count = 0;
        self.cargar_pregunta(None);
    }

    /// Aplica el resultado de `/api/question`.
    pub fn aplicar_pregunta(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Question(question) => self.mostrar_pregunta(question),
            FetchOutcome::NotFound => {
                self.question = None;
                self.selection = None;
                self.result = None;
                self.message.clear();
                self.end_message = "No se encontró la pregunta.".into();
                self.state = AppState::End;
            }
            FetchOutcome::Error { message } => self.entrar_en_error(message),
        }
    }

    /// Aplica el resultado de `/api/next`: pregunta nueva o fin de quiz.
    pub fn aplicar_siguiente(&mut self, outcome: NextOutcome) {
        match outcome {
            NextOutcome::Question(question) => self.mostrar_pregunta(question),
            NextOutcome::End { message } => {
                log::info!("Fin del quiz: {message}");
                self.question = None;
                self.selection = None;
                self.result = None;
                self.message.clear();
                self.end_message = message;
                self.state = AppState::End;
            }
            NextOutcome::Error { message } => self.entrar_en_error(message),
        }
    }

    /// Reintenta la última petición fallida.
    pub fn reintentar(&mut self) {
        if self.is_pending() {
            return;
        }

        let Some(peticion) = self.last_request.clone() else {
            self.empezar_de_nuevo();
            return;
        };

        self.error.clear();
        match &peticion {
            Peticion::Corregir { .. } => {
                // Se vuelve al quiz con la pregunta y la selección intactas.
                self.state = AppState::Quiz;
                self.message = "⏳ Corrigiendo respuesta...".into();
            }
            Peticion::Cargar(_) | Peticion::Siguiente(_) => {
                self.state = AppState::Loading;
            }
        }
        self.lanzar_peticion(peticion);
    }

    /// Pregunta nueva en pantalla: el resultado y la selección anteriores
    /// desaparecen antes de pintar las opciones.
    fn mostrar_pregunta(&mut self, question: Question) {
        log::info!("Pregunta {} cargada", question.id);
        self.selection = None;
        self.result = None;
        self.message.clear();
        self.question = Some(question);
        self.state = AppState::Quiz;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AnswerResult;

    fn sample_question(id: u32) -> Question {
        Question {
            id,
            qno: Some(id),
            stem: format!("Pregunta {id}"),
            options: vec!["A".to_string(), "B".to_string(), "C".to_string()],
            category: None,
            subcategory: None,
        }
    }

    fn app() -> QuizApp {
        QuizApp::new(ApiClient::new(
            "http://127.0.0.1:9",
            "default".to_string(),
            None,
            None,
        ))
    }

    #[test]
    fn pregunta_nueva_limpia_resultado_y_seleccion_anteriores() {
        let mut app = app();
        app.aplicar_pregunta(FetchOutcome::Question(sample_question(1)));
        app.seleccionar_opcion(2);
        app.aplicar_correccion(GradeOutcome::Result(AnswerResult {
            correct: false,
            answer: "C".to_string(),
            explanation: None,
            similar: vec![],
        }));

        app.aplicar_pregunta(FetchOutcome::Question(sample_question(2)));

        assert_eq!(app.state, AppState::Quiz);
        assert!(app.selection.is_none());
        assert!(app.result.is_none());
        assert!(app.message.is_empty());
        assert_eq!(app.question.as_ref().map(|q| q.id), Some(2));
    }

    #[test]
    fn pregunta_no_encontrada_termina_la_sesion() {
        let mut app = app();

        app.aplicar_pregunta(FetchOutcome::NotFound);

        assert_eq!(app.state, AppState::End);
        assert!(app.question.is_none());
        assert_eq!(app.end_message, "No se encontró la pregunta.");
    }

    #[test]
    fn senal_de_fin_limpia_opciones_y_guarda_el_mensaje() {
        let mut app = app();
        app.aplicar_pregunta(FetchOutcome::Question(sample_question(5)));
        app.seleccionar_opcion(0);

        app.aplicar_siguiente(NextOutcome::End {
            message: "Done".to_string(),
        });

        assert_eq!(app.state, AppState::End);
        assert!(app.question.is_none());
        assert!(app.selection.is_none());
        assert!(app.result.is_none());
        assert_eq!(app.end_message, "Done");
    }

    #[test]
    fn fallo_de_red_pasa_a_error_y_reintentar_restaura_el_quiz() {
        let mut app = app();
        app.aplicar_pregunta(FetchOutcome::Question(sample_question(3)));
        app.seleccionar_opcion(1);
        app.last_request = Some(Peticion::Corregir {
            question_id: 3,
            chosen: "B".to_string(),
        });

        app.aplicar_correccion(GradeOutcome::Error {
            message: "timeout".to_string(),
        });
        assert_eq!(app.state, AppState::Error);

        app.reintentar();

        assert_eq!(app.state, AppState::Quiz);
        assert!(app.error.is_empty());
        assert!(app.is_pending());
        assert_eq!(app.selection, Some(1));
    }

    #[test]
    fn siguiente_sin_pregunta_cargada_no_hace_nada() {
        let mut app = app();

        app.siguiente_pregunta();

        assert!(!app.is_pending());
        assert_eq!(app.state, AppState::Loading);
    }
}
