use super::*;

impl QuizApp {
    /// Marca la opción pulsada como única selección (la última pulsación gana).
    pub fn seleccionar_opcion(&mut self, idx: usize) {
        let Some(question) = &self.question else {
            return;
        };
        if idx >= question.options.len() {
            return;
        }

        self.selection = Some(idx);
        self.message.clear();
    }

    /// Envía la respuesta elegida a corregir. Sin selección no hay petición:
    /// solo el aviso.
    pub fn enviar_respuesta(&mut self) {
        if self.is_pending() {
            self.message = "⏳ Ya hay una petición en curso. Espera el resultado.".into();
            return;
        }

        let Some(question) = &self.question else {
            self.message = "Error interno: no hay pregunta cargada.".into();
            return;
        };

        let Some(idx) = self.selection else {
            self.message = "⚠ Debes elegir una opción antes de enviar.".into();
            return;
        };

        let question_id = question.id;
        let chosen = question.options[idx].clone();
        self.message = "⏳ Corrigiendo respuesta...".into();
        self.lanzar_peticion(Peticion::Corregir { question_id, chosen });
    }

    /// Aplica la corrección recibida. La selección se queda marcada y no se
    /// avanza de pregunta: eso lo decide el usuario.
    pub fn aplicar_correccion(&mut self, outcome: GradeOutcome) {
        match outcome {
            GradeOutcome::Result(result) => {
                self.answered += 1;
                if result.correct {
                    self.correct_count += 1;
                }
                self.message.clear();
                self.result = Some(result);
                self.state = AppState::Quiz;
            }
            GradeOutcome::Error { message } => self.entrar_en_error(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AnswerResult;

    fn app_with_question() -> QuizApp {
        let mut app = QuizApp::new(ApiClient::new(
            "http://127.0.0.1:9",
            "default".to_string(),
            None,
            None,
        ));
        app.aplicar_pregunta(FetchOutcome::Question(Question {
            id: 1,
            qno: Some(1),
            stem: "¿Cuál es la respuesta?".to_string(),
            options: vec!["A".to_string(), "B".to_string(), "C".to_string()],
            category: None,
            subcategory: None,
        }));
        app
    }

    #[test]
    fn enviar_sin_seleccion_avisa_y_no_lanza_peticion() {
        let mut app = app_with_question();

        app.enviar_respuesta();

        assert!(!app.is_pending());
        assert!(app.message.contains('⚠'));
        assert_eq!(app.state, AppState::Quiz);
        assert!(app.result.is_none());
    }

    #[test]
    fn enviar_con_peticion_en_curso_se_rechaza() {
        let mut app = app_with_question();
        app.seleccionar_opcion(1);
        app.pending = Some(Peticion::Cargar(None));

        app.enviar_respuesta();

        assert_eq!(app.pending, Some(Peticion::Cargar(None)));
        assert!(app.message.contains("en curso"));
    }

    #[test]
    fn seleccionar_fuera_de_rango_no_cambia_nada() {
        let mut app = app_with_question();
        app.seleccionar_opcion(1);

        app.seleccionar_opcion(7);

        assert_eq!(app.selection, Some(1));
    }

    #[test]
    fn correccion_correcta_actualiza_contadores_y_conserva_seleccion() {
        let mut app = app_with_question();
        app.seleccionar_opcion(1);

        app.aplicar_correccion(GradeOutcome::Result(AnswerResult {
            correct: true,
            answer: "B".to_string(),
            explanation: None,
            similar: vec![],
        }));

        assert_eq!(app.answered, 1);
        assert_eq!(app.correct_count, 1);
        assert_eq!(app.selection, Some(1));
        assert!(app.result.as_ref().is_some_and(|r| r.correct));
        assert_eq!(app.state, AppState::Quiz);
    }

    #[test]
    fn correccion_fallida_pasa_a_error_con_mensaje() {
        let mut app = app_with_question();

        app.aplicar_correccion(GradeOutcome::Error {
            message: "Error conectando con el servidor".to_string(),
        });

        assert_eq!(app.state, AppState::Error);
        assert!(app.error.contains("conectando"));
    }
}
