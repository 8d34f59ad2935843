use crate::model::AnswerResult;

use super::QuizApp;

/// Fila de opción lista para pintar: índice, texto y si está seleccionada.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionRow {
    pub index: usize,
    pub text: String,
    pub selected: bool,
}

impl QuizApp {
    /// Mapea la pregunta actual a filas de opción. La selección se decide
    /// comparando índices, nunca capturando la opción en un closure.
    pub fn option_rows(&self) -> Vec<OptionRow> {
        let Some(question) = &self.question else {
            return Vec::new();
        };

        question
            .options
            .iter()
            .enumerate()
            .map(|(index, text)| OptionRow {
                index,
                text: text.clone(),
                selected: self.selection == Some(index),
            })
            .collect()
    }
}

/// Línea de veredicto que encabeza el bloque de resultado.
pub fn verdict_line(result: &AnswerResult) -> String {
    if result.correct {
        "✅ ¡Correcto!".to_string()
    } else {
        format!("❌ Incorrecto. Respuesta correcta: {}", result.answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiClient, FetchOutcome};
    use crate::model::Question;

    fn app_with_options(options: &[&str]) -> QuizApp {
        let mut app = QuizApp::new(ApiClient::new(
            "http://127.0.0.1:9",
            "default".to_string(),
            None,
            None,
        ));
        app.aplicar_pregunta(FetchOutcome::Question(Question {
            id: 1,
            qno: None,
            stem: "stem".to_string(),
            options: options.iter().map(|s| s.to_string()).collect(),
            category: None,
            subcategory: None,
        }));
        app
    }

    #[test]
    fn sin_seleccion_ninguna_fila_esta_activa() {
        let app = app_with_options(&["A", "B", "C"]);

        assert!(app.option_rows().iter().all(|row| !row.selected));
    }

    #[test]
    fn la_ultima_pulsacion_gana_y_solo_hay_una_activa() {
        let mut app = app_with_options(&["A", "B", "C"]);

        app.seleccionar_opcion(0);
        app.seleccionar_opcion(2);

        let rows = app.option_rows();
        let selected: Vec<usize> = rows
            .iter()
            .filter(|row| row.selected)
            .map(|row| row.index)
            .collect();
        assert_eq!(selected, vec![2]);
    }

    #[test]
    fn veredicto_correcto_no_menciona_respuesta_incorrecta() {
        let line = verdict_line(&AnswerResult {
            correct: true,
            answer: "B".to_string(),
            explanation: None,
            similar: vec![],
        });
        assert!(line.contains('✅'));
        assert!(!line.contains("Incorrecto"));
    }

    #[test]
    fn veredicto_incorrecto_muestra_la_respuesta_correcta() {
        let line = verdict_line(&AnswerResult {
            correct: false,
            answer: "C".to_string(),
            explanation: None,
            similar: vec![],
        });
        assert!(line.contains('❌'));
        assert!(line.contains('C'));
    }
}
