use serde::{Deserialize, Serialize};

/// Pregunta tal y como la sirve el servidor de estudio.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Question {
    pub id: u32,
    /// Número de orden para mostrar; si falta se usa el id.
    #[serde(default)]
    pub qno: Option<u32>,
    pub stem: String, // Enunciado
    pub options: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub subcategory: Option<String>,
}

impl Question {
    pub fn display_number(&self) -> u32 {
        self.qno.unwrap_or(self.id)
    }
}

/// Pregunta parecida que el servidor adjunta a la corrección, para repasar.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SimilarQuestion {
    pub id: u32,
    pub stem: String,
}

/// Resultado de corregir una respuesta. Se descarta al cargar la siguiente
/// pregunta.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AnswerResult {
    pub correct: bool,
    pub answer: String, // Respuesta correcta
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub similar: Vec<SimilarQuestion>,
}

/// Respuesta de `/api/next`: o una pregunta nueva, o la señal de fin de quiz.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum NextResponse {
    End { end: bool, message: String },
    Question(Question),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppState {
    Loading,
    Quiz,
    End,
    Error,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Loading
    }
}
