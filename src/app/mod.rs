use std::sync::mpsc::{Receiver, channel};
use std::thread;

use crate::api::{ApiClient, FetchOutcome, GradeOutcome, NextOutcome};
use crate::model::{AnswerResult, AppState, Question};

// Submódulos
pub mod actions;
pub mod navigation;
pub mod view_models;

pub use view_models::OptionRow;

/// Petición contra el servidor, en vuelo o pendiente de reintento.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Peticion {
    Cargar(Option<u32>),
    Siguiente(u32),
    Corregir { question_id: u32, chosen: String },
}

/// Lo que devuelve el hilo de red por el canal.
pub enum ServerReply {
    Question(FetchOutcome),
    Next(NextOutcome),
    Grade(GradeOutcome),
}

pub struct QuizApp {
    pub api: ApiClient,
    pub state: AppState,
    /// Pregunta en pantalla; su id es el cursor de la sesión.
    pub question: Option<Question>,
    /// Índice de la opción elegida, como mucho una por pregunta.
    pub selection: Option<usize>,
    pub result: Option<AnswerResult>,
    pub message: String,     // aviso transitorio bajo los botones
    pub end_message: String, // texto de la pantalla final
    pub error: String,       // texto de la pantalla de error
    pub answered: u32,
    pub correct_count: u32,
    pending: Option<Peticion>,
    reply_rx: Option<Receiver<ServerReply>>,
    last_request: Option<Peticion>,
}

impl QuizApp {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: AppState::Loading,
            question: None,
            selection: None,
            result: None,
            message: String::new(),
            end_message: String::new(),
            error: String::new(),
            answered: 0,
            correct_count: 0,
            pending: None,
            reply_rx: None,
            last_request: None,
        }
    }

    pub fn from_env() -> Self {
        Self::new(ApiClient::from_env())
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Lanza la petición en un hilo aparte y deja constancia de qué hay en
    /// vuelo, para rechazar envíos dobles y poder reintentar.
    pub(crate) fn lanzar_peticion(&mut self, peticion: Peticion) {
        let (tx, rx) = channel::<ServerReply>();
        self.pending = Some(peticion.clone());
        self.last_request = Some(peticion.clone());
        self.reply_rx = Some(rx);

        let api = self.api.clone();
        thread::spawn(move || {
            let reply = match peticion {
                Peticion::Cargar(id) => ServerReply::Question(api.fetch_question(id)),
                Peticion::Siguiente(current_id) => ServerReply::Next(api.fetch_next(current_id)),
                Peticion::Corregir { question_id, chosen } => {
                    ServerReply::Grade(api.submit_answer(question_id, &chosen))
                }
            };
            let _ = tx.send(reply);
        });
    }

    /// Recoge, si ya llegó, la respuesta del hilo de red.
    pub fn poll_server_reply(&mut self) {
        let maybe_reply = self.reply_rx.as_ref().and_then(|rx| rx.try_recv().ok());

        if let Some(reply) = maybe_reply {
            self.pending = None;
            self.reply_rx = None;
            match reply {
                ServerReply::Question(outcome) => self.aplicar_pregunta(outcome),
                ServerReply::Next(outcome) => self.aplicar_siguiente(outcome),
                ServerReply::Grade(outcome) => self.aplicar_correccion(outcome),
            }
        }
    }

    pub(crate) fn entrar_en_error(&mut self, message: String) {
        log::warn!("Fallo de red: {message}");
        self.error = message;
        self.state = AppState::Error;
    }
}
