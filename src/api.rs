use std::time::Duration;

use serde::Serialize;

use crate::model::{AnswerResult, NextResponse, Question};

const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Resultado de pedir una pregunta concreta.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    Question(Question),
    NotFound,
    Error { message: String },
}

/// Resultado de pedir la pregunta siguiente.
#[derive(Debug, Clone)]
pub enum NextOutcome {
    Question(Question),
    End { message: String },
    Error { message: String },
}

/// Resultado de enviar una respuesta a corregir.
#[derive(Debug, Clone)]
pub enum GradeOutcome {
    Result(AnswerResult),
    Error { message: String },
}

#[derive(Debug, Serialize)]
struct AnswerRequest<'a> {
    question_id: u32,
    chosen: &'a str,
    user_id: &'a str,
}

/// Cliente del servidor de preguntas.
#[derive(Clone)]
pub struct ApiClient {
    base: String,
    user_id: String,
    category: Option<String>,
    subcategory: Option<String>,
    client: reqwest::blocking::Client,
}

impl ApiClient {
    pub fn new(
        base: &str,
        user_id: String,
        category: Option<String>,
        subcategory: Option<String>,
    ) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("No se pudo construir el cliente HTTP");

        Self {
            base: normalize_base(base),
            user_id,
            category,
            subcategory,
            client,
        }
    }

    /// Construye el cliente leyendo la configuración del entorno.
    pub fn from_env() -> Self {
        Self::new(
            &default_endpoint(),
            env_or("CERT_QUIZ_USER", "default"),
            env_opt("CERT_QUIZ_CATEGORY"),
            env_opt("CERT_QUIZ_SUBCATEGORY"),
        )
    }

    /// `GET /api/question[?id=...]`. Sin id el servidor devuelve la primera
    /// pregunta que cumpla los filtros.
    pub fn fetch_question(&self, id: Option<u32>) -> FetchOutcome {
        let url = format!("{}/api/question", self.base);
        let mut params = self.filter_params();
        if let Some(id) = id {
            params.push(("id", id.to_string()));
        }

        let response = match self.client.get(&url).query(&params).send() {
            Ok(response) => response,
            Err(err) => {
                return FetchOutcome::Error {
                    message: format!("Error conectando con el servidor: {err}"),
                };
            }
        };

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return FetchOutcome::NotFound;
        }

        if !response.status().is_success() {
            return FetchOutcome::Error {
                message: http_error_message(&url, response),
            };
        }

        match response.json::<Question>() {
            Ok(question) => FetchOutcome::Question(question),
            Err(err) => FetchOutcome::Error {
                message: format!("Respuesta JSON inválida del servidor: {err}"),
            },
        }
    }

    /// `GET /api/next?current_id=...`. El servidor responde con la pregunta
    /// siguiente o con la señal de fin de quiz.
    pub fn fetch_next(&self, current_id: u32) -> NextOutcome {
        let url = format!("{}/api/next", self.base);
        let mut params = self.filter_params();
        params.push(("current_id", current_id.to_string()));

        let response = match self.client.get(&url).query(&params).send() {
            Ok(response) => response,
            Err(err) => {
                return NextOutcome::Error {
                    message: format!("Error conectando con el servidor: {err}"),
                };
            }
        };

        if !response.status().is_success() {
            return NextOutcome::Error {
                message: http_error_message(&url, response),
            };
        }

        match response.json::<NextResponse>() {
            Ok(NextResponse::Question(question)) => NextOutcome::Question(question),
            Ok(NextResponse::End { message, .. }) => NextOutcome::End { message },
            Err(err) => NextOutcome::Error {
                message: format!("Respuesta JSON inválida del servidor: {err}"),
            },
        }
    }

    /// `POST /api/answer` con `{question_id, chosen, user_id}`.
    pub fn submit_answer(&self, question_id: u32, chosen: &str) -> GradeOutcome {
        let url = format!("{}/api/answer", self.base);
        let payload = AnswerRequest {
            question_id,
            chosen,
            user_id: &self.user_id,
        };

        let response = match self.client.post(&url).json(&payload).send() {
            Ok(response) => response,
            Err(err) => {
                return GradeOutcome::Error {
                    message: format!("Error conectando con el servidor: {err}"),
                };
            }
        };

        if !response.status().is_success() {
            return GradeOutcome::Error {
                message: http_error_message(&url, response),
            };
        }

        match response.json::<AnswerResult>() {
            Ok(result) => GradeOutcome::Result(result),
            Err(err) => GradeOutcome::Error {
                message: format!("Respuesta JSON inválida del servidor: {err}"),
            },
        }
    }

    fn filter_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(category) = &self.category {
            params.push(("category", category.clone()));
        }
        if let Some(subcategory) = &self.subcategory {
            params.push(("subcategory", subcategory.clone()));
        }
        params
    }
}

fn http_error_message(url: &str, response: reqwest::blocking::Response) -> String {
    let status = response.status();
    let body = response.text().unwrap_or_default();
    format!(
        "El servidor devolvió HTTP {} en {}{}",
        status,
        url,
        if body.trim().is_empty() {
            String::new()
        } else {
            format!(". Body: {}", body.trim())
        }
    )
}

fn default_endpoint() -> String {
    std::env::var("CERT_QUIZ_API_URL")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
}

fn env_or(key: &str, fallback: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn normalize_base(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed == "/" {
        return trimmed.to_string();
    }

    trimmed.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_base_strips_trailing_slashes() {
        assert_eq!(normalize_base("http://127.0.0.1:5000/"), "http://127.0.0.1:5000");
        assert_eq!(
            normalize_base("  http://quiz.example//  "),
            "http://quiz.example"
        );
        assert_eq!(normalize_base("/"), "/");
    }

    #[test]
    fn answer_request_serializes_expected_fields() {
        let payload = AnswerRequest {
            question_id: 42,
            chosen: "③ 정규화",
            user_id: "default",
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["question_id"], 42);
        assert_eq!(value["chosen"], "③ 정규화");
        assert_eq!(value["user_id"], "default");
    }

    #[test]
    fn filter_params_only_includes_configured_filters() {
        let client = ApiClient::new(
            "http://127.0.0.1:5000",
            "default".to_string(),
            Some("정보처리".to_string()),
            None,
        );
        let params = client.filter_params();
        assert_eq!(params, vec![("category", "정보처리".to_string())]);
    }
}
