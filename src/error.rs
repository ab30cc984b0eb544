use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::fmt::Debug;

#[derive(Debug)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl Error {
    pub fn is_validation_error(&self) -> bool {
        self.code == 101
    }

    pub fn is_not_found_error(&self) -> bool {
        self.code == 102
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        database_error(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        reqwest_error(err)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, body) = match self.code {
            102 => (
                StatusCode::NOT_FOUND,
                json!({ "code": self.code, "error": self.message }),
            ),
            100..=199 => (
                StatusCode::BAD_REQUEST,
                json!({ "code": self.code, "error": self.message }),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "code": self.code, "error": "server error", "details": self.message }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

pub fn validation_error<S: Into<String>>(message: S) -> Error {
    Error {
        code: 101,
        message: message.into(),
    }
}

pub fn not_found_error<S: Into<String>>(message: S) -> Error {
    Error {
        code: 102,
        message: message.into(),
    }
}

pub fn database_error<T: Debug>(err: T) -> Error {
    Error {
        code: 2,
        message: format!("database error: {:?}", err),
    }
}

pub fn reqwest_error(err: reqwest::Error) -> Error {
    Error {
        code: 3,
        message: format!("request error: {}", err),
    }
}

pub fn upstream_error() -> Error {
    Error {
        code: 4,
        message: "upstream error".into(),
    }
}
