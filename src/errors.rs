use axum::http::StatusCode;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    /// No valid user context; the identity provider did not supply an id.
    pub fn not_authenticated() -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            message: "not authenticated".into(),
        }
    }

    /// Unknown task key. Programmer error; the sanctioned UI never sends one.
    pub fn invalid_task_key(key: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: format!("unknown task key: {key}"),
        }
    }

    /// Expected user-facing condition, not a fault: completion attempted with
    /// unchecked tasks.
    pub fn tasks_incomplete() -> Self {
        Self {
            status: StatusCode::CONFLICT,
            message: "complete all tasks before completing the day".into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(err)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
