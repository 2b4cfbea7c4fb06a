use axum::response::{IntoResponse, Response};
use http::StatusCode;

pub type PortfolioResult<T, E = PortfolioError> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug)]
pub enum PortfolioError {
    #[error("failed to fetch profile document: status {0}")]
    Fetch(StatusCode),

    #[error("malformed profile document: {0}")]
    Parse(String),

    #[error("an internal server error occurred")]
    Anyhow(#[from] anyhow::Error),
}

impl PortfolioError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Fetch(_) => StatusCode::BAD_GATEWAY,
            Self::Parse(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Anyhow(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for PortfolioError {
    fn into_response(self) -> Response {
        if let Self::Anyhow(ref e) = self {
            tracing::error!("Generic error: {:?}", e);
        }
        (self.status_code(), self.to_string()).into_response()
    }
}
