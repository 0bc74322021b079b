//! Mapping transport and status failures onto [`ApiError`]

use pokedex_schema::ApiError;
use reqwest::StatusCode;

pub(crate) fn from_transport(err: reqwest::Error) -> ApiError {
    if err.is_decode() {
        ApiError::MalformedData(err.to_string())
    } else {
        ApiError::Network(err.to_string())
    }
}

pub(crate) fn from_status(status: StatusCode, path: &str) -> ApiError {
    match status {
        StatusCode::NOT_FOUND => ApiError::NotFound(path.to_string()),
        s if s.is_server_error() => ApiError::UpstreamServer(s.as_u16()),
        s => ApiError::UnexpectedStatus(s.as_u16()),
    }
}
