use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
        };

        (status, message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_errors_map_to_their_status_codes() {
        let not_found = ApiError::NotFound("unknown player: nobody".to_string());
        assert_eq!(not_found.into_response().status(), StatusCode::NOT_FOUND);

        let bad_request = ApiError::BadRequest("squad lists 12 starters".to_string());
        assert_eq!(
            bad_request.into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }
}
