//! HTTP mapping for domain errors.
//!
//! The domain error stays HTTP-agnostic; this adapter picks the status code,
//! sets the `trace-id` header and redacts server-side failures.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Split a result into recoverable validation failures, which the caller
/// re-renders as a page message, and everything else, which propagates.
pub(crate) fn recoverable<T>(result: ApiResult<T>) -> ApiResult<Result<T, Error>> {
    match result {
        Ok(value) => Ok(Ok(value)),
        Err(error) if error.code().is_recoverable() => Ok(Err(error)),
        Err(error) => Err(error),
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest | ErrorCode::InvalidCountry => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::DuplicateVisit | ErrorCode::NotVisited | ErrorCode::DuplicateName => {
            StatusCode::CONFLICT
        }
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn is_server_failure(code: ErrorCode) -> bool {
    matches!(code, ErrorCode::InternalError | ErrorCode::ServiceUnavailable)
}

fn redact_if_internal(error: &Error) -> Error {
    if is_server_failure(error.code()) {
        let mut redacted = Error::new(error.code(), "Internal server error");
        if let Some(id) = error.trace_id() {
            redacted = redacted.with_trace_id(id.to_owned());
        }
        redacted
    } else {
        error.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if is_server_failure(self.code()) {
            error!(
                code = ?self.code(),
                message = self.message(),
                trace_id = ?self.trace_id(),
                "internal error"
            );
        }
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(redact_if_internal(self))
    }
}
