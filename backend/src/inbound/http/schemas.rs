//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay free of `ToSchema`; these wrappers describe their wire
//! shape for the generated document and are never constructed.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The country name does not resolve to a known country.
    #[schema(rename = "invalid_country")]
    InvalidCountry,
    /// The country is already on the user's list.
    #[schema(rename = "duplicate_visit")]
    DuplicateVisit,
    /// The country is not on the user's list.
    #[schema(rename = "not_visited")]
    NotVisited,
    /// Another user already has the name.
    #[schema(rename = "duplicate_name")]
    DuplicateName,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The database cannot be reached.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message.
    #[schema(example = "Invalid country name.")]
    error: String,
    /// Identifier of the request that failed.
    #[schema(rename = "traceId", example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary details, such as the rejected field.
    details: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[rstest]
    #[case("invalid_request")]
    #[case("invalid_country")]
    #[case("duplicate_visit")]
    #[case("not_visited")]
    #[case("duplicate_name")]
    #[case("not_found")]
    #[case("service_unavailable")]
    #[case("internal_error")]
    fn error_code_schema_lists_every_code(#[case] code: &str) {
        let json = schema_to_json::<ErrorCodeSchema>();
        assert!(json.contains(code), "missing {code} in {json}");
    }

    #[rstest]
    fn error_schema_matches_the_envelope() {
        assert_eq!(ErrorSchema::name(), "crate.domain.Error");
        let json = schema_to_json::<ErrorSchema>();
        for field in ["\"code\"", "\"error\"", "\"traceId\"", "\"details\""] {
            assert!(json.contains(field), "missing {field} in {json}");
        }
    }
}
