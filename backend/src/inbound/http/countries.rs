//! Country autocomplete.
//!
//! ```text
//! GET /api/countries?q=fra
//! ```

use actix_web::{get, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::DEFAULT_SEARCH_LIMIT;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Query string of the autocomplete box.
#[derive(Debug, Deserialize, IntoParams)]
pub struct CountrySearchQuery {
    /// Case-insensitive name prefix.
    pub q: Option<String>,
}

/// Up to ten country names starting with `q`, alphabetical.
#[utoipa::path(
    get,
    path = "/api/countries",
    params(CountrySearchQuery),
    responses(
        (status = 200, description = "Matching names; empty for an empty query", body = [String]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["countries"],
    operation_id = "searchCountries"
)]
#[get("/api/countries")]
pub async fn search_countries(
    state: web::Data<HttpState>,
    query: web::Query<CountrySearchQuery>,
) -> ApiResult<web::Json<Vec<String>>> {
    let term = query.into_inner().q.unwrap_or_default();
    let names = state
        .countries
        .search_by_prefix(&term, DEFAULT_SEARCH_LIMIT)
        .await?;
    Ok(web::Json(names.into_iter().map(String::from).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::domain::ports::{CountryRepositoryError, MockCountryRepository};
    use crate::domain::{CountryCatalogueService, Error, ErrorCode};
    use crate::inbound::http::test_utils::{TestHarness, harness};
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use rstest::rstest;

    async fn search(harness: &TestHarness, uri: &str) -> Vec<String> {
        let app =
            test::init_service(App::new().app_data(harness.data()).service(search_countries))
                .await;
        test::call_and_read_body_json(&app, test::TestRequest::get().uri(uri).to_request()).await
    }

    #[rstest]
    #[case("/api/countries?q=fr", &["France", "French Polynesia"])]
    #[case("/api/countries?q=fra", &["France"])]
    #[case("/api/countries?q=UNITED", &["United Kingdom", "United States"])]
    #[case("/api/countries?q=", &[])]
    #[case("/api/countries", &[])]
    #[actix_web::test]
    async fn prefix_search(harness: TestHarness, #[case] uri: &str, #[case] expected: &[&str]) {
        assert_eq!(search(&harness, uri).await, expected);
    }

    #[rstest]
    #[actix_web::test]
    async fn unreachable_store_returns_redacted_500(harness: TestHarness) {
        let mut repo = MockCountryRepository::new();
        repo.expect_search_by_prefix()
            .times(1)
            .return_once(|_, _| Err(CountryRepositoryError::connection("refused by db.internal")));
        let state = HttpState::new(
            Arc::new(CountryCatalogueService::new(Arc::new(repo))),
            harness.state.visits.clone(),
            harness.state.users.clone(),
            harness.state.session.clone(),
        );
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(search_countries),
        )
        .await;

        let response = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/countries?q=fr").to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Error = test::read_body_json(response).await;
        assert_eq!(body.code(), ErrorCode::InternalError);
        assert_eq!(body.message(), "Internal server error");
    }
}
