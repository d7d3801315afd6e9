//! Visit toggling from the map page.
//!
//! ```text
//! POST /action-handler  action=add&country=France
//! ```

use actix_web::{HttpResponse, post, web};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{Error, VisitAction};
use crate::inbound::http::error::recoverable;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::IndexView;
use crate::inbound::http::{ApiResult, redirect_home};

/// Form posted by the add/remove buttons.
#[derive(Debug, Deserialize, ToSchema)]
pub struct VisitForm {
    /// `add` or `remove`.
    #[schema(example = "add")]
    pub action: String,
    /// Country name as typed; matched case-insensitively.
    #[schema(example = "France")]
    pub country: String,
}

fn parse_action(raw: &str) -> ApiResult<VisitAction> {
    raw.parse().map_err(|err: crate::domain::UnknownVisitAction| {
        Error::invalid_request(err.to_string())
            .with_details(json!({ "field": "action", "value": err.0 }))
    })
}

/// Add or remove a visit for the current user.
///
/// Success redirects to the map. Unknown names, repeated adds and removals
/// of unvisited countries re-render the map with a message.
#[utoipa::path(
    post,
    path = "/action-handler",
    request_body(content = VisitForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Visit applied; redirect to /"),
        (status = 200, description = "Map page with a validation message", body = IndexView),
        (status = 400, description = "Unknown action", body = ErrorSchema),
        (status = 404, description = "No user selected", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["map"],
    operation_id = "applyVisitAction"
)]
#[post("/action-handler")]
pub async fn action_handler(
    state: web::Data<HttpState>,
    form: web::Form<VisitForm>,
) -> ApiResult<HttpResponse> {
    let VisitForm { action, country } = form.into_inner();
    let action = parse_action(&action)?;
    let info = state.session.current().await?;
    let Some(user) = info.user.as_ref() else {
        return Err(Error::not_found("no user is selected"));
    };

    match recoverable(state.visits.apply_action(user.id(), &country, action).await)? {
        Ok(()) => Ok(redirect_home()),
        Err(error) => {
            Ok(HttpResponse::Ok().json(IndexView::from_info(&info).with_error(error.message())))
        }
    }
}
