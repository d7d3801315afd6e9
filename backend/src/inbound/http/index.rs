//! Map page and the data feed that paints it.
//!
//! ```text
//! GET /
//! GET /api/getData
//! ```

use actix_web::{get, web};

use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::{DataView, IndexView};

/// Main view for the current user.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Current user's map page", body = IndexView),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["map"],
    operation_id = "index"
)]
#[get("/")]
pub async fn index(state: web::Data<HttpState>) -> ApiResult<web::Json<IndexView>> {
    let info = state.session.current().await?;
    Ok(web::Json(IndexView::from_info(&info)))
}

/// Colour and visited codes for the current user.
#[utoipa::path(
    get,
    path = "/api/getData",
    responses(
        (status = 200, description = "Map colouring data", body = DataView),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["map"],
    operation_id = "getData"
)]
#[get("/api/getData")]
pub async fn get_data(state: web::Data<HttpState>) -> ApiResult<web::Json<DataView>> {
    let info = state.session.current().await?;
    Ok(web::Json(DataView::from(&info)))
}
