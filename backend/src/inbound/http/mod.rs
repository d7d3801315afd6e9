//! HTTP inbound adapter exposing the map, search and family endpoints.

use actix_web::http::header;
use actix_web::{HttpResponse, web};

pub mod countries;
pub mod error;
pub mod health;
pub mod index;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod views;
pub mod visits;

pub use error::ApiResult;

/// `303 See Other` back to the map page.
pub(crate) fn redirect_home() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .finish()
}

/// Register every application route. Health probes and docs are mounted by
/// the server.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::{App, web};
/// use travel_tracker::domain::CurrentSelection;
/// use travel_tracker::inbound::http::configure;
/// use travel_tracker::test_support::{InMemoryStore, in_memory_http_state};
///
/// let state = in_memory_http_state(
///     Arc::new(InMemoryStore::new()),
///     Arc::new(CurrentSelection::default()),
/// );
/// let app = App::new().app_data(web::Data::new(state)).configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index::index)
        .service(index::get_data)
        .service(countries::search_countries)
        .service(visits::action_handler)
        .service(users::choose_user)
        .service(users::new_user_page)
        .service(users::create_user)
        .service(users::remove_user)
        .service(users::edit_user_page)
        .service(users::update_user);
}
