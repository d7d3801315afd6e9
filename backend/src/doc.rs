//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint of the inbound layer together
//! with the view models and the error envelope. The document backs Swagger UI
//! in debug builds and is exported by `cargo run --bin openapi-dump`.

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::users::{UserChoiceForm, UserForm, UserIdForm};
use crate::inbound::http::views::{DataView, EditView, IndexView, ManageView, UserView};
use crate::inbound::http::visits::VisitForm;
use utoipa::OpenApi;

/// OpenAPI document for the HTTP API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Travel tracker API",
        description = "Visited-country map, country search and family management."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::index::index,
        crate::inbound::http::index::get_data,
        crate::inbound::http::countries::search_countries,
        crate::inbound::http::visits::action_handler,
        crate::inbound::http::users::choose_user,
        crate::inbound::http::users::new_user_page,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::remove_user,
        crate::inbound::http::users::edit_user_page,
        crate::inbound::http::users::update_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        UserView,
        IndexView,
        DataView,
        ManageView,
        EditView,
        VisitForm,
        UserChoiceForm,
        UserForm,
        UserIdForm
    )),
    tags(
        (name = "map", description = "Map page and visit toggling"),
        (name = "countries", description = "Country reference search"),
        (name = "users", description = "Family members and the current selection"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
