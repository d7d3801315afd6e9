//! Family management: picking, creating, renaming and removing users.
//!
//! ```text
//! POST /user       manageFamily=addRemoveEdit | user=2
//! GET  /new
//! POST /new        name=Bob&color=orange
//! POST /remove     user=2
//! POST /edit       user=2
//! POST /edit/{id}  name=Robert&color=red
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{Error, UserDraft, UserId};
use crate::inbound::http::error::recoverable;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::{EditView, ManageView};
use crate::inbound::http::{ApiResult, redirect_home};

const MANAGE_FAMILY: &str = "addRemoveEdit";

/// User picker on the map page.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserChoiceForm {
    /// `addRemoveEdit` opens the management page instead of switching.
    #[schema(example = "addRemoveEdit")]
    pub manage_family: Option<String>,
    /// Id of the user to switch to.
    #[schema(example = "2")]
    pub user: Option<String>,
}

/// Name and colour of a new or edited user.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UserForm {
    #[schema(example = "Bob")]
    pub name: String,
    /// Defaults to `teal` when missing or blank.
    #[schema(example = "orange")]
    pub color: Option<String>,
}

/// Form carrying a single user id.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UserIdForm {
    #[schema(example = "2")]
    pub user: String,
}

fn parse_user_id(field: &str, raw: &str) -> ApiResult<UserId> {
    raw.parse().map_err(|err: crate::domain::UserValidationError| {
        Error::invalid_request(err.to_string()).with_details(json!({ "field": field, "value": raw }))
    })
}

fn parse_draft(form: UserForm) -> ApiResult<UserDraft> {
    UserDraft::try_from_form(form.name, form.color)
        .map_err(|err| Error::invalid_request(err.to_string()))
}

/// Switch the current user, or open the management page.
#[utoipa::path(
    post,
    path = "/user",
    request_body(content = UserChoiceForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Current user switched; redirect to /"),
        (status = 200, description = "Family management page", body = ManageView),
        (status = 400, description = "Missing or malformed user id", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "chooseUser"
)]
#[post("/user")]
pub async fn choose_user(
    state: web::Data<HttpState>,
    form: web::Form<UserChoiceForm>,
) -> ApiResult<HttpResponse> {
    let UserChoiceForm {
        manage_family,
        user,
    } = form.into_inner();
    if manage_family.as_deref() == Some(MANAGE_FAMILY) {
        let users = state.users.list_users().await?;
        return Ok(HttpResponse::Ok().json(ManageView::new(&users, None)));
    }
    let id = parse_user_id("user", user.as_deref().unwrap_or_default())?;
    state.session.select(id);
    Ok(redirect_home())
}

/// Management page with an empty form.
#[utoipa::path(
    get,
    path = "/new",
    responses(
        (status = 200, description = "Family management page", body = ManageView),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "newUserPage"
)]
#[get("/new")]
pub async fn new_user_page(state: web::Data<HttpState>) -> ApiResult<web::Json<ManageView>> {
    let users = state.users.list_users().await?;
    Ok(web::Json(ManageView::new(&users, None)))
}

/// Create a user and make them current.
#[utoipa::path(
    post,
    path = "/new",
    request_body(content = UserForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "User created and selected; redirect to /"),
        (status = 200, description = "Management page with the duplicate-name message", body = ManageView),
        (status = 400, description = "Invalid name or colour", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/new")]
pub async fn create_user(
    state: web::Data<HttpState>,
    form: web::Form<UserForm>,
) -> ApiResult<HttpResponse> {
    let draft = parse_draft(form.into_inner())?;
    match recoverable(state.users.create_user(draft).await)? {
        Ok(user) => {
            state.session.select(user.id());
            Ok(redirect_home())
        }
        Err(error) => {
            let users = state.users.list_users().await?;
            Ok(HttpResponse::Ok().json(ManageView::new(&users, Some(error.message().to_owned()))))
        }
    }
}

/// Delete a user together with their visits.
#[utoipa::path(
    post,
    path = "/remove",
    request_body(content = UserIdForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "User removed; redirect to /"),
        (status = 400, description = "Malformed user id", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "removeUser"
)]
#[post("/remove")]
pub async fn remove_user(
    state: web::Data<HttpState>,
    form: web::Form<UserIdForm>,
) -> ApiResult<HttpResponse> {
    let id = parse_user_id("user", &form.user)?;
    state.users.delete_user(id).await?;
    Ok(redirect_home())
}

/// Edit form for one user; `user` is `null` when the id is unknown.
#[utoipa::path(
    post,
    path = "/edit",
    request_body(content = UserIdForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Edit form", body = EditView),
        (status = 400, description = "Malformed user id", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "editUserPage"
)]
#[post("/edit")]
pub async fn edit_user_page(
    state: web::Data<HttpState>,
    form: web::Form<UserIdForm>,
) -> ApiResult<web::Json<EditView>> {
    let id = parse_user_id("user", &form.user)?;
    let user = state.users.find_user(id).await?;
    Ok(web::Json(EditView::new(user.as_ref(), None)))
}

/// Rename or recolour a user.
#[utoipa::path(
    post,
    path = "/edit/{id}",
    params(("id" = i32, Path, description = "User to update")),
    request_body(content = UserForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "User updated; redirect to /"),
        (status = 200, description = "Edit form with the duplicate-name message", body = EditView),
        (status = 400, description = "Invalid id, name or colour", body = ErrorSchema),
        (status = 404, description = "Unknown user", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[post("/edit/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    form: web::Form<UserForm>,
) -> ApiResult<HttpResponse> {
    let id = parse_user_id("id", &path.into_inner())?;
    let draft = parse_draft(form.into_inner())?;
    match recoverable(state.users.update_user(id, draft).await)? {
        Ok(_) => Ok(redirect_home()),
        Err(error) => {
            let user = state.users.find_user(id).await?;
            Ok(HttpResponse::Ok().json(EditView::new(
                user.as_ref(),
                Some(error.message().to_owned()),
            )))
        }
    }
}
