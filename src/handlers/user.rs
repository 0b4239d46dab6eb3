//! User handlers: list, read, create, delete.

use crate::error::AppError;
use crate::model::User;
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};

/// GET /users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = state.users.get_all().await?;
    Ok(Json(users))
}

/// GET /users/:id
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, AppError> {
    let user = state.users.get_by_id(&id).await?;
    Ok(Json(user))
}

/// POST /users — body is decoded whatever the Content-Type; redirects to the new resource.
pub async fn create_user(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let user: User = serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("invalid user body: {}", e)))?;
    if user.is_empty() {
        return Err(AppError::BadRequest("empty user".into()));
    }
    let id = state.users.create(user).await?;
    tracing::info!(id = %id, "user created");
    Ok(Redirect::to(&format!("/users/{}", id)))
}

/// DELETE /users/:id
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.users.get_by_id(&id).await?;
    state.users.delete(&user).await?;
    tracing::info!(id = %id, "user deleted");
    Ok(StatusCode::NO_CONTENT)
}
