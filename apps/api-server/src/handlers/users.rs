//! User handlers.

use actix_web::{HttpResponse, web};

use postboard_core::DomainError;
use postboard_core::domain::{User, parse_object_id};
use postboard_core::ports::BaseRepository;
use postboard_shared::dto::{CreateUserRequest, InsertResponse, UserResponse};

use super::{decode_or_default, single_segment};
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /users
pub async fn create_user(
    state: web::Data<AppState>,
    body: Result<web::Json<CreateUserRequest>, actix_web::Error>,
) -> AppResult<HttpResponse> {
    let CreateUserRequest {
        name,
        email,
        password,
    } = decode_or_default(body);

    // Argon2 is CPU-bound; keep it off the async workers.
    let passwords = state.passwords.clone();
    let password_hash = web::block(move || passwords.hash(&password))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let user = User::new(name, email, password_hash);
    let id = state.users.insert(user).await?;

    tracing::info!(user_id = %id, "User created");

    Ok(HttpResponse::Ok().json(InsertResponse {
        inserted_id: id.to_hex(),
    }))
}

/// GET /users/{id}
pub async fn get_user(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let tail = path.into_inner();
    let Some(raw_id) = single_segment(&tail) else {
        return Ok(HttpResponse::NotFound().finish());
    };
    let id = parse_object_id(raw_id)?;

    let user = state
        .users
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound {
            entity_type: "User",
            id,
        })?;

    Ok(HttpResponse::Ok().json(UserResponse {
        id: user.id.unwrap_or(id).to_hex(),
        name: user.name,
        email: user.email,
        password: user.password,
    }))
}
