//! Post handlers.

use actix_web::{HttpResponse, web};

use postboard_core::DomainError;
use postboard_core::domain::{Post, parse_object_id};
use postboard_core::ports::BaseRepository;
use postboard_shared::dto::{CreatePostRequest, InsertResponse, PostResponse};

use super::{decode_or_default, single_segment};
use crate::middleware::error::AppResult;
use crate::state::AppState;

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id.map(|id| id.to_hex()).unwrap_or_default(),
        caption: post.caption,
        url: post.url,
        created_date: post.created_date,
    }
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: Result<web::Json<CreatePostRequest>, actix_web::Error>,
) -> AppResult<HttpResponse> {
    let req = decode_or_default(body);

    let post = Post::new(req.caption, req.url);
    let id = state.posts.insert(post).await?;

    tracing::info!(post_id = %id, "Post created");

    Ok(HttpResponse::Ok().json(InsertResponse {
        inserted_id: id.to_hex(),
    }))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let tail = path.into_inner();
    let Some(raw_id) = single_segment(&tail) else {
        return Ok(HttpResponse::NotFound().finish());
    };
    let id = parse_object_id(raw_id)?;

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound {
            entity_type: "Post",
            id,
        })?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// GET /posts/users/
///
/// Anything after the prefix is ignored. Every post in store order. A failure anywhere discards the partial list.
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;

    let body: Vec<PostResponse> = posts.into_iter().map(to_response).collect();
    Ok(HttpResponse::Ok().json(body))
}
