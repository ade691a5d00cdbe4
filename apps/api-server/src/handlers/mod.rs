//! HTTP handlers and route configuration.

mod health;
mod home;
mod posts;
mod users;

use actix_web::{HttpResponse, web};

/// Body of the fallback for a known path hit with the wrong method.
pub const METHOD_NOT_SUPPORTED: &str = "method is not supported";

/// Configure all application routes.
///
/// `/users/` and `/posts/` are prefixes: everything after them is handed to
/// the id handlers, which check the method first and the shape second.
/// `/posts/users/` is registered ahead of `/posts/`, so it wins for any path
/// under it. Whatever matches nothing gets the welcome page.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().content_type_required(false))
        .service(
            web::resource("/health")
                .route(web::get().to(health::health_check))
                .default_service(web::to(method_not_supported)),
        )
        .service(
            web::resource("/users")
                .route(web::post().to(users::create_user))
                .default_service(web::to(method_not_supported)),
        )
        .service(
            web::resource("/users/{tail:.*}")
                .route(web::get().to(users::get_user))
                .default_service(web::to(method_not_supported)),
        )
        .service(
            web::resource("/posts")
                .route(web::post().to(posts::create_post))
                .default_service(web::to(method_not_supported)),
        )
        .service(
            web::resource("/posts/users/{tail:.*}")
                .route(web::get().to(posts::list_posts))
                .default_service(web::to(method_not_supported)),
        )
        .service(
            web::resource("/posts/{tail:.*}")
                .route(web::get().to(posts::get_post))
                .default_service(web::to(method_not_supported)),
        )
        .default_service(web::to(home::welcome));
}

/// A body that fails to decode is treated as an empty one.
fn decode_or_default<T: Default>(body: Result<web::Json<T>, actix_web::Error>) -> T {
    match body {
        Ok(json) => json.into_inner(),
        Err(e) => {
            tracing::warn!(error = %e, "Request body not decoded, using empty fields");
            T::default()
        }
    }
}

/// The id from an id-route tail, or `None` when the path has extra segments.
fn single_segment(tail: &str) -> Option<&str> {
    if tail.contains('/') { None } else { Some(tail) }
}

async fn method_not_supported() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type("text/plain; charset=utf-8")
        .body(METHOD_NOT_SUPPORTED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_segment() {
        assert_eq!(single_segment("65a1f0c2e4b0a1b2c3d4e5f6"), Some("65a1f0c2e4b0a1b2c3d4e5f6"));
        assert_eq!(single_segment(""), Some(""));
        assert_eq!(single_segment("a/b"), None);
        assert_eq!(single_segment("abc/"), None);
    }
}
