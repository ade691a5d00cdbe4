//! BSON document layouts for the `users` and `posts` collections.

pub mod post;
pub mod user;

pub use post::PostDocument;
pub use user::UserDocument;
