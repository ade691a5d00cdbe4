//! Password hashing implementation.

mod password;

pub use password::{Argon2PasswordService, HashingConfig};
