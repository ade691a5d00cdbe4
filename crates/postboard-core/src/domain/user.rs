use bson::oid::ObjectId;

/// User entity - an account record.
///
/// `password` holds the salted hash once the user has been persisted;
/// plaintext never reaches a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl User {
    /// Create a user that has not been stored yet.
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        Self {
            id: None,
            name,
            email,
            password: password_hash,
        }
    }
}
