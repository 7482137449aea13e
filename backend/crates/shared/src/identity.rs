//! Caller Identity
//!
//! The verified identity of the caller of a mutating request.
//! Derived by the auth gate from a bearer token plus one credential-store
//! read; valid only for the lifetime of a single request.

use uuid::Uuid;

/// Identity attached to a request after successful authentication.
///
/// Domain operations take `username` from here, never from the request
/// body - client-supplied identity fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIdentity {
    /// Internal user id (subject of the verified token)
    pub user_id: Uuid,
    /// Username as stored in the credential store
    pub username: String,
    /// Email as stored in the credential store
    pub email: String,
}
