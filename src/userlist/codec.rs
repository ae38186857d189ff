//! JSON encoding of the user collection.
//!
//! The collection is stored as a single JSON array. An empty file is a valid,
//! empty collection; anything else must parse as an array of user objects.

use crate::error::{Result, UserlistError};
use crate::model::User;

/// Decode a stored collection. Empty input decodes to an empty collection.
pub fn decode(bytes: &[u8]) -> Result<Vec<User>> {
    if bytes.is_empty() {
        return Ok(Vec::new());
    }
    let users: Option<Vec<User>> = serde_json::from_slice(bytes).map_err(UserlistError::Parse)?;
    Ok(users.unwrap_or_default())
}

/// Encode the whole collection, optionally pretty-printed.
pub fn encode(users: &[User], pretty: bool) -> Result<Vec<u8>> {
    let encoded = if pretty {
        serde_json::to_vec_pretty(users)
    } else {
        serde_json::to_vec(users)
    };
    encoded.map_err(UserlistError::Encode)
}

/// Decode a single user object, as passed on the command line.
pub fn decode_user(bytes: &[u8]) -> Result<User> {
    serde_json::from_slice(bytes).map_err(UserlistError::Parse)
}

/// Encode a single user as a compact JSON object.
pub fn encode_user(user: &User) -> Result<Vec<u8>> {
    serde_json::to_vec(user).map_err(UserlistError::Encode)
}
