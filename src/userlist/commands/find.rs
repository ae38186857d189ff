use crate::codec;
use crate::commands::CmdResult;
use crate::error::{Result, UserlistError};
use crate::model::User;
use crate::store::DataStore;
use std::path::Path;

/// First user whose id matches exactly.
pub fn find_by_id<'a>(users: &'a [User], id: &str) -> Option<&'a User> {
    users.iter().find(|user| user.id == id)
}

/// Emit the matching user as a JSON object. A miss is silent.
pub fn run<S: DataStore>(store: &S, path: &Path, id: &str) -> Result<CmdResult> {
    if id.is_empty() {
        return Err(UserlistError::usage("specify -id argument"));
    }

    let users = codec::decode(&store.load(path)?)?;
    match find_by_id(&users, id) {
        Some(user) => Ok(CmdResult::default()
            .with_output(codec::encode_user(user)?)
            .with_affected_users(vec![user.clone()])),
        None => Ok(CmdResult::default()),
    }
}
