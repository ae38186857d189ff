use crate::codec;
use crate::commands::{CmdMessage, CmdResult};
use crate::config::UserlistConfig;
use crate::error::{Result, UserlistError};
use crate::model::User;
use crate::store::DataStore;
use std::path::Path;
use tracing::debug;

/// Append `user` unless a record with the same id already exists.
///
/// Only `id` is compared. Returns the rejected user when the id is taken.
pub fn append_unique(users: &mut Vec<User>, user: User) -> std::result::Result<(), User> {
    if users.iter().any(|existing| existing.id == user.id) {
        return Err(user);
    }
    users.push(user);
    Ok(())
}

pub fn run<S: DataStore>(
    store: &S,
    path: &Path,
    item: &str,
    config: &UserlistConfig,
) -> Result<CmdResult> {
    if item.is_empty() {
        return Err(UserlistError::usage("specify -item argument"));
    }

    let mut users = codec::decode(&store.load(path)?)?;
    let user = codec::decode_user(item.as_bytes())?;

    let mut result = CmdResult::default();
    match append_unique(&mut users, user.clone()) {
        Ok(()) => {
            store.store(path, &codec::encode(&users, config.pretty)?)?;
            debug!(id = %user.id, total = users.len(), "user added");
            result.affected_users.push(user);
        }
        Err(taken) => {
            result.add_message(CmdMessage::warning(format!(
                "id {} is already taken",
                taken.id
            )));
        }
    }

    Ok(result)
}
