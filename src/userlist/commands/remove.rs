use crate::codec;
use crate::commands::{CmdMessage, CmdResult};
use crate::config::UserlistConfig;
use crate::error::{Result, UserlistError};
use crate::model::User;
use crate::store::DataStore;
use std::path::Path;
use tracing::debug;

/// Remove the first user whose id matches, keeping the others in order.
pub fn remove_by_id(users: &mut Vec<User>, id: &str) -> Option<User> {
    let position = users.iter().position(|user| user.id == id)?;
    Some(users.remove(position))
}

pub fn run<S: DataStore>(
    store: &S,
    path: &Path,
    id: &str,
    config: &UserlistConfig,
) -> Result<CmdResult> {
    if id.is_empty() {
        return Err(UserlistError::usage("specify -id argument"));
    }

    let mut users = codec::decode(&store.load(path)?)?;

    let mut result = CmdResult::default();
    match remove_by_id(&mut users, id) {
        Some(removed) => {
            store.store(path, &codec::encode(&users, config.pretty)?)?;
            debug!(id, remaining = users.len(), "user removed");
            result.affected_users.push(removed);
        }
        None => {
            result.add_message(CmdMessage::info(format!("Item with id {} not found", id)));
        }
    }

    Ok(result)
}
