//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for all userlist operations, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Validates** the argument bag (operation and file name are required)
//! - **Dispatches** to the matching command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! Validation happens before any storage call, so a usage error never
//! touches the data file.
//!
//! ## Generic Over DataStore
//!
//! `UserlistApi<S: DataStore>` is generic over the storage backend:
//! - Production: `UserlistApi<FileStore>`
//! - Testing: `UserlistApi<InMemoryStore>`

use crate::commands;
use crate::config::UserlistConfig;
use crate::error::{Result, UserlistError};
use crate::store::DataStore;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// The four operations selectable with `-operation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    List,
    FindById,
    Remove,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::List => "list",
            Operation::FindById => "findById",
            Operation::Remove => "remove",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = UserlistError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "add" => Ok(Operation::Add),
            "list" => Ok(Operation::List),
            "findById" => Ok(Operation::FindById),
            "remove" => Ok(Operation::Remove),
            other => Err(UserlistError::usage(format!("Invalid operation: {}", other))),
        }
    }
}

/// The argument bag handed to [`UserlistApi::perform`].
///
/// Empty strings count as absent, matching flags left at their default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments {
    pub operation: Option<String>,
    pub file_name: Option<String>,
    pub id: Option<String>,
    pub item: Option<String>,
}

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn operation(mut self, value: impl Into<String>) -> Self {
        self.operation = non_empty(value.into());
        self
    }

    pub fn file_name(mut self, value: impl Into<String>) -> Self {
        self.file_name = non_empty(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = non_empty(value.into());
        self
    }

    pub fn item(mut self, value: impl Into<String>) -> Self {
        self.item = non_empty(value.into());
        self
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn required<'a>(value: &'a Option<String>, flag: &str) -> Result<&'a str> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(UserlistError::usage(format!("specify -{} argument", flag))),
    }
}

/// The main API facade for userlist operations.
pub struct UserlistApi<S: DataStore> {
    store: S,
    config: UserlistConfig,
}

impl<S: DataStore> UserlistApi<S> {
    pub fn new(store: S, config: UserlistConfig) -> Self {
        Self { store, config }
    }

    /// Validate `args` and run the selected operation.
    pub fn perform(&self, args: &Arguments) -> Result<commands::CmdResult> {
        let operation = required(&args.operation, "operation")?;
        let file_name = required(&args.file_name, "fileName")?;
        let operation: Operation = operation.parse()?;
        let path = Path::new(file_name);
        debug!(%operation, path = %path.display(), "dispatching");

        let id = args.id.as_deref().unwrap_or_default();
        match operation {
            Operation::Add => {
                let item = args.item.as_deref().unwrap_or_default();
                self.add(path, item)
            }
            Operation::List => self.list(path),
            Operation::FindById => self.find_by_id(path, id),
            Operation::Remove => self.remove(path, id),
        }
    }

    pub fn add(&self, path: &Path, item: &str) -> Result<commands::CmdResult> {
        commands::add::run(&self.store, path, item, &self.config)
    }

    pub fn list(&self, path: &Path) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, path)
    }

    pub fn find_by_id(&self, path: &Path, id: &str) -> Result<commands::CmdResult> {
        commands::find::run(&self.store, path, id)
    }

    pub fn remove(&self, path: &Path, id: &str) -> Result<commands::CmdResult> {
        commands::remove::run(&self.store, path, id, &self.config)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
