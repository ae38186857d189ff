//! # Userlist Architecture
//!
//! Userlist keeps an ordered list of user records (`id`, `email`, `age`) in a
//! single JSON file and offers four operations on it: add, list, findById and
//! remove. Every call reads the whole file, works on it in memory and, for
//! mutating operations, writes the whole file back. Nothing survives between
//! invocations except the file itself.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses -flags, writes results to stdout                  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Validates the argument bag, routes on -operation         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + Codec (codec.rs)           │
//! │  - Linear scans over Vec<User>, returns CmdResult           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: whole-file load/store of raw bytes      │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Outcomes That Are Not Errors
//!
//! Adding a user whose id is taken, or removing an id that does not exist,
//! succeeds and leaves the file untouched; the command reports it through a
//! [`commands::CmdMessage`]. A findById miss succeeds silently.
//!
//! ## Limitations
//!
//! No locking and no atomic writes: concurrent runs against one file can lose
//! updates, and a crash during a write can truncate the file.
//!
//! ## Module Overview
//!
//! - [`api`]: Argument validation and dispatch
//! - [`commands`]: The four operations
//! - [`codec`]: JSON encoding of the collection
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The `User` record
//! - [`config`]: Configuration loading
//! - [`error`]: Error types

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
