//! Command-line client for userlist.
//!
//! ```text
//! userlist -operation add -fileName users.json -item '{"id":"1","email":"a@x.com","age":30}'
//! userlist -operation list -fileName users.json
//! userlist -operation findById -fileName users.json -id 1
//! userlist -operation remove -fileName users.json -id 1
//! ```
//!
//! - `setup`: Argument parsing via clap, single-dash flag normalization
//! - `commands`: Context setup and dispatch
//! - `render`: Writing results to the output sink

mod commands;
mod render;
pub mod setup;

pub use commands::run;
