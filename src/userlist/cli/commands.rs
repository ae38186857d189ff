//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Installs the log subscriber
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Go-style `-flag value` arguments into [`Arguments`]
//! 2. **Context Setup**: load configuration, build the `UserlistApi`
//! 3. **API Dispatch**: a single `perform` call
//! 4. **Output**: write the `CmdResult` to stdout

use super::render::write_result;
use super::setup::Cli;
use std::io;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;
use userlist::api::{Arguments, UserlistApi};
use userlist::config::{config_dir, UserlistConfig};
use userlist::error::Result;
use userlist::store::fs::FileStore;

const LOG_ENV: &str = "USERLIST_LOG";

struct AppContext {
    api: UserlistApi<FileStore>,
    args: Arguments,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse_normalized();
    init_logging(cli.verbose);

    let ctx = init_context(&cli);
    let result = ctx.api.perform(&ctx.args)?;

    let stdout = io::stdout();
    write_result(&mut stdout.lock(), &result)?;
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("userlist={}", default_level)));

    // Logs share the terminal with the output sink, so keep them off stdout.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context(cli: &Cli) -> AppContext {
    let config = match config_dir() {
        Some(dir) => UserlistConfig::load(&dir).unwrap_or_else(|e| {
            warn!(error = %e, "ignoring unreadable config");
            UserlistConfig::default()
        }),
        None => UserlistConfig::default(),
    };
    debug!(?config, "loaded config");

    AppContext {
        api: UserlistApi::new(FileStore::new(), config),
        args: cli.arguments(),
    }
}
