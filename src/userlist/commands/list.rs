use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;
use std::path::Path;

/// Return the data file exactly as it is on disk, without decoding it.
pub fn run<S: DataStore>(store: &S, path: &Path) -> Result<CmdResult> {
    let bytes = store.load(path)?;
    Ok(CmdResult::default().with_output(bytes))
}
