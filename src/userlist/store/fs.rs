use super::DataStore;
use crate::error::{Result, UserlistError};
use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Read, Write};
use std::path::Path;
use tracing::debug;

#[cfg(unix)]
const FILE_MODE: u32 = 0o644;

#[derive(Debug, Default, Clone, Copy)]
pub struct FileStore;

impl FileStore {
    pub fn new() -> Self {
        Self
    }

    fn open_for_read(&self, path: &Path) -> std::io::Result<File> {
        match File::open(path) {
            Ok(file) => Ok(file),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "creating missing data file");
                create_options().read(true).write(true).open(path)
            }
            Err(e) => Err(e),
        }
    }
}

fn create_options() -> OpenOptions {
    let mut options = OpenOptions::new();
    options.create(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }
    options
}

impl DataStore for FileStore {
    fn load(&self, path: &Path) -> Result<Vec<u8>> {
        let mut file = self.open_for_read(path).map_err(UserlistError::Io)?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(UserlistError::Io)?;
        debug!(path = %path.display(), len = bytes.len(), "loaded data file");
        Ok(bytes)
    }

    fn store(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        let mut file = create_options()
            .write(true)
            .truncate(true)
            .open(path)
            .map_err(UserlistError::Io)?;
        file.write_all(bytes).map_err(UserlistError::Io)?;
        debug!(path = %path.display(), len = bytes.len(), "stored data file");
        Ok(())
    }
}
