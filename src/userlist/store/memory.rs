use super::DataStore;
use crate::error::Result;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// In-memory storage for testing and development.
/// Does NOT persist data.
///
/// Uses `RefCell` so `load` can register missing files through `&self`,
/// the same way the filesystem store creates them.
#[derive(Default)]
pub struct InMemoryStore {
    files: RefCell<HashMap<PathBuf, Vec<u8>>>,
    simulate_write_error: Cell<bool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Raw bytes of a file, or `None` if it was never loaded or stored.
    pub fn contents(&self, path: &Path) -> Option<Vec<u8>> {
        self.files.borrow().get(path).cloned()
    }

    pub fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }
}

impl DataStore for InMemoryStore {
    fn load(&self, path: &Path) -> Result<Vec<u8>> {
        let mut files = self.files.borrow_mut();
        Ok(files.entry(path.to_path_buf()).or_default().clone())
    }

    fn store(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(io::Error::other("Simulated write error").into());
        }
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), bytes.to_vec());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::codec;
    use crate::model::User;

    pub const FIXTURE_FILE: &str = "users.json";

    pub struct StoreFixture {
        pub store: InMemoryStore,
        pub path: PathBuf,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                path: PathBuf::from(FIXTURE_FILE),
            }
        }

        pub fn with_raw(self, bytes: &[u8]) -> Self {
            self.store.store(&self.path, bytes).unwrap();
            self
        }

        pub fn with_users(self, users: &[User]) -> Self {
            let bytes = codec::encode(users, false).unwrap();
            self.with_raw(&bytes)
        }

        pub fn with_numbered_users(self, count: usize) -> Self {
            let users: Vec<User> = (1..=count)
                .map(|i| User::new(i.to_string(), format!("user{}@example.com", i), 20 + i as i64))
                .collect();
            self.with_users(&users)
        }

        pub fn bytes(&self) -> Vec<u8> {
            self.store.contents(&self.path).unwrap_or_default()
        }

        pub fn users(&self) -> Vec<User> {
            codec::decode(&self.bytes()).unwrap()
        }
    }
}
