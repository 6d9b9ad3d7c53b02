use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use super::error::FilesystemError;
use super::tree::FileSystem;

/// Cloneable handle to one [`FileSystem`] guarded by a single lock.
///
/// Each call holds the lock for the whole operation. Reads return owned values
/// because the guard cannot outlive the call.
#[derive(Debug, Clone, Default)]
pub struct SharedFileSystem {
    inner: Arc<Mutex<FileSystem>>,
}

impl SharedFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ls(&self, path: impl AsRef<str>) -> Result<Vec<String>, FilesystemError> {
        self.lock().ls(path)
    }

    pub fn mkdir(&self, path: impl AsRef<str>) -> Result<(), FilesystemError> {
        self.lock().mkdir(path)
    }

    pub fn add_content_to_file(
        &self,
        path: impl AsRef<str>,
        content: impl AsRef<str>,
    ) -> Result<(), FilesystemError> {
        self.lock().add_content_to_file(path, content)
    }

    pub fn read_content_from_file(&self, path: impl AsRef<str>) -> Result<String, FilesystemError> {
        self.lock().read_content_from_file(path).map(str::to_string)
    }

    /// Runs `f` with exclusive access to the underlying store.
    pub fn with<R>(&self, f: impl FnOnce(&mut FileSystem) -> R) -> R {
        f(&mut self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, FileSystem> {
        self.inner.lock()
    }
}

impl From<FileSystem> for SharedFileSystem {
    fn from(filesystem: FileSystem) -> Self {
        Self {
            inner: Arc::new(Mutex::new(filesystem)),
        }
    }
}
