//! Runtime abstraction for system operations.
//!
//! The client reads its token from the environment and writes downloaded
//! sounds to disk through this trait, so both can be mocked in tests.
//!
//! - `env` - Environment variables
//! - `fs` - File creation and removal

mod env;
mod fs;

use async_trait::async_trait;
use std::env as std_env;
use std::io;
use std::path::Path;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Runtime: Send + Sync {
    // Environment
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError>;

    // File System
    /// Create (or truncate) a file for writing.
    fn create_file(&self, path: &Path) -> io::Result<Box<dyn io::Write + Send>>;
    fn remove_file(&self, path: &Path) -> io::Result<()>;
    fn exists(&self, path: &Path) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RealRuntime;

#[async_trait]
impl Runtime for RealRuntime {
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError> {
        self.env_var_impl(key)
    }

    fn create_file(&self, path: &Path) -> io::Result<Box<dyn io::Write + Send>> {
        self.create_file_impl(path)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        self.remove_file_impl(path)
    }

    fn exists(&self, path: &Path) -> bool {
        self.exists_impl(path)
    }
}
