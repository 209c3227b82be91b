//! File system operations used by downloads.

use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::Path;

use super::RealRuntime;

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) fn create_file_impl(&self, path: &Path) -> io::Result<Box<dyn io::Write + Send>> {
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn remove_file_impl(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn exists_impl(&self, path: &Path) -> bool {
        path.exists()
    }
}
