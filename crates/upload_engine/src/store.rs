use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::{EngineError, FailureKind};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{0} exists and is not a directory")]
    NotADirectory(PathBuf),
    #[error("cannot create {dir}: {source}")]
    CreateDir { dir: PathBuf, source: io::Error },
    #[error("cannot write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

impl StoreError {
    pub fn path(&self) -> &Path {
        match self {
            StoreError::NotADirectory(path) => path,
            StoreError::CreateDir { dir, .. } => dir,
            StoreError::Write { path, .. } => path,
        }
    }
}

impl From<StoreError> for EngineError {
    fn from(err: StoreError) -> Self {
        EngineError::new(
            FailureKind::Persist {
                path: err.path().to_path_buf(),
            },
            err.to_string(),
        )
    }
}

/// Directory that downloaded documents land in.
///
/// Each artifact is staged in a temp file beside its final name and renamed
/// over it, so an earlier copy stays intact until the new one is complete.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Creates the directory (and parents) unless it is already there.
    pub fn prepare(&self) -> Result<(), StoreError> {
        if self.dir.is_dir() {
            return Ok(());
        }
        if self.dir.exists() {
            return Err(StoreError::NotADirectory(self.dir.clone()));
        }
        fs::create_dir_all(&self.dir).map_err(|source| StoreError::CreateDir {
            dir: self.dir.clone(),
            source,
        })
    }

    pub fn save(&self, artifact_name: &str, content: &[u8]) -> Result<PathBuf, StoreError> {
        self.prepare()?;
        let target = self.dir.join(artifact_name);
        let write_err = |source| StoreError::Write {
            path: target.clone(),
            source,
        };

        let mut staged = NamedTempFile::new_in(&self.dir).map_err(write_err)?;
        staged.write_all(content).map_err(write_err)?;
        staged.as_file_mut().sync_all().map_err(write_err)?;
        staged
            .persist(&target)
            .map_err(|err| write_err(err.error))?;
        Ok(target)
    }
}
