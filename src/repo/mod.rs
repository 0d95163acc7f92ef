mod commit;
pub mod database;
mod write_tree;

use camino::{Utf8Path, Utf8PathBuf};
use tracing::*;

use database::Database;

use crate::blob::Blob;
use crate::digest::Digest;
use crate::error::{Error, Result};
use crate::storable::DatabaseObject;
use crate::tree::Tree;

/// Name of the metadata directory at the root of a working directory.
pub const GIT_DIR: &str = ".git";

const INITIAL_HEAD: &str = "ref: refs/heads/master\n";

/// A working directory and the object store inside its metadata directory.
///
/// Every path the repository touches is derived from `dir`; nothing is read from the
/// process's current directory.
pub struct Repo {
    dir: Utf8PathBuf,
    git_dir: Utf8PathBuf,
    pub database: Database,
}

impl Repo {
    fn new(dir: Utf8PathBuf) -> Self {
        let git_dir = dir.join(GIT_DIR);
        let database = Database::new(&git_dir);
        trace!(path=?dir, "Opened repo");
        Self {
            dir,
            git_dir,
            database,
        }
    }

    /// Create the metadata directory layout under `dir` and open the result.
    ///
    /// Running this on an existing repository recreates any missing directories but leaves an
    /// existing HEAD alone.
    pub fn init(dir: impl AsRef<Utf8Path>) -> Result<Self> {
        let repo = Self::new(dir.as_ref().to_owned());
        trace!(path=?repo.dir, "Initialising repo");

        if repo.git_dir.exists() {
            warn!(path=?repo.git_dir, "Repo already exists, reinitialising");
        }

        for d in ["objects", "refs"] {
            let dir = repo.git_dir.join(d);
            trace!(path=?dir, "Creating directory");
            std::fs::create_dir_all(dir)?;
        }

        let head_path = repo.git_dir.join("HEAD");
        if !head_path.exists() {
            std::fs::write(&head_path, INITIAL_HEAD)?;
        }

        Ok(repo)
    }

    pub fn open(dir: impl AsRef<Utf8Path>) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.join(GIT_DIR).is_dir() {
            return Err(Error::NotARepository(dir.to_owned()));
        }
        Ok(Self::new(dir.to_owned()))
    }

    pub fn dir(&self) -> &Utf8Path {
        &self.dir
    }

    pub fn git_dir(&self) -> &Utf8Path {
        &self.git_dir
    }

    /// Digest `data` as a blob, persisting it only if `write` is set.
    pub fn hash_object(&self, data: Vec<u8>, write: bool) -> Result<Digest> {
        let blob = DatabaseObject::new(&Blob::new(data));
        if write {
            self.database.store(&blob)?;
        }
        Ok(blob.into_oid())
    }

    pub fn ls_tree(&self, oid: &Digest) -> Result<Tree> {
        self.database.load_tree(oid)
    }
}
