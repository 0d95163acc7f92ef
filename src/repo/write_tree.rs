use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use tracing::*;
use walkdir::WalkDir;

use crate::blob::Blob;
use crate::digest::Digest;
use crate::filemode::FileMode;
use crate::storable::DatabaseObject;
use crate::tree::{Tree, TreeEntry};
use crate::Result;

use super::GIT_DIR;

impl super::Repo {
    /// Snapshot the whole working directory, returning the root tree's digest.
    pub fn write_tree(&self) -> Result<Digest> {
        self.build_tree(&self.dir)
    }

    /// Store every file under `dir` as a blob and every directory as a tree, children before
    /// parents, and return the digest of the tree for `dir` itself.
    ///
    /// The result depends only on what is on disk: entries are sorted byte-wise by name before
    /// encoding, whatever order the filesystem lists them in. Symbolic links are not followed;
    /// they are stored as blobs holding the link target. Anything that is not a file, directory
    /// or symlink (sockets, fifos) is skipped.
    pub fn build_tree(&self, dir: impl AsRef<Path>) -> Result<Digest> {
        let dir = dir.as_ref();
        trace!(?dir, "Building tree");

        let mut entries = Vec::new();

        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry?;
            let name = entry.file_name();
            if name == GIT_DIR {
                continue;
            }

            let file_type = entry.file_type();
            let (mode, oid) = if file_type.is_dir() {
                trace!(path=?entry.path(), "Recursing...");
                (FileMode::DIRECTORY, self.build_tree(entry.path())?)
            } else if file_type.is_symlink() {
                let target = std::fs::read_link(entry.path())?;
                let blob = Blob::new(target.as_os_str().as_bytes().to_vec());
                (FileMode::SYMLINK, self.store_blob(&blob)?)
            } else if file_type.is_file() {
                let mode = FileMode::from_metadata(&entry.metadata()?);
                let blob = Blob::new(std::fs::read(entry.path())?);
                (mode, self.store_blob(&blob)?)
            } else {
                debug!(path=?entry.path(), "Skipping special file");
                continue;
            };

            trace!(path=?entry.path(), %mode, ?oid, "Found entry");
            entries.push(TreeEntry::new(mode, name.as_bytes().to_vec(), oid));
        }

        entries.sort_unstable_by(|a, b| a.name().cmp(b.name()));

        let tree = DatabaseObject::new(&Tree::new(entries));
        self.database.store(&tree)?;
        debug!(?dir, oid=%tree.oid(), "Wrote tree");

        Ok(tree.into_oid())
    }

    fn store_blob(&self, blob: &Blob) -> Result<Digest> {
        let blob = DatabaseObject::new(blob);
        self.database.store(&blob)?;
        Ok(blob.into_oid())
    }
}
