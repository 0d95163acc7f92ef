use crate::blob::Blob;
use crate::commit::Commit;
use crate::compression;
use crate::digest::Digest;
use crate::error::{Error, Result};
use crate::framing::{self, ObjectKind};
use crate::storable::DatabaseObject;
use crate::tree::Tree;
use crate::util;

use std::io::ErrorKind;

use camino::{Utf8Path, Utf8PathBuf};
use tracing::*;

/// Derive the location of an object from its digest: `<root>/<2 hex chars>/<38 hex chars>`.
pub fn object_path(database_root: &Utf8Path, oid: &Digest) -> Utf8PathBuf {
    let oid = oid.to_hex();
    let (prefix, suffix) = oid.split_at(2);
    debug_assert_eq!(prefix.len(), 2);
    database_root.join(prefix).join(suffix)
}

pub struct Database {
    pub database_root: Utf8PathBuf,
}

impl Database {
    pub fn new(git_folder: impl AsRef<Utf8Path>) -> Self {
        Self {
            database_root: git_folder.as_ref().join("objects"),
        }
    }

    pub fn store(&self, obj: &DatabaseObject) -> Result<()> {
        trace!(oid=?obj.oid(), kind=%obj.kind(), "Writing object to database");
        self.write_object(obj.oid(), obj.formatted())
    }

    /// Hash, compress and persist already-framed bytes, returning their digest.
    ///
    /// Writing the same bytes twice is not an error; the second write is skipped.
    pub fn write(&self, framed: &[u8]) -> Result<Digest> {
        let oid = Digest::new(framed);
        self.write_object(&oid, framed)?;
        Ok(oid)
    }

    fn write_object(&self, oid: &Digest, content: &[u8]) -> Result<()> {
        let object_path = self.object_path(oid);

        if object_path.exists() {
            trace!(oid=?oid, "Object already present, skipping write");
            return Ok(());
        }

        // Everything that can fail without touching the disk happens first.
        let compressed_bytes = compression::compress(content)?;

        let dirname = self.shard_path(oid);
        std::fs::create_dir_all(&dirname)?;

        util::write_via_temp(&dirname, &object_path, &compressed_bytes)?;

        debug!(oid=%oid, bytes=content.len(), "Stored object");
        Ok(())
    }

    pub fn object_path(&self, oid: &Digest) -> Utf8PathBuf {
        object_path(&self.database_root, oid)
    }

    fn shard_path(&self, oid: &Digest) -> Utf8PathBuf {
        self.database_root.join(&oid.to_hex()[..2])
    }

    pub fn exists(&self, oid: &Digest) -> bool {
        self.object_path(oid).exists()
    }

    /// Read and decompress an object, returning its framed bytes.
    ///
    /// The result is checked against `oid`, so a damaged file cannot pass as a different object.
    pub fn read(&self, oid: &Digest) -> Result<Vec<u8>> {
        trace!(object=%oid.to_hex(), "Reading object from database");

        let object_path = self.object_path(oid);

        let compressed = match std::fs::read(&object_path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(Error::ObjectNotFound(*oid)),
            Err(e) => return Err(e.into()),
        };

        let decompressed = compression::decompress(&compressed).map_err(|e| {
            warn!(oid=%oid, path=%object_path, "Failed to decompress object");
            match e {
                Error::CorruptObject(reason) => Error::CorruptObject(format!("{oid:x}: {reason}")),
                e => e,
            }
        })?;

        if decompressed.is_empty() {
            return Err(Error::CorruptObject(format!("{oid:x}: object is empty")));
        }

        let actual = Digest::new(&decompressed);
        if actual != *oid {
            return Err(Error::CorruptObject(format!(
                "{oid:x}: contents hash to {actual:x}"
            )));
        }

        Ok(decompressed)
    }

    /// Read an object and split it into kind and payload. Bad frames in the store are
    /// corruption, not caller error.
    pub fn read_raw(&self, oid: &Digest) -> Result<(ObjectKind, Vec<u8>)> {
        let bytes = self.read(oid)?;
        let (kind, payload) = framing::unframe(&bytes).map_err(|e| match e {
            Error::MalformedObject(reason) => Error::CorruptObject(format!("{oid:x}: {reason}")),
            e => e,
        })?;
        Ok((kind, payload.to_vec()))
    }

    pub fn load(&self, oid: &Digest) -> Result<Object> {
        let (kind, payload) = self.read_raw(oid)?;

        let object = match kind {
            ObjectKind::Blob => Object::Blob(Blob::new(payload)),
            ObjectKind::Tree => Object::Tree(Tree::parse(&payload)?),
            ObjectKind::Commit => Object::Commit(Commit::parse(&payload)?),
        };
        Ok(object)
    }

    /// Load an object that must be a tree.
    pub fn load_tree(&self, oid: &Digest) -> Result<Tree> {
        match self.load(oid)? {
            Object::Tree(tree) => Ok(tree),
            other => Err(Error::TypeMismatch {
                expected: ObjectKind::Tree,
                found: other.kind(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Object {
    Commit(Commit),
    Tree(Tree),
    Blob(Blob),
}

impl Object {
    pub fn kind(&self) -> ObjectKind {
        match self {
            Object::Commit(_) => ObjectKind::Commit,
            Object::Tree(_) => ObjectKind::Tree,
            Object::Blob(_) => ObjectKind::Blob,
        }
    }

    pub fn into_commit(self) -> Option<Commit> {
        if let Self::Commit(v) = self {
            Some(v)
        } else {
            None
        }
    }

    pub fn into_blob(self) -> Option<Blob> {
        if let Self::Blob(v) = self {
            Some(v)
        } else {
            None
        }
    }

    pub fn as_blob(&self) -> Option<&Blob> {
        if let Self::Blob(v) = self {
            Some(v)
        } else {
            None
        }
    }
}
