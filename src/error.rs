use camino::Utf8PathBuf;

use crate::digest::Digest;
use crate::framing::ObjectKind;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested digest has no file in the object store.
    #[error("object not found: {0:x}")]
    ObjectNotFound(Digest),

    /// Stored bytes failed to decompress, or decompressed to something that is not a valid
    /// frame for the requested digest.
    #[error("corrupt object: {0}")]
    CorruptObject(String),

    /// Caller-supplied bytes lack a valid header, or a tree payload ends mid-entry.
    #[error("malformed object: {0}")]
    MalformedObject(String),

    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: ObjectKind,
        found: ObjectKind,
    },

    #[error("a commit requires a message")]
    MissingMessage,

    /// A signature name or email that would break the `name <email>` line it is written into.
    #[error("invalid signature: {0}")]
    InvalidSignature(String),

    #[error("not a repository: '{0}'")]
    NotARepository(Utf8PathBuf),

    #[error("invalid digest: {0}")]
    InvalidDigest(#[from] hex::FromHexError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    WalkDir(#[from] walkdir::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
