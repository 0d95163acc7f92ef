//! A content-addressed store for blob, tree and commit objects, laid out on disk the way git
//! lays out loose objects.

#[cfg(test)]
mod test;

pub mod blob;
pub mod commit;
pub mod compression;
pub mod digest;
pub mod error;
pub mod filemode;
pub mod framing;
pub mod repo;
pub mod storable;
pub mod timestamp;
pub mod tree;
mod util;

pub use crate::digest::Digest;
pub use crate::error::{Error, Result};
pub use crate::framing::ObjectKind;
pub use crate::repo::database::{Database, Object};
pub use crate::repo::Repo;
