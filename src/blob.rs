use std::io::Write;

use crate::error::{Error, Result};
use crate::framing::{self, ObjectKind};
use crate::storable::Storable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    data: Vec<u8>,
}

impl Storable for Blob {
    const KIND: ObjectKind = ObjectKind::Blob;

    fn payload(&self) -> Vec<u8> {
        self.data.clone()
    }

    fn format(&self) -> Vec<u8> {
        framing::frame(Self::KIND, &self.data)
    }
}

impl Blob {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Recover a blob from framed bytes, failing if the header names another kind.
    pub fn decode(framed: &[u8]) -> Result<Self> {
        match framing::unframe(framed)? {
            (ObjectKind::Blob, payload) => Ok(Self::new(payload.to_vec())),
            (found, _) => Err(Error::TypeMismatch {
                expected: ObjectKind::Blob,
                found,
            }),
        }
    }

    pub fn data(&self) -> &[u8] {
        self.data.as_ref()
    }

    /// Pretty-printing a blob is simple - just dump the contents of the file
    pub fn pretty_print(&self, out: &mut impl Write) -> std::io::Result<()> {
        out.write_all(&self.data)?;
        out.flush()
    }
}
