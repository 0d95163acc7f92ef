use crate::digest::Digest;
use crate::framing::{self, ObjectKind};

pub trait Storable {
    const KIND: ObjectKind;

    /// The object body, without the `"{type} {len}\0"` header.
    fn payload(&self) -> Vec<u8>;

    /// Returns the storable uncompressed but formatted `"{type} {len}\0{data}"`.
    /// e.g.
    /// a blob `"hello\n"` becomes `"blob 6\0hello\n"`
    fn format(&self) -> Vec<u8> {
        framing::frame(Self::KIND, &self.payload())
    }
}

/// A storable that has been formatted and hashed, ready to be written to the database.
pub struct DatabaseObject {
    kind: ObjectKind,
    formatted: Vec<u8>,
    oid: Digest,
}

impl DatabaseObject {
    pub fn new<T: Storable>(obj: &T) -> Self {
        let formatted = obj.format();
        let oid = Digest::new(&formatted);
        Self {
            kind: T::KIND,
            formatted,
            oid,
        }
    }

    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    pub fn formatted(&self) -> &[u8] {
        &self.formatted
    }

    pub fn oid(&self) -> &Digest {
        &self.oid
    }

    pub fn into_oid(self) -> Digest {
        self.oid
    }
}
