mod parse;
mod write;

use std::io::Write;

use bstr::{BString, ByteSlice};

use crate::digest::Digest;
use crate::filemode::FileMode;
use crate::framing::ObjectKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    mode: FileMode,
    /// The mode exactly as it appears in the encoded entry. Git writes subtrees as `40000`, and
    /// re-encoding must not change that.
    mode_token: BString,
    name: BString,
    oid: Digest,
}

impl TreeEntry {
    pub fn new(mode: FileMode, name: impl Into<BString>, oid: Digest) -> Self {
        Self {
            mode,
            mode_token: mode.to_string().into(),
            name: name.into(),
            oid,
        }
    }

    pub fn mode(&self) -> FileMode {
        self.mode
    }

    pub fn mode_token(&self) -> &[u8] {
        self.mode_token.as_ref()
    }

    pub fn name(&self) -> &[u8] {
        self.name.as_ref()
    }

    pub fn oid(&self) -> &Digest {
        &self.oid
    }

    /// Subtrees are `040000`; every other mode (regular, executable, symlink) names a blob.
    pub fn is_tree(&self) -> bool {
        self.mode.is_tree()
    }

    pub fn kind(&self) -> ObjectKind {
        if self.is_tree() {
            ObjectKind::Tree
        } else {
            ObjectKind::Blob
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tree {
    entries: Vec<TreeEntry>,
}

impl Tree {
    /// Wrap already-ordered entries.
    ///
    /// Entries are encoded in the order given. Callers must sort them byte-wise by name first,
    /// otherwise the same directory can produce different digests.
    pub fn new(entries: Vec<TreeEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[TreeEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<TreeEntry> {
        self.entries
    }

    /// One line per entry, `<mode> <kind> <oid>\t<name>`, or just the names.
    pub fn pretty_print(&self, out: &mut impl Write, name_only: bool) -> std::io::Result<()> {
        for entry in &self.entries {
            if name_only {
                writeln!(out, "{}", entry.name.as_bstr())?;
            } else {
                writeln!(
                    out,
                    "{} {} {:x}\t{}",
                    entry.mode,
                    entry.kind(),
                    entry.oid,
                    entry.name.as_bstr()
                )?;
            }
        }
        out.flush()
    }
}
