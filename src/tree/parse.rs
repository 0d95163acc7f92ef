use memchr::memchr;

use crate::digest::{Digest, DIGEST_LEN};
use crate::error::{Error, Result};
use crate::filemode::FileMode;

use super::TreeEntry;

impl super::Tree {
    /// Parse a tree payload (the bytes after the `"tree <len>\0"` header).
    ///
    /// Entry boundaries come from the fixed digest width: after the null byte ending a name,
    /// exactly [`DIGEST_LEN`] bytes are consumed and the next entry starts immediately.
    pub fn parse(mut bytes: &[u8]) -> Result<Self> {
        let mut entries = Vec::new();

        while !bytes.is_empty() {
            let (entry, rest) = TreeEntry::parse(bytes)?;
            entries.push(entry);
            bytes = rest;
        }

        Ok(Self { entries })
    }
}

impl super::TreeEntry {
    /// Parses one entry of the form `<mode> <name>\0<oid>` from the front of `bytes`,
    /// returning it along with the unconsumed remainder.
    fn parse(bytes: &[u8]) -> Result<(Self, &[u8])> {
        let nul_idx = memchr(b'\0', bytes).ok_or_else(|| {
            Error::MalformedObject("tree entry name is not null-terminated".into())
        })?;
        let (header, rest) = (&bytes[..nul_idx], &bytes[nul_idx + 1..]);

        let space_idx = memchr(b' ', header).ok_or_else(|| {
            Error::MalformedObject(format!(
                "tree entry has no mode: '{}'",
                String::from_utf8_lossy(header)
            ))
        })?;
        let (mode_token, name) = (&header[..space_idx], &header[space_idx + 1..]);

        let mode = parse_mode(mode_token).ok_or_else(|| {
            Error::MalformedObject(format!(
                "invalid tree entry mode '{}'",
                String::from_utf8_lossy(mode_token)
            ))
        })?;

        if name.is_empty() {
            return Err(Error::MalformedObject("tree entry has an empty name".into()));
        }

        if rest.len() < DIGEST_LEN {
            return Err(Error::MalformedObject(format!(
                "tree entry '{}' ends after {} of {DIGEST_LEN} digest bytes",
                String::from_utf8_lossy(name),
                rest.len()
            )));
        }
        let (oid, rest) = rest.split_at(DIGEST_LEN);
        let oid = Digest::from_raw(oid)
            .ok_or_else(|| Error::MalformedObject("tree entry digest is truncated".into()))?;

        let entry = TreeEntry {
            mode,
            mode_token: mode_token.into(),
            name: name.into(),
            oid,
        };
        Ok((entry, rest))
    }
}

/// Mode tokens are one to six octal digits and nothing else.
fn parse_mode(token: &[u8]) -> Option<FileMode> {
    if token.is_empty() || token.len() > 6 || !token.iter().all(|b| matches!(b, b'0'..=b'7')) {
        return None;
    }
    let mode = token
        .iter()
        .fold(0u32, |acc, digit| acc * 8 + u32::from(digit - b'0'));
    Some(FileMode(mode))
}
