//! The `"<kind> <len>\0<payload>"` envelope shared by every object kind.

use std::fmt::Display;
use std::str::FromStr;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Blob,
    Tree,
    Commit,
}

impl ObjectKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ObjectKind::Blob => "blob",
            ObjectKind::Tree => "tree",
            ObjectKind::Commit => "commit",
        }
    }

    fn from_bytes(token: &[u8]) -> Option<Self> {
        match token {
            b"blob" => Some(ObjectKind::Blob),
            b"tree" => Some(ObjectKind::Tree),
            b"commit" => Some(ObjectKind::Commit),
            _ => None,
        }
    }
}

impl Display for ObjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_bytes(s.as_bytes())
            .ok_or_else(|| Error::MalformedObject(format!("unknown object kind '{s}'")))
    }
}

/// Wrap `payload` in its header. The length is that of the payload, not of the framed output.
pub fn frame(kind: ObjectKind, payload: &[u8]) -> Vec<u8> {
    let mut formatted = Vec::with_capacity(payload.len() + 16);
    formatted.extend_from_slice(kind.as_str().as_bytes());
    formatted.push(b' ');
    formatted.extend_from_slice(payload.len().to_string().as_bytes());
    formatted.push(b'\0');
    formatted.extend_from_slice(payload);
    formatted
}

/// Split framed bytes into their kind and payload.
pub fn unframe(bytes: &[u8]) -> Result<(ObjectKind, &[u8])> {
    let nul_idx = memchr::memchr(b'\0', bytes)
        .ok_or_else(|| Error::MalformedObject("object header is not null-terminated".into()))?;
    let (header, payload) = (&bytes[..nul_idx], &bytes[nul_idx + 1..]);

    let space_idx = memchr::memchr(b' ', header).ok_or_else(|| {
        Error::MalformedObject(format!(
            "object header has no length: '{}'",
            String::from_utf8_lossy(header)
        ))
    })?;
    let (kind, len) = (&header[..space_idx], &header[space_idx + 1..]);

    let kind = ObjectKind::from_bytes(kind).ok_or_else(|| {
        Error::MalformedObject(format!(
            "unknown object kind '{}'",
            String::from_utf8_lossy(kind)
        ))
    })?;

    let len: usize = std::str::from_utf8(len)
        .ok()
        .filter(|len| !len.is_empty() && len.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|len| len.parse().ok())
        .ok_or_else(|| {
            Error::MalformedObject(format!(
                "invalid object length '{}'",
                String::from_utf8_lossy(len)
            ))
        })?;

    if len != payload.len() {
        return Err(Error::MalformedObject(format!(
            "{kind} header declares {len} bytes but payload has {}",
            payload.len()
        )));
    }

    Ok((kind, payload))
}
