use std::{
    fmt::{Debug, Display, LowerHex},
    ops::Deref,
    str::FromStr,
};

use hex::FromHexError;
use sha1::{Digest as _, Sha1};

/// Width in bytes of a raw digest, as packed into tree entries.
pub const DIGEST_LEN: usize = 20;

#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Digest(pub [u8; DIGEST_LEN]);

impl Digest {
    /// Hash the input bytes and return the resulting digest.
    ///
    /// Object identity is defined over the *uncompressed* framed bytes, so this must be called
    /// before anything is handed to the compressor.
    pub fn new(bytes: &[u8]) -> Self {
        let fin = Sha1::digest(bytes);
        let mut out = [0; DIGEST_LEN];
        out.copy_from_slice(&fin);
        Self(out)
    }

    /// Build a digest from the raw 20 bytes found inside a tree entry.
    ///
    /// Returns `None` if `bytes` is not exactly [`DIGEST_LEN`] long.
    pub fn from_raw(bytes: &[u8]) -> Option<Self> {
        bytes.try_into().ok().map(Self)
    }

    /// Format the digest as a lowercase hex string.
    ///
    /// Identical to `format!("{:x}", self)`.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl Deref for Digest {
    type Target = [u8; DIGEST_LEN];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl LowerHex for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Debug for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

impl FromStr for Digest {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        let bytes = hex::decode(s)?;
        Self::from_raw(&bytes).ok_or(FromHexError::InvalidStringLength)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha1() {
        const HASH_INPUT: &[u8] = b"Hello, World!";

        // `printf 'Hello, World!' | sha1sum` => 0a0a9f2a6772942557ab5355d76af442f8f65e01
        const HASH_OUTPUT: [u8; 20] = [
            0x0a, 0x0a, 0x9f, 0x2a, 0x67, 0x72, 0x94, 0x25, 0x57, 0xab, 0x53, 0x55, 0xd7, 0x6a,
            0xf4, 0x42, 0xf8, 0xf6, 0x5e, 0x01,
        ];

        let actual = Digest::new(HASH_INPUT);
        assert_eq!(actual.0, HASH_OUTPUT);
    }

    #[test]
    /// `printf 'hello world' | git hash-object --stdin`
    fn test_known_blob_digest() {
        let digest = Digest::new(b"blob 11\0hello world");
        assert_eq!(digest.to_hex(), "95d09f2b10159347eece71399a7e2e907ea3df4f");
        assert_eq!(digest.to_hex().len(), 40);
        assert_eq!(digest, Digest::new(b"blob 11\0hello world"));
    }

    #[test]
    fn test_hex_is_lowercase() {
        let digest = Digest::from_str("0A0A9F2A6772942557AB5355D76AF442F8F65E01").unwrap();
        assert_eq!(format!("{digest:x}"), "0a0a9f2a6772942557ab5355d76af442f8f65e01");
        assert_eq!(digest.to_string(), digest.to_hex());
    }

    #[test]
    fn test_from_str() {
        let valid = [
            "0a0a9f2a6772942557ab5355d76af442f8f65e01",
            "0A0A9F2A6772942557AB5355D76AF442F8F65E01",
            "0a0a9f2a6772942557ab5355D76AF442F8F65E01",
        ];

        for string in valid {
            let _ = Digest::from_str(string).unwrap();
        }

        let invalid = [
            "hello world",
            "0j0a9f2a6772942557ab5355d76af442f8f65e01",
            "🦀",
            "0a0a9f2a6772942557ab5355d76af442f8f65e01 ",
            " 0a0a9f2a6772942557ab5355d76af442f8f65e01",
            "0a0a9f2a6772942557ab5355d76af442f8f65e01\n",
            "0a0a9f2a6772942557ab5355d76af442f8f65e01\0",
            "0a0a9f2a6772942\x0057ab5355d76af442f8f65e01",
            "0a0a9f2a67729425",
            "",
        ];

        for string in invalid {
            let _ = Digest::from_str(string).unwrap_err();
        }
    }

    #[test]
    fn test_from_raw() {
        assert!(Digest::from_raw(&[0; 19]).is_none());
        assert!(Digest::from_raw(&[0; 21]).is_none());
        assert_eq!(Digest::from_raw(&[7; 20]), Some(Digest([7; 20])));
    }
}
