use std::str::FromStr;

use memchr::memmem;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::digest::Digest;
use crate::error::{Error, Result};
use crate::timestamp::Timestamp;

use super::*;

fn malformed(what: impl Display) -> Error {
    Error::MalformedObject(format!("commit: {what}"))
}

impl Commit {
    /// Parse a decompressed commit payload.
    ///
    /// ## Example
    /// ```text
    /// tree 090c4c5dd61d2e84c832c4cd306b66bf2fabc1f5
    /// parent e6a49274aa0893ce2e2928589100387aee220c5b
    /// author Jamie Quigley <jamie@quigley.xyz> 1658312219 +0100
    /// committer Jamie Quigley <jamie@quigley.xyz> 1658312219 +0100
    ///
    /// Merge remote-tracking branch 'origin/renovate/clap-3.x' into develop
    /// ```
    ///
    /// Headers other than these four (e.g. `gpgsig`, with its indented continuation lines) are
    /// skipped.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let split = memmem::find(bytes, b"\n\n").ok_or_else(|| malformed("no blank line"))?;
        let headers = std::str::from_utf8(&bytes[..split]).map_err(malformed)?;
        let message = std::str::from_utf8(&bytes[split + 2..]).map_err(malformed)?;
        let message = message.strip_suffix('\n').unwrap_or(message).to_owned();

        let mut tree_id = None;
        let mut parents = Vec::new();
        let mut author = None;
        let mut committer = None;

        for line in headers.lines() {
            let (key, value) = line.split_once(' ').unwrap_or((line, ""));
            match key {
                "tree" => tree_id = Some(Digest::from_str(value).map_err(malformed)?),
                "parent" => parents.push(Digest::from_str(value).map_err(malformed)?),
                "author" => author = Some(Signature::parse(line)?),
                "committer" => committer = Some(Signature::parse(line)?),
                _ => trace!(%line, "Skipping commit header"),
            }
        }

        if message.is_empty() {
            return Err(Error::MissingMessage);
        }

        Ok(Self {
            tree_id: tree_id.ok_or_else(|| malformed("missing tree"))?,
            parents,
            author: author.ok_or_else(|| malformed("missing author"))?,
            committer: committer.ok_or_else(|| malformed("missing committer"))?,
            message,
        })
    }
}

impl Signature {
    /// Parse a signature line from a commit.
    ///
    /// ## Example
    /// `author Jamie Quigley <jamie@quigley.xyz> 1658312219 +0100`
    /// `committer Jamie Quigley <jamie@quigley.xyz> 1658312219 +0100`
    fn parse(line: &str) -> Result<Self> {
        static REGEX: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"^(?:author|committer) (.*) <([^>]*)> (\d+ [+-]\d{4})$")
                .expect("signature regex is valid")
        });

        let groups = REGEX
            .captures(line)
            .ok_or_else(|| malformed(format!("invalid signature line '{line}'")))?;

        Ok(Self {
            name: groups[1].to_owned(),
            email: groups[2].to_owned(),
            when: Timestamp::from_git(&groups[3])?,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_signature() {
        let input = "author Jamie Quigley <jamie@quigley.xyz> 1658312219 +0100";

        let signature = Signature::parse(input).unwrap();

        assert_eq!(signature.name, "Jamie Quigley");
        assert_eq!(signature.email, "jamie@quigley.xyz");
        assert_eq!(signature.when, Timestamp::new(1658312219, 3600).unwrap());
    }

    #[test]
    fn test_parse_commit() {
        let input = "tree 090c4c5dd61d2e84c832c4cd306b66bf2fabc1f5
parent e6a49274aa0893ce2e2928589100387aee220c5b
parent 14a9d8464caef987f3b5c3cf26f56db825459abd
author Jamie Quigley <jamie@quigley.xyz> 1658312219 +0100
committer Jamie Quigley <jamie@quigley.xyz> 1658312219 +0100
gpgsig -----BEGIN PGP SIGNATURE-----
 iQEzBAABCAAdFiEEMLv/P6sLuz4ENfg8jo/2biro2XAFAmLX1h0ACgkQjo/2biro
 =JO5C
 -----END PGP SIGNATURE-----

Merge remote-tracking branch 'origin/renovate/clap-3.x' into develop
";

        let commit = Commit::parse(input.as_bytes()).unwrap();
        assert_eq!(
            commit.tree_id,
            Digest::from_str("090c4c5dd61d2e84c832c4cd306b66bf2fabc1f5").unwrap()
        );
        assert_eq!(
            commit.parents,
            vec![
                Digest::from_str("e6a49274aa0893ce2e2928589100387aee220c5b").unwrap(),
                Digest::from_str("14a9d8464caef987f3b5c3cf26f56db825459abd").unwrap(),
            ]
        );
        assert_eq!(commit.author.name, "Jamie Quigley");
        assert_eq!(commit.committer.email, "jamie@quigley.xyz");
        assert_eq!(
            commit.message,
            "Merge remote-tracking branch 'origin/renovate/clap-3.x' into develop"
        );
    }

    #[test]
    fn test_parse_inverts_payload() {
        let author = Signature::new(
            "Your Name",
            "your.email@example.com",
            Timestamp::new(1700000000, -18000).unwrap(),
        );
        let commit = Commit::new(
            Digest([0xab; 20]),
            Some(Digest([0xcd; 20])),
            author,
            Some("subject\n\nbody line"),
        )
        .unwrap();

        assert_eq!(Commit::parse(&commit.payload()).unwrap(), commit);
    }

    #[test]
    fn test_parse_malformed() {
        let bad = [
            "tree 090c4c5dd61d2e84c832c4cd306b66bf2fabc1f5\n",
            "author A <a@b.c> 1 +0000\ncommitter A <a@b.c> 1 +0000\n\nmsg\n",
            "tree nothex\nauthor A <a@b.c> 1 +0000\ncommitter A <a@b.c> 1 +0000\n\nmsg\n",
            "tree 090c4c5dd61d2e84c832c4cd306b66bf2fabc1f5\nauthor A a@b.c 1\n\nmsg\n",
        ];
        for input in bad {
            assert!(
                matches!(Commit::parse(input.as_bytes()), Err(Error::MalformedObject(_))),
                "{input}"
            );
        }
    }
}
