use std::fmt::Write;

use crate::framing::ObjectKind;
use crate::storable::Storable;

impl Storable for super::Commit {
    const KIND: ObjectKind = ObjectKind::Commit;

    fn payload(&self) -> Vec<u8> {
        let mut data = format!("tree {:x}\n", self.tree_id);
        for parent in &self.parents {
            // Writing to a String cannot fail
            let _ = writeln!(data, "parent {parent:x}");
        }
        let _ = write!(
            data,
            "author {}\ncommitter {}\n\n{}\n",
            self.author, self.committer, self.message
        );
        data.into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;

    use crate::commit::{Commit, Signature};
    use crate::digest::Digest;
    use crate::error::Error;
    use crate::storable::DatabaseObject;
    use crate::timestamp::Timestamp;

    use super::*;

    fn author() -> Signature {
        Signature::new(
            "Your Name",
            "your.email@example.com",
            Timestamp::new(1700000000, 3600).unwrap(),
        )
    }

    fn tree() -> Digest {
        Digest::from_str("e8c3bcec01ac3c2ea41249cdfc8c4493d9c29836").unwrap()
    }

    #[test]
    fn test_root_commit() {
        let commit = Commit::new(tree(), None, author(), Some("initial")).unwrap();

        assert_eq!(
            String::from_utf8(commit.payload()).unwrap(),
            "tree e8c3bcec01ac3c2ea41249cdfc8c4493d9c29836\n\
             author Your Name <your.email@example.com> 1700000000 +0100\n\
             committer Your Name <your.email@example.com> 1700000000 +0100\n\
             \n\
             initial\n"
        );

        let commit = DatabaseObject::new(&commit);
        assert!(commit.formatted().starts_with(b"commit 176\0tree "));
        assert_eq!(
            commit.oid().to_hex(),
            "fe3036fe1fcdb8758460039f4e9fe2245c3f1c39"
        );
    }

    #[test]
    fn test_commit_with_parent() {
        let parent = Digest::from_str("fe3036fe1fcdb8758460039f4e9fe2245c3f1c39").unwrap();
        let commit = Commit::new(tree(), Some(parent), author(), Some("second")).unwrap();
        let payload = String::from_utf8(commit.payload()).unwrap();

        let lines: Vec<_> = payload.lines().collect();
        assert_eq!(lines[0], "tree e8c3bcec01ac3c2ea41249cdfc8c4493d9c29836");
        assert_eq!(lines[1], "parent fe3036fe1fcdb8758460039f4e9fe2245c3f1c39");
        assert!(lines[2].starts_with("author "));
        assert!(lines[3].starts_with("committer "));
        assert_eq!(lines[4], "");
        assert_eq!(lines[5], "second");
    }

    #[test]
    fn test_missing_message() {
        assert!(matches!(
            Commit::new(tree(), None, author(), None),
            Err(Error::MissingMessage)
        ));
        assert!(matches!(
            Commit::new(tree(), None, author(), Some("")),
            Err(Error::MissingMessage)
        ));
    }

    #[test]
    fn test_invalid_signature() {
        let bad = [
            ("Your\nName", "your.email@example.com"),
            ("Your <Name>", "your.email@example.com"),
            ("Your Name", "your.email>@example.com"),
            ("Your Name", "<your.email@example.com"),
            ("Your Name", "your.email@example.com\n"),
        ];
        for (name, email) in bad {
            let author = Signature::new(name, email, Timestamp::new(1700000000, 3600).unwrap());
            assert!(
                matches!(
                    Commit::new(tree(), None, author, Some("initial")),
                    Err(Error::InvalidSignature(_))
                ),
                "{name:?} {email:?}"
            );
        }
    }
}
