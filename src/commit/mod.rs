mod parse;
mod write;

use std::fmt::Display;
use std::io::Write;

use crate::digest::Digest;
use crate::error::{Error, Result};
use crate::storable::Storable;
use crate::timestamp::Timestamp;

/// Who made a commit, and when.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub name: String,
    pub email: String,
    pub when: Timestamp,
}

impl Signature {
    pub fn new(name: impl Into<String>, email: impl Into<String>, when: Timestamp) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            when,
        }
    }

    pub fn now(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self::new(name, email, Timestamp::now())
    }

    /// Neither field may contain a newline or an angle bracket.
    fn validate(&self) -> Result<()> {
        let forbidden = |c: char| matches!(c, '\n' | '<' | '>');
        if self.name.contains(forbidden) {
            return Err(Error::InvalidSignature(format!("name {:?}", self.name)));
        }
        if self.email.contains(forbidden) {
            return Err(Error::InvalidSignature(format!("email {:?}", self.email)));
        }
        Ok(())
    }
}

impl Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <{}> {}", self.name, self.email, self.when)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    tree_id: Digest,
    parents: Vec<Digest>,
    author: Signature,
    committer: Signature,
    message: String,
}

impl Commit {
    /// The committer is the author. A commit without a message cannot be represented, so an
    /// absent or empty message is [`Error::MissingMessage`]. A signature that would not parse
    /// back is [`Error::InvalidSignature`].
    pub fn new(
        tree_id: Digest,
        parent: Option<Digest>,
        author: Signature,
        message: Option<&str>,
    ) -> Result<Self> {
        let message = match message {
            Some(message) if !message.is_empty() => message.to_owned(),
            _ => return Err(Error::MissingMessage),
        };
        author.validate()?;
        let committer = author.clone();

        Ok(Commit {
            tree_id,
            parents: parent.into_iter().collect(),
            author,
            committer,
            message,
        })
    }

    pub fn tree_id(&self) -> &Digest {
        &self.tree_id
    }

    pub fn parents(&self) -> &[Digest] {
        self.parents.as_ref()
    }

    pub fn author(&self) -> &Signature {
        &self.author
    }

    pub fn committer(&self) -> &Signature {
        &self.committer
    }

    pub fn message(&self) -> &str {
        self.message.as_ref()
    }

    pub fn pretty_print(&self, out: &mut impl Write) -> std::io::Result<()> {
        out.write_all(&self.payload())?;
        out.flush()
    }
}
