use tracing::trace;

use crate::commit::{Commit, Signature};
use crate::digest::Digest;
use crate::error::{Error, Result};
use crate::framing::ObjectKind;
use crate::storable::DatabaseObject;

impl super::Repo {
    /// Record `tree_id` as a commit and return the commit's digest.
    ///
    /// The tree (and parent, if any) must already be in the store with the right kind.
    pub fn commit_tree(
        &self,
        tree_id: Digest,
        parent: Option<Digest>,
        message: Option<&str>,
        author: Signature,
    ) -> Result<Digest> {
        trace!(tree=%tree_id, ?parent, ?message, "Starting commit");

        let commit = Commit::new(tree_id, parent, author, message)?;

        self.expect_kind(&tree_id, ObjectKind::Tree)?;
        if let Some(parent) = &parent {
            self.expect_kind(parent, ObjectKind::Commit)?;
        }

        let commit = DatabaseObject::new(&commit);
        self.database.store(&commit)?;

        Ok(commit.into_oid())
    }

    fn expect_kind(&self, oid: &Digest, expected: ObjectKind) -> Result<()> {
        let (found, _) = self.database.read_raw(oid)?;
        if found != expected {
            return Err(Error::TypeMismatch { expected, found });
        }
        Ok(())
    }
}
