use std::fs::Metadata;
use std::os::unix::fs::PermissionsExt;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(transparent)]
pub struct FileMode(pub u32);

impl std::fmt::Display for FileMode {
    /// The six-digit token written into tree entries, e.g. `040000` or `100644`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:06o}", self.0)
    }
}

impl FileMode {
    pub const DIRECTORY: FileMode = FileMode(0o040000);
    pub const EXECUTABLE: FileMode = FileMode(0o100755);
    pub const REGULAR: FileMode = FileMode(0o100644);
    pub const SYMLINK: FileMode = FileMode(0o120000);

    /// Mode for a regular file. Only the owner-execute bit is significant.
    pub fn from_metadata(metadata: &Metadata) -> Self {
        if Self(metadata.permissions().mode()).is_executable() {
            Self::EXECUTABLE
        } else {
            Self::REGULAR
        }
    }

    pub fn is_executable(self) -> bool {
        self.0 & libc::S_IXUSR as u32 != 0
    }

    pub fn is_tree(self) -> bool {
        self == Self::DIRECTORY
    }
}
