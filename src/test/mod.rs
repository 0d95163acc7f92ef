
use camino::Utf8Path;
use tempdir::TempDir;

use crate::commit::Signature;
use crate::repo::Repo;
use crate::timestamp::Timestamp;
use crate::Result;

pub const COMMIT_NAME: &str = "Your Name";
pub const COMMIT_EMAIL: &str = "your.email@example.com";

/// `printf 'hello world' | git hash-object --stdin`
pub const HELLO_WORLD_BLOB: &str = "95d09f2b10159347eece71399a7e2e907ea3df4f";
/// A tree holding only `100644 hello.txt` -> [`HELLO_WORLD_BLOB`]
pub const HELLO_TREE: &str = "e8c3bcec01ac3c2ea41249cdfc8c4493d9c29836";
pub const EMPTY_TREE: &str = "4b825dc642cb6eb9a060e54bf8d69288fbee4904";

/// Create each file (and its parent directories) under `$root`, with contents
/// `"<path>-contents\n"`.
#[macro_export]
macro_rules! create_test_files {
    ($root:expr, [$($path:literal),*]) => {{
        use std::io::Write;
        $({
            let path = $root.join($path);
            std::fs::create_dir_all(path.parent().unwrap())?;
            writeln!(
                std::fs::File::create(&path)?,
                concat!($path, "-contents")
            )?;
        })*
    }};
}

/// Initialise a repository in a fresh temporary directory. Keep the `TempDir` alive for as
/// long as the repo is used.
pub fn temp_repo() -> Result<(TempDir, Repo)> {
    let dir = TempDir::new("objstore")?;
    let path = Utf8Path::from_path(dir.path())
        .expect("tempdir should be utf-8")
        .to_owned();
    let repo = Repo::init(path)?;
    Ok((dir, repo))
}

pub fn fixed_signature() -> Signature {
    Signature::new(
        COMMIT_NAME,
        COMMIT_EMAIL,
        Timestamp::new(1700000000, 3600).expect("valid timestamp"),
    )
}
