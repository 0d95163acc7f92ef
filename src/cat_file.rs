use std::io::Write;
use std::process::exit;

use objstore::{Object, Repo};

use crate::interface::CatFile;
use crate::Result;

pub fn handle(repo: &Repo, args: &CatFile) -> Result<()> {
    let mut stdout = std::io::stdout().lock();

    match args {
        CatFile::Exists { object } => {
            if !repo.database.exists(object) {
                eprintln!("Object does not exist: {:x}", object);
                exit(1);
            }
            if let Err(e) = repo.database.load(object) {
                eprintln!("Object is corrupt: {:x}: {e}", object);
                exit(1);
            }
        }
        CatFile::PrettyPrint { object } => match repo.database.load(object)? {
            Object::Blob(blob) => blob.pretty_print(&mut stdout)?,
            Object::Commit(commit) => commit.pretty_print(&mut stdout)?,
            Object::Tree(tree) => tree.pretty_print(&mut stdout, false)?,
        },
        CatFile::Type { object } => {
            let (kind, _) = repo.database.read_raw(object)?;
            writeln!(stdout, "{kind}")?;
        }
        CatFile::Size { object } => {
            let (_, payload) = repo.database.read_raw(object)?;
            writeln!(stdout, "{}", payload.len())?;
        }
    }

    Ok(())
}
