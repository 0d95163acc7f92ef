mod cat_file;
mod interface;

use camino::Utf8PathBuf;
use color_eyre::eyre::{eyre, Context};
pub use color_eyre::Result;

use objstore::commit::Signature;
use objstore::Repo;

use crate::interface::*;

use clap::Parser;
use once_cell::sync::Lazy;
use tracing_subscriber::prelude::*;

static ARGS: Lazy<Opt> = Lazy::new(Opt::parse);

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    Lazy::force(&ARGS);

    let path = match ARGS.path {
        Some(ref path) => path
            .canonicalize()
            .wrap_err(format!("Directory not found: '{}'", path))?,
        None => std::env::current_dir()?.canonicalize()?,
    };
    let path = Utf8PathBuf::from_path_buf(path)
        .map_err(|path| eyre!("Path is not valid unicode: '{}'", path.display()))?;

    if matches!(ARGS.command, Command::Init) {
        let repo = Repo::init(&path)?;
        println!("Initialized git directory in {}", repo.git_dir());
        return Ok(());
    }

    let repo = Repo::open(&path)?;

    match &ARGS.command {
        Command::Init => unreachable!(),
        Command::CatFile(args) => cat_file::handle(&repo, args)?,
        Command::HashObject { write, path } => {
            let data =
                std::fs::read(path).wrap_err(format!("Could not read '{}'", path))?;
            println!("{:x}", repo.hash_object(data, *write)?);
        }
        Command::LsTree { name_only, tree } => {
            let tree = repo.ls_tree(tree)?;
            tree.pretty_print(&mut std::io::stdout().lock(), *name_only)?;
        }
        Command::WriteTree => {
            println!("{:x}", repo.write_tree()?);
        }
        Command::CommitTree {
            tree,
            parent,
            message,
            author_name,
            author_email,
        } => {
            let author = Signature::now(author_name, author_email);
            let commit_id = repo.commit_tree(*tree, *parent, message.as_deref(), author)?;
            println!("{:x}", commit_id);
        }
    }
    Ok(())
}
