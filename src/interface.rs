use camino::Utf8PathBuf;
use clap::Parser;
use clap::Subcommand;

use objstore::Digest;

#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    /// Create an empty repository
    Init,

    #[clap(subcommand)]
    CatFile(CatFile),

    /// Compute the digest of a file as a blob, optionally writing it to the store
    HashObject {
        /// Actually write the object into the store
        #[clap(short)]
        write: bool,

        #[clap(value_name = "file")]
        path: Utf8PathBuf,
    },

    /// List the entries of a tree object
    LsTree {
        /// List only file names
        #[clap(long)]
        name_only: bool,

        #[clap(value_name = "tree-ish")]
        tree: Digest,
    },

    /// Store the working directory as a tree and print its digest
    WriteTree,

    /// Create a commit object for a tree and print its digest
    CommitTree {
        #[clap(value_name = "tree")]
        tree: Digest,

        /// The parent commit, if any
        #[clap(short = 'p', value_name = "parent")]
        parent: Option<Digest>,

        #[clap(short, long, env = "OBJSTORE_COMMIT_MESSAGE")]
        message: Option<String>,

        #[clap(long, env = "OBJSTORE_AUTHOR_NAME", default_value = "Your Name")]
        author_name: String,

        #[clap(
            long,
            env = "OBJSTORE_AUTHOR_EMAIL",
            default_value = "your.email@example.com"
        )]
        author_email: String,
    },
}

#[derive(Clone, Debug, Subcommand)]
pub enum CatFile {
    /// Exit with status `ExitCode::SUCCESS` if `object` exists and is a valid object. If
    /// `object` is of an invalid format, exit with status `ExitCode::FAILURE`, and print an
    /// error to stderr.
    #[clap(short_flag = 'e')]
    Exists {
        #[clap(value_name = "object")]
        object: Digest,
    },

    /// Pretty-print the contents of `object` based on its type
    #[clap(short_flag = 'p')]
    PrettyPrint {
        #[clap(value_name = "object")]
        object: Digest,
    },

    /// Print the type of `object` to stdout
    #[clap(short_flag = 't')]
    Type {
        #[clap(value_name = "object")]
        object: Digest,
    },

    /// Print the size of `object` to stdout
    #[clap(short_flag = 's')]
    Size {
        #[clap(value_name = "object")]
        object: Digest,
    },
}

#[derive(Debug, Parser)]
#[clap(version)]
pub struct Opt {
    #[clap(subcommand)]
    pub command: Command,

    /// Run as if started in this directory instead of the current one
    #[clap(short = 'C', long, env = "OBJSTORE_PATH")]
    pub path: Option<Utf8PathBuf>,
}
