// src/cli.rs

use clap::Parser;

/// Download a specific folder from a GitHub repository.
///
/// The tool creates a folder with the same name as the target directory and
/// mirrors its contents, recursing into subdirectories.
/// Only works with public repositories.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
#[command(after_help = "Examples:\n  \
    ghdir https://github.com/owner/repo/tree/main/path/to/folder\n  \
    ghdir -d ./downloads https://github.com/owner/repo/tree/main/path/to/folder\n  \
    ghdir --dir=/home/user/projects https://github.com/owner/repo/tree/main/path/to/folder")]
pub struct Cli {
    /// Link to the folder, e.g. https://github.com/owner/repo/tree/branch/path
    #[arg(value_name = "GITHUB_REPO_LINK")]
    pub repo_link: String,

    /// Download to a specific directory (default: current directory).
    #[arg(short = 'd', long = "dir", value_name = "PATH")]
    pub dir: Option<String>,
}
