use clap::{ArgAction, ArgGroup, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Collect a filtered file tree and its sources into a code-review prompt",
    group(
        ArgGroup::new("source")
            .required(true)
            .args(["dir", "files"]),
    )
)]
pub struct Cli {
    /// Root directory to walk
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Explicit files to include, used as-is without filtering
    #[arg(long, num_args = 1..)]
    pub files: Option<Vec<PathBuf>>,

    /// File extensions to include when walking a directory (e.g., '.py')
    #[arg(long, num_args = 1.., default_value = ".py")]
    pub ext: Vec<String>,

    /// Honor .gitignore/.ignore files and skip hidden entries
    #[arg(long)]
    pub respect_ignore: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
