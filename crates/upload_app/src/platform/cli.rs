use std::path::PathBuf;

use clap::Parser;

/// Upload a course spreadsheet to the document generator and fetch the results.
#[derive(Parser, Debug)]
#[command(name = "course-upload", version)]
pub struct Cli {
    /// RON settings file. Defaults to ./upload.ron when present.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Base URL of the generation service.
    #[arg(long)]
    pub server: Option<String>,
    /// Save both generated documents into this directory.
    #[arg(long)]
    pub download_dir: Option<PathBuf>,
    /// Give up on the generation call after this many seconds.
    #[arg(long)]
    pub request_timeout_secs: Option<u64>,
    /// Also write the log to this file.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
    #[arg(short, long)]
    pub verbose: bool,
    /// Treat the file as dropped on the upload area (only .xlsx accepted).
    #[arg(long, value_name = "PATH", conflicts_with = "file")]
    pub drop: Option<PathBuf>,
    /// File chosen as with the file picker (no extension check).
    #[arg(value_name = "PATH", required_unless_present = "drop")]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Dropped(PathBuf),
    Picked(PathBuf),
}

impl Cli {
    pub fn selection(&self) -> Option<Selection> {
        match (&self.drop, &self.file) {
            (Some(path), _) => Some(Selection::Dropped(path.clone())),
            (None, Some(path)) => Some(Selection::Picked(path.clone())),
            (None, None) => None,
        }
    }
}
