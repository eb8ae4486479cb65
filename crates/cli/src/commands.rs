use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Mirror the remote dataset into the local snapshot files
    Sync {
        #[arg(
            long,
            help = "Compute and report the change decision without writing anything"
        )]
        dry_run: bool,

        #[arg(long, help = "API base URL (overrides DATAMIRROR_API_URL)")]
        api_url: Option<String>,

        #[arg(long, help = "Records per page request")]
        page_size: Option<usize>,

        #[arg(long, help = "Maximum concurrent page fetches")]
        max_concurrency: Option<usize>,

        #[arg(long, help = "Path of the JSON snapshot artifact")]
        json_path: Option<PathBuf>,

        #[arg(long, help = "Path of the CSV snapshot artifact")]
        csv_path: Option<PathBuf>,

        #[arg(long, help = "Path of the version record")]
        version_path: Option<PathBuf>,

        #[arg(
            long,
            help = "If set, prints the run summary as JSON instead of a sentence"
        )]
        json: bool,
    },
    /// Print the persisted version record
    VersionInfo {
        #[arg(long, help = "Path of the version record")]
        version_path: Option<PathBuf>,
    },
}
