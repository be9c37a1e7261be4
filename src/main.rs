use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use sizewalk::{logger, DiskUse, Options};

#[derive(Parser)]
#[command(name = "sizewalk")]
#[command(about = "Report the size of every file below the given paths")]
#[command(version)]
struct Cli {
    /// Paths to scan (ignored when --files-from is given)
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// Append the raw byte count and unit to each file line
    #[arg(short = 'a')]
    all_files: bool,

    /// Print each file's size before its path
    #[arg(short = 'b')]
    size: bool,

    /// Print the total size after all paths are processed
    #[arg(short = 'c')]
    total: bool,

    /// Print only the total size
    #[arg(short = 's')]
    summarize: bool,

    /// Show sizes in bytes instead of 512-byte blocks
    #[arg(long)]
    bytes: bool,

    /// Read whitespace-separated paths to scan from FILE
    #[arg(long, value_name = "FILE")]
    files_from: Option<PathBuf>,

    /// Append log records to FILE instead of stderr
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn options(&self) -> Options {
        Options {
            print_size: self.size,
            print_all_files: self.all_files,
            print_fullsize: self.total,
            print_only_fullsize: self.summarize,
            block_size: !self.bytes,
            from_file: self.files_from.is_some(),
        }
    }
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logger::init(cli.log_file.as_deref()) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut disk_use = DiskUse::new(cli.options(), stdout.lock(), stderr.lock());

    match &cli.files_from {
        Some(list_path) => {
            if let Err(e) = disk_use.resolve_paths_from_file(list_path) {
                eprintln!("{}", e);
                process::exit(1);
            }
        }
        None => disk_use.resolve_paths(&cli.paths)?,
    }

    disk_use.print_summary()
}
