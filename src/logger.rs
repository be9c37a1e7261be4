use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::time::SystemTime;

/// Initialize logging
///
/// Without a path, records go to stderr in env_logger's default format.
/// With a path, they are appended to that file as
/// `[timestamp:<secs>] LEVEL - message`.
///
/// Log level can be controlled via RUST_LOG environment variable:
/// - RUST_LOG=trace sizewalk . (shows every sized file)
/// - RUST_LOG=debug sizewalk . (shows roots and totals)
/// - RUST_LOG=warn sizewalk . (default)
pub fn init(log_file: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    if let Some(path) = log_file {
        let log_file = OpenOptions::new().create(true).append(true).open(path)?;

        builder
            .format(|buf, record| {
                writeln!(
                    buf,
                    "[{}] {} - {}",
                    format_timestamp(unix_secs()),
                    record.level(),
                    record.args()
                )
            })
            .target(env_logger::Target::Pipe(Box::new(log_file)));
    }

    builder.try_init()?;

    Ok(())
}

fn unix_secs() -> u64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Simple timestamp formatter (Unix timestamp to readable format)
fn format_timestamp(secs: u64) -> String {
    format!("timestamp:{}", secs)
}
