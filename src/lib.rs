//! Recursive per-file disk usage reporter
//!
//! This library walks directory trees, prints one line per regular file
//! and accumulates a grand total across every root of an invocation.
//! Sizes can be shown as raw bytes or as 512-byte blocks.

mod disk_use;
mod options;
mod pacing;
mod report;
mod walker;

// Re-export public API
pub use disk_use::DiskUse;
pub use options::Options;
pub use pacing::{FixedDelay, NoDelay, Pacer};
pub use report::{FileRecord, RunningTotal};
pub use walker::{walk, Visit};

use std::{env, time::Duration};

/// Size of one storage block in bytes
pub const BLOCK_SIZE: u64 = 512;

/// Delay inserted before each printed file path unless overridden
pub const DEFAULT_DELAY: Duration = Duration::from_millis(50);

/// Number of 512-byte blocks needed to hold `bytes`, rounded up
///
/// # Examples
/// ```
/// use sizewalk::to_blocks;
///
/// assert_eq!(to_blocks(0), 0);
/// assert_eq!(to_blocks(100), 1);
/// assert_eq!(to_blocks(1000), 2);
/// ```
pub fn to_blocks(bytes: u64) -> u64 {
    bytes.div_ceil(BLOCK_SIZE)
}

/// Unit name used in annotations and the total line
pub fn unit_label(block_size: bool) -> &'static str {
    if block_size {
        "blocks"
    } else {
        "bytes"
    }
}

/// Value of the leading size column for a file of `bytes` bytes
///
/// Block mode scales the value, byte mode prints it unchanged.
pub fn display_size(bytes: u64, block_size: bool) -> u64 {
    if block_size {
        to_blocks(bytes)
    } else {
        bytes
    }
}

/// Format a raw byte count with the unit label selected by `block_size`
///
/// The count is never scaled: a block-mode label is attached to the raw
/// byte count. Both the per-file annotation and the total line use this.
///
/// # Examples
/// ```
/// use sizewalk::format_size;
///
/// assert_eq!(format_size(1024, false), "1024 bytes");
/// assert_eq!(format_size(1100, true), "1100 blocks");
/// ```
pub fn format_size(bytes: u64, block_size: bool) -> String {
    format!("{} {}", bytes, unit_label(block_size))
}

/// Get the per-file output delay
///
/// Checks the `SIZEWALK_DELAY_MS` environment variable first and falls
/// back to [`DEFAULT_DELAY`] when it is unset or not a number.
pub fn get_default_delay() -> Duration {
    match env::var("SIZEWALK_DELAY_MS") {
        Ok(value) => match value.trim().parse::<u64>() {
            Ok(millis) => Duration::from_millis(millis),
            Err(_) => {
                log::warn!("Ignoring invalid SIZEWALK_DELAY_MS value '{}'", value);
                DEFAULT_DELAY
            }
        },
        Err(_) => DEFAULT_DELAY,
    }
}

/// Logger setup shared by the binary
pub mod logger;
