//! Per-file size lookup, line formatting and the running total

use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use crate::{display_size, format_size, Options, Pacer};

/// Size of a single file, alive only while that file is being reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileRecord<'a> {
    pub path: &'a Path,
    pub size: u64,
}

impl<'a> FileRecord<'a> {
    /// Look up the size of `path`, following symlinks
    pub fn from_path(path: &'a Path) -> io::Result<Self> {
        let size = fs::metadata(path)?.len();
        Ok(Self { path, size })
    }
}

/// Sum of every successfully sized file seen during one invocation
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunningTotal {
    bytes: u64,
    files: u64,
}

impl RunningTotal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one file of `size` bytes
    pub fn add(&mut self, size: u64) {
        self.bytes = self.bytes.saturating_add(size);
        self.files += 1;
    }

    /// Accumulated size in raw bytes
    pub fn bytes(&self) -> u64 {
        self.bytes
    }

    /// Number of files that contributed to the total
    pub fn files(&self) -> u64 {
        self.files
    }
}

/// Write the output for one file according to `options`
///
/// The leading size column and the trailing annotation are written
/// whenever their flags are set. The path and the line break are only
/// written when per-file lines are enabled, and `pacer` runs right before
/// the path.
pub fn write_record<W: Write + ?Sized>(
    out: &mut W,
    record: &FileRecord<'_>,
    options: &Options,
    pacer: &dyn Pacer,
) -> io::Result<()> {
    if options.print_size {
        write!(out, "{}\t", display_size(record.size, options.block_size))?;
    }

    if options.prints_file_lines() {
        pacer.pause();
        write!(out, "{}", record.path.display())?;
    }

    if options.print_all_files {
        write!(out, "\t{}", format_size(record.size, options.block_size))?;
    }

    if options.prints_file_lines() {
        writeln!(out)?;
    }

    Ok(())
}

/// Write the `Total size:` line
///
/// The total is always the raw byte sum, labelled by `options.block_size`.
pub fn write_total<W: Write + ?Sized>(
    out: &mut W,
    total: &RunningTotal,
    options: &Options,
) -> io::Result<()> {
    writeln!(
        out,
        "Total size: {}",
        format_size(total.bytes(), options.block_size)
    )
}
