//! High-level interface tying root resolution, traversal and reporting together

use std::{
    fs::{self, File},
    io::{self, BufRead, BufReader, Write},
    path::{Path, PathBuf},
};

use log::{debug, trace};

use crate::report::{self, FileRecord, RunningTotal};
use crate::walker::{self, Visit};
use crate::{FixedDelay, Options, Pacer};

/// Main interface for one disk usage run
///
/// Owns the running total for the whole invocation. Per-file lines and
/// the total line go to `out`, diagnostics go to `err`. Errors met while
/// walking are written to `err` and skipped; only failures to write
/// output and failure to open a path list are returned.
pub struct DiskUse<W: Write, E: Write> {
    options: Options,
    pacer: Box<dyn Pacer>,
    total: RunningTotal,
    out: W,
    err: E,
}

impl<W: Write, E: Write> DiskUse<W, E> {
    /// Create a new run with the default pacing delay
    pub fn new(options: Options, out: W, err: E) -> Self {
        Self {
            options,
            pacer: Box::new(FixedDelay::default()),
            total: RunningTotal::new(),
            out,
            err,
        }
    }

    /// Replace the pacing strategy used before each printed path
    pub fn with_pacer(mut self, pacer: impl Pacer + 'static) -> Self {
        self.pacer = Box::new(pacer);
        self
    }

    /// Process each root in order
    ///
    /// Roots that do not exist are reported and skipped.
    pub fn resolve_paths<I, P>(&mut self, roots: I) -> io::Result<()>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        for root in roots {
            let root = root.as_ref();

            if let Err(e) = fs::metadata(root) {
                if e.kind() == io::ErrorKind::NotFound {
                    writeln!(self.err, "Path does not exist: {}", root.display())?;
                    continue;
                }
            }

            self.walk(root)?;
        }

        Ok(())
    }

    /// Process every whitespace-separated path listed in `list_path`
    ///
    /// Failing to open the list is the one fatal error of a run and is
    /// returned to the caller. Listed paths are walked without an
    /// existence check.
    pub fn resolve_paths_from_file(&mut self, list_path: impl AsRef<Path>) -> io::Result<()> {
        let list_path = list_path.as_ref();
        let file = File::open(list_path).map_err(|e| {
            io::Error::new(
                e.kind(),
                format!("Unable to open file: {}", list_path.display()),
            )
        })?;

        debug!("Reading paths from {}", list_path.display());
        self.resolve_paths_from_reader(BufReader::new(file))
    }

    /// Process every whitespace-separated path read from `reader`
    ///
    /// Tokens are raw bytes, so names that are not valid UTF-8 are walked
    /// like any other. An I/O error ends the loop; paths read before it
    /// are already done.
    pub fn resolve_paths_from_reader<R: BufRead>(&mut self, reader: R) -> io::Result<()> {
        for line in reader.split(b'\n') {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    writeln!(self.err, "Error reading from file: {}", e)?;
                    break;
                }
            };

            for token in line
                .split(u8::is_ascii_whitespace)
                .filter(|token| !token.is_empty())
            {
                self.walk(path_from_bytes(token))?;
            }
        }

        Ok(())
    }

    /// Walk one root and report every file below it
    pub fn walk(&mut self, root: impl AsRef<Path>) -> io::Result<()> {
        let root = root.as_ref();
        debug!("Walking {}", root.display());

        for visit in walker::walk(root) {
            match visit {
                Visit::File(path) => self.report(&path)?,
                Visit::Failed { path, error } => {
                    writeln!(self.err, "Error processing: {} - {}", path.display(), error)?;
                }
            }
        }

        Ok(())
    }

    /// Size one file, print its line and add it to the total
    ///
    /// A file whose size cannot be read is reported and left out of the
    /// total.
    pub fn report(&mut self, path: &Path) -> io::Result<()> {
        let record = match FileRecord::from_path(path) {
            Ok(record) => record,
            Err(e) => {
                writeln!(self.err, "Error processing file: {} - {}", path.display(), e)?;
                return Ok(());
            }
        };

        trace!("{} is {} bytes", path.display(), record.size);
        self.total.add(record.size);

        report::write_record(&mut self.out, &record, &self.options, self.pacer.as_ref())
    }

    /// Print the total line if the options ask for it
    pub fn print_summary(&mut self) -> io::Result<()> {
        debug!(
            "Counted {} files, {} bytes",
            self.total.files(),
            self.total.bytes()
        );

        if self.options.prints_total() {
            report::write_total(&mut self.out, &self.total, &self.options)?;
        }

        self.out.flush()
    }

    /// Options this run was created with
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Running total so far
    pub fn total(&self) -> &RunningTotal {
        &self.total
    }

    /// Output written so far
    pub fn out(&self) -> &W {
        &self.out
    }

    /// Diagnostics written so far
    pub fn err(&self) -> &E {
        &self.err
    }
}

#[cfg(unix)]
fn path_from_bytes(bytes: &[u8]) -> PathBuf {
    use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

    PathBuf::from(OsStr::from_bytes(bytes))
}

#[cfg(not(unix))]
fn path_from_bytes(bytes: &[u8]) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(bytes).into_owned())
}
