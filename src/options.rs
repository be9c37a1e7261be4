//! Output options resolved once at startup

/// Controls what is printed for each file and for the whole run
///
/// Built once from the command line and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Print each file's size before its path
    pub print_size: bool,
    /// Append the raw byte count and unit label to each file line
    pub print_all_files: bool,
    /// Print the grand total after all roots are processed
    pub print_fullsize: bool,
    /// Suppress per-file lines, print only the grand total
    pub print_only_fullsize: bool,
    /// Express the leading size in 512-byte blocks instead of bytes
    pub block_size: bool,
    /// Roots were read from a path-list file
    pub from_file: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            print_size: false,
            print_all_files: false,
            print_fullsize: false,
            print_only_fullsize: false,
            block_size: true,
            from_file: false,
        }
    }
}

impl Options {
    /// Whether the run ends with a `Total size:` line
    pub fn prints_total(&self) -> bool {
        self.print_fullsize || self.print_only_fullsize
    }

    /// Whether each file gets its path printed on its own line
    pub fn prints_file_lines(&self) -> bool {
        !self.print_only_fullsize
    }
}
