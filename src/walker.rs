//! Recursive directory traversal yielding the files to report

use std::{
    io,
    path::{Component, Path, PathBuf},
};

use walkdir::WalkDir;

/// One reportable event produced while walking a tree
#[derive(Debug)]
pub enum Visit {
    /// A non-directory entry, with its full path
    File(PathBuf),
    /// An entry that could not be visited; the walk goes on past it
    Failed { path: PathBuf, error: io::Error },
}

/// Walk the tree rooted at `root` depth-first
///
/// Directories are descended into but never yielded. Every other entry
/// (regular files, symlinks, special files) is yielded as [`Visit::File`].
/// Symlinks are not followed. Entries inside a directory come out in
/// file-name order, so two walks over an unchanged tree agree.
///
/// The root itself is yielded as given; entries below it are joined onto
/// the root with `.` components and doubled separators removed.
///
/// A root that cannot be read yields a single [`Visit::Failed`].
pub fn walk(root: impl AsRef<Path>) -> impl Iterator<Item = Visit> {
    let root = root.as_ref().to_path_buf();
    let base = child_base(&root);

    WalkDir::new(&root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(move |entry| match entry {
            Ok(entry) if entry.file_type().is_dir() => None,
            Ok(entry) => Some(Visit::File(rebase(
                entry.path(),
                &root,
                &base,
                entry.depth(),
            ))),
            Err(error) => {
                let path = match error.path() {
                    Some(path) => rebase(path, &root, &base, error.depth()),
                    None => root.clone(),
                };
                let message = error.to_string();
                let error = error
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, message));
                Some(Visit::Failed { path, error })
            }
        })
}

/// Lexically cleaned root that child paths are joined onto
///
/// `.` components are dropped, so `./x` becomes `x` and `.` becomes empty.
fn child_base(root: &Path) -> PathBuf {
    root.components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect()
}

fn rebase(path: &Path, root: &Path, base: &Path, depth: usize) -> PathBuf {
    if depth == 0 {
        return path.to_path_buf();
    }

    match path.strip_prefix(root) {
        Ok(relative) => base.join(relative),
        Err(_) => path.to_path_buf(),
    }
}
