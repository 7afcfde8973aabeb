//! Source queue for a compilation unit.
//!
//! A compilation unit is either a single file or every file with the source
//! extension in one directory (not recursive). Directory entries are sorted
//! by file name so the token stream never depends on the order the
//! filesystem happens to list them in.

use std::collections::VecDeque;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{LexError, Result};

/// Ordered files of a compilation unit that have not been opened yet.
///
/// The file currently being read is never in the queue: [`open_next`]
/// removes it at the moment it is opened.
///
/// [`open_next`]: SourceQueue::open_next
#[derive(Debug, Default)]
pub struct SourceQueue {
    pending: VecDeque<PathBuf>,
}

impl SourceQueue {
    /// Builds the queue for `path`.
    ///
    /// If `path` is a directory, every regular file in it whose name ends in
    /// `.{extension}` is queued, sorted by file name. Otherwise `path` itself
    /// is the only entry; whether it can be opened is checked by
    /// [`open_next`](Self::open_next).
    ///
    /// # Errors
    ///
    /// [`LexError::SourceNotFound`] if the directory cannot be listed.
    pub fn from_path(path: &Path, extension: &str) -> Result<Self> {
        if !path.is_dir() {
            return Ok(Self::from_files([path.to_path_buf()]));
        }

        let not_found = |source: io::Error| LexError::SourceNotFound {
            path: path.to_path_buf(),
            source,
        };
        let suffix = format!(".{extension}");

        let mut files = Vec::new();
        for entry in fs::read_dir(path).map_err(not_found)? {
            let entry = entry.map_err(not_found)?;
            let file_path = entry.path();
            let matches = file_path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.ends_with(&suffix));
            if matches && !file_path.is_dir() {
                files.push(file_path);
            }
        }
        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        if files.is_empty() {
            warn!(dir = %path.display(), %extension, "no source files in directory");
        } else {
            debug!(dir = %path.display(), count = files.len(), "queued source files");
        }
        Ok(Self::from_files(files))
    }

    /// Builds a queue holding exactly `files`, in the given order.
    pub fn from_files(files: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            pending: files.into_iter().collect(),
        }
    }

    /// Removes the first pending file and opens it.
    ///
    /// Returns `Ok(None)` when the queue is empty.
    ///
    /// # Errors
    ///
    /// [`LexError::SourceNotFound`] if the file cannot be opened. The file is
    /// removed from the queue either way.
    pub fn open_next(&mut self) -> Result<Option<SourceFile>> {
        let Some(path) = self.pending.pop_front() else {
            return Ok(None);
        };
        SourceFile::open(path).map(Some)
    }

    /// Returns the pending files in the order they will be opened.
    pub fn pending(&self) -> impl Iterator<Item = &Path> {
        self.pending.iter().map(PathBuf::as_path)
    }

    /// Returns the number of pending files.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns true if no files are pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// An open source file being read line by line.
///
/// The file handle is released when the value is dropped.
#[derive(Debug)]
pub struct SourceFile {
    name: String,
    path: PathBuf,
    reader: BufReader<File>,
}

impl SourceFile {
    /// Opens `path` for reading.
    pub fn open(path: PathBuf) -> Result<Self> {
        let file = File::open(&path).map_err(|source| LexError::SourceNotFound {
            path: path.clone(),
            source,
        })?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        debug!(file = %name, "opened source file");
        Ok(Self {
            name,
            path,
            reader: BufReader::new(file),
        })
    }

    /// Reads the next physical line into `buf`, replacing its contents.
    ///
    /// Returns `Ok(false)` at end of file.
    pub fn read_line(&mut self, buf: &mut String) -> io::Result<bool> {
        buf.clear();
        Ok(self.reader.read_line(buf)? != 0)
    }

    /// Returns the file name (without directories).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the path the file was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
