//! CSV dataset loading
//!
//! Recorded trajectories live in one directory per source type under a
//! common root. A loader picks one file of a source at random and returns
//! its lines.

use std::fs;
use std::path::{Path, PathBuf};

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Dataset locations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Directory holding one subdirectory per source type
    pub root: PathBuf,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("CSV"),
        }
    }
}

/// Category of recorded data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceType {
    /// Drone trajectories
    Uav,
    /// Background noise
    Noise,
}

impl SourceType {
    /// Subdirectory of the dataset root holding this source
    pub fn directory_name(self) -> &'static str {
        match self {
            Self::Uav => "UAV",
            Self::Noise => "NOISE",
        }
    }
}

/// Dataset errors
#[derive(Error, Debug)]
pub enum DatasetError {
    /// The source directory does not exist
    #[error("dataset directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),

    /// The source directory holds no file
    #[error("dataset directory is empty: {}", .0.display())]
    EmptyDirectory(PathBuf),

    /// IO error
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        /// File or directory being read
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> DatasetError {
    let path = path.to_path_buf();
    move |source| DatasetError::Io { path, source }
}

/// Pick a file of `dir` uniformly at random.
///
/// Returns `Ok(None)` when `dir` holds no regular file. Files are sorted
/// first so the pick only depends on `rng`.
pub fn pick_random_file<R: Rng + ?Sized>(dir: &Path, rng: &mut R) -> Result<Option<PathBuf>, DatasetError> {
    if !dir.is_dir() {
        return Err(DatasetError::MissingDirectory(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error(dir))? {
        let path = entry.map_err(io_error(dir))?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    Ok(files.choose(rng).cloned())
}

/// Read a text file as lines, without line terminators
pub fn load_lines(path: &Path) -> Result<Vec<String>, DatasetError> {
    let contents = fs::read_to_string(path).map_err(io_error(path))?;
    Ok(contents.lines().map(str::to_owned).collect())
}

/// Split a comma separated line, dropping empty fields
pub fn split_line(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Loads random files of a dataset
#[derive(Debug, Clone, Default)]
pub struct DatasetLoader {
    config: DatasetConfig,
}

impl DatasetLoader {
    /// Loader over the given dataset
    pub fn new(config: DatasetConfig) -> Self {
        Self { config }
    }

    /// Directory of `source`
    pub fn source_directory(&self, source: SourceType) -> PathBuf {
        self.config.root.join(source.directory_name())
    }

    /// Lines of a randomly picked file of `source`
    pub fn load_random<R: Rng + ?Sized>(&self, source: SourceType, rng: &mut R) -> Result<Vec<String>, DatasetError> {
        let dir = self.source_directory(source);
        let file = pick_random_file(&dir, rng)?.ok_or_else(|| DatasetError::EmptyDirectory(dir.clone()))?;

        log::debug!("Loading {source:?} data from {}", file.display());
        load_lines(&file)
    }
}
