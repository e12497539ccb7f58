use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, SourceReadError>;

pub(crate) fn read_content<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let file_path = file_path.as_ref();
    if !file_path.is_file() {
        return Err(SourceReadError::PathIsNotAFile(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path)
        .map_err(|err| SourceReadError::FileReadError {
            file_path: file_path.to_path_buf(),
            err,
        })?;

    let content = String::from_utf8(bytes)
        .map_err(|err| SourceReadError::FileDecodeError {
            file_path: file_path.to_path_buf(),
            err,
        })?;

    Ok(content)
}

/// Reads every file matched by `pattern` (in the order the glob yields them)
/// and joins their contents with newlines. Directories are skipped. Returns
/// `None` when nothing matched.
pub(crate) fn read_glob_content(pattern: &str) -> Result<Option<(Vec<PathBuf>, String)>> {
    let entries = glob::glob(pattern)
        .map_err(|err| SourceReadError::InvalidGlobPattern {
            pattern: pattern.to_string(),
            err,
        })?;

    let mut file_paths = vec![];
    let mut contents = vec![];
    for entry in entries {
        let path = entry.map_err(|err| SourceReadError::GlobIterationError {
            file_path: err.path().to_path_buf(),
            err: err.into(),
        })?;
        if !path.is_file() {
            log::trace!("Skipping non-file glob match: {path:#?}.");
            continue;
        }
        contents.push(read_content(&path)?);
        file_paths.push(path);
    }

    if file_paths.is_empty() {
        return Ok(None);
    }
    Ok(Some((file_paths, contents.join("\n"))))
}

#[derive(Debug, Error)]
pub enum SourceReadError {
    #[error("Failed to decode {file_path:#?} as UTF-8: {err}")]
    FileDecodeError {
        file_path: PathBuf,
        err: std::string::FromUtf8Error,
    },

    #[error("Failed to read {file_path:#?}: {err}")]
    FileReadError {
        file_path: PathBuf,
        err: std::io::Error,
    },

    #[error("Failed to read {file_path:#?} while expanding a glob: {err}")]
    GlobIterationError {
        file_path: PathBuf,
        err: std::io::Error,
    },

    #[error("Invalid glob pattern `{pattern}`: {err}")]
    InvalidGlobPattern {
        pattern: String,
        err: glob::PatternError,
    },

    #[error("Path {0:#?} is not a file")]
    PathIsNotAFile(PathBuf),
}
impl std::cmp::PartialEq for SourceReadError {
    fn eq(&self, other: &Self) -> bool {
        use SourceReadError::*;
        match (self, other) {
            (FileDecodeError {
                file_path: self_file_path,
                err: self_err,
            }, FileDecodeError {
                file_path: other_file_path,
                err: other_err,
            }) => {
                self_file_path.eq(other_file_path)
                && self_err.eq(other_err)
            },

            (FileReadError {
                file_path: self_file_path,
                err: self_err,
            }, FileReadError {
                file_path: other_file_path,
                err: other_err,
            })
            | (GlobIterationError {
                file_path: self_file_path,
                err: self_err,
            }, GlobIterationError {
                file_path: other_file_path,
                err: other_err,
            }) => {
                self_file_path == other_file_path
                && self_err.kind() == other_err.kind()
            },

            (InvalidGlobPattern {
                pattern: self_pattern,
                err: self_err,
            }, InvalidGlobPattern {
                pattern: other_pattern,
                err: other_err,
            }) => {
                self_pattern == other_pattern
                && self_err.pos == other_err.pos
                && self_err.msg == other_err.msg
            },

            (PathIsNotAFile(self_path), PathIsNotAFile(other_path)) => {
                self_path.eq(other_path)
            },

            _ => false,
        }
    }
}
