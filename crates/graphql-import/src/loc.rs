use std::path::PathBuf;

/// Identifies a single SDL fragment visited while walking an import graph.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Location {
    /// A canonicalized path to a file on disk.
    File(PathBuf),

    /// A glob pattern whose matched files were concatenated into one fragment.
    Glob(String),

    /// Literal SDL text passed directly as a locator. Each inline load gets its
    /// own number so that two distinct inline fragments never share a key.
    Inline(u32),

    /// A key into the caller-supplied map of named in-memory schemas.
    Named(String),
}
impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Glob(pattern) => write!(f, "{pattern}"),
            Self::Inline(idx) => write!(f, "str://{idx}"),
            Self::Named(name) => write!(f, "schemas://{name}"),
        }
    }
}
