use crate::file_reader;
use crate::source::GRAPHQL_FILE_EXTS;
use crate::source::is_glob_locator;
use crate::ImportSchemaError;
use crate::Location;
use crate::SourceReadError;
use indexmap::IndexMap;
use std::path::Path;

type Result<T> = std::result::Result<T, ImportSchemaError>;

/// SDL text along with the [Location] it was loaded from.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedSource {
    pub content: String,
    pub location: Location,
}

/// Turns a locator (as produced by a
/// [ModuleResolver](crate::source::ModuleResolver), or as passed to the
/// top-level import) into SDL text.
pub trait SourceLoader: std::fmt::Debug {
    fn load(&mut self, locator: &str) -> Result<LoadedSource>;
}

/// Loads SDL from, in order of precedence:
///
/// 1. The caller-supplied map of named schemas.
/// 2. Files matched by a glob pattern, joined with newlines.
/// 3. A file path.
///
/// Anything else is treated as literal SDL text, except for locators that
/// name a `.graphql`/`.graphqls`/`.gql` file that doesn't exist.
#[derive(Debug, Default)]
pub struct DefaultSourceLoader {
    inline_load_counter: u32,
    schemas: IndexMap<String, String>,
}
impl DefaultSourceLoader {
    pub fn new(schemas: IndexMap<String, String>) -> Self {
        Self {
            inline_load_counter: 0,
            schemas,
        }
    }

    fn next_inline_location(&mut self) -> Location {
        let location = Location::Inline(self.inline_load_counter);
        self.inline_load_counter += 1;
        location
    }
}
impl SourceLoader for DefaultSourceLoader {
    fn load(&mut self, locator: &str) -> Result<LoadedSource> {
        if let Some(content) = self.schemas.get(locator) {
            log::trace!("Loading named schema `{locator}`.");
            return Ok(LoadedSource {
                content: content.to_owned(),
                location: Location::Named(locator.to_string()),
            });
        }

        if is_glob_locator(locator)
            && let Some((file_paths, content)) = file_reader::read_glob_content(locator)? {
            log::trace!(
                "Loaded {} files matching glob `{locator}`.",
                file_paths.len(),
            );
            return Ok(LoadedSource {
                content,
                location: Location::Glob(locator.to_string()),
            });
        }

        let path = Path::new(locator);
        if !locator.contains('\n') && path.is_file() {
            let content = file_reader::read_content(path)?;
            let canonical_path = std::fs::canonicalize(path)
                .map_err(|err| SourceReadError::FileReadError {
                    file_path: path.to_path_buf(),
                    err,
                })?;
            log::trace!("Loaded SDL file {canonical_path:#?}.");
            return Ok(LoadedSource {
                content,
                location: Location::File(canonical_path),
            });
        }

        let names_graphql_file =
            !locator.contains('\n')
            && path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| GRAPHQL_FILE_EXTS.contains(&ext));
        if names_graphql_file {
            return Err(SourceReadError::PathIsNotAFile(path.to_path_buf()).into());
        }

        Ok(LoadedSource {
            content: locator.to_string(),
            location: self.next_inline_location(),
        })
    }
}
