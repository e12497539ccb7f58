//! Default collaborators for turning import locators into SDL text: a
//! [SourceLoader] that reads files, globs, named in-memory schemas or inline
//! SDL, and a [ModuleResolver] that resolves an import's `from` target
//! relative to the fragment that contains it.

mod module_resolver;
mod source_loader;

pub use module_resolver::DefaultModuleResolver;
pub use module_resolver::ModuleResolver;
pub use source_loader::DefaultSourceLoader;
pub use source_loader::LoadedSource;
pub use source_loader::SourceLoader;

pub(crate) const GRAPHQL_FILE_EXTS: [&str; 3] = ["graphql", "graphqls", "gql"];
pub(crate) const GLOB_META_CHARS: [char; 3] = ['*', '?', '['];

/// Whether `locator` should be expanded as a glob pattern. Multi-line text and
/// anything containing a `{` is inline SDL, however many `[`s it contains.
pub(crate) fn is_glob_locator(locator: &str) -> bool {
    !locator.contains('\n')
        && !locator.contains('{')
        && locator.contains(GLOB_META_CHARS)
}

#[cfg(test)]
mod tests;
