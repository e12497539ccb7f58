use crate::source::GLOB_META_CHARS;
use crate::Location;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

pub const DEFAULT_MODULE_DIR_NAME: &str = "node_modules";

/// Maps the `from` target of an import line to the locator that should be
/// loaded, given the [Location] of the fragment containing the import.
pub trait ModuleResolver: std::fmt::Debug {
    fn resolve(&self, current: &Location, target: &str) -> String;
}

/// Resolves targets relative to the importing file's directory. When that
/// path doesn't exist and the target isn't explicitly relative (`./`, `../`),
/// each ancestor directory's module directory (`node_modules` by default) is
/// searched for the target instead, package-style.
///
/// Imports from named or inline schemas pass the target through unchanged.
#[derive(Debug)]
pub struct DefaultModuleResolver {
    module_dir_name: String,
}
impl DefaultModuleResolver {
    pub fn new() -> Self {
        Self {
            module_dir_name: DEFAULT_MODULE_DIR_NAME.to_string(),
        }
    }

    pub fn with_module_dir_name(mut self, module_dir_name: impl Into<String>) -> Self {
        self.module_dir_name = module_dir_name.into();
        self
    }

    fn resolve_package(&self, base_dir: &Path, target: &str) -> Option<PathBuf> {
        base_dir.ancestors()
            .map(|dir| dir.join(&self.module_dir_name).join(target))
            .find(|candidate| candidate.exists())
    }
}
impl Default for DefaultModuleResolver {
    fn default() -> Self {
        Self::new()
    }
}
impl ModuleResolver for DefaultModuleResolver {
    fn resolve(&self, current: &Location, target: &str) -> String {
        let base_dir = match current {
            Location::File(path) => path.parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
            Location::Glob(pattern) => glob_base_dir(pattern),
            Location::Inline(_) | Location::Named(_) => return target.to_string(),
        };

        let relative = base_dir.join(target);
        if relative.exists() || is_explicitly_relative(target) {
            return relative.display().to_string();
        }

        match self.resolve_package(&base_dir, target) {
            Some(package_path) => {
                log::trace!(
                    "Resolved `{target}` to {package_path:#?} via `{}` lookup.",
                    self.module_dir_name,
                );
                package_path.display().to_string()
            },
            None => relative.display().to_string(),
        }
    }
}

/// The leading run of path components of `pattern` that contain no glob
/// metacharacters.
fn glob_base_dir(pattern: &str) -> PathBuf {
    Path::new(pattern)
        .components()
        .take_while(|component| match component {
            Component::Normal(part) => !part.to_string_lossy().contains(GLOB_META_CHARS),
            _ => true,
        })
        .collect()
}

fn is_explicitly_relative(target: &str) -> bool {
    matches!(
        Path::new(target).components().next(),
        Some(Component::CurDir | Component::ParentDir),
    )
}
