pub const WILDCARD: &str = "*";

/// A single parsed `import <names> from "<path>"` directive.
///
/// `imports` is either the lone wildcard (`["*"]`) or a list of type names,
/// each of which may be dotted (`Type.field` or `Type.*`) to request only some
/// of a type's fields. `from` is an opaque locator that is only ever handed to
/// a [ModuleResolver](crate::source::ModuleResolver); it is never interpreted
/// here.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ImportRequest {
    pub imports: Vec<String>,
    pub from: String,
}
impl ImportRequest {
    pub fn new<S: Into<String>>(
        imports: impl IntoIterator<Item = S>,
        from: impl Into<String>,
    ) -> Self {
        Self {
            imports: imports.into_iter().map(Into::into).collect(),
            from: from.into(),
        }
    }

    /// An `import * from ...` request for the given locator.
    pub fn wildcard(from: impl Into<String>) -> Self {
        Self::new([WILDCARD], from)
    }

    pub fn is_wildcard(&self) -> bool {
        self.imports.len() == 1 && self.imports[0] == WILDCARD
    }
}
