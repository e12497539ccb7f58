use crate::closure::complete_definition_pool;
use crate::root_type_merge::merge_root_types;
use crate::sdl;
use crate::source::DefaultModuleResolver;
use crate::source::DefaultSourceLoader;
use crate::source::ModuleResolver;
use crate::source::SourceLoader;
use crate::traversal::ImportGraphTraversal;
use crate::Definition;
use crate::ImportSchemaError;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, ImportSchemaError>;

/// Options for [import_schema].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImportOptions {
    /// Named in-memory schemas. Any locator (the root or an import's `from`
    /// target) equal to one of these keys loads the corresponding SDL.
    pub schemas: IndexMap<String, String>,

    /// Type names, beyond `Query`/`Mutation`/`Subscription`, whose
    /// definitions should be field-merged across fragments rather than
    /// deduplicated.
    pub mergeable_types: Vec<String>,
}

/// Resolves all `# import` directives reachable from `locator` (a file path,
/// a glob, a key in `options.schemas`, or literal SDL text) and returns a
/// single self-contained SDL document.
pub fn import_schema(locator: &str, options: &ImportOptions) -> Result<String> {
    SchemaImporter::new()
        .with_schemas(options.schemas.to_owned())
        .with_mergeable_types(options.mergeable_types.to_owned())
        .import(locator)
}

/// Utility for resolving a schema's imports with custom collaborators.
#[derive(Debug)]
pub struct SchemaImporter {
    mergeable_types: Vec<String>,
    module_resolver: Box<dyn ModuleResolver>,
    schemas: IndexMap<String, String>,
    source_loader: Option<Box<dyn SourceLoader>>,
}
impl SchemaImporter {
    pub fn new() -> Self {
        Self {
            mergeable_types: vec![],
            module_resolver: Box::new(DefaultModuleResolver::new()),
            schemas: IndexMap::new(),
            source_loader: None,
        }
    }

    pub fn add_schema(
        mut self,
        name: impl Into<String>,
        sdl: impl Into<String>,
    ) -> Self {
        self.schemas.insert(name.into(), sdl.into());
        self
    }

    pub fn with_mergeable_types(mut self, mergeable_types: Vec<String>) -> Self {
        self.mergeable_types = mergeable_types;
        self
    }

    pub fn with_module_resolver(mut self, resolver: Box<dyn ModuleResolver>) -> Self {
        self.module_resolver = resolver;
        self
    }

    pub fn with_schemas(mut self, schemas: IndexMap<String, String>) -> Self {
        self.schemas = schemas;
        self
    }

    /// Replaces the default loader. Named schemas registered on this importer
    /// are only consulted by the default loader.
    pub fn with_source_loader(mut self, loader: Box<dyn SourceLoader>) -> Self {
        self.source_loader = Some(loader);
        self
    }

    pub fn import(self, locator: &str) -> Result<String> {
        Ok(sdl::print_sdl(self.import_definitions(locator)?))
    }

    /// Like [SchemaImporter::import], but returns the resolved definitions
    /// rather than printing them.
    pub fn import_definitions(self, locator: &str) -> Result<Vec<Definition>> {
        let mut source_loader: Box<dyn SourceLoader> = match self.source_loader {
            Some(loader) => loader,
            None => Box::new(DefaultSourceLoader::new(self.schemas)),
        };
        let root = source_loader.load(locator)?;
        log::debug!("Resolving imports starting at {}.", root.location);

        let collected = ImportGraphTraversal::new(
            source_loader.as_mut(),
            self.module_resolver.as_ref(),
        ).traverse(&root)?;
        log::debug!(
            "Visited {} fragments; {} definitions requested.",
            collected.all_definitions.len(),
            collected.type_definitions.iter().map(Vec::len).sum::<usize>(),
        );

        let first_set = merge_root_types(
            &collected.type_definitions,
            &self.mergeable_types,
        );
        let mut queue = first_set.to_owned();
        queue.extend(collected.flat_type_definitions());

        complete_definition_pool(
            &collected.flat_effective_definitions(),
            first_set,
            queue,
        )
    }
}
impl Default for SchemaImporter {
    fn default() -> Self {
        Self::new()
    }
}
