use crate::import_directive::parse_import_lines;
use crate::import_directive::ImportRequest;
use crate::import_directive::WILDCARD;
use crate::sdl;
use crate::source::LoadedSource;
use crate::source::ModuleResolver;
use crate::source::SourceLoader;
use crate::traversal::filter_imported_definitions;
use crate::traversal::CollectedDefinitions;
use crate::ImportSchemaError;
use crate::Location;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, ImportSchemaError>;

/// Walks the graph of fragments linked by `# import` lines, starting at a root
/// fragment, and collects every fragment's definitions along with the subset
/// each import requested.
///
/// Each distinct import line is followed at most once per source location, so
/// circular imports terminate while distinct lines in a revisited fragment
/// are still each followed.
#[derive(Debug)]
pub struct ImportGraphTraversal<'a> {
    collected: CollectedDefinitions,
    loader: &'a mut dyn SourceLoader,
    processed_imports: HashSet<(Location, ImportRequest)>,
    resolver: &'a dyn ModuleResolver,
}
impl<'a> ImportGraphTraversal<'a> {
    pub fn new(
        loader: &'a mut dyn SourceLoader,
        resolver: &'a dyn ModuleResolver,
    ) -> Self {
        Self {
            collected: CollectedDefinitions::default(),
            loader,
            processed_imports: HashSet::new(),
            resolver,
        }
    }

    pub fn traverse(mut self, root: &LoadedSource) -> Result<CollectedDefinitions> {
        self.visit(
            &[WILDCARD.to_string()],
            root.content.as_str(),
            &root.location,
        )?;
        Ok(self.collected)
    }

    fn visit(
        &mut self,
        imports: &[String],
        sdl: &str,
        location: &Location,
    ) -> Result<()> {
        log::debug!("Visiting {location} (importing {}).", imports.join(", "));

        let definitions = sdl::parse_sdl(sdl, location)?;
        let requested = filter_imported_definitions(
            imports,
            &definitions,
            &self.collected.type_definitions,
        );
        self.collected.all_definitions.push(definitions);
        self.collected.type_definitions.push(requested);

        for request in parse_import_lines(sdl)? {
            let key = (location.to_owned(), request.to_owned());
            if !self.processed_imports.insert(key) {
                log::trace!(
                    "Skipping already-processed import of `{}` from {location}.",
                    request.from,
                );
                continue;
            }

            let locator = self.resolver.resolve(location, &request.from);
            let source = self.loader.load(&locator)?;
            self.visit(&request.imports, &source.content, &source.location)?;
        }

        Ok(())
    }
}
