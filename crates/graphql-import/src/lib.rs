//! Resolves GraphQL SDL fragments linked together with `# import` comment
//! directives into one self-contained SDL document.
//!
//! ```no_run
//! use graphql_import::ImportOptions;
//!
//! let sdl = graphql_import::import_schema(
//!     "schema/root.graphql",
//!     &ImportOptions::default(),
//! ).unwrap();
//! println!("{sdl}");
//! ```

pub mod ast;
mod closure;
mod definition;
mod error;
mod file_reader;
pub mod import_directive;
mod loc;
mod root_type_merge;
mod schema_importer;
pub mod sdl;
pub mod source;
mod traversal;

pub use closure::complete_definition_pool;
pub use definition::Definition;
pub use definition::DefinitionKind;
pub use error::ImportSchemaError;
pub use file_reader::SourceReadError;
pub use loc::Location;
pub use root_type_merge::merge_root_types;
pub use root_type_merge::ROOT_FIELDS;
pub use root_type_merge::RootTypeMerger;
pub use schema_importer::import_schema;
pub use schema_importer::ImportOptions;
pub use schema_importer::SchemaImporter;
pub use traversal::CollectedDefinitions;
pub use traversal::ImportGraphTraversal;
