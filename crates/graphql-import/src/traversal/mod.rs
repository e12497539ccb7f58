mod collected_definitions;
mod import_filter;
mod import_graph_traversal;

pub use collected_definitions::CollectedDefinitions;
pub(crate) use import_filter::filter_imported_definitions;
pub use import_graph_traversal::ImportGraphTraversal;
