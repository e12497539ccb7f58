mod builtins;
mod definition_pool;
mod dependency_collector;

pub(crate) use builtins::is_builtin_directive;
pub(crate) use builtins::is_builtin_scalar;
pub use definition_pool::complete_definition_pool;
pub(crate) use definition_pool::pool_key;
pub(crate) use definition_pool::DefinitionUniverse;
pub(crate) use dependency_collector::DependencyCollector;

#[cfg(test)]
mod tests;
