mod root_type_merger;

pub use root_type_merger::merge_root_types;
pub use root_type_merger::RootTypeMerger;

/// Type names that are always merged across fragments rather than
/// deduplicated. `schema` stands for `schema { ... }` blocks.
pub const ROOT_FIELDS: [&str; 4] = [
    "Query",
    "Mutation",
    "Subscription",
    crate::definition::SCHEMA_DEFINITION_NAME,
];
