use crate::ast;
use crate::closure::pool_key;
use crate::Definition;
use crate::root_type_merge::ROOT_FIELDS;
use indexmap::IndexMap;

/// Builds the initial pool of definitions for the closure: every root field
/// and mergeable type requested by any fragment (merged by name, first-seen
/// order), followed by the root fragment's remaining definitions.
pub fn merge_root_types(
    type_definitions: &[Vec<Definition>],
    mergeable_types: &[String],
) -> Vec<Definition> {
    let mut merger = RootTypeMerger::new(mergeable_types);
    for def in type_definitions.iter().flatten() {
        if merger.is_mergeable(def.name()) {
            merger.add(def.to_owned());
        }
    }

    let mut first_set = merger.build();
    let root_extras =
        type_definitions.first()
            .into_iter()
            .flatten()
            .filter(|def| !is_mergeable_name(def.name(), mergeable_types));
    for def in root_extras {
        if !first_set.iter().any(|existing| pool_key(existing) == pool_key(def)) {
            first_set.push(def.to_owned());
        }
    }
    first_set
}

fn is_mergeable_name(name: &str, mergeable_types: &[String]) -> bool {
    ROOT_FIELDS.contains(&name)
        || mergeable_types.iter().any(|mergeable| mergeable == name)
}

/// Accumulates same-named definitions into one.
///
/// Merging appends the later definition's fields (or enum values, union
/// members, interfaces, directives) onto the first-seen definition, skipping
/// any whose name is already present. `schema` blocks fill in operation types
/// the first-seen block leaves unset. Definitions of a different kind than
/// the first-seen one are dropped.
#[derive(Debug)]
pub struct RootTypeMerger<'a> {
    merged: IndexMap<String, Definition>,
    mergeable_types: &'a [String],
}
impl<'a> RootTypeMerger<'a> {
    pub fn new(mergeable_types: &'a [String]) -> Self {
        Self {
            merged: IndexMap::new(),
            mergeable_types,
        }
    }

    pub fn add(&mut self, def: Definition) {
        match self.merged.get_mut(def.name()) {
            Some(existing) => merge_into(existing, def),
            None => {
                self.merged.insert(def.name().to_string(), def);
            },
        }
    }

    pub fn build(self) -> Vec<Definition> {
        self.merged.into_values().collect()
    }

    pub fn is_mergeable(&self, name: &str) -> bool {
        is_mergeable_name(name, self.mergeable_types)
    }
}

fn merge_into(existing: &mut Definition, other: Definition) {
    match (existing, other) {
        (Definition::Object(existing), Definition::Object(other)) => {
            append_named(&mut existing.implements_interfaces, other.implements_interfaces, |i| i);
            append_named(&mut existing.directives, other.directives, |d| &d.name);
            append_named(&mut existing.fields, other.fields, |f| &f.name);
        },

        (Definition::Interface(existing), Definition::Interface(other)) => {
            append_named(&mut existing.implements_interfaces, other.implements_interfaces, |i| i);
            append_named(&mut existing.directives, other.directives, |d| &d.name);
            append_named(&mut existing.fields, other.fields, |f| &f.name);
        },

        (Definition::InputObject(existing), Definition::InputObject(other)) => {
            append_named(&mut existing.directives, other.directives, |d| &d.name);
            append_named(&mut existing.fields, other.fields, |f| &f.name);
        },

        (Definition::Enum(existing), Definition::Enum(other)) => {
            append_named(&mut existing.directives, other.directives, |d| &d.name);
            append_named(&mut existing.values, other.values, |v| &v.name);
        },

        (Definition::Union(existing), Definition::Union(other)) => {
            append_named(&mut existing.directives, other.directives, |d| &d.name);
            append_named(&mut existing.types, other.types, |t| t);
        },

        (Definition::Schema(existing), Definition::Schema(other)) => {
            merge_schema_definitions(existing, other);
        },

        (existing, other) => {
            log::warn!(
                "Unable to merge {:?} `{}` into previously seen {:?} `{}`; \
                keeping the first definition.",
                other.kind(),
                other.name(),
                existing.kind(),
                existing.name(),
            );
        },
    }
}

fn merge_schema_definitions(
    existing: &mut ast::schema::SchemaDefinition,
    other: ast::schema::SchemaDefinition,
) {
    if existing.query.is_none() {
        existing.query = other.query;
    }
    if existing.mutation.is_none() {
        existing.mutation = other.mutation;
    }
    if existing.subscription.is_none() {
        existing.subscription = other.subscription;
    }
    append_named(&mut existing.directives, other.directives, |d| &d.name);
}

fn append_named<T>(
    existing: &mut Vec<T>,
    additions: Vec<T>,
    name_of: impl Fn(&T) -> &String,
) {
    for addition in additions {
        let already_present =
            existing.iter().any(|item| name_of(item) == name_of(&addition));
        if !already_present {
            existing.push(addition);
        }
    }
}
