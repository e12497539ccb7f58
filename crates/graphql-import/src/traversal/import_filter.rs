use crate::import_directive::WILDCARD;
use crate::Definition;
use crate::DefinitionKind;
use crate::ROOT_FIELDS;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Projects a fragment's `definitions` down to the ones requested by
/// `imports`.
///
/// * A wildcard on the root fragment (no `previously_requested` layers yet)
///   keeps everything.
/// * A wildcard on any other fragment keeps only object types whose name was
///   already requested by an earlier fragment (root fields excluded).
/// * Named imports keep the named definitions. `Type.field` entries select
///   `Type` and narrow its fields to the union of all fields requested for it;
///   `Type.*` keeps every field.
///
/// Narrowed definitions are fresh copies, so two fragments importing
/// different fields of the same type never affect each other.
pub(crate) fn filter_imported_definitions(
    imports: &[String],
    definitions: &[Definition],
    previously_requested: &[Vec<Definition>],
) -> Vec<Definition> {
    if imports.iter().any(|name| name == WILDCARD) {
        if previously_requested.is_empty() {
            return definitions.to_vec();
        }

        let previous_names: HashSet<&str> =
            previously_requested.iter()
                .flatten()
                .map(Definition::name)
                .filter(|name| !ROOT_FIELDS.contains(name))
                .collect();

        return definitions.iter()
            .filter(|def| {
                def.kind() == DefinitionKind::Object
                    && previous_names.contains(def.name())
            })
            .cloned()
            .collect();
    }

    let mut requested_types: HashSet<&str> = HashSet::new();
    let mut requested_fields: IndexMap<&str, Vec<&str>> = IndexMap::new();
    for import in imports {
        match import.split_once('.') {
            Some((type_name, field_name)) => {
                requested_types.insert(type_name);
                requested_fields.entry(type_name)
                    .or_default()
                    .push(field_name);
            },
            None => {
                requested_types.insert(import.as_str());
            },
        }
    }

    definitions.iter()
        .filter(|def| requested_types.contains(def.name()))
        .map(|def| match requested_fields.get(def.name()) {
            Some(fields) if !fields.contains(&WILDCARD) =>
                def.with_fields_filtered(fields.as_slice()),
            _ => def.clone(),
        })
        .collect()
}
