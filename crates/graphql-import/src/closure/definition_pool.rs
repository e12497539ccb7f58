use crate::closure::DependencyCollector;
use crate::Definition;
use crate::DefinitionKind;
use crate::ImportSchemaError;
use std::collections::HashMap;
use std::collections::HashSet;
use std::collections::VecDeque;

type Result<T> = std::result::Result<T, ImportSchemaError>;

/// Name-keyed lookup over every definition of every visited fragment.
///
/// Directive definitions live in their own namespace, as in GraphQL itself.
/// When several fragments define the same name, the definition from the
/// earliest-visited fragment wins.
#[derive(Debug)]
pub(crate) struct DefinitionUniverse<'a> {
    all_definitions: &'a [Definition],
    directives: HashMap<&'a str, &'a Definition>,
    types: HashMap<&'a str, &'a Definition>,
}
impl<'a> DefinitionUniverse<'a> {
    pub fn new(all_definitions: &'a [Definition]) -> Self {
        let mut directives = HashMap::new();
        let mut types = HashMap::new();
        // Inserting back-to-front lets earlier definitions overwrite later ones.
        for def in all_definitions.iter().rev() {
            match def.kind() {
                DefinitionKind::Directive => directives.insert(def.name(), def),
                _ => types.insert(def.name(), def),
            };
        }

        Self {
            all_definitions,
            directives,
            types,
        }
    }

    pub fn directive(&self, name: &str) -> Option<&'a Definition> {
        self.directives.get(name).copied()
    }

    pub fn type_(&self, name: &str) -> Option<&'a Definition> {
        self.types.get(name).copied()
    }

    /// The names of every object type, anywhere in the universe, that declares
    /// `implements <interface_name>`. Each name is yielded once, in visitation
    /// order.
    pub fn implementations_of(&self, interface_name: &str) -> Vec<&'a str> {
        let mut seen = HashSet::new();
        self.all_definitions.iter()
            .filter_map(|def| match def {
                Definition::Object(obj) if obj.implements_interfaces
                    .iter()
                    .any(|iface| iface == interface_name) => Some(obj.name.as_str()),
                _ => None,
            })
            .filter(|name| seen.insert(*name))
            .collect()
    }
}

/// Namespaced key used to deduplicate the pool.
pub(crate) fn pool_key(def: &Definition) -> (bool, &str) {
    (def.kind() == DefinitionKind::Directive, def.name())
}

/// Expands `pool` to the transitive closure of every definition reachable from
/// the definitions in `queue`, using `all_definitions` as the universe of
/// definitions that references may resolve to.
///
/// Work proceeds breadth-first over an explicit queue with a visited set, so
/// cycles between types never recurse. Any reference that resolves to nothing
/// aborts with the corresponding [ImportSchemaError].
///
/// The returned definitions keep the pool's insertion order, deduplicated by
/// name with the first occurrence winning.
pub fn complete_definition_pool(
    all_definitions: &[Definition],
    pool: Vec<Definition>,
    queue: Vec<Definition>,
) -> Result<Vec<Definition>> {
    let universe = DefinitionUniverse::new(all_definitions);
    let mut pool = pool;
    let mut pool_keys: HashSet<(bool, String)> =
        pool.iter()
            .map(|def| {
                let (is_directive, name) = pool_key(def);
                (is_directive, name.to_string())
            })
            .collect();
    let mut queue: VecDeque<Definition> = queue.into();
    let mut visited: HashSet<(bool, String)> = HashSet::new();

    while let Some(def) = queue.pop_front() {
        let (is_directive, name) = pool_key(&def);
        if visited.contains(&(is_directive, name.to_string())) {
            continue;
        }

        let discovered =
            DependencyCollector::new(&universe, &mut pool_keys)
                .collect(&def)?;
        if !discovered.is_empty() {
            log::trace!(
                "`{name}` pulled in: {}.",
                discovered.iter()
                    .map(|def| format!("`{}`", def.name()))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
        }
        for dep in discovered {
            queue.push_back(dep.to_owned());
            pool.push(dep.to_owned());
        }

        visited.insert((is_directive, name.to_string()));
    }

    let mut seen: HashSet<(bool, String)> = HashSet::new();
    pool.retain(|def| {
        let (is_directive, name) = pool_key(def);
        seen.insert((is_directive, name.to_string()))
    });
    Ok(pool)
}
