use std::collections::HashSet;
use std::sync::OnceLock;

fn builtin_scalar_names() -> &'static HashSet<&'static str> {
    static NAMES: OnceLock<HashSet<&'static str>> = OnceLock::new();
    NAMES.get_or_init(|| {
        HashSet::from([
            "Boolean",
            "Float",
            "ID",
            "Int",
            "String",
        ])
    })
}

fn builtin_directive_names() -> &'static HashSet<&'static str> {
    static NAMES: OnceLock<HashSet<&'static str>> = OnceLock::new();
    NAMES.get_or_init(|| {
        HashSet::from([
            "deprecated",
            "include",
            "skip",
            "specifiedBy",
        ])
    })
}

pub(crate) fn is_builtin_directive(name: &str) -> bool {
    builtin_directive_names().contains(name)
}

pub(crate) fn is_builtin_scalar(name: &str) -> bool {
    builtin_scalar_names().contains(name)
}
