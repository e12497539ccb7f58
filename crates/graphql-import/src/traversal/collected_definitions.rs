use crate::Definition;

/// The output of an [ImportGraphTraversal](crate::ImportGraphTraversal): one
/// entry per visited fragment, in visitation order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CollectedDefinitions {
    /// Every recognized definition in each visited fragment.
    pub all_definitions: Vec<Vec<Definition>>,

    /// The subset of each visited fragment's definitions requested by the
    /// import line that led to it.
    pub type_definitions: Vec<Vec<Definition>>,
}
impl CollectedDefinitions {
    /// All definitions of all fragments, flattened in visitation order.
    pub fn flat_all_definitions(&self) -> Vec<Definition> {
        self.all_definitions.iter().flatten().cloned().collect()
    }

    /// Like [CollectedDefinitions::flat_all_definitions], except that each
    /// fragment's definitions are replaced by that fragment's requested copy
    /// of the same name, when there is one. References that resolve into a
    /// fragment therefore see the fields its import line narrowed it to.
    pub fn flat_effective_definitions(&self) -> Vec<Definition> {
        let no_requests = vec![];
        self.all_definitions.iter()
            .enumerate()
            .flat_map(|(idx, fragment_defs)| {
                let requested = self.type_definitions.get(idx).unwrap_or(&no_requests);
                fragment_defs.iter().map(move |def| {
                    requested.iter()
                        .find(|req| req.kind() == def.kind() && req.name() == def.name())
                        .unwrap_or(def)
                        .to_owned()
                })
            })
            .collect()
    }

    /// All requested definitions of all fragments, flattened in visitation
    /// order.
    pub fn flat_type_definitions(&self) -> Vec<Definition> {
        self.type_definitions.iter().flatten().cloned().collect()
    }
}
