use crate::ast;

/// The name under which a `schema { ... }` definition is keyed wherever
/// definitions are looked up or deduplicated by name.
pub const SCHEMA_DEFINITION_NAME: &str = "schema";

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DefinitionKind {
    Directive,
    Enum,
    InputObject,
    Interface,
    Object,
    Scalar,
    Schema,
    Union,
}

/// One top-level SDL definition of a kind that participates in import
/// resolution. Anything else a parsed document may contain (type extensions,
/// for example) has no [Definition] counterpart and is dropped on conversion.
#[derive(Clone, Debug, PartialEq)]
pub enum Definition {
    Directive(ast::schema::DirectiveDefinition),
    Enum(ast::schema::EnumType),
    InputObject(ast::schema::InputObjectType),
    Interface(ast::schema::InterfaceType),
    Object(ast::schema::ObjectType),
    Scalar(ast::schema::ScalarType),
    Schema(ast::schema::SchemaDefinition),
    Union(ast::schema::UnionType),
}
impl Definition {
    pub fn from_ast(def: ast::schema::Definition) -> Option<Self> {
        use ast::schema::Definition as AstDef;
        use ast::schema::TypeDefinition;
        match def {
            AstDef::DirectiveDefinition(def) => Some(Self::Directive(def)),
            AstDef::SchemaDefinition(def) => Some(Self::Schema(def)),
            AstDef::TypeDefinition(TypeDefinition::Enum(def)) => Some(Self::Enum(def)),
            AstDef::TypeDefinition(TypeDefinition::InputObject(def)) => Some(Self::InputObject(def)),
            AstDef::TypeDefinition(TypeDefinition::Interface(def)) => Some(Self::Interface(def)),
            AstDef::TypeDefinition(TypeDefinition::Object(def)) => Some(Self::Object(def)),
            AstDef::TypeDefinition(TypeDefinition::Scalar(def)) => Some(Self::Scalar(def)),
            AstDef::TypeDefinition(TypeDefinition::Union(def)) => Some(Self::Union(def)),
            AstDef::TypeExtension(_) => None,
        }
    }

    pub fn into_ast(self) -> ast::schema::Definition {
        use ast::schema::Definition as AstDef;
        use ast::schema::TypeDefinition;
        match self {
            Self::Directive(def) => AstDef::DirectiveDefinition(def),
            Self::Schema(def) => AstDef::SchemaDefinition(def),
            Self::Enum(def) => AstDef::TypeDefinition(TypeDefinition::Enum(def)),
            Self::InputObject(def) => AstDef::TypeDefinition(TypeDefinition::InputObject(def)),
            Self::Interface(def) => AstDef::TypeDefinition(TypeDefinition::Interface(def)),
            Self::Object(def) => AstDef::TypeDefinition(TypeDefinition::Object(def)),
            Self::Scalar(def) => AstDef::TypeDefinition(TypeDefinition::Scalar(def)),
            Self::Union(def) => AstDef::TypeDefinition(TypeDefinition::Union(def)),
        }
    }

    /// Directives applied to this definition. Directive definitions have none.
    pub fn directives(&self) -> &[ast::schema::Directive] {
        match self {
            Self::Directive(_) => &[],
            Self::Enum(def) => &def.directives,
            Self::InputObject(def) => &def.directives,
            Self::Interface(def) => &def.directives,
            Self::Object(def) => &def.directives,
            Self::Scalar(def) => &def.directives,
            Self::Schema(def) => &def.directives,
            Self::Union(def) => &def.directives,
        }
    }

    pub fn kind(&self) -> DefinitionKind {
        match self {
            Self::Directive(_) => DefinitionKind::Directive,
            Self::Enum(_) => DefinitionKind::Enum,
            Self::InputObject(_) => DefinitionKind::InputObject,
            Self::Interface(_) => DefinitionKind::Interface,
            Self::Object(_) => DefinitionKind::Object,
            Self::Scalar(_) => DefinitionKind::Scalar,
            Self::Schema(_) => DefinitionKind::Schema,
            Self::Union(_) => DefinitionKind::Union,
        }
    }

    /// The name this definition is keyed by. `schema { ... }` blocks have no
    /// name of their own and are keyed as [SCHEMA_DEFINITION_NAME].
    pub fn name(&self) -> &str {
        match self {
            Self::Directive(def) => def.name.as_str(),
            Self::Enum(def) => def.name.as_str(),
            Self::InputObject(def) => def.name.as_str(),
            Self::Interface(def) => def.name.as_str(),
            Self::Object(def) => def.name.as_str(),
            Self::Scalar(def) => def.name.as_str(),
            Self::Schema(_) => SCHEMA_DEFINITION_NAME,
            Self::Union(def) => def.name.as_str(),
        }
    }

    /// Returns a copy of this definition whose fields are restricted to those
    /// named in `field_names`. Kinds without fields are returned unchanged.
    pub fn with_fields_filtered<S: AsRef<str>>(&self, field_names: &[S]) -> Self {
        let keep = |name: &str| field_names.iter().any(|f| f.as_ref() == name);
        let mut def = self.clone();
        match &mut def {
            Self::InputObject(def) => def.fields.retain(|f| keep(&f.name)),
            Self::Interface(def) => def.fields.retain(|f| keep(&f.name)),
            Self::Object(def) => def.fields.retain(|f| keep(&f.name)),
            Self::Directive(_)
            | Self::Enum(_)
            | Self::Scalar(_)
            | Self::Schema(_)
            | Self::Union(_) => (),
        }
        def
    }
}
