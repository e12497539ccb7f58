use crate::file_reader::SourceReadError;
use crate::loc::Location;
use thiserror::Error;

/// Every way that resolving a schema's imports can fail. All of these abort
/// the whole import; no partial output is ever produced.
#[derive(Debug, Error, PartialEq)]
pub enum ImportSchemaError {
    #[error("Malformed import line: `{line}`")]
    MalformedImportLine {
        line: String,
    },

    #[error("Directive {directive_name}: Couldn't find type {directive_name} in any of the schemas.")]
    MissingDirective {
        directive_name: String,
    },

    #[error("Couldn't find interface {interface_name} in any of the schemas.")]
    MissingInterface {
        interface_name: String,
    },

    /// Raised for an unresolvable field, argument, union member or schema
    /// operation type. Field-level references are prefixed with the name of
    /// the field (`Field <name>: ...`), other references are not.
    #[error(
        "{}Couldn't find type {type_name} in any of the schemas.",
        field_prefix(.field_name)
    )]
    MissingType {
        field_name: Option<String>,
        type_name: String,
    },

    #[error("Error parsing SDL from {location}: {err}")]
    ParseError {
        location: Location,
        err: String,
    },

    #[error("Error loading SDL source: {0}")]
    SourceReadError(Box<SourceReadError>),
}
impl std::convert::From<SourceReadError> for ImportSchemaError {
    fn from(err: SourceReadError) -> Self {
        Self::SourceReadError(Box::new(err))
    }
}

fn field_prefix(field_name: &Option<String>) -> String {
    match field_name {
        Some(field_name) => format!("Field {field_name}: "),
        None => String::new(),
    }
}
