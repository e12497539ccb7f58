//! Conversion between SDL text and lists of [Definition]s, backed by
//! `graphql-parser`'s schema parser and canonical printer.

use crate::ast;
use crate::Definition;
use crate::ImportSchemaError;
use crate::Location;

type Result<T> = std::result::Result<T, ImportSchemaError>;

/// Parses `content` into the [Definition]s it contains, in document order.
///
/// A document with nothing but whitespace, commas and comments (for example a
/// file containing only `# import` lines) yields an empty list rather than a
/// parse error.
pub fn parse_sdl(content: &str, location: &Location) -> Result<Vec<Definition>> {
    if is_blank_sdl(content) {
        return Ok(vec![]);
    }

    let ast_doc =
        graphql_parser::schema::parse_schema::<String>(content)
            .map_err(|err| ImportSchemaError::ParseError {
                location: location.to_owned(),
                err: err.to_string(),
            })?.into_static();

    Ok(ast_doc.definitions
        .into_iter()
        .filter_map(Definition::from_ast)
        .collect())
}

/// Prints `definitions` as one SDL document: two-space indented blocks with a
/// blank line between top-level definitions.
pub fn print_sdl(definitions: Vec<Definition>) -> String {
    let doc = ast::schema::Document {
        definitions: definitions.into_iter()
            .map(Definition::into_ast)
            .collect(),
    };
    doc.to_string()
}

fn is_blank_sdl(content: &str) -> bool {
    content.lines().all(|line| {
        let code = match line.find('#') {
            Some(idx) => &line[..idx],
            None => line,
        };
        code.chars().all(|c| c.is_whitespace() || c == ',' || c == '\u{feff}')
    })
}
