use crate::import_directive::ImportRequest;
use crate::import_directive::WILDCARD;
use crate::ImportSchemaError;

type Result<T> = std::result::Result<T, ImportSchemaError>;

/// Parses a single (already `#`-stripped and trimmed) import line of the form
/// `import <names> from "<path>"`, with an optional trailing `;`. `<names>` is
/// either `*` or a comma-separated list of names. The path may be quoted with
/// either `"` or `'` but must not be empty.
pub fn parse_import_line(line: &str) -> Result<ImportRequest> {
    let malformed = || ImportSchemaError::MalformedImportLine {
        line: line.to_string(),
    };

    let rest = line.trim()
        .strip_prefix("import")
        .filter(|rest| rest.starts_with(char::is_whitespace))
        .ok_or_else(malformed)?;

    let rest = rest.trim_end();
    let rest = rest.strip_suffix(';').unwrap_or(rest).trim_end();

    // The path is everything between the final quote and its matching opener.
    let quote = rest.chars().last()
        .filter(|c| *c == '"' || *c == '\'')
        .ok_or_else(malformed)?;
    let without_closing_quote = &rest[..rest.len() - quote.len_utf8()];
    let path_start = without_closing_quote.rfind(quote).ok_or_else(malformed)?;
    let from = &without_closing_quote[path_start + quote.len_utf8()..];
    if from.is_empty() {
        return Err(malformed());
    }

    let names_part = without_closing_quote[..path_start]
        .trim_end()
        .strip_suffix("from")
        .filter(|names_part| names_part.ends_with(char::is_whitespace))
        .ok_or_else(malformed)?
        .trim();

    let mut imports: Vec<String> = vec![];
    for name in names_part.split(',').map(str::trim) {
        if !is_valid_import_name(name) {
            return Err(malformed());
        }
        if !imports.iter().any(|existing| existing == name) {
            imports.push(name.to_string());
        }
    }

    // A wildcard can't be combined with any other name.
    if imports.len() > 1 && imports.iter().any(|name| name == WILDCARD) {
        return Err(malformed());
    }

    Ok(ImportRequest {
        imports,
        from: from.to_string(),
    })
}

/// Extracts and parses every `# import` line in `sdl`, in file order.
///
/// Only comment lines starting with `# import ` or `#import ` are considered;
/// every other comment is ignored.
pub fn parse_import_lines(sdl: &str) -> Result<Vec<ImportRequest>> {
    sdl.lines()
        .map(str::trim)
        .filter(|line| line.starts_with("# import ") || line.starts_with("#import "))
        .map(|line| parse_import_line(line[1..].trim()))
        .collect()
}

fn is_valid_import_name(name: &str) -> bool {
    if name == WILDCARD {
        return true;
    }
    match name.split_once('.') {
        Some((type_name, field_name)) =>
            is_graphql_name(type_name)
            && (field_name == WILDCARD || is_graphql_name(field_name)),
        None => is_graphql_name(name),
    }
}

fn is_graphql_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => (),
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}
