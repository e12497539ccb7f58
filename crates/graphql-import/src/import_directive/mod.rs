//! Parsing of `# import` comment directives out of SDL text.

mod import_line_parser;
mod import_request;

pub use import_line_parser::parse_import_line;
pub use import_line_parser::parse_import_lines;
pub use import_request::ImportRequest;
pub use import_request::WILDCARD;

#[cfg(test)]
mod tests;
