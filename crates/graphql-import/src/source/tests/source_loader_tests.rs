use crate::source::DefaultSourceLoader;
use crate::source::LoadedSource;
use crate::source::SourceLoader;
use crate::ImportSchemaError;
use crate::Location;
use crate::SourceReadError;
use indexmap::IndexMap;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, ImportSchemaError>;

#[test]
fn named_schema_takes_precedence() -> Result<()> {
    let mut loader = DefaultSourceLoader::new(IndexMap::from([
        ("posts".to_string(), "type Post { id: ID! }".to_string()),
    ]));
    assert_eq!(loader.load("posts")?, LoadedSource {
        content: "type Post { id: ID! }".to_string(),
        location: Location::Named("posts".to_string()),
    });
    Ok(())
}

#[test]
fn file_path() -> Result<()> {
    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join("a.graphql");
    std::fs::write(&file_path, "type A { a: String }").unwrap();

    let mut loader = DefaultSourceLoader::default();
    let loaded = loader.load(&file_path.display().to_string())?;
    assert_eq!(loaded.content, "type A { a: String }");
    assert_eq!(
        loaded.location,
        Location::File(std::fs::canonicalize(&file_path).unwrap()),
    );
    Ok(())
}

#[test]
fn glob_concatenates_matches() -> Result<()> {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.graphql"), "type A { a: String }").unwrap();
    std::fs::write(dir.path().join("b.graphql"), "type B { b: String }").unwrap();
    std::fs::write(dir.path().join("c.txt"), "not graphql").unwrap();

    let pattern = format!("{}/*.graphql", dir.path().display());
    let mut loader = DefaultSourceLoader::default();
    let loaded = loader.load(&pattern)?;
    assert_eq!(loaded.content, "type A { a: String }\ntype B { b: String }");
    assert_eq!(loaded.location, Location::Glob(pattern));
    Ok(())
}

#[test]
fn inline_sdl_fallback_gets_distinct_locations() -> Result<()> {
    let mut loader = DefaultSourceLoader::default();
    let first = loader.load("type Query { a: [String] }")?;
    let second = loader.load("type Query {\n  b: Int\n}")?;
    assert_eq!(first.content, "type Query { a: [String] }");
    assert_eq!(first.location, Location::Inline(0));
    assert_eq!(second.location, Location::Inline(1));
    Ok(())
}

#[test]
fn missing_graphql_file_is_an_error() {
    let mut loader = DefaultSourceLoader::default();
    assert_eq!(
        loader.load("does/not/exist.graphql"),
        Err(ImportSchemaError::SourceReadError(Box::new(
            SourceReadError::PathIsNotAFile(PathBuf::from("does/not/exist.graphql")),
        ))),
    );
}

#[test]
fn invalid_glob_pattern_is_an_error() {
    let mut loader = DefaultSourceLoader::default();
    let pattern_err = glob::Pattern::new("schemas/[.graphql").unwrap_err();
    assert_eq!(
        loader.load("schemas/[.graphql"),
        Err(ImportSchemaError::SourceReadError(Box::new(
            SourceReadError::InvalidGlobPattern {
                pattern: "schemas/[.graphql".to_string(),
                err: pattern_err,
            },
        ))),
    );
}
