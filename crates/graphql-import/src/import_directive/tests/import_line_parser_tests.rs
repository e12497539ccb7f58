use crate::import_directive::parse_import_line;
use crate::import_directive::parse_import_lines;
use crate::import_directive::ImportRequest;
use crate::ImportSchemaError;
use proptest::prelude::*;

type Result<T> = std::result::Result<T, ImportSchemaError>;

fn assert_malformed(line: &str) {
    assert_eq!(
        parse_import_line(line),
        Err(ImportSchemaError::MalformedImportLine {
            line: line.to_string(),
        }),
    );
}

mod single_line {
    use super::*;

    #[test]
    fn single_name() -> Result<()> {
        assert_eq!(
            parse_import_line(r#"import A from "schema.graphql""#)?,
            ImportRequest::new(["A"], "schema.graphql"),
        );
        Ok(())
    }

    #[test]
    fn multiple_names_with_odd_spacing() -> Result<()> {
        assert_eq!(
            parse_import_line(r#"import   A ,B,   C   from "schema.graphql""#)?,
            ImportRequest::new(["A", "B", "C"], "schema.graphql"),
        );
        Ok(())
    }

    #[test]
    fn wildcard() -> Result<()> {
        let request = parse_import_line(r#"import * from "schema.graphql""#)?;
        assert!(request.is_wildcard());
        assert_eq!(request, ImportRequest::wildcard("schema.graphql"));
        Ok(())
    }

    #[test]
    fn dotted_field_names() -> Result<()> {
        assert_eq!(
            parse_import_line(r#"import Query.posts, Query.*, Post from "a.graphql""#)?,
            ImportRequest::new(["Query.posts", "Query.*", "Post"], "a.graphql"),
        );
        Ok(())
    }

    #[test]
    fn single_quotes_and_trailing_semicolon() -> Result<()> {
        assert_eq!(
            parse_import_line("import A from 'schema.graphql';")?,
            ImportRequest::new(["A"], "schema.graphql"),
        );
        Ok(())
    }

    #[test]
    fn package_style_path() -> Result<()> {
        assert_eq!(
            parse_import_line(r#"import Foo from "some-package/schema.graphql""#)?,
            ImportRequest::new(["Foo"], "some-package/schema.graphql"),
        );
        Ok(())
    }

    #[test]
    fn duplicate_names_are_collapsed() -> Result<()> {
        assert_eq!(
            parse_import_line(r#"import A, B, A from "a.graphql""#)?,
            ImportRequest::new(["A", "B"], "a.graphql"),
        );
        Ok(())
    }

    #[test]
    fn missing_from() {
        assert_malformed(r#"import A "schema.graphql""#);
    }

    #[test]
    fn missing_path() {
        assert_malformed("import A from");
    }

    #[test]
    fn empty_path() {
        assert_malformed(r#"import A from """#);
        assert_malformed("import A from ''");
    }

    #[test]
    fn unterminated_path() {
        assert_malformed(r#"import A from "schema.graphql"#);
    }

    #[test]
    fn missing_names() {
        assert_malformed(r#"import from "schema.graphql""#);
    }

    #[test]
    fn empty_name_in_list() {
        assert_malformed(r#"import A,,B from "schema.graphql""#);
    }

    #[test]
    fn wildcard_mixed_with_names() {
        assert_malformed(r#"import *, A from "schema.graphql""#);
    }

    #[test]
    fn not_an_import() {
        assert_malformed(r#"importA from "schema.graphql""#);
        assert_malformed("something else entirely");
    }
}

mod document_scan {
    use super::*;

    #[test]
    fn collects_import_lines_in_file_order() -> Result<()> {
        let sdl = concat!(
            "# import A from \"a.graphql\"\n",
            "# a regular comment\n",
            "#import B, C from 'b.graphql'\n",
            "   # import * from \"c.graphql\";\n",
            "type Query { a: A }\n",
        );
        assert_eq!(parse_import_lines(sdl)?, vec![
            ImportRequest::new(["A"], "a.graphql"),
            ImportRequest::new(["B", "C"], "b.graphql"),
            ImportRequest::wildcard("c.graphql"),
        ]);
        Ok(())
    }

    #[test]
    fn ignores_unrelated_comments() -> Result<()> {
        let sdl = concat!(
            "# important: not an import\n",
            "#imports are nice\n",
            "# import\n",
            "type Query { a: String }\n",
        );
        assert!(parse_import_lines(sdl)?.is_empty());
        Ok(())
    }

    #[test]
    fn malformed_import_line_fails_the_scan() {
        let err = parse_import_lines("# import A from \"\"\ntype Q { a: A }").unwrap_err();
        assert_eq!(err, ImportSchemaError::MalformedImportLine {
            line: "import A from \"\"".to_string(),
        });
    }
}

proptest! {
    #[test]
    fn parses_any_list_of_names(
        names in prop::collection::hash_set("[A-Za-z_][A-Za-z0-9_]{0,8}", 1..6),
        path in "[a-z]{1,8}/[a-z]{1,8}\\.graphql",
    ) {
        let names: Vec<String> = names.into_iter().collect();
        let line = format!("import {} from \"{path}\"", names.join(" , "));
        let request = parse_import_line(&line).unwrap();
        prop_assert_eq!(request.imports, names);
        prop_assert_eq!(request.from, path);
    }
}
