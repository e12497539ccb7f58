use crate::complete_definition_pool;
use crate::sdl::parse_sdl;
use crate::sdl::print_sdl;
use crate::Definition;
use crate::ImportSchemaError;
use crate::Location;

type Result<T> = std::result::Result<T, ImportSchemaError>;

fn defs(sdl: &str) -> Vec<Definition> {
    parse_sdl(sdl, &Location::Inline(0)).unwrap()
}

fn names(defs: &[Definition]) -> Vec<&str> {
    defs.iter().map(Definition::name).collect()
}

/// Runs the closure with `requested` as both the initial pool and queue.
fn complete(universe: &str, requested: &str) -> Result<Vec<Definition>> {
    let requested = defs(requested);
    complete_definition_pool(&defs(universe), requested.to_owned(), requested)
}

mod discovery {
    use super::*;

    #[test]
    fn field_and_argument_types() -> Result<()> {
        let pool = complete(
            concat!(
                "type Post { author(filter: AuthorFilter): Author }\n",
                "type Author { id: ID! }\n",
                "input AuthorFilter { role: Role }\n",
                "enum Role { ADMIN USER }\n",
                "type Unrelated { id: ID! }\n",
            ),
            "type Query { posts: [Post!]! }",
        )?;
        assert_eq!(names(&pool), vec!["Query", "Post", "Author", "AuthorFilter", "Role"]);
        Ok(())
    }

    #[test]
    fn builtin_scalars_need_no_definition() -> Result<()> {
        let pool = complete(
            "",
            "type Query { a: String b: Int c: Float d: Boolean e: ID }",
        )?;
        assert_eq!(names(&pool), vec!["Query"]);
        Ok(())
    }

    #[test]
    fn union_members() -> Result<()> {
        let pool = complete(
            "type A { id: ID }\ntype B { id: ID }\nunion AB = A | B",
            "type Query { ab: AB }",
        )?;
        assert_eq!(names(&pool), vec!["Query", "AB", "A", "B"]);
        Ok(())
    }

    #[test]
    fn interface_pulls_in_every_implementation() -> Result<()> {
        let pool = complete(
            concat!(
                "interface Node { id: ID! }\n",
                "type User implements Node { id: ID! }\n",
                "type Post implements Node { id: ID! }\n",
                "type Loner { id: ID! }\n",
            ),
            "type Query { node: Node }",
        )?;
        assert_eq!(names(&pool), vec!["Query", "Node", "User", "Post"]);
        Ok(())
    }

    #[test]
    fn object_interfaces() -> Result<()> {
        let pool = complete(
            "interface Node { id: ID! }",
            "type User implements Node { id: ID! }",
        )?;
        assert_eq!(names(&pool), vec!["User", "Node"]);
        Ok(())
    }

    #[test]
    fn directives_and_their_arguments() -> Result<()> {
        let pool = complete(
            concat!(
                "directive @auth(requires: Role) on OBJECT | FIELD_DEFINITION\n",
                "directive @upper on FIELD_DEFINITION\n",
                "enum Role { ADMIN }\n",
            ),
            "type Query @auth(requires: ADMIN) { name: String @upper @deprecated }",
        )?;
        assert_eq!(names(&pool), vec!["Query", "auth", "Role", "upper"]);
        Ok(())
    }

    #[test]
    fn schema_operation_types() -> Result<()> {
        let pool = complete(
            "type Query { a: String }\ntype Mutation { b: String }",
            "schema { query: Query mutation: Mutation }",
        )?;
        assert_eq!(names(&pool), vec!["schema", "Query", "Mutation"]);
        Ok(())
    }

    #[test]
    fn type_cycles_terminate() -> Result<()> {
        let pool = complete(
            "type A { b: B }\ntype B { a: A c: C }\ntype C { a: A }",
            "type Query { a: A }",
        )?;
        assert_eq!(names(&pool), vec!["Query", "A", "B", "C"]);
        Ok(())
    }

    #[test]
    fn directive_and_type_namespaces_are_separate() -> Result<()> {
        let pool = complete(
            "directive @key on OBJECT\nscalar key",
            "type Query @key { a: key }",
        )?;
        assert_eq!(pool.len(), 3);
        Ok(())
    }
}

mod precedence {
    use super::*;

    #[test]
    fn earliest_universe_definition_wins() -> Result<()> {
        let pool = complete(
            "type A { first: String }\ntype A { second: String }",
            "type Query { a: A }",
        )?;
        assert_eq!(
            print_sdl(pool),
            print_sdl(defs("type Query { a: A }\ntype A { first: String }")),
        );
        Ok(())
    }

    #[test]
    fn pooled_definition_shadows_universe() -> Result<()> {
        let pool = complete(
            "type Query { a: A }\ntype A { fromUniverse: String }",
            "type Query { a: A }\ntype A { local: String }",
        )?;
        assert_eq!(
            print_sdl(pool),
            print_sdl(defs("type Query { a: A }\ntype A { local: String }")),
        );
        Ok(())
    }

    #[test]
    fn queued_but_unpooled_definitions_contribute_dependencies_only() -> Result<()> {
        let universe = defs("type Nested { dep: Dep }\ntype Dep { id: ID }");
        let pool = defs("type Query { id: ID }");
        let mut queue = pool.to_owned();
        queue.extend(defs("type Nested { dep: Dep }"));
        let completed = complete_definition_pool(&universe, pool, queue)?;
        assert_eq!(names(&completed), vec!["Query", "Dep"]);
        Ok(())
    }
}

mod errors {
    use super::*;

    #[test]
    fn missing_field_type() {
        assert_eq!(
            complete("", "type Query { posts: [Post] }"),
            Err(ImportSchemaError::MissingType {
                field_name: Some("posts".to_string()),
                type_name: "Post".to_string(),
            }),
        );
        assert_eq!(
            ImportSchemaError::MissingType {
                field_name: Some("posts".to_string()),
                type_name: "Post".to_string(),
            }.to_string(),
            "Field posts: Couldn't find type Post in any of the schemas.",
        );
    }

    #[test]
    fn missing_argument_type() {
        assert_eq!(
            complete("", "type Query { posts(where: PostFilter): String }"),
            Err(ImportSchemaError::MissingType {
                field_name: Some("where".to_string()),
                type_name: "PostFilter".to_string(),
            }),
        );
    }

    #[test]
    fn missing_input_field_type() {
        assert_eq!(
            complete("", "input Filter { date: Date }"),
            Err(ImportSchemaError::MissingType {
                field_name: Some("date".to_string()),
                type_name: "Date".to_string(),
            }),
        );
    }

    #[test]
    fn missing_union_member() {
        let err = complete("type A { id: ID }", "union AB = A | B").unwrap_err();
        assert_eq!(err, ImportSchemaError::MissingType {
            field_name: None,
            type_name: "B".to_string(),
        });
        assert_eq!(err.to_string(), "Couldn't find type B in any of the schemas.");
    }

    #[test]
    fn missing_interface() {
        let err = complete("", "type User implements Node { id: ID! }").unwrap_err();
        assert_eq!(err, ImportSchemaError::MissingInterface {
            interface_name: "Node".to_string(),
        });
        assert_eq!(err.to_string(), "Couldn't find interface Node in any of the schemas.");
    }

    #[test]
    fn missing_directive() {
        let err = complete("", "type Query { a: String @upper }").unwrap_err();
        assert_eq!(err, ImportSchemaError::MissingDirective {
            directive_name: "upper".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Directive upper: Couldn't find type upper in any of the schemas.",
        );
    }

    #[test]
    fn missing_schema_operation_type() {
        assert_eq!(
            complete("", "schema { query: Query }"),
            Err(ImportSchemaError::MissingType {
                field_name: None,
                type_name: "Query".to_string(),
            }),
        );
    }
}
