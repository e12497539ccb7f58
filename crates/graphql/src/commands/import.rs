use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use graphql_import::ImportOptions;
use graphql_import::SchemaImporter;
use graphql_import::source::DefaultModuleResolver;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct ImportCmd {
    #[arg(
        help="Additional type names (beyond Query, Mutation and Subscription) \
             whose definitions should be field-merged across files.",
        long="mergeable-type",
        value_delimiter=',',
    )]
    mergeable_types: Vec<String>,

    #[arg(
        default_value="node_modules",
        help="Name of the directory searched in each ancestor directory when \
             an import target can't be found relative to the importing file.",
        long,
    )]
    module_dir: String,

    #[arg(
        help="Write the resolved schema to this file instead of stdout.",
        long,
        short='o',
    )]
    out: Option<PathBuf>,

    #[arg(
        help="Register a named in-memory schema as NAME=PATH. Imports whose \
             target is NAME load the contents of PATH.",
        long="schema",
        value_parser=parse_named_schema,
    )]
    schemas: Vec<(String, PathBuf)>,

    #[arg(
        help="The root schema: a file path, a glob pattern or a registered \
             schema name.",
        name="ROOT_SCHEMA",
        required=true,
    )]
    root: String,
}

#[inherent::inherent]
impl RunnableCommand for ImportCmd {
    pub fn run(self, _cli: Cli) -> CommandResult {
        let mut options = ImportOptions {
            mergeable_types: self.mergeable_types,
            ..ImportOptions::default()
        };
        for (name, path) in &self.schemas {
            log::debug!("Registering schema `{name}` from {path:#?}.");
            match std::fs::read_to_string(path) {
                Ok(sdl) => {
                    options.schemas.insert(name.to_owned(), sdl);
                },
                Err(err) => return CommandResult::stderr(format_args!(
                    "{} Failed to read schema `{name}` from {path:#?}: {err}",
                    output_utils::RED_X,
                )),
            }
        }

        let resolved = SchemaImporter::new()
            .with_schemas(options.schemas)
            .with_mergeable_types(options.mergeable_types)
            .with_module_resolver(Box::new(
                DefaultModuleResolver::new().with_module_dir_name(self.module_dir),
            ))
            .import(&self.root);

        let sdl = match resolved {
            Ok(sdl) => sdl,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} Failed to import `{}`: {err}",
                output_utils::RED_X,
                self.root,
            )),
        };

        match self.out {
            Some(out_path) => match std::fs::write(&out_path, sdl) {
                Ok(()) => {
                    log::info!(
                        "{} Wrote resolved schema to {out_path:#?}.",
                        output_utils::GREEN_CHECK,
                    );
                    CommandResult::success()
                },
                Err(err) => CommandResult::stderr(format_args!(
                    "{} Failed to write {out_path:#?}: {err}",
                    output_utils::RED_X,
                )),
            },
            None => CommandResult::stdout(format_args!("{}", sdl.trim_end())),
        }
    }
}

fn parse_named_schema(arg: &str) -> Result<(String, PathBuf), String> {
    match arg.split_once('=') {
        Some((name, path)) if !name.is_empty() && !path.is_empty() =>
            Ok((name.to_string(), PathBuf::from(path))),
        _ => Err(format!("expected NAME=PATH, got `{arg}`")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_schema_arg() {
        assert_eq!(
            parse_named_schema("posts=schema/posts.graphql"),
            Ok(("posts".to_string(), PathBuf::from("schema/posts.graphql"))),
        );
        assert!(parse_named_schema("posts").is_err());
        assert!(parse_named_schema("=posts.graphql").is_err());
    }
}
