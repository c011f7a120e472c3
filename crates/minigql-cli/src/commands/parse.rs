use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use minigql::ast;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::Write;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct ParseCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more documents or directories containing \
             documents which need to be parsed.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for ParseCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let mut errors: Vec<Box<dyn Error>> = vec![];

        // Extensions are compared without their leading dot.
        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_owned())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut num_skipped_files = 0;
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
                match entry {
                    Ok(entry) => {
                        let path = entry.path();
                        if !entry.file_type().is_file() {
                            log::trace!("Skipping non-file: {path:#?}.");
                            continue;
                        }
                        let ext = path.extension().map(|s| s.to_string_lossy());
                        if ext.is_some_and(|ext| graphql_file_exts.contains(&*ext)) {
                            log::trace!("Found document at {path:#?}.");
                            file_paths.push(path.to_path_buf());
                        } else {
                            log::trace!("Skipping file with a non-matching extension: {path:#?}.");
                            num_skipped_files += 1;
                        }
                    },

                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(Box::new(e));
                    },
                }
            }
        }

        // A single explicitly named file is parsed whatever its extension.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding to parse {first_arg_path:#?} even though it \
                doesn't match any of the --graphql-file-exts ({}).",
                graphql_file_exts.iter()
                    .map(|ext| format!("`.{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            num_skipped_files = 0;
            file_paths.push(first_arg_path.to_owned());
        }

        log::debug!("Found {} documents to parse.", file_paths.len());

        let mut output = String::new();
        let mut num_operations = 0;
        let mut num_type_definitions = 0;
        for path in &file_paths {
            let source = match std::fs::read_to_string(path) {
                Ok(source) => source,
                Err(e) => {
                    errors.push(Box::new(e));
                    continue;
                },
            };
            let document = minigql::parse_document(&source);
            num_operations += document.operations().count();
            num_type_definitions += document.type_definitions().count();
            let _ = writeln!(output, "{}:", path.display());
            output.push_str(&summarize_document(&document));
        }

        if !errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} Errors reading documents: {errors:#?}",
                output_utils::RED_X,
            ));
        }

        CommandResult::stdout(format_args!(
            concat!(
                "{}",
                "{} Parsed all documents:\n",
                "  * Parsed {} files.\n",
                "  * Skipped {} files with other extensions.\n",
                "  * Found {} operations.\n",
                "  * Found {} type definitions.",
            ),
            output,
            output_utils::GREEN_CHECK,
            file_paths.len(),
            num_skipped_files,
            num_operations,
            num_type_definitions,
        ))
    }
}

/// A two-space indented line per definition, e.g.
/// `query GetUser($id: Int!) { user }` or `type User { id name }`.
pub(crate) fn summarize_document(document: &ast::Document) -> String {
    let mut summary = String::new();
    if document.is_empty() {
        summary.push_str("  (no definitions)\n");
    }
    for definition in &document.definitions {
        summary.push_str("  ");
        match definition {
            ast::Definition::Operation(operation) => {
                summary.push_str(operation.kind.as_str());
                if let Some(name) = operation.name() {
                    let _ = write!(summary, " {name}");
                }
                if !operation.variable_definitions.is_empty() {
                    let variables: Vec<String> = operation.variable_definitions
                        .iter()
                        .map(|variable| match &variable.type_annotation {
                            Some(type_annotation) => format!("${}: {type_annotation}", variable.name),
                            None => format!("${}", variable.name),
                        })
                        .collect();
                    let _ = write!(summary, "({})", variables.join(", "));
                }
                let fields: Vec<&str> = operation.selection_set
                    .iter()
                    .flat_map(|selection_set| selection_set.fields())
                    .map(|field| field.name.as_str())
                    .collect();
                let _ = write!(summary, " {}", braced(&fields));
            },
            ast::Definition::Type(type_definition) => {
                let fields: Vec<&str> = type_definition.field_names().collect();
                let _ = write!(summary, "type {} {}", type_definition.name, braced(&fields));
            },
        }
        summary.push('\n');
    }
    summary
}

fn braced(names: &[&str]) -> String {
    if names.is_empty() {
        "{ }".to_string()
    } else {
        format!("{{ {} }}", names.join(" "))
    }
}
