use crate::file_discovery;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use std::fmt::Write;
use std::path::PathBuf;

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
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files which need to be parsed.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for ParseCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let discovered = file_discovery::find_graphql_files(
            &self.file_or_dir_paths,
            &self.graphql_file_exts,
        );
        if !discovered.errors.is_empty() {
            return CommandResult::failure(format_args!(
                "{} Errors locating GraphQL files: {:#?}",
                output_utils::RED_X,
                discovered.errors,
            ));
        }

        let mut num_operations = 0;
        let mut num_type_definitions = 0;
        let mut num_errors = 0;
        let mut num_files_with_errors = 0;
        let mut diagnostics = String::new();
        for file_path in &discovered.file_paths {
            let source = match Self::read_source(file_path) {
                Ok(source) => source,
                Err(result) => return result,
            };

            log::debug!("Parsing {file_path:#?}...");
            let result = minigql::parser::parse(&source);
            num_operations += result.ast().operations().count();
            num_type_definitions += result.ast().type_definitions().count();
            if result.has_errors() {
                num_errors += result.errors.len();
                num_files_with_errors += 1;
                for error in &result.errors {
                    let _ = write!(
                        diagnostics,
                        "{}:\n{}\n",
                        file_path.display(),
                        error.format_detailed(Some(&source)),
                    );
                }
            }
        }

        if num_errors > 0 {
            return CommandResult::failure(format_args!(
                "{} Found {num_errors} parse errors in {num_files_with_errors} \
                files:\n\n{}",
                output_utils::RED_X,
                diagnostics.trim_end(),
            ));
        }

        CommandResult::success(format_args!(
            concat!(
                "{} All GraphQL parsed successfully:\n",
                "  * Parsed {} files.\n",
                "  * Skipped {} non-graphql files.\n",
                "  * Found {} type definitions.\n",
                "  * Found {} operations.",
            ),
            output_utils::GREEN_CHECK,
            discovered.file_paths.len(),
            discovered.num_skipped_files,
            num_type_definitions,
            num_operations,
        ))
    }
}
