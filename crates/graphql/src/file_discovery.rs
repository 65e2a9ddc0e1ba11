use anyhow::Context;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, Default)]
pub(crate) struct DiscoveredFiles {
    pub file_paths: Vec<PathBuf>,
    pub num_skipped_files: usize,
    pub errors: Vec<anyhow::Error>,
}

/// Normalizes extensions given as `graphql` or `.graphql` to the
/// dot-less form that [`Path::extension`] returns.
pub(crate) fn normalize_exts(exts: &[String]) -> HashSet<String> {
    exts.iter()
        .map(|ext| ext.trim().trim_start_matches('.').to_string())
        .filter(|ext| !ext.is_empty())
        .collect()
}

fn has_graphql_ext(path: &Path, graphql_file_exts: &HashSet<String>) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy())
        .is_some_and(|ext| graphql_file_exts.contains(ext.as_ref()))
}

/// Finds every file at or under `paths` whose extension is one of
/// `graphql_file_exts`, in a stable order.
pub(crate) fn find_graphql_files(
    paths: &[PathBuf],
    graphql_file_exts: &[String],
) -> DiscoveredFiles {
    let graphql_file_exts = normalize_exts(graphql_file_exts);
    let mut discovered = DiscoveredFiles::default();

    log::debug!("Scanning {} input paths...", paths.len());
    for path in paths {
        for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::trace!(
                        "Encountered an error while iterating recursive \
                        filesystem entities at/under {path:#?}."
                    );
                    discovered.errors.push(e.into());
                    continue
                },
            };

            let entry_path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {entry_path:#?}.");
                continue;
            }
            if !has_graphql_ext(entry_path, &graphql_file_exts) {
                log::trace!("Skipping non-graphql file: {entry_path:#?}.");
                discovered.num_skipped_files += 1;
                continue;
            }
            log::trace!("Found file at {entry_path:#?}.");
            match std::fs::canonicalize(entry_path)
                .with_context(|| format!("failed to resolve {entry_path:?}"))
            {
                Ok(canonical) => discovered.file_paths.push(canonical),
                Err(e) => discovered.errors.push(e),
            }
        }
    }

    // A single explicit file argument is taken as a GraphQL file even if its
    // extension doesn't match.
    if discovered.file_paths.is_empty()
        && paths.len() == 1
        && let Some(first_arg_path) = paths.first()
        && first_arg_path.is_file() {
        log::warn!(
            "Proceeding with {first_arg_path:#?} even though it doesn't match \
            any of the --graphql-file-exts ({}).",
            graphql_file_exts.iter()
                .map(|ext| format!("`{ext}`"))
                .collect::<Vec<_>>()
                .join(", "),
        );
        discovered.num_skipped_files = discovered.num_skipped_files.saturating_sub(1);
        discovered.file_paths.push(first_arg_path.clone());
    }

    log::debug!("Found {} GraphQL files.", discovered.file_paths.len());
    discovered
}
