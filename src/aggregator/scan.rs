use crate::models::{ConfigError, ScanConfig};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .map_or(false, |name| name.starts_with('.'))
}

/// Recursively collect the documents under `root` that the scan config
/// selects, sorted by path
pub fn collect_documents(root: &Path, config: &ScanConfig) -> Result<Vec<PathBuf>, ConfigError> {
    let excludes = config.exclude_patterns()?;

    let mut documents: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(config.follow_links)
        .into_iter()
        .filter_entry(|entry| config.include_hidden || !is_hidden(entry))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::warn!("skipping unreadable entry: {}", err);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| config.matches_extension(entry.path()))
        .filter(|entry| {
            let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
            !excludes.iter().any(|pattern| pattern.matches_path(relative))
        })
        .map(DirEntry::into_path)
        .collect();

    documents.sort();
    tracing::debug!(root = %root.display(), count = documents.len(), "collected documents");
    Ok(documents)
}
