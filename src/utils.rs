use crate::CollectorError;
use std::path::Path;
use tokio::fs as async_fs;

pub fn normalize_path(path: &str) -> String {
    let path = Path::new(path);
    let normalized_path = if path.is_relative() && path.starts_with("./") {
        path.strip_prefix("./").unwrap().to_owned()
    } else {
        path.to_owned()
    };

    normalized_path.to_string_lossy().replace("\\", "/")
}

pub async fn read_file_content(file_path: &Path) -> Result<String, CollectorError> {
    async_fs::read_to_string(file_path)
        .await
        .map_err(|err| CollectorError::FileReadError(err.to_string()))
}

/// Replaces every `'` with `\'` so the content survives inside the
/// record's single-quoted wrapper.
pub fn escape_single_quotes(content: &str) -> String {
    content.replace('\'', "\\'")
}

/// Formats one output record: the relative path, the escaped content
/// in single quotes, and the blank line terminating the record.
pub fn format_record(rel_path: &str, content: &str) -> String {
    format!("{} = '{}'\n\n", rel_path, escape_single_quotes(content))
}
