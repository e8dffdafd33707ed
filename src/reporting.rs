use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{debug, info};

/// Prints the statistics of collected file sizes.
pub fn print_stats(byte_counts: &HashMap<PathBuf, usize>) {
    debug!("Printing statistics for collected files");

    let mut entries: Vec<_> = byte_counts.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    let total_bytes: usize = entries.iter().map(|(_, &count)| count).sum();

    info!(
        "Collected {} file(s) ({} bytes)",
        entries.len(),
        total_bytes
    );
    for (path, &count) in entries {
        info!("    {} ({} bytes)", path.display(), count);
    }
}
