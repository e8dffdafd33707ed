use crate::reporting::print_stats;
use crate::targets::TargetSet;
use crate::utils::{format_record, normalize_path, read_file_content};
use crate::CollectorError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, info, trace};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct CollectorConfig {
    pub root_dir: PathBuf,
    pub output_file: PathBuf,
    pub targets: TargetSet,
    pub no_stats: bool,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        CollectorConfig {
            root_dir: PathBuf::from("."),
            output_file: PathBuf::from("html_files.txt"),
            targets: TargetSet::default(),
            no_stats: false,
        }
    }
}

#[async_trait]
pub trait FileCollector {
    async fn collect_files(&self) -> Result<usize, CollectorError>;
}

pub struct BasicFileCollector {
    config: CollectorConfig,
}

impl BasicFileCollector {
    pub fn new(config: CollectorConfig) -> Self {
        BasicFileCollector { config }
    }
}

#[async_trait]
impl FileCollector for BasicFileCollector {
    async fn collect_files(&self) -> Result<usize, CollectorError> {
        let config = &self.config;

        debug!("Creating output file {:?}", config.output_file);
        let output = File::create(&config.output_file)
            .await
            .map_err(|e| CollectorError::OutputWriteError(e.to_string()))?;
        let mut writer = BufWriter::new(output);

        let mut byte_counts: HashMap<PathBuf, usize> = HashMap::new();
        let mut records_written = 0usize;

        debug!("Walking directory tree at {:?}", config.root_dir);
        for entry in WalkDir::new(&config.root_dir).sort_by_file_name() {
            let entry = entry.map_err(|e| CollectorError::WalkError(e.to_string()))?;
            if !entry.file_type().is_file() {
                continue;
            }

            let file_name = entry.file_name().to_string_lossy();
            if !config.targets.matches(&file_name) {
                trace!("Skipping non-target file: {:?}", entry.path());
                continue;
            }

            debug!("Processing file: {:?}", entry.path());
            let content = read_file_content(entry.path()).await?;

            let rel_path = entry
                .path()
                .strip_prefix(&config.root_dir)
                .map_err(|e| CollectorError::PathError(e.to_string()))?;
            let rel_path = normalize_path(&rel_path.to_string_lossy());

            let record = format_record(&rel_path, &content);
            trace!("Writing record for {} ({} bytes)", rel_path, content.len());
            writer
                .write_all(record.as_bytes())
                .await
                .map_err(|e| CollectorError::OutputWriteError(e.to_string()))?;

            byte_counts.insert(PathBuf::from(&rel_path), content.len());
            records_written += 1;
        }

        writer
            .flush()
            .await
            .map_err(|e| CollectorError::OutputWriteError(e.to_string()))?;

        if !config.no_stats {
            print_stats(&byte_counts);
        }

        info!(
            "Collected {} file(s) into {:?}",
            records_written, config.output_file
        );
        Ok(records_written)
    }
}

pub async fn collect_files(config: CollectorConfig) -> Result<usize, CollectorError> {
    let collector = BasicFileCollector::new(config);
    collector.collect_files().await
}
