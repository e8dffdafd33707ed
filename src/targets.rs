use tracing::debug;

/// Filenames collected by default: the TypeScript sources of the
/// authentication module.
pub const DEFAULT_TARGET_FILENAMES: &[&str] = &[
    "authController.ts",
    "authService.ts",
    "auth.middleware.ts",
    "auth.routes.ts",
    "error.middleware.ts",
    "User.ts",
];

/// The allow-list of filename suffixes deciding which files are
/// collected. Matching is a case-sensitive suffix test on the file
/// name only, never on the directory part.
#[derive(Debug, Clone)]
pub struct TargetSet {
    suffixes: Vec<String>,
}

impl TargetSet {
    pub fn new(suffixes: Option<Vec<String>>) -> Self {
        let suffixes_to_use = suffixes.unwrap_or_else(|| {
            DEFAULT_TARGET_FILENAMES
                .iter()
                .map(|s| s.to_string())
                .collect()
        });

        debug!("Using target filename suffixes: {:?}", suffixes_to_use);

        TargetSet {
            suffixes: suffixes_to_use,
        }
    }

    pub fn matches(&self, file_name: &str) -> bool {
        self.suffixes
            .iter()
            .any(|suffix| file_name.ends_with(suffix.as_str()))
    }
}

impl Default for TargetSet {
    fn default() -> Self {
        TargetSet::new(None)
    }
}
