//! Error types

use std::path::PathBuf;

/// Errors surfaced by the cascader.
///
/// Selection and initialization never fail: malformed values and stale paths
/// are truncated instead. Only loading an option tree and explicit tab changes
/// report errors.
#[derive(Debug, thiserror::Error)]
pub enum CascaderError {
    /// A tab change was requested while the popover is closed.
    #[error("Cannot switch to level {level}: popover is closed")]
    PopoverClosed { level: usize },

    /// A tab change targeted a level that has no rendered panel.
    #[error("Level {level} is not rendered (rendered levels: 1..={rendered})")]
    LevelNotRendered { level: usize, rendered: usize },

    /// The option tree could not be parsed.
    #[error("Invalid option tree: {0}")]
    Options(#[from] serde_json::Error),

    /// The option tree file could not be read.
    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CascaderError {
    /// Creates a new level-not-rendered error.
    pub fn level_not_rendered(level: usize, rendered: usize) -> Self {
        Self::LevelNotRendered { level, rendered }
    }
}
