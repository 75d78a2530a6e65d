//! Cascader configuration

use serde::Deserialize;

/// Placeholder shown when nothing is selected.
pub const DEFAULT_PLACEHOLDER: &str = "请选择";

/// Tab title used for levels without an explicit title.
pub const DEFAULT_TAB_TITLE: &str = "省份";

/// Host-supplied settings for a [`Cascader`](crate::Cascader).
///
/// # Example
///
/// ```
/// use cascader::CascaderConfig;
///
/// let config = CascaderConfig::default()
///     .with_placeholder("Choose a region")
///     .with_tab_titles(["Province", "City", "District"])
///     .with_change_on_select(true);
///
/// assert_eq!(config.tab_title(2), "City");
/// assert_eq!(config.tab_title(4), "省份");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CascaderConfig {
    /// Text shown on the trigger when nothing is selected.
    ///
    /// Default: `"请选择"`
    pub placeholder: String,

    /// Emit partial selections on every select, not only on a completed one.
    ///
    /// Default: false
    pub change_on_select: bool,

    /// Per-level tab titles, indexed from level 1.
    pub tab_titles: Vec<String>,

    /// Title for levels beyond `tab_titles`.
    ///
    /// Default: `"省份"`
    pub default_tab_title: String,
}

impl Default for CascaderConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            change_on_select: false,
            tab_titles: Vec::new(),
            default_tab_title: DEFAULT_TAB_TITLE.to_string(),
        }
    }
}

impl CascaderConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the placeholder.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Sets the change-on-select policy.
    pub fn with_change_on_select(mut self, enabled: bool) -> Self {
        self.change_on_select = enabled;
        self
    }

    /// Sets the per-level tab titles.
    pub fn with_tab_titles<I, S>(mut self, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tab_titles = titles.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the fallback tab title.
    pub fn with_default_tab_title(mut self, title: impl Into<String>) -> Self {
        self.default_tab_title = title.into();
        self
    }

    /// Title of the tab for `level` (1-based).
    pub fn tab_title(&self, level: usize) -> &str {
        level
            .checked_sub(1)
            .and_then(|index| self.tab_titles.get(index))
            .map(String::as_str)
            .unwrap_or(self.default_tab_title.as_str())
    }
}
