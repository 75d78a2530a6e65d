//! Cascader widget - a multi-level selector shown as tabs in a popover.

use std::fmt;

use crate::config::CascaderConfig;
use crate::error::CascaderError;
use crate::navigator::{Panel, find_option, panels_for};
use crate::option::OptionNode;
use crate::path::{PathState, SelectOutcome, SelectionLabel};
use crate::popover::PopoverState;
use crate::render::{CascaderRenderer, PanelView};

/// Callback receiving the selected labels, root first.
pub type ChangeHandler<K> = Box<dyn FnMut(&[SelectionLabel<K>])>;

/// A cascading selector.
///
/// Owns the option tree, the selection path and the popover state. Every
/// transition ends by re-rendering through the [`CascaderRenderer`].
///
/// # Example
///
/// ```
/// use cascader::{Cascader, OptionId, OptionNode, TextRenderer};
///
/// let options: Vec<OptionNode<OptionId>> = vec![OptionNode::branch(
///     1,
///     "A",
///     vec![OptionNode::leaf(11, "A1")],
/// )];
///
/// let mut cascader = Cascader::new(options, TextRenderer::new());
/// cascader.open();
/// cascader.select(1, &OptionId::Int(1));
/// cascader.select(2, &OptionId::Int(11));
///
/// assert_eq!(cascader.current_label(), "A / A1");
/// assert!(!cascader.is_open());
/// ```
pub struct Cascader<K, R> {
    options: Vec<OptionNode<K>>,
    config: CascaderConfig,
    state: PathState<K>,
    popover: PopoverState,
    renderer: R,
    on_change: Option<ChangeHandler<K>>,
}

impl<K, R> Cascader<K, R>
where
    K: Clone + PartialEq + fmt::Debug,
    R: CascaderRenderer<K>,
{
    /// Create a closed cascader with nothing selected.
    pub fn new(options: Vec<OptionNode<K>>, renderer: R) -> Self {
        let mut cascader = Self {
            options,
            config: CascaderConfig::default(),
            state: PathState::new(),
            popover: PopoverState::Closed,
            renderer,
            on_change: None,
        };
        cascader.refresh();
        cascader
    }

    /// Seed the selection from an initial value. Does not emit.
    pub fn with_value(mut self, value: &[K]) -> Self {
        self.set_value(value);
        self
    }

    /// Set the configuration.
    pub fn with_config(mut self, config: CascaderConfig) -> Self {
        self.config = config;
        self.refresh();
        self
    }

    /// Set the change callback.
    pub fn on_change(mut self, handler: impl FnMut(&[SelectionLabel<K>]) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// Select the option `id` on `level` (1-based).
    ///
    /// The id is looked up in the panel currently rendered for `level`;
    /// returns `None` and changes nothing if it is not there. A completed
    /// (leaf) selection emits the labels and closes the popover. With
    /// `change_on_select`, partial selections emit as well. Each call emits
    /// at most once.
    pub fn select(&mut self, level: usize, id: &K) -> Option<SelectOutcome<K>> {
        let panels = panels_for(&self.options, self.state.path());
        let node = panels
            .iter()
            .find(|panel| panel.level == level)
            .and_then(|panel| find_option(panel.options, id));

        let Some(node) = node else {
            log::warn!(
                "Cascader::select id={:?} not in rendered level {} (rendered: {})",
                id,
                level,
                panels.len()
            );
            return None;
        };

        let outcome = self.state.select(node, level);

        if outcome.terminal || self.config.change_on_select {
            self.emit(&outcome.labels);
        }
        if outcome.terminal {
            self.popover.close();
        }

        self.refresh();
        Some(outcome)
    }

    /// Show the popover on the last focused level.
    ///
    /// A leaf selected on a lower level keeps the focused level, so the tab
    /// index handed to the renderer may exceed the number of rendered panels.
    pub fn open(&mut self) {
        if self.popover.open() {
            log::debug!("Cascader::open active_level={}", self.state.active_level());
            self.refresh();
        }
    }

    /// Hide the popover. The focused level is kept for the next open.
    pub fn close(&mut self) {
        if self.popover.close() {
            log::debug!("Cascader::close");
            self.refresh();
        }
    }

    /// Open if closed, close if open.
    pub fn toggle(&mut self) {
        self.popover.toggle();
        log::debug!("Cascader::toggle open={}", self.popover.is_open());
        self.refresh();
    }

    /// Focus the tab for `level`.
    ///
    /// Any rendered level may be focused, backwards or forwards. Fails without
    /// changing state when the popover is closed or `level` has no panel.
    pub fn change_tab(&mut self, level: usize) -> Result<(), CascaderError> {
        if !self.popover.is_open() {
            log::warn!("Cascader::change_tab level={} while closed", level);
            return Err(CascaderError::PopoverClosed { level });
        }

        let rendered = self.panels().len();
        if level == 0 || level > rendered {
            log::warn!(
                "Cascader::change_tab level={} outside rendered 1..={}",
                level,
                rendered
            );
            return Err(CascaderError::level_not_rendered(level, rendered));
        }

        self.state.set_active_level(level);
        self.refresh();
        Ok(())
    }

    /// Replace the selection with a new external value. Does not emit.
    pub fn set_value(&mut self, value: &[K]) {
        self.state.reset();
        if !value.is_empty() {
            self.state = PathState::resolve(&self.options, value);
        }
        log::debug!(
            "Cascader::set_value requested={} resolved={}",
            value.len(),
            self.state.path().len()
        );
        self.refresh();
    }

    /// Clear the selection and focus the first level. Does not emit.
    pub fn reset(&mut self) {
        self.state.reset();
        self.refresh();
    }

    /// Replace the option tree.
    ///
    /// The selection is resolved again against the new tree: the longest
    /// prefix that still exists is kept, with labels taken from the new tree.
    /// The focused level is kept unless it no longer has a panel. Does not
    /// emit.
    pub fn set_options(&mut self, options: Vec<OptionNode<K>>) {
        self.options = options;
        let active_level = self.state.active_level();
        self.state = PathState::resolve(&self.options, self.state.path());

        let rendered = self.panels().len();
        self.state.set_active_level(active_level.min(rendered));
        log::debug!(
            "Cascader::set_options resolved={} rendered={}",
            self.state.path().len(),
            rendered
        );
        self.refresh();
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// The trigger text: selected names or the placeholder.
    pub fn current_label(&self) -> String {
        self.state.current_label(&self.config.placeholder)
    }

    /// Panels for the current path.
    pub fn panels(&self) -> Vec<Panel<'_, K>> {
        panels_for(&self.options, self.state.path())
    }

    pub fn path(&self) -> &[K] {
        self.state.path()
    }

    pub fn labels(&self) -> &[SelectionLabel<K>] {
        self.state.labels()
    }

    pub fn active_level(&self) -> usize {
        self.state.active_level()
    }

    pub fn is_open(&self) -> bool {
        self.popover.is_open()
    }

    pub fn options(&self) -> &[OptionNode<K>] {
        &self.options
    }

    pub fn config(&self) -> &CascaderConfig {
        &self.config
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    // -------------------------------------------------------------------------
    // Internal
    // -------------------------------------------------------------------------

    fn emit(&mut self, labels: &[SelectionLabel<K>]) {
        log::debug!("Cascader::emit depth={}", labels.len());
        if let Some(handler) = self.on_change.as_mut() {
            handler(labels);
        }
    }

    /// Push the current state to the renderer.
    fn refresh(&mut self) {
        let open = self.popover.is_open();
        let text = self.state.current_label(&self.config.placeholder);
        let path = self.state.path();
        let panels: Vec<PanelView<'_, K>> = panels_for(&self.options, path)
            .into_iter()
            .map(|panel| PanelView::new(panel, self.config.tab_title(panel.level), path))
            .collect();

        self.renderer.render_trigger(&text, open);
        self.renderer.render_panels(&panels);
        self.renderer.set_active_tab(self.state.active_level());
        self.renderer.set_open(open);
    }
}

impl<K: fmt::Debug, R: fmt::Debug> fmt::Debug for Cascader<K, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cascader")
            .field("options", &self.options.len())
            .field("config", &self.config)
            .field("state", &self.state)
            .field("popover", &self.popover)
            .field("renderer", &self.renderer)
            .finish_non_exhaustive()
    }
}
