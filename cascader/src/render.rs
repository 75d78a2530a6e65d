//! Rendering collaborator.
//!
//! The cascader does not draw anything itself. After every transition it
//! hands the trigger text, the panel list, the active tab and the popover
//! visibility to a [`CascaderRenderer`]. Hosts implement the trait on top of
//! their own popover and tab primitives; [`TextRenderer`] is a plain-text
//! implementation used by the command line tool.

use std::fmt::Write as _;

use crate::navigator::Panel;

/// One selectable entry of a panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelItem<'a, K> {
    pub id: &'a K,
    pub name: &'a str,
    /// The item's id is the selected id on this level.
    pub active: bool,
    /// Selecting the item drills into another level.
    pub has_children: bool,
}

/// A panel as handed to the renderer: a titled tab with its items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView<'a, K> {
    pub level: usize,
    pub title: &'a str,
    pub items: Vec<PanelItem<'a, K>>,
}

impl<'a, K: PartialEq> PanelView<'a, K> {
    /// Build the view of `panel`, flagging the item selected at its level.
    pub fn new(panel: Panel<'a, K>, title: &'a str, path: &[K]) -> Self {
        let selected = path.get(panel.level - 1);
        let items = panel
            .options
            .iter()
            .map(|node| PanelItem {
                id: &node.id,
                name: &node.name,
                active: selected == Some(&node.id),
                has_children: node.has_children(),
            })
            .collect();

        Self {
            level: panel.level,
            title,
            items,
        }
    }
}

/// Rendering side of the cascader: popover, tab strip and trigger.
pub trait CascaderRenderer<K> {
    /// Draw the closed-state trigger with the current label.
    fn render_trigger(&mut self, text: &str, open: bool);

    /// Draw one tab panel per level, in level order.
    fn render_panels(&mut self, panels: &[PanelView<'_, K>]);

    /// Focus the tab for `level` (1-based).
    fn set_active_tab(&mut self, level: usize);

    /// Show or hide the popover.
    fn set_open(&mut self, open: bool);
}

impl<K, R: CascaderRenderer<K> + ?Sized> CascaderRenderer<K> for &mut R {
    fn render_trigger(&mut self, text: &str, open: bool) {
        (**self).render_trigger(text, open)
    }

    fn render_panels(&mut self, panels: &[PanelView<'_, K>]) {
        (**self).render_panels(panels)
    }

    fn set_active_tab(&mut self, level: usize) {
        (**self).set_active_tab(level)
    }

    fn set_open(&mut self, open: bool) {
        (**self).set_open(open)
    }
}

// =============================================================================
// TextRenderer
// =============================================================================

/// Renders the cascader as plain text.
///
/// ```text
/// Zhejiang / Hangzhou ▲
///   1. 省份: [Zhejiang]› Jiangsu›
/// > 2. 城市: [Hangzhou] Ningbo
/// ```
///
/// The selected item on each level is bracketed and items with children are
/// followed by `›`. Panels are only listed while the popover is open.
#[derive(Debug, Clone, Default)]
pub struct TextRenderer {
    trigger: String,
    open: bool,
    active_tab: usize,
    panels: Vec<(usize, String)>,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The full text frame for the last rendered state.
    pub fn frame(&self) -> String {
        let arrow = if self.open { "▲" } else { "▼" };
        let mut out = format!("{} {}", self.trigger, arrow);
        if self.open {
            for (level, line) in &self.panels {
                let marker = if *level == self.active_tab { ">" } else { " " };
                let _ = write!(out, "\n{} {}", marker, line);
            }
        }
        out
    }
}

impl<K> CascaderRenderer<K> for TextRenderer {
    fn render_trigger(&mut self, text: &str, open: bool) {
        self.trigger = text.to_string();
        self.open = open;
    }

    fn render_panels(&mut self, panels: &[PanelView<'_, K>]) {
        self.panels = panels
            .iter()
            .map(|panel| {
                let items = panel
                    .items
                    .iter()
                    .map(|item| {
                        let mut text = if item.active {
                            format!("[{}]", item.name)
                        } else {
                            item.name.to_string()
                        };
                        if item.has_children {
                            text.push('›');
                        }
                        text
                    })
                    .collect::<Vec<_>>()
                    .join(" ");
                (panel.level, format!("{}. {}: {}", panel.level, panel.title, items))
            })
            .collect();
    }

    fn set_active_tab(&mut self, level: usize) {
        self.active_tab = level;
    }

    fn set_open(&mut self, open: bool) {
        self.open = open;
    }
}
