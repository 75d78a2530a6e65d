//! Tests for the cascader controller: emission policy, popover and tabs.

use std::cell::RefCell;
use std::rc::Rc;

use cascader::{
    Cascader, CascaderConfig, CascaderError, CascaderRenderer, OptionId, OptionNode, PanelView,
    SelectionLabel, TextRenderer, find_option,
};

/// Records what the cascader pushed to its renderer.
#[derive(Debug, Default)]
struct RecordingRenderer {
    trigger: String,
    open: bool,
    active_tab: usize,
    /// (level, title, names, active names) per panel.
    panels: Vec<(usize, String, Vec<String>, Vec<String>)>,
    renders: usize,
}

impl CascaderRenderer<OptionId> for RecordingRenderer {
    fn render_trigger(&mut self, text: &str, _open: bool) {
        self.trigger = text.to_string();
        self.renders += 1;
    }

    fn render_panels(&mut self, panels: &[PanelView<'_, OptionId>]) {
        self.panels = panels
            .iter()
            .map(|panel| {
                let names = panel.items.iter().map(|i| i.name.to_string()).collect();
                let active = panel
                    .items
                    .iter()
                    .filter(|i| i.active)
                    .map(|i| i.name.to_string())
                    .collect();
                (panel.level, panel.title.to_string(), names, active)
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

type Emitted = Rc<RefCell<Vec<Vec<SelectionLabel<OptionId>>>>>;

fn tree() -> Vec<OptionNode<OptionId>> {
    vec![
        OptionNode::branch(1, "A", vec![OptionNode::leaf(11, "A1")]),
        OptionNode::branch(
            2,
            "B",
            vec![
                OptionNode::branch(21, "B1", vec![OptionNode::leaf(211, "B1a")]),
                OptionNode::leaf(22, "B2"),
            ],
        ),
    ]
}

fn id(raw: i64) -> OptionId {
    OptionId::Int(raw)
}

fn label(raw: i64, name: &str) -> SelectionLabel<OptionId> {
    SelectionLabel {
        id: id(raw),
        name: name.to_string(),
    }
}

fn cascader(config: CascaderConfig) -> (Cascader<OptionId, RecordingRenderer>, Emitted) {
    let emitted: Emitted = Rc::default();
    let sink = Rc::clone(&emitted);
    let cascader = Cascader::new(tree(), RecordingRenderer::default())
        .with_config(config)
        .on_change(move |labels| sink.borrow_mut().push(labels.to_vec()));
    (cascader, emitted)
}

// ============================================================================
// Selection and emission
// ============================================================================

#[test]
fn test_two_step_selection_commits_once() {
    let (mut c, emitted) = cascader(CascaderConfig::default());
    c.open();

    let outcome = c.select(1, &id(1)).unwrap();
    assert!(!outcome.terminal);
    assert_eq!(c.active_level(), 2);
    assert!(c.is_open());
    assert!(emitted.borrow().is_empty());

    let outcome = c.select(2, &id(11)).unwrap();
    assert!(outcome.terminal);
    assert_eq!(c.path(), &[id(1), id(11)]);
    assert_eq!(c.current_label(), "A / A1");
    assert!(!c.is_open());
    assert_eq!(*emitted.borrow(), vec![vec![label(1, "A"), label(11, "A1")]]);
}

#[test]
fn test_change_on_select_emits_partial_selection() {
    let (mut c, emitted) = cascader(CascaderConfig::default().with_change_on_select(true));
    c.open();

    c.select(1, &id(1));
    assert_eq!(*emitted.borrow(), vec![vec![label(1, "A")]]);

    c.select(2, &id(11));
    assert_eq!(emitted.borrow().len(), 2);
    assert_eq!(emitted.borrow()[1], vec![label(1, "A"), label(11, "A1")]);
}

#[test]
fn test_select_unknown_id_changes_nothing() {
    let (mut c, emitted) = cascader(CascaderConfig::default());
    c.open();
    c.select(1, &id(2));

    assert!(c.select(2, &id(11)).is_none());
    assert!(c.select(4, &id(211)).is_none());
    assert_eq!(c.path(), &[id(2)]);
    assert!(emitted.borrow().is_empty());
}

#[test]
fn test_reselect_lower_level_drops_deeper_selection() {
    let (mut c, _) = cascader(CascaderConfig::default());
    c.open();
    c.select(1, &id(2));
    c.select(2, &id(21));
    assert_eq!(c.panels().len(), 3);

    c.select(1, &id(1));
    assert_eq!(c.path(), &[id(1)]);
    assert_eq!(c.panels().len(), 2);
    assert_eq!(c.renderer().panels[1].2, vec!["A1".to_string()]);
}

// ============================================================================
// Initial value
// ============================================================================

#[test]
fn test_initial_value_resolves_without_emitting() {
    let (c, emitted) = cascader(CascaderConfig::default());
    let c = c.with_value(&[id(1), id(11)]);

    assert_eq!(c.labels(), &[label(1, "A"), label(11, "A1")]);
    assert_eq!(c.renderer().trigger, "A / A1");
    assert!(emitted.borrow().is_empty());
}

#[test]
fn test_initial_value_not_in_tree() {
    let c = Cascader::new(tree(), RecordingRenderer::default()).with_value(&[id(99)]);
    assert!(c.labels().is_empty());
    assert_eq!(c.current_label(), "请选择");
}

#[test]
fn test_set_value_replaces_selection() {
    let (mut c, emitted) = cascader(CascaderConfig::default());
    c.set_value(&[id(2), id(21)]);
    assert_eq!(c.current_label(), "B / B1");

    c.set_value(&[]);
    assert!(c.path().is_empty());
    assert_eq!(c.active_level(), 1);
    assert!(emitted.borrow().is_empty());
}

// ============================================================================
// Popover and tabs
// ============================================================================

#[test]
fn test_close_keeps_active_level() {
    let (mut c, _) = cascader(CascaderConfig::default());
    c.open();
    c.select(1, &id(2));
    c.close();
    assert!(!c.renderer().open);

    c.open();
    assert_eq!(c.active_level(), 2);
    assert_eq!(c.renderer().active_tab, 2);
}

#[test]
fn test_toggle_flips_popover() {
    let (mut c, _) = cascader(CascaderConfig::default());
    c.toggle();
    assert!(c.is_open());
    c.toggle();
    assert!(!c.is_open());
}

#[test]
fn test_change_tab_to_rendered_level() {
    let (mut c, _) = cascader(CascaderConfig::default());
    c.open();
    c.select(1, &id(2));
    c.select(2, &id(21));
    assert_eq!(c.active_level(), 3);

    c.change_tab(1).unwrap();
    assert_eq!(c.active_level(), 1);
    assert_eq!(c.renderer().active_tab, 1);

    c.change_tab(3).unwrap();
    assert_eq!(c.active_level(), 3);
}

#[test]
fn test_change_tab_rejected_when_closed_or_not_rendered() {
    let (mut c, _) = cascader(CascaderConfig::default());
    assert!(matches!(
        c.change_tab(1),
        Err(CascaderError::PopoverClosed { level: 1 })
    ));

    c.open();
    assert!(matches!(
        c.change_tab(2),
        Err(CascaderError::LevelNotRendered {
            level: 2,
            rendered: 1
        })
    ));
    assert!(c.change_tab(0).is_err());
    assert_eq!(c.active_level(), 1);
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_every_transition_rerenders() {
    let (mut c, _) = cascader(CascaderConfig::default());
    let before = c.renderer().renders;
    c.open();
    c.select(1, &id(1));
    assert_eq!(c.renderer().renders, before + 2);
}

#[test]
fn test_panels_carry_titles_and_active_flags() {
    let config = CascaderConfig::default()
        .with_tab_titles(["Province", "City"])
        .with_default_tab_title("District");
    let (mut c, _) = cascader(config);
    c.open();
    c.select(1, &id(2));
    c.select(2, &id(21));

    let panels = &c.renderer().panels;
    assert_eq!(panels[0].1, "Province");
    assert_eq!(panels[1].1, "City");
    assert_eq!(panels[2].1, "District");
    assert_eq!(panels[0].3, vec!["B".to_string()]);
    assert_eq!(panels[1].3, vec!["B1".to_string()]);
    assert!(panels[2].3.is_empty());
}

#[test]
fn test_set_options_keeps_only_resolvable_prefix() {
    let (mut c, emitted) = cascader(CascaderConfig::default());
    c.open();
    c.select(1, &id(2));
    c.select(2, &id(21));

    c.set_options(vec![OptionNode::branch(
        2,
        "B",
        vec![OptionNode::leaf(22, "B2")],
    )]);
    assert_eq!(c.path(), &[id(2)]);
    assert_eq!(c.labels(), &[label(2, "B")]);
    assert_eq!(c.current_label(), "B");
    assert_eq!(c.panels().len(), 2);
    assert_eq!(c.active_level(), 2);
    assert!(emitted.borrow().is_empty());

    // every id on the path resolves in the new tree
    let mut options = c.options();
    for step in c.path() {
        let node = find_option(options, step).unwrap();
        options = node.children();
    }
}

#[test]
fn test_set_options_takes_labels_from_new_tree() {
    let (mut c, _) = cascader(CascaderConfig::default());
    c.set_value(&[id(1), id(11)]);

    c.set_options(vec![OptionNode::branch(
        1,
        "Renamed",
        vec![OptionNode::leaf(11, "A1")],
    )]);
    assert_eq!(c.current_label(), "Renamed / A1");
    assert_eq!(c.renderer().trigger, "Renamed / A1");
}

#[test]
fn test_set_options_clamps_active_level() {
    let (mut c, _) = cascader(CascaderConfig::default());
    c.open();
    c.select(1, &id(2));
    c.select(2, &id(21));
    assert_eq!(c.active_level(), 3);

    c.set_options(vec![OptionNode::leaf(2, "B")]);
    assert_eq!(c.path(), &[id(2)]);
    assert_eq!(c.panels().len(), 1);
    assert_eq!(c.active_level(), 1);
    assert_eq!(c.renderer().active_tab, 1);
}

// ============================================================================
// Empty option tree
// ============================================================================

#[test]
fn test_empty_tree_degrades_to_empty_state() {
    let mut c = Cascader::new(Vec::new(), RecordingRenderer::default())
        .with_config(CascaderConfig::new().with_placeholder("Nothing here"))
        .with_value(&[id(1)]);

    assert!(c.path().is_empty());
    assert_eq!(c.current_label(), "Nothing here");

    c.open();
    assert!(c.select(1, &id(1)).is_none());

    let panels = c.panels();
    assert_eq!(panels.len(), 1);
    assert!(panels[0].options.is_empty());

    assert!(matches!(
        c.change_tab(2),
        Err(CascaderError::LevelNotRendered {
            level: 2,
            rendered: 1
        })
    ));
    c.change_tab(1).unwrap();
    assert_eq!(c.renderer().panels, vec![(1, "省份".to_string(), vec![], vec![])]);
}

// ============================================================================
// Focused level after a leaf on a lower level
// ============================================================================

#[test]
fn test_leaf_on_lower_level_keeps_focused_level() {
    let options = vec![
        OptionNode::branch(
            1,
            "A",
            vec![OptionNode::branch(11, "A1", vec![OptionNode::leaf(111, "A1a")])],
        ),
        OptionNode::leaf(3, "C"),
    ];
    let mut c = Cascader::new(options, RecordingRenderer::default());
    c.open();
    c.select(1, &id(1));
    c.select(2, &id(11));
    assert_eq!(c.active_level(), 3);

    let outcome = c.select(1, &id(3)).unwrap();
    assert!(outcome.terminal);
    assert!(!c.is_open());
    assert_eq!(c.active_level(), 3);
    assert_eq!(c.panels().len(), 1);

    c.open();
    assert_eq!(c.renderer().active_tab, 3);
}

// ============================================================================
// Borrowed renderers
// ============================================================================

#[test]
fn test_borrowed_renderer_receives_updates() {
    let mut renderer = RecordingRenderer::default();
    {
        let mut c = Cascader::new(tree(), &mut renderer);
        c.open();
        c.select(1, &id(1));
        c.renderer_mut().renders = 0;
        c.select(2, &id(11));
        assert_eq!(c.renderer().renders, 1);
    }
    assert_eq!(renderer.trigger, "A / A1");
    assert!(!renderer.open);
    assert_eq!(renderer.renders, 1);
}

#[test]
fn test_text_renderer_frame() {
    let mut c = Cascader::new(tree(), TextRenderer::new())
        .with_config(CascaderConfig::default().with_placeholder("Pick"));
    assert_eq!(c.renderer().frame(), "Pick ▼");

    c.open();
    c.select(1, &id(1));
    assert_eq!(
        c.renderer().frame(),
        "A ▲\n  1. 省份: [A]› B›\n> 2. 省份: A1"
    );
}
