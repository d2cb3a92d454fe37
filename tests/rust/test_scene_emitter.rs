use super::*;
use crate::config::RenderConfig;
use crate::encode::ACCENT;
use crate::error::IllustrationError;
use crate::layout::{build_trees, layout_trees};
use crate::model::{CellInfo, OutPoint, Script, TransactionData};
use crate::scene::Glyph;

const TX: &str = "0x4a4e7a2c1f3f8d0b7e4b8d2f0a1c5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d";

fn cell(capacity: &str, args: &str) -> CellInfo {
    CellInfo::new(
        capacity,
        Script {
            args: args.to_string(),
            ..Script::default()
        },
    )
}

fn emit(data: &TransactionData) -> Result<Scene> {
    emit_with(data, &Labels::default())
}

fn emit_with(data: &TransactionData, labels: &Labels) -> Result<Scene> {
    let config = RenderConfig::default();
    let trees = build_trees(data, false);
    let layout = layout_trees(&trees, &config);
    let mut encoder = Encoder::new(config.min_radius);
    emit_scene(&trees, &layout, &mut encoder, labels)
}

fn tx(inputs: Vec<CellInfo>, outputs: Vec<CellInfo>) -> TransactionData {
    TransactionData {
        inputs,
        outputs,
        tx_hash: TX.to_string(),
    }
}

fn cells_on(scene: &Scene, side: Side) -> Vec<&Glyph> {
    scene
        .glyphs_on(side)
        .filter(|g| g.kind == GlyphKind::Cell)
        .collect()
}

// ── Counts ────────────────────────────────────────────────────────────────────

#[test]
fn test_glyph_and_link_counts() {
    for (n, m) in [(0, 0), (1, 0), (0, 1), (1, 1), (3, 5), (9, 2)] {
        let inputs = (0..n).map(|i| cell("100000000", &format!("0x{i}"))).collect();
        let outputs = (0..m).map(|i| cell("200000000", &format!("0x{i}"))).collect();
        let scene = emit(&tx(inputs, outputs)).unwrap();
        assert_eq!(scene.glyph_count(), n + m + 2, "n={n} m={m}");
        assert_eq!(scene.link_count(), n + m, "n={n} m={m}");
    }
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

#[test]
fn test_one_in_one_out() {
    let scene = emit(&tx(
        vec![cell("100000000", "0xaa")],
        vec![cell("250000000", "0xbb")],
    ))
    .unwrap();
    assert_eq!(scene.glyph_count(), 4);
    assert_eq!(scene.link_count(), 2);

    let input = cells_on(&scene, Side::Inputs)[0];
    let output = cells_on(&scene, Side::Outputs)[0];
    assert_eq!(input.label.as_ref().unwrap().text, "1 CKB");
    assert_eq!(output.label.as_ref().unwrap().text, "2.50000000 CKB");

    let root = scene.glyphs_on(Side::Inputs).next().unwrap();
    assert_eq!(root.kind, GlyphKind::Transaction);
    assert_eq!(root.label.as_ref().unwrap().text, TX);
}

#[test]
fn test_empty_transaction() {
    let scene = emit(&tx(vec![], vec![])).unwrap();
    assert_eq!(scene.glyph_count(), 2);
    assert_eq!(scene.link_count(), 0);
    for g in scene.glyphs.iter().flat_map(|l| l.glyphs.iter()) {
        assert_eq!(g.kind, GlyphKind::Transaction);
        assert!(g.origin.x.is_finite() && g.origin.y.is_finite());
        assert!(g.circle.radius > 0.0);
    }
    assert!(scene.view_box.height >= 40.0);
}

// ── Geometry ──────────────────────────────────────────────────────────────────

#[test]
fn test_inputs_left_outputs_right() {
    let scene = emit(&tx(
        vec![cell("100000000", "0xaa"), cell("100000000", "0xab")],
        vec![cell("100000000", "0xbb")],
    ))
    .unwrap();
    for g in cells_on(&scene, Side::Inputs) {
        assert_eq!(g.origin.x, -320.0);
    }
    for g in cells_on(&scene, Side::Outputs) {
        assert_eq!(g.origin.x, 320.0);
    }
    let ys: Vec<f64> = cells_on(&scene, Side::Inputs).iter().map(|g| g.origin.y).collect();
    assert_eq!(ys, vec![-10.0, 10.0]);
}

#[test]
fn test_roots_share_center() {
    let scene = emit(&tx(vec![cell("1", "0xa")], vec![cell("1", "0xb")])).unwrap();
    let roots: Vec<Point> = scene
        .glyphs
        .iter()
        .map(|layer| layer.glyphs[0].origin)
        .collect();
    assert_eq!(roots, vec![Point::new(0.0, 0.0), Point::new(0.0, 0.0)]);
}

#[test]
fn test_links_mirror() {
    let scene = emit(&tx(vec![cell("1", "0xa")], vec![cell("1", "0xb")])).unwrap();
    let input = scene.links_on(Side::Inputs).next().unwrap();
    let output = scene.links_on(Side::Outputs).next().unwrap();
    assert_eq!(input.source, Point::new(0.0, 0.0));
    assert_eq!(input.target, Point::new(-320.0, 0.0));
    assert_eq!(output.target, Point::new(320.0, 0.0));
    assert_eq!(input.path_data(), "M0,0C-160,0,-160,0,-320,0");
}

// ── Labels ────────────────────────────────────────────────────────────────────

#[test]
fn test_label_placement() {
    let scene = emit(&tx(vec![cell("1", "0xa")], vec![cell("1", "0xb")])).unwrap();

    let input_root = scene.glyphs_on(Side::Inputs).next().unwrap();
    let label = input_root.label.as_ref().unwrap();
    assert_eq!(label.anchor, TextAnchor::Start);
    assert_eq!(label.offset, Point::new(5.0, 6.0));

    let input_cell = cells_on(&scene, Side::Inputs)[0].label.as_ref().unwrap();
    assert_eq!(input_cell.anchor, TextAnchor::End);
    assert_eq!(input_cell.offset, Point::new(-5.0, 6.0));

    let output_cell = cells_on(&scene, Side::Outputs)[0].label.as_ref().unwrap();
    assert_eq!(output_cell.anchor, TextAnchor::Start);
    assert_eq!(output_cell.offset, Point::new(5.0, 6.0));
}

#[test]
fn test_outputs_root_has_no_label() {
    let scene = emit(&tx(vec![], vec![cell("1", "0xb")])).unwrap();
    let outputs_root = scene.glyphs_on(Side::Outputs).next().unwrap();
    assert_eq!(outputs_root.kind, GlyphKind::Transaction);
    assert!(outputs_root.label.is_none());
    assert!(outputs_root.click.is_none());
}

#[test]
fn test_custom_label_callbacks() {
    let labels = Labels::default()
        .with_transaction(Box::new(|h: &str| format!("tx {}", &h[..6])))
        .with_cell(Box::new(|c: &CellInfo| c.lock.args.clone()));
    let scene = emit_with(
        &tx(vec![cell("1", "0xaa")], vec![cell("1", "0xbb")]),
        &labels,
    )
    .unwrap();
    let labels: Vec<&str> = scene.labels().collect();
    assert_eq!(labels, vec!["tx 0x4a4e", "0xaa", "0xbb"]);
}

#[test]
fn test_label_paint_only_on_cells() {
    let scene = emit(&tx(vec![cell("1", "0xa")], vec![])).unwrap();
    let root = scene.glyphs_on(Side::Inputs).next().unwrap();
    assert!(root.label.as_ref().unwrap().paint.is_none());
    let paint = cells_on(&scene, Side::Inputs)[0]
        .label
        .as_ref()
        .unwrap()
        .paint
        .unwrap();
    assert_eq!(paint.fill, ACCENT[0]);
    assert_eq!(paint.stroke, ACCENT[0].darker(1.0));
}

// ── Encoding ──────────────────────────────────────────────────────────────────

#[test]
fn test_owner_colors_shared_across_sides() {
    let scene = emit(&tx(
        vec![cell("1", "0xalice"), cell("1", "0xbob")],
        vec![cell("1", "0xbob"), cell("1", "0xcarol"), cell("1", "0xalice")],
    ))
    .unwrap();
    let fills: Vec<_> = cells_on(&scene, Side::Inputs)
        .into_iter()
        .chain(cells_on(&scene, Side::Outputs))
        .map(|g| g.circle.fill.rest)
        .collect();
    assert_eq!(
        fills,
        vec![ACCENT[0], ACCENT[1], ACCENT[1], ACCENT[2], ACCENT[0]]
    );
}

#[test]
fn test_root_radius_sums_side() {
    let scene = emit(&tx(
        vec![cell("100000000000", "0xa")],
        vec![cell("50000000000", "0xb"), cell("50000000000", "0xc")],
    ))
    .unwrap();
    let roots: Vec<f64> = scene
        .glyphs
        .iter()
        .map(|layer| layer.glyphs[0].circle.radius)
        .collect();
    // 1000 CKB on each side.
    for r in roots {
        assert!((r - 3.0).abs() < 1e-12);
    }
}

#[test]
fn test_hover_enter_leave_round_trip() {
    let scene = emit(&tx(vec![cell("1", "0xa")], vec![cell("1", "0xb")])).unwrap();
    for g in scene.glyphs.iter().flat_map(|l| l.glyphs.iter()) {
        let before = g.circle.fill.rest;
        let mut state = g.circle.fill.state();
        state.pointer_enter();
        assert_ne!(state.current(), before);
        state.pointer_leave();
        assert_eq!(state.current(), before);
    }
}

#[test]
fn test_malformed_capacity_fails_render() {
    let err = emit(&tx(vec![cell("one", "0xa")], vec![])).unwrap_err();
    assert!(matches!(err, IllustrationError::InvalidCapacity { .. }));
}

// ── Click hooks ───────────────────────────────────────────────────────────────

#[test]
fn test_click_targets() {
    let spent = cell("1", "0xa").with_out_point(OutPoint::new("0xprev", 1));
    let scene = emit(&tx(vec![spent], vec![cell("1", "0xb")])).unwrap();

    let root = scene.glyphs_on(Side::Inputs).next().unwrap();
    assert_eq!(
        root.click,
        Some(ClickTarget::Transaction {
            tx_hash: TX.to_string()
        })
    );
    assert_eq!(
        cells_on(&scene, Side::Inputs)[0].click,
        Some(ClickTarget::Cell {
            out_point: OutPoint::new("0xprev", 1)
        })
    );
    assert!(cells_on(&scene, Side::Outputs)[0].click.is_none());
}
