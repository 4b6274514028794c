use insta::assert_snapshot;
use stepladder::extents::{Extents, extents};
use stepladder::layout::{FrameParams, StepParams, layout_frame, layout_steps};
use stepladder::leg::{LegParams, horizontal_shift, make_leg};
use stepladder::model::{Model, Node};
use stepladder::shapes::Primitive;
use stepladder::types::{Angle, Length, OffsetMm, pmm};
use stepladder::views::derive_views;

/// Tolerance for comparisons that go through a tangent
const FLOAT_TOLERANCE: f64 = 1e-9;

// =============================================================================
// Listing helpers
// =============================================================================

fn num(value: Length) -> String {
    let s = format!("{:.3}", value.raw());
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

/// One line per leaf primitive, in root coordinates
fn listing(model: &Model) -> String {
    let mut lines = Vec::new();
    for flat in model.flatten() {
        let line = match flat.node {
            Node::Rect(r) => {
                let at = flat.absolute_origin();
                format!(
                    "{}: rect {} x {} at ({}, {})",
                    flat.path,
                    num(r.width),
                    num(r.height),
                    num(at.x),
                    num(at.y)
                )
            }
            Node::Leg(leg) => {
                let by = flat.offset + OffsetMm::from(leg.origin);
                let base = leg.base.translated(by);
                let top = leg.top.translated(by);
                format!(
                    "{}: leg base ({}, {})-({}, {}) top ({}, {})-({}, {})",
                    flat.path,
                    num(base.start.x),
                    num(base.start.y),
                    num(base.end.x),
                    num(base.end.y),
                    num(top.start.x),
                    num(top.start.y),
                    num(top.end.x),
                    num(top.end.y)
                )
            }
            other => format!("{}: {}", flat.path, other.kind()),
        };
        lines.push(line);
    }
    lines.join("\n")
}

fn close(a: Length, b: Length) -> bool {
    (a.raw() - b.raw()).abs() < FLOAT_TOLERANCE
}

// =============================================================================
// Reference layouts
// =============================================================================

#[test]
fn front_view_listing() {
    let frame = layout_frame(&FrameParams::default()).unwrap();
    assert_snapshot!(listing(&frame), @r"
    bottom_rail: rect 530 x 40 at (25, 120)
    left_leg: leg base (-5, -34)-(30, -34) top (-4.407, 0)-(29.407, 0)
    left_rod: rect 25 x 700 at (0, 0)
    right_leg: leg base (550, -34)-(585, -34) top (550.593, 0)-(584.407, 0)
    right_rod: rect 25 x 700 at (555, 0)
    top_rail: rect 580 x 50 at (0, 700)
    ");
}

#[test]
fn side_view_listing() {
    let views = derive_views(&FrameParams::default()).unwrap();
    assert_snapshot!(listing(&views.side), @r"
    bottom_rail: rect 220 x 40 at (40, 120)
    left_leg: leg base (-5, -49)-(45, -49) top (-4.145, 0)-(44.145, 0)
    left_rod: rect 40 x 700 at (0, 0)
    right_leg: leg base (255, -49)-(305, -49) top (255.855, 0)-(304.145, 0)
    right_rod: rect 40 x 700 at (260, 0)
    top_rail: rect 300 x 50 at (0, 700)
    ");
}

#[test]
fn step_ladder_listing() {
    let ladder = layout_steps(&StepParams::default()).unwrap();
    assert_snapshot!(listing(&ladder), @r"
    bottom_rail: rect 1095 x 40 at (40, 80)
    left_rod: rect 40 x 250 at (0, 0)
    right_rod: rect 40 x 1000 at (1135, 0)
    step_0: rect 225 x 40 at (0, 210)
    step_1: rect 225 x 40 at (225, 460)
    step_2: rect 225 x 40 at (450, 710)
    step_3: rect 500 x 40 at (675, 960)
    step_rod_1: rect 40 x 380 at (225, 120)
    step_rod_2: rect 40 x 630 at (450, 120)
    step_rod_3: rect 40 x 880 at (675, 120)
    ");
}

#[test]
fn nested_views_flatten_with_dotted_paths() {
    let views = derive_views(&FrameParams::default()).unwrap();
    let sheet = Model::new()
        .with("top", views.top.clone().at(pmm(0.0, 1000.0)))
        .unwrap();
    assert_snapshot!(listing(&sheet), @r"
    top.top: rect 580 x 300 at (0, 1000)
    top.top_inner: rect 530 x 250 at (25, 1025)
    top.top_inner_2: rect 510 x 230 at (35, 1035)
    ");
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn right_upright_edge_is_top_width_minus_rod() {
    for (top_width, rod_width) in [(580.0, 25.0), (600.0, 40.0), (333.3, 12.7)] {
        let params = FrameParams { top_width, rod_width, ..FrameParams::default() };
        let frame = layout_frame(&params).unwrap();
        let right = frame.get("right_rod").and_then(Node::as_rect).unwrap();
        assert_eq!(right.left(), Length(top_width) - Length(rod_width));
    }
}

#[test]
fn leg_top_edge_is_base_minus_two_shifts() {
    let mut previous = f64::INFINITY;
    for deg in [89.5, 85.0, 70.0, 55.0, 40.0, 25.0, 10.0] {
        let leg = make_leg(&LegParams {
            base_width: Length(36.0),
            height: Length(34.0),
            x: Length::ZERO,
            y: Length(34.0),
            angle_deg: deg,
            inset: Length::ZERO,
        })
        .unwrap();
        let dx = horizontal_shift(Length(34.0), Angle(deg));
        assert!(close(leg.top_length(), Length(36.0) - dx * 2.0), "angle {deg}");
        assert!(leg.top_length().raw() < previous, "angle {deg}");
        previous = leg.top_length().raw();
    }
}

#[test]
fn reference_leg_scenario() {
    let leg = make_leg(&LegParams {
        base_width: Length(36.0),
        height: Length(34.0),
        x: Length::ZERO,
        y: Length(34.0),
        angle_deg: 89.0,
        inset: Length::ZERO,
    })
    .unwrap();
    assert_eq!(leg.base.start, pmm(0.0, 34.0));
    assert_eq!(leg.base.end, pmm(36.0, 34.0));
    assert!((horizontal_shift(Length(34.0), Angle(89.0)).raw() - 0.5935).abs() < 1e-3);
    assert!((leg.top.start.x.raw() - 0.594).abs() < 1e-3);
    assert!((leg.top.end.x.raw() - 35.406).abs() < 1e-3);
    assert_eq!(leg.top.start.y, Length(68.0));
}

#[test]
fn right_angle_leg_has_zero_shift() {
    assert_eq!(horizontal_shift(Length(34.0), Angle::RIGHT), Length::ZERO);
    let params = FrameParams { leg_angle_deg: 90.0, ..FrameParams::default() };
    assert!(layout_frame(&params).is_ok());
}

#[test]
fn extents_are_translation_invariant() {
    let frame = layout_frame(&FrameParams::default()).unwrap();
    let base = extents(&frame);
    for (dx, dy) in [(10.0, 20.0), (-250.0, 0.5), (1e4, -1e4)] {
        let by = OffsetMm::new(Length(dx), Length(dy));
        let moved = Model::new().with("frame", frame.clone()).unwrap().at(pmm(dx, dy));
        let got = extents(&moved);
        let want = base.translated(by);
        assert!(close(got.low.x, want.low.x) && close(got.low.y, want.low.y));
        assert!(close(got.high.x, want.high.x) && close(got.high.y, want.high.y));
        assert!(close(got.width(), base.width()) && close(got.height(), base.height()));
    }
}

#[test]
fn front_and_side_swap_symmetrically() {
    let params = FrameParams::default();
    let swapped = FrameParams {
        top_width: params.depth,
        rod_width: params.depth_rod_width,
        bottom_width: params.depth - 2.0 * params.depth_rod_width,
        depth: params.top_width,
        depth_rod_width: params.rod_width,
        ..params
    };

    let views = derive_views(&params).unwrap();
    assert_eq!(layout_frame(&swapped).unwrap(), views.side);
    assert_eq!(derive_views(&swapped).unwrap().side, views.front);
}

#[test]
fn swapped_front_and_side_lay_out_with_default_bottom_width() {
    let params = FrameParams::default();
    let swapped = FrameParams {
        top_width: params.depth,
        rod_width: params.depth_rod_width,
        depth: params.top_width,
        depth_rod_width: params.rod_width,
        ..params
    };

    let front = layout_frame(&swapped).unwrap();
    let right = front.get("right_rod").and_then(Node::as_rect).unwrap();
    assert_eq!(right.left(), Length(260.0));
    let views = derive_views(&swapped).unwrap();
    assert_eq!(views.side, layout_frame(&params).unwrap());
}

#[test]
fn layout_is_idempotent() {
    let params = FrameParams::default();
    let first = derive_views(&params).unwrap();
    let second = derive_views(&params).unwrap();
    assert_eq!(first, second);
    assert_eq!(listing(&first.front), listing(&second.front));
}

#[test]
fn flattened_coordinates_match_extents() {
    let frame = layout_frame(&FrameParams::default()).unwrap();
    let mut low = pmm(f64::MAX, f64::MAX);
    let mut high = pmm(f64::MIN, f64::MIN);
    for flat in frame.flatten() {
        for p in flat.absolute_points() {
            low = pmm(low.x.raw().min(p.x.raw()), low.y.raw().min(p.y.raw()));
            high = pmm(high.x.raw().max(p.x.raw()), high.y.raw().max(p.y.raw()));
        }
    }
    assert_eq!(extents(&frame), Extents { low, high });
    assert_eq!(frame.corner_points().len(), 6 * 4);
}

#[test]
fn empty_model_has_point_extents() {
    let e = extents(&Model::new().at(pmm(7.0, -3.0)));
    assert_eq!(e, Extents::at(pmm(7.0, -3.0)));
    assert_eq!(e.width(), Length::ZERO);
}
