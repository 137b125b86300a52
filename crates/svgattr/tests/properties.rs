use std::f64::consts::FRAC_PI_4;

use svgattr::kinds::{
    CapSide, ExtendAxis, ExtendMode, FillRule, FontStretch, LineCap, LineJoin, MarkerOrient,
    PaintOrder, PaintOrderItem, PaintValue, TextAnchor, VerticalAlign, ViewBox,
};
use svgattr::testing::{DrawCall, RecordingContext};
use svgattr::values::Matrix2D;
use svgattr::{
    NodeTable, PaintSource, Property, PropertyError, PropertyKind, Resolution, TypedValue,
    standard_registry,
};
use svgcss::RgbaColor;

fn create(name: &str, text: &str) -> Property {
    standard_registry()
        .create(name, text)
        .unwrap_or_else(|| panic!("{name} is not registered"))
}

fn drawn(property: &Property) -> Vec<DrawCall> {
    let nodes = NodeTable::new();
    let mut ctx = RecordingContext::new();
    property.draw(&mut ctx, &nodes);
    ctx.take()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ============================================================================
// Paint
// ============================================================================

#[test]
fn test_fill_color() {
    let fill = create("fill", "#ff0000");
    assert_eq!(fill.resolution(), Resolution::Resolved);
    assert_eq!(
        drawn(&fill),
        vec![DrawCall::Fill(PaintSource::Color(RgbaColor::rgb(255, 0, 0)))]
    );
}

#[test]
fn test_fill_none_disables_fill() {
    let fill = create("fill", "none");
    assert!(fill.is_set());
    assert_eq!(drawn(&fill), vec![DrawCall::NoFill]);

    let stroke = create("stroke", "none");
    assert_eq!(drawn(&stroke), vec![DrawCall::NoStroke]);
}

#[test]
fn test_fill_url_is_deferred() {
    let fill = create("fill", "url(#grad1)");
    assert_eq!(fill.resolution(), Resolution::Deferred);
    assert!(fill.needs_binding());
    assert!(!fill.is_set());
    // Nothing is drawn until the reference is bound.
    assert!(drawn(&fill).is_empty());
}

#[test]
fn test_url_fallback_is_parsed() {
    let fill = create("fill", "url(#missing) blue");
    let PropertyKind::Paint(paint) = fill.kind() else {
        panic!("fill should be a paint");
    };
    match &paint.value {
        PaintValue::Url { href, fallback, node } => {
            assert_eq!(href, "url(#missing)");
            assert_eq!(
                fallback.as_deref(),
                Some(&PaintValue::Color(RgbaColor::rgb(0, 0, 255)))
            );
            assert_eq!(*node, None);
        }
        other => panic!("expected url paint, got {other:?}"),
    }
}

#[test]
fn test_unusable_paint_is_unset() {
    for text in ["inherit", "currentColor", "notacolor", "#12"] {
        let fill = create("fill", text);
        assert_eq!(fill.resolution(), Resolution::Unset, "{text}");
        assert!(drawn(&fill).is_empty(), "{text}");
    }
}

#[test]
fn test_stroke_named_color_variant() {
    let stroke = create("stroke", "green");
    let nodes = NodeTable::new();
    assert_eq!(
        stroke.variant(&nodes),
        TypedValue::Color(RgbaColor::rgb(0, 128, 0))
    );
}

// ============================================================================
// Keywords
// ============================================================================

#[test]
fn test_fill_rule() {
    let rule = create("fill-rule", "evenodd");
    assert_eq!(drawn(&rule), vec![DrawCall::FillRule(FillRule::EvenOdd)]);

    let rule = create("fill-rule", "odd");
    assert_eq!(rule.resolution(), Resolution::Unset);
}

#[test]
fn test_line_caps_by_side() {
    assert_eq!(
        drawn(&create("stroke-linecap", "round")),
        vec![DrawCall::StrokeCaps(LineCap::Round)]
    );
    assert_eq!(
        drawn(&create("stroke-linecap-start", "square")),
        vec![DrawCall::StrokeCap(LineCap::Square, CapSide::Start)]
    );
    assert_eq!(
        drawn(&create("stroke-linecap-end", "triangle-reverse")),
        vec![DrawCall::StrokeCap(
            LineCap::TriangleReverse,
            CapSide::End
        )]
    );
    assert_eq!(
        create("stroke-linecap", "pointy").resolution(),
        Resolution::Unset
    );
}

#[test]
fn test_line_join() {
    assert_eq!(
        drawn(&create("stroke-linejoin", "miter-clip")),
        vec![DrawCall::StrokeJoin(LineJoin::MiterClip)]
    );
    assert!(!create("stroke-linejoin", "arcs").is_set());
}

#[test]
fn test_miter_limit_is_clamped() {
    assert_eq!(
        drawn(&create("stroke-miterlimit", "0.5")),
        vec![DrawCall::StrokeMiterLimit(1.0)]
    );
    assert_eq!(
        drawn(&create("stroke-miterlimit", "40")),
        vec![DrawCall::StrokeMiterLimit(10.0)]
    );
    assert!(!create("stroke-miterlimit", "wide").is_set());
}

#[test]
fn test_vector_effect() {
    assert_eq!(
        drawn(&create("vector-effect", "non-scaling-stroke")),
        vec![DrawCall::StrokeBeforeTransform(true)]
    );
    // Recognized but not drawn.
    let effect = create("vector-effect", "fixed-position");
    assert!(effect.is_set());
    assert!(drawn(&effect).is_empty());
}

#[test]
fn test_text_anchor_and_align() {
    assert_eq!(
        drawn(&create("text-anchor", "middle")),
        vec![DrawCall::TextAlign(TextAnchor::Middle, VerticalAlign::Baseline)]
    );
    assert_eq!(
        drawn(&create("text-align", "end")),
        vec![DrawCall::TextAlign(TextAnchor::End, VerticalAlign::Baseline)]
    );
    assert!(!create("text-anchor", "center").is_set());
}

#[test]
fn test_font_keywords() {
    assert!(create("font-style", "italic").is_set());
    assert!(!create("font-style", "slanted").is_set());
    assert!(create("font-weight", "bold").is_set());
    assert!(create("font-weight", "600").is_set());
    assert!(!create("font-weight", "650").is_set());
    assert!(create("font-stretch", "extra-condensed").is_set());
    assert!(!create("font-stretch", "ultra-condensed").is_set());
    assert!(!create("font-stretch", "ultra-expanded").is_set());
    assert!(!create("font-stretch", "squished").is_set());
}

#[test]
fn test_unknown_keyword_keeps_previous_value() {
    let cases = [
        ("fill-rule", "evenodd", "odd", PropertyKind::FillRule(FillRule::EvenOdd)),
        (
            "stroke-linecap",
            "square",
            "pointy",
            PropertyKind::LineCap {
                side: CapSide::Both,
                cap: LineCap::Square,
            },
        ),
        ("stroke-linejoin", "bevel", "arcs", PropertyKind::LineJoin(LineJoin::Bevel)),
        ("text-anchor", "end", "center", PropertyKind::TextAlign(TextAnchor::End)),
        ("font-stretch", "expanded", "squished", PropertyKind::FontStretch(FontStretch::Expanded)),
    ];

    for (name, good, bad, expected) in cases {
        let mut property = create(name, good);
        assert!(property.is_set(), "{name}");

        assert_eq!(property.load_from_chunk(bad), Ok(Resolution::Unset), "{name}");
        assert!(!property.is_set(), "{name}");
        assert_eq!(property.kind(), &expected, "{name}");
    }
}

#[test]
fn test_font_family_draws_text_family() {
    assert_eq!(
        drawn(&create("font-family", "  Helvetica Neue ")),
        vec![DrawCall::TextFamily("Helvetica Neue".to_string())]
    );
}

// ============================================================================
// Opacity
// ============================================================================

#[test]
fn test_opacity_targets() {
    assert_eq!(
        drawn(&create("opacity", "0.5")),
        vec![DrawCall::GlobalOpacity(0.5)]
    );
    assert_eq!(
        drawn(&create("fill-opacity", "25%")),
        vec![DrawCall::FillOpacity(0.25)]
    );
    assert_eq!(
        drawn(&create("stroke-opacity", "3")),
        vec![DrawCall::StrokeOpacity(1.0)]
    );
}

#[test]
fn test_opacity_rejects_lengths() {
    assert!(!create("opacity", "2px").is_set());
    assert!(!create("opacity", "half").is_set());
}

// ============================================================================
// Transform and orientation
// ============================================================================

#[test]
fn test_transform_composes_left_to_right() {
    let transform = create("transform", "translate(10,0) scale(2)");
    assert!(transform.is_set());

    let nodes = NodeTable::new();
    let matrix = transform.variant(&nodes).as_matrix().unwrap();
    assert_eq!(matrix.map_point(1.0, 0.0), (12.0, 0.0));
}

#[test]
fn test_transform_is_not_auto_drawn() {
    let transform = create("transform", "translate(3 4)");
    assert!(!transform.auto_draw());
    assert!(drawn(&transform).is_empty());

    let nodes = NodeTable::new();
    let mut ctx = RecordingContext::new();
    transform.draw_self(&mut ctx, &nodes);
    assert_eq!(
        ctx.calls(),
        &[DrawCall::Transform(Matrix2D::translation(3.0, 4.0))]
    );
}

#[test]
fn test_transform_without_functions_is_unset() {
    assert!(!create("transform", "bogus").is_set());
}

#[test]
fn test_orient_auto_follows_direction() {
    let orient = create("orient", "auto");
    let PropertyKind::Orient(orient) = orient.kind() else {
        panic!("orient should be an orientation");
    };
    assert!(close(orient.radians((0.0, 0.0), (1.0, 1.0)), FRAC_PI_4));

    let reverse = create("orient", "auto-start-reverse");
    let PropertyKind::Orient(reverse) = reverse.kind() else {
        panic!("orient should be an orientation");
    };
    assert!(close(reverse.radians((0.0, 0.0), (1.0, 1.0)), -FRAC_PI_4));
}

#[test]
fn test_orient_fixed_angle() {
    let orient = create("orient", "90");
    assert_eq!(
        orient.kind(),
        &PropertyKind::Orient(MarkerOrient::Angle(90f64.to_radians()))
    );
    let PropertyKind::Orient(orient) = orient.kind() else {
        unreachable!()
    };
    assert!(close(orient.degrees((0.0, 0.0), (5.0, 5.0)), 90.0));
    assert!(!create("orient", "sideways").is_set());
}

// ============================================================================
// Lengths
// ============================================================================

#[test]
fn test_stroke_width_plain_resolves_now() {
    let width = create("stroke-width", "2.5px");
    assert_eq!(width.resolution(), Resolution::Resolved);
    assert_eq!(drawn(&width), vec![DrawCall::StrokeWidth(2.5)]);
}

#[test]
fn test_stroke_width_rejections() {
    assert!(!create("stroke-width", "-1").is_set());
    assert!(!create("stroke-width", "10%").is_set());
    assert!(!create("stroke-width", "3furlongs").is_set());
}

#[test]
fn test_stroke_width_points_wait_for_dpi() {
    let mut width = create("stroke-width", "36pt");
    assert_eq!(width.resolution(), Resolution::Deferred);

    let mut nodes = NodeTable::new().with_dpi(96.0);
    assert_eq!(width.bind(Some(&mut nodes)), Resolution::Resolved);
    assert_eq!(drawn(&width), vec![DrawCall::StrokeWidth(48.0)]);
}

#[test]
fn test_font_size_em_resolves_at_bind() {
    let mut size = create("font-size", "1.5em");
    assert_eq!(size.resolution(), Resolution::Deferred);

    let mut nodes = NodeTable::new().with_font_size(20.0);
    assert_eq!(size.bind(Some(&mut nodes)), Resolution::Resolved);
    assert_eq!(drawn(&size), vec![DrawCall::TextSize(30.0)]);
}

// ============================================================================
// Structural values
// ============================================================================

#[test]
fn test_view_box() {
    let view_box = create("viewBox", "0 0, 100 50");
    assert_eq!(
        view_box.kind(),
        &PropertyKind::ViewBox(ViewBox {
            x: 0.0,
            y: 0.0,
            width: 100.0,
            height: 50.0
        })
    );
    assert!(!create("viewBox", "0 0 100").is_set());
}

#[test]
fn test_view_box_scale_about_center() {
    let mut view_box = ViewBox {
        x: 0.0,
        y: 0.0,
        width: 100.0,
        height: 100.0,
    };
    view_box.scale_by(0.5, 0.5, 50.0, 50.0);
    view_box.translate_by(5.0, 0.0);
    assert_eq!(
        view_box,
        ViewBox {
            x: 30.0,
            y: 25.0,
            width: 50.0,
            height: 50.0
        }
    );
}

#[test]
fn test_paint_order() {
    let order = create("paint-order", "stroke");
    assert_eq!(
        order.kind(),
        &PropertyKind::PaintOrder(PaintOrder([
            PaintOrderItem::Stroke,
            PaintOrderItem::Fill,
            PaintOrderItem::Markers,
        ]))
    );
    assert!(create("paint-order", "normal").is_set());
    assert!(!create("paint-order", "fill fill").is_set());
    assert!(!create("paint-order", "glitter").is_set());
}

#[test]
fn test_extend_mode() {
    let mode = create("extendMode", "pad-x-reflect-y");
    assert_eq!(
        mode.kind(),
        &PropertyKind::ExtendMode(ExtendMode {
            x: ExtendAxis::Pad,
            y: ExtendAxis::Reflect,
        })
    );
    assert_eq!(ExtendMode::default(), ExtendMode::uniform(ExtendAxis::Repeat));
}

#[test]
fn test_raw_attribute_keeps_text() {
    let language = create("systemLanguage", "en-US, fr");
    assert!(language.is_set());
    assert_eq!(language.raw_value(), "en-US, fr");
    assert!(drawn(&language).is_empty());
}

// ============================================================================
// Lifecycle
// ============================================================================

#[test]
fn test_empty_text_is_an_error() {
    let mut fill = create("fill", "red");
    assert!(fill.is_set());
    assert_eq!(fill.load_from_chunk("   "), Err(PropertyError::Empty));
    assert!(!fill.is_set());
    assert_eq!(fill.resolution(), Resolution::Unset);
}

#[test]
fn test_hidden_property_draws_nothing() {
    let mut fill = create("fill", "red");
    fill.set_visible(false);
    assert!(drawn(&fill).is_empty());
}

#[test]
fn test_bind_without_context_is_noop() {
    let mut fill = create("fill", "url(#g)");
    assert_eq!(fill.bind(None), Resolution::Deferred);
    assert!(fill.needs_binding());
}
