use chalkboard_filters::{
    svg, FilterError, FilterKind, FilterRegistry, Outline, BLACKBOARD_GRAIN, CHALK_STROKE,
    CHALK_TEXT,
};
use pretty_assertions::assert_eq;

const EPSILON: f32 = 1e-4;

#[test]
fn chalk_stroke_has_expected_parameters() {
    let registry = FilterRegistry::builtin();
    let stroke = registry.get(CHALK_STROKE).unwrap();

    assert_eq!(stroke.kind, FilterKind::StrokeDisplacement);
    assert_eq!(stroke.params.base_frequency, 0.2);
    assert_eq!(stroke.params.octaves, 3);
    assert_eq!(stroke.params.displacement_scale, 3.0);
    assert_eq!(stroke.url(), "url(#chalk-stroke)");
}

#[test]
fn catalog_matches_published_effects() {
    let registry = FilterRegistry::builtin();

    let grain = registry.get(BLACKBOARD_GRAIN).unwrap();
    assert_eq!(grain.kind, FilterKind::Grain);
    assert_eq!(grain.params.base_frequency, 0.5);
    assert_eq!(grain.params.octaves, 3);

    let text = registry.get(CHALK_TEXT).unwrap();
    assert_eq!(text.kind, FilterKind::TextDisplacement);
    assert_eq!(text.params.base_frequency, 0.1);
    assert_eq!(text.params.octaves, 1);
    assert_eq!(text.params.displacement_scale, 1.0);
}

#[test]
fn unknown_id_is_not_found() {
    let registry = FilterRegistry::builtin();
    assert_eq!(
        registry.get("does-not-exist"),
        Err(FilterError::NotFound {
            id: "does-not-exist".into()
        })
    );
    assert!(!registry.contains("does-not-exist"));
}

#[test]
fn stroke_wobble_stays_within_two_pixel_border() {
    let registry = FilterRegistry::builtin();
    let stroke = registry.check_stroke(CHALK_STROKE, 2.0).unwrap();

    // Project card and button sizes.
    for (width, height) in [(320.0, 240.0), (180.0, 52.0), (96.0, 4.0)] {
        let outline = Outline::rect(width, height, 1.0);
        for seed in 0..8 {
            let wobbly = outline.displace(stroke, seed);
            let deviation = outline.max_deviation(&wobbly);
            assert!(
                deviation <= stroke.max_offset() + EPSILON,
                "{width}x{height} seed={seed} deviation={deviation}"
            );
            assert!(deviation < 2.0);

            let (min, max) = wobbly.bounds().unwrap();
            let margin = stroke.max_offset() + EPSILON;
            assert!(min.x >= -margin && min.y >= -margin);
            assert!(max.x <= width + margin && max.y <= height + margin);
        }
    }
}

#[test]
fn text_wobble_stays_within_one_pixel_glyph_stroke() {
    let registry = FilterRegistry::builtin();
    let text = registry.check_stroke(CHALK_TEXT, 1.0).unwrap();

    let glyph_box = Outline::rect(12.0, 18.0, 0.5);
    for seed in 0..8 {
        let deviation = glyph_box.max_deviation(&glyph_box.displace(text, seed));
        assert!(deviation <= 0.5 + EPSILON, "seed={seed} deviation={deviation}");
    }
}

#[test]
fn stroke_filter_on_hairline_is_rejected() {
    let registry = FilterRegistry::builtin();
    assert_eq!(
        registry.check_stroke(CHALK_STROKE, 1.0),
        Err(FilterError::ExceedsStroke {
            id: CHALK_STROKE.into(),
            offset: 1.5,
            stroke_width: 1.0,
        })
    );
}

#[test]
fn defs_contain_every_filter_in_order() {
    let registry = FilterRegistry::builtin();
    let markup = svg::filter_defs(&registry);

    let positions: Vec<usize> = registry
        .list()
        .map(|f| markup.find(&format!("<filter id=\"{}\"", f.id)).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(markup.starts_with("<svg width=\"0\" height=\"0\""));
}
