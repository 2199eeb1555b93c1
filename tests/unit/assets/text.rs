use super::*;

#[test]
fn layout_without_font_reports_missing_font() {
    let mut engine = TextLayoutEngine::new();
    assert!(!engine.has_font());
    let err = engine
        .layout_label("12", &LabelStyle::default())
        .err()
        .unwrap();
    assert!(matches!(err, DialpaperError::MissingFont));
}

#[test]
fn layout_rejects_non_positive_size() {
    let mut engine = TextLayoutEngine::new();
    let style = LabelStyle {
        size_px: 0.0,
        ..LabelStyle::default()
    };
    let err = engine.layout_label("1", &style).err().unwrap();
    assert!(matches!(err, DialpaperError::Validation(_)));
}

#[test]
fn garbage_bytes_do_not_register_a_family() {
    let mut engine = TextLayoutEngine::new();
    assert!(engine.load_font(vec![0u8; 16]).is_err());
    assert!(!engine.has_font());
}

#[test]
fn missing_font_file_is_a_validation_error() {
    let mut engine = TextLayoutEngine::new();
    let err = engine
        .load_font_file("definitely/not/here.ttf")
        .err()
        .unwrap();
    assert!(err.to_string().contains("failed to read font"));
}

#[test]
fn brush_from_color_copies_channels() {
    let b = TextBrushRgba8::from(ColorValue::rgba(1, 2, 3, 4));
    assert_eq!(
        b,
        TextBrushRgba8 {
            r: 1,
            g: 2,
            b: 3,
            a: 4
        }
    );
}

#[test]
fn glyphs_sit_on_the_line_baseline() {
    let mut engine = crate::test_support::font_engine();
    let style = LabelStyle {
        size_px: 40.0,
        ..LabelStyle::default()
    };
    let label = engine.layout_label("88", &style).unwrap();
    assert_eq!(label.glyph_count(), 2);
    let glyphs: Vec<_> = label.runs.iter().flat_map(|r| r.glyphs.iter()).collect();
    // The baseline lies below the box middle and inside the line box.
    for g in &glyphs {
        assert!(g.y > label.height() / 2.0, "glyph y {} above middle", g.y);
        assert!(g.y < label.height(), "glyph y {} below box", g.y);
    }
    // Pen position advances along the line.
    assert!(glyphs[0].x.abs() < 0.5);
    assert!(glyphs[1].x > 10.0 && glyphs[1].x < label.width());
}
