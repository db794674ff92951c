use super::*;
use crate::{foundation::core::Rect, test_support::fixture_font, text::fit::fit_text_to_box};

#[test]
fn junk_bytes_are_not_a_font() {
    let err = ParleyFont::from_bytes(b"placeholder".to_vec(), 12.0).unwrap_err();
    assert!(matches!(err, GrimError::Asset(_)));
}

#[test]
fn variant_keeps_the_face_and_rejects_bad_sizes() {
    let font = fixture_font(12.0);
    assert_eq!(font.family(), "DejaVu Sans");

    let big = font.variant(30.0).unwrap();
    assert_eq!(big.size(), 30.0);
    assert_eq!(big.family(), font.family());
    assert!(font.variant(0.0).is_err());
    assert!(font.variant(f32::NAN).is_err());
}

#[test]
fn shaped_glyphs_advance_along_one_baseline() {
    let run = fixture_font(12.0).shape("Killaw").unwrap();
    assert_eq!(run.glyphs.len(), 6);

    let baseline = run.glyphs[0].y;
    assert!(baseline > 0.0 && f64::from(baseline) < run.height);
    for pair in run.glyphs.windows(2) {
        assert!(pair[1].x > pair[0].x, "{:?}", run.glyphs);
        assert_eq!(pair[1].y, baseline);
    }
    assert!(f64::from(run.glyphs[5].x) < run.width);
}

#[test]
fn ink_grows_with_the_text() {
    let font = fixture_font(12.0);
    let one = font.measure("W").unwrap();
    let two = font.measure("WW").unwrap();
    let six = font.measure("WWWWWW").unwrap();

    assert!(one.width() > 0.0);
    assert!(two.width() > one.width());
    assert!(six.width() > 2.0 * two.width());
    assert_eq!(two.height(), one.height());
}

#[test]
fn ink_sits_inside_the_line_box() {
    let font = fixture_font(20.0);
    let run = font.shape("Hg").unwrap();
    let ink = font.measure("Hg").unwrap();
    assert!(ink.top >= 0.0, "{ink:?}");
    assert!(ink.bottom <= run.height.ceil() + 1.0, "{ink:?} vs {}", run.height);
    assert!(ink.right <= run.width.ceil() + 1.0, "{ink:?} vs {}", run.width);
}

#[test]
fn blank_text_has_no_ink() {
    let font = fixture_font(12.0);
    assert_eq!(font.measure(" ").unwrap(), TextBounds::default());
}

#[test]
fn long_names_fit_smaller_than_short_ones() {
    let base = fixture_font(12.0);
    let bx = Rect::new(416.0, 138.0, 534.0, 180.0);

    let long = fit_text_to_box("Bartholomew the Great", &base, bx).unwrap();
    let short = fit_text_to_box("Al", &base, bx).unwrap();
    assert!(long.size() < short.size(), "{} vs {}", long.size(), short.size());

    for (text, font) in [("Bartholomew the Great", &long), ("Al", &short)] {
        let ink = font.measure(text).unwrap();
        assert!(bx.x0 + ink.width() <= bx.x1, "{text}: {ink:?}");
        assert!(bx.y0 + ink.height() <= bx.y1, "{text}: {ink:?}");
    }
}
