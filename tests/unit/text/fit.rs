use super::*;
use crate::test_support::FakeFont;

#[test]
fn grows_until_height_overflows() {
    let base = FakeFont { size: 12.0 };
    let fitted = fit_text_to_box("abc", &base, Rect::new(0.0, 0.0, 100.0, 20.0)).unwrap();
    assert_eq!(fitted.size(), 20.0);
}

#[test]
fn grows_until_width_overflows() {
    let base = FakeFont { size: 12.0 };
    let fitted = fit_text_to_box("abcdefghij", &base, Rect::new(0.0, 0.0, 100.0, 90.0)).unwrap();
    assert_eq!(fitted.size(), 16.0);
}

#[test]
fn comparison_is_against_the_far_edge_from_the_origin() {
    let base = FakeFont { size: 12.0 };
    let fitted = fit_text_to_box("abc", &base, Rect::new(500.0, 300.0, 600.0, 320.0)).unwrap();
    assert_eq!(fitted.size(), 20.0);
}

#[test]
fn returns_base_unchanged_when_first_step_overflows() {
    let base = FakeFont { size: 12.0 };
    let fitted = fit_text_to_box("abc", &base, Rect::new(0.0, 0.0, 100.0, 12.5)).unwrap();
    assert_eq!(fitted, base);

    // The base itself already overflows, but it is never measured.
    let fitted = fit_text_to_box("abc", &base, Rect::new(0.0, 0.0, 100.0, 5.0)).unwrap();
    assert_eq!(fitted, base);
}

#[test]
fn fitted_font_never_exceeds_the_box() {
    let base = FakeFont { size: 12.0 };
    for text in ["a", "Killaw", "Axolator the long-named"] {
        for h in [14.0, 30.0, 42.0] {
            let bx = Rect::new(10.0, 10.0, 128.0, 10.0 + h);
            let fitted = fit_text_to_box(text, &base, bx).unwrap();
            if fitted == base {
                continue;
            }
            let b = fitted.measure(text).unwrap();
            assert!(bx.x0 + b.width() <= bx.x1);
            assert!(bx.y0 + b.height() <= bx.y1);
        }
    }
}

#[test]
fn empty_text_keeps_base() {
    let base = FakeFont { size: 12.0 };
    let fitted = fit_text_to_box("", &base, Rect::new(0.0, 0.0, 10.0, 10.0)).unwrap();
    assert_eq!(fitted, base);
}

#[derive(Clone, Debug)]
struct Inkless;

impl TextFont for Inkless {
    fn size(&self) -> f32 {
        1.0
    }
    fn variant(&self, _size_px: f32) -> GrimResult<Self> {
        Ok(Self)
    }
    fn measure(&self, _text: &str) -> GrimResult<crate::text::TextBounds> {
        Ok(crate::text::TextBounds::default())
    }
    fn shape(&self, _text: &str) -> GrimResult<crate::text::ShapedText> {
        Err(GrimError::render("unused"))
    }
}

#[test]
fn unbounded_growth_is_a_validation_error() {
    let err = fit_text_to_box("x", &Inkless, Rect::new(0.0, 0.0, 10.0, 10.0)).unwrap_err();
    assert!(matches!(err, GrimError::Validation(_)));
}
