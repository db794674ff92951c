use crate::{
    foundation::core::Rect,
    foundation::error::{GrimError, GrimResult},
    text::TextFont,
};

/// Upper bound on size steps before fitting is treated as a configuration error.
pub const MAX_FIT_STEPS: usize = 512;

/// Largest variant of `base` whose ink box still fits inside `bx`.
///
/// The search starts at `base.size() + 1` and grows by one pixel per step; the base size itself is
/// never measured. When the first step already overflows, `base` is returned unchanged. The fit
/// test is `bx.x0 + width > bx.x1` or `bx.y0 + height > bx.y1`.
pub fn fit_text_to_box<F: TextFont>(text: &str, base: &F, bx: Rect) -> GrimResult<F> {
    if text.is_empty() {
        return Ok(base.clone());
    }

    let mut best = base.clone();
    let mut size = base.size() + 1.0;
    for _ in 0..MAX_FIT_STEPS {
        let candidate = base.variant(size)?;
        let bounds = candidate.measure(text)?;
        if bx.x0 + bounds.width() > bx.x1 || bx.y0 + bounds.height() > bx.y1 {
            tracing::trace!(text, size = best.size(), "fitted text to box");
            return Ok(best);
        }
        best = candidate;
        size += 1.0;
    }

    Err(GrimError::validation(format!(
        "text '{text}' still fits after {MAX_FIT_STEPS} size steps; is the font measuring ink?"
    )))
}

#[cfg(test)]
#[path = "../../tests/unit/text/fit.rs"]
mod tests;
