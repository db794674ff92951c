use crate::foundation::core::Canvas;
use crate::foundation::error::{GrimError, GrimResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Fixed sizing of a grimoire render.
///
/// These values are read once when a [`crate::Grim`] is built and never change for its lifetime.
/// The defaults produce a balanced board for up to roughly fifteen seats.
pub struct GrimConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Diameter of a seat token.
    pub token_size: u32,
    /// Diameter of a reminder token.
    pub reminder_size: u32,
    /// Height of the nameplate under each seat token.
    pub nameplate_height: u32,
    /// Spacing between tokens, nameplates and reminder rings.
    pub token_padding: u32,
}

impl Default for GrimConfig {
    fn default() -> Self {
        Self {
            width: 950,
            height: 950,
            token_size: 128,
            reminder_size: 64,
            nameplate_height: 42,
            token_padding: 10,
        }
    }
}

impl GrimConfig {
    /// Output canvas of this configuration.
    pub fn canvas(&self) -> GrimResult<Canvas> {
        Canvas::new(self.width, self.height)
    }

    /// Check that every size is usable and the seat circle has a positive radius.
    pub fn validate(&self) -> GrimResult<()> {
        self.canvas()?;
        if self.token_size == 0 {
            return Err(GrimError::validation("token_size must be > 0"));
        }
        if self.reminder_size == 0 {
            return Err(GrimError::validation("reminder_size must be > 0"));
        }
        if self.nameplate_height == 0 {
            return Err(GrimError::validation("nameplate_height must be > 0"));
        }
        if self.token_padding >= self.token_size {
            return Err(GrimError::validation(
                "token_padding must be smaller than token_size",
            ));
        }

        let reserved = u64::from(self.token_size)
            + u64::from(self.nameplate_height)
            + u64::from(self.token_padding)
            + 1;
        if u64::from(self.height) <= reserved {
            return Err(GrimError::validation(format!(
                "canvas height {} leaves no room for the seat circle (needs > {reserved})",
                self.height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
