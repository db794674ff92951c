use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context;
use image::RgbaImage;

use crate::{
    assets::{decode::decode_image, store::DiskAssets},
    config::GrimConfig,
    foundation::error::{GrimError, GrimResult},
    grim::Grim,
    model::{player::Player, script::Script},
};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
/// JSON description of one grimoire render.
///
/// Paths are relative to the directory holding the session file unless absolute.
pub struct SessionDef {
    /// Renderer sizing; defaults apply to missing fields.
    #[serde(default)]
    pub config: GrimConfig,
    /// TTF/OTF font file.
    pub font: PathBuf,
    /// Shroud image drawn over dead players.
    pub shroud: PathBuf,
    /// Role catalog JSON.
    pub roles: PathBuf,
    /// Directory catalog image references resolve against.
    #[serde(default)]
    pub assets: Option<PathBuf>,
    /// Script JSON the players' roles are checked against.
    #[serde(default)]
    pub script: Option<PathBuf>,
    /// Players in seat order, seat 0 at the top.
    pub players: Vec<Player>,
}

/// A loaded session: players plus everything needed to build a [`Grim`] for them.
#[derive(Debug)]
pub struct Session {
    config: GrimConfig,
    players: Vec<Player>,
    script: Option<Script>,
    shroud: RgbaImage,
    assets: DiskAssets,
}

impl Session {
    /// Parse a session JSON file and load the assets it points to.
    pub fn from_path(path: impl AsRef<Path>) -> GrimResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            GrimError::validation(format!("open session JSON '{}': {e}", path.display()))
        })?;
        let def: SessionDef = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| GrimError::serde(format!("parse session JSON '{}': {e}", path.display())))?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Self::from_def(def, base)
    }

    /// Load the assets of an already parsed session, resolving relative paths against `base`.
    pub fn from_def(def: SessionDef, base: &Path) -> GrimResult<Self> {
        def.config.validate()?;
        if def.players.is_empty() {
            return Err(GrimError::validation("session has no players"));
        }

        let resolve = |p: &Path| base.join(p);
        let root = def.assets.as_deref().map_or_else(|| base.to_path_buf(), resolve);
        let assets = DiskAssets::open(root, &resolve(&def.roles), &resolve(&def.font))?;

        let shroud_path = resolve(&def.shroud);
        let shroud_bytes = std::fs::read(&shroud_path)
            .with_context(|| format!("read shroud '{}'", shroud_path.display()))?;
        let shroud = decode_image(&shroud_bytes)?;

        let script = match &def.script {
            Some(p) => {
                let p = resolve(p);
                let json = std::fs::read_to_string(&p)
                    .with_context(|| format!("read script '{}'", p.display()))?;
                Some(Script::parse(&json)?)
            }
            None => None,
        };

        let session = Self {
            config: def.config,
            players: def.players,
            script,
            shroud,
            assets,
        };
        session.check_roles()?;
        Ok(session)
    }

    fn check_roles(&self) -> GrimResult<()> {
        let catalog = self.assets.catalog();
        for player in &self.players {
            if !catalog.contains(&player.role) {
                return Err(GrimError::asset(format!(
                    "player '{}' has unknown role '{}'",
                    player.name, player.role
                )));
            }
            for icon in player.reminders.iter().filter_map(|r| r.icon.as_deref()) {
                if !catalog.contains(icon) {
                    return Err(GrimError::asset(format!(
                        "reminder on '{}' uses unknown role '{icon}'",
                        player.name
                    )));
                }
            }
        }

        if let Some(script) = &self.script {
            for role in self.off_script_roles() {
                tracing::warn!(role, script = %script.name, "role is not on the script");
            }
        }
        Ok(())
    }

    /// Renderer sizing.
    pub fn config(&self) -> &GrimConfig {
        &self.config
    }

    /// Players in seat order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Script, when the session names one.
    pub fn script(&self) -> Option<&Script> {
        self.script.as_ref()
    }

    /// Disk-backed asset lookups.
    pub fn assets(&self) -> &DiskAssets {
        &self.assets
    }

    /// Player roles the script does not list, in seat order. Empty without a script.
    pub fn off_script_roles(&self) -> Vec<&str> {
        let Some(script) = &self.script else {
            return Vec::new();
        };
        self.players
            .iter()
            .map(|p| p.role.as_str())
            .filter(|role| !script.contains(role))
            .collect()
    }

    /// Build a renderer with one seat per player, handing back the players alongside it.
    pub fn into_grim(self) -> GrimResult<(Grim<DiskAssets>, Vec<Player>)> {
        let grim = Grim::new(self.players.len(), self.shroud, self.assets, self.config)?;
        Ok((grim, self.players))
    }
}

#[cfg(test)]
#[path = "../tests/unit/session.rs"]
mod tests;
