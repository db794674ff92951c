use crate::foundation::error::{GrimError, GrimResult};
use crate::model::roles::RoleType;

const META_ID: &str = "_meta";

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(try_from = "serde_json::Value")]
/// One element of a script array, classified once at parse time.
pub enum ScriptEntry {
    /// Bare string id of an official character.
    OfficialId(String),
    /// Homebrew character carrying its own definition.
    FullCharacter(CharacterDefinition),
    /// `{"id": ...}` object; the old way of referencing an official character.
    DeprecatedIdOnly(String),
    /// The `_meta` entry naming the script.
    Metadata(ScriptMeta),
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Inline character definition of a homebrew script.
pub struct CharacterDefinition {
    /// Character id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Team.
    pub team: RoleType,
    /// Ability text.
    pub ability: String,
    /// Image URL, or a list of URLs for alignment variants.
    #[serde(default)]
    pub image: Option<serde_json::Value>,
    /// Edition tag.
    #[serde(default)]
    pub edition: Option<String>,
    /// First night order position.
    #[serde(default)]
    pub first_night: Option<i64>,
    /// First night storyteller reminder.
    #[serde(default)]
    pub first_night_reminder: Option<String>,
    /// Other nights order position.
    #[serde(default)]
    pub other_night: Option<i64>,
    /// Reminder token labels.
    #[serde(default)]
    pub reminders: Vec<String>,
    /// Reminder labels available regardless of the character being in play.
    #[serde(default)]
    pub reminders_global: Vec<String>,
    /// Whether the character modifies setup.
    #[serde(default)]
    pub setup: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
/// Script metadata entry.
pub struct ScriptMeta {
    /// Script name.
    pub name: String,
    /// Script author.
    pub author: String,
}

impl TryFrom<serde_json::Value> for ScriptEntry {
    type Error = GrimError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        let obj = match value {
            serde_json::Value::String(id) => return Ok(Self::OfficialId(id)),
            serde_json::Value::Object(obj) => obj,
            other => {
                return Err(GrimError::validation(format!(
                    "script entry must be a string or an object, got {other}"
                )));
            }
        };

        let id = obj
            .get("id")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| GrimError::validation("script entry object is missing a string 'id'"))?
            .to_string();

        if id == META_ID {
            let meta: ScriptMeta = serde_json::from_value(serde_json::Value::Object(obj))?;
            return Ok(Self::Metadata(meta));
        }
        if obj.len() == 1 {
            return Ok(Self::DeprecatedIdOnly(id));
        }

        let def: CharacterDefinition = serde_json::from_value(serde_json::Value::Object(obj))?;
        Ok(Self::FullCharacter(def))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Role reference inside a [`Script`].
pub struct ScriptRole {
    /// Character id.
    pub id: String,
    /// Whether the id refers to an official character rather than an inline definition.
    pub official: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A parsed script: its name, author and ordered roles.
pub struct Script {
    /// Script name; empty when the script has no metadata entry.
    pub name: String,
    /// Script author; empty when the script has no metadata entry.
    pub author: String,
    /// Roles in script order.
    pub roles: Vec<ScriptRole>,
}

impl Script {
    /// Parse a script JSON array.
    pub fn parse(json: &str) -> GrimResult<Self> {
        let entries: Vec<ScriptEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// Build from classified entries. More than one metadata entry is an error.
    pub fn from_entries(entries: impl IntoIterator<Item = ScriptEntry>) -> GrimResult<Self> {
        let mut meta: Option<ScriptMeta> = None;
        let mut roles = Vec::new();

        for entry in entries {
            match entry {
                ScriptEntry::OfficialId(id) | ScriptEntry::DeprecatedIdOnly(id) => {
                    roles.push(ScriptRole { id, official: true });
                }
                ScriptEntry::FullCharacter(def) => roles.push(ScriptRole {
                    id: def.id,
                    official: false,
                }),
                ScriptEntry::Metadata(m) => {
                    if meta.is_some() {
                        return Err(GrimError::validation("script has multiple _meta entries"));
                    }
                    meta = Some(m);
                }
            }
        }

        let ScriptMeta { name, author } = meta.unwrap_or(ScriptMeta {
            name: String::new(),
            author: String::new(),
        });
        Ok(Self {
            name,
            author,
            roles,
        })
    }

    /// Whether the script lists `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.roles.iter().any(|r| r.id == id)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/script.rs"]
mod tests;
