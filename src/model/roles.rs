use std::collections::BTreeMap;

use crate::foundation::error::{GrimError, GrimResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
/// Team a role belongs to.
pub enum RoleType {
    /// Good, in-town role.
    Townsfolk,
    /// Good role with a drawback.
    Outsider,
    /// Evil helper.
    Minion,
    /// Evil leader.
    Demon,
    /// Storyteller-side rule modifier.
    Fabled,
    /// Player joining mid-game.
    Travellers,
}

impl RoleType {
    /// Parse a team name, ignoring ASCII case.
    pub fn parse(value: &str) -> GrimResult<Self> {
        let v = value.trim().to_ascii_uppercase();
        match v.as_str() {
            "TOWNSFOLK" => Ok(Self::Townsfolk),
            "OUTSIDER" => Ok(Self::Outsider),
            "MINION" => Ok(Self::Minion),
            "DEMON" => Ok(Self::Demon),
            "FABLED" => Ok(Self::Fabled),
            "TRAVELLERS" => Ok(Self::Travellers),
            _ => Err(GrimError::validation(format!("unknown role type '{value}'"))),
        }
    }

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Townsfolk => "townsfolk",
            Self::Outsider => "outsider",
            Self::Minion => "minion",
            Self::Demon => "demon",
            Self::Fabled => "fabled",
            Self::Travellers => "travellers",
        }
    }
}

impl TryFrom<String> for RoleType {
    type Error = GrimError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<RoleType> for String {
    fn from(value: RoleType) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
/// Resolved data for one role id.
pub struct RoleInfo {
    /// Role identifier.
    pub id: String,
    /// Display name drawn around the token.
    pub name: String,
    /// Image reference (catalog-relative path or URL path).
    pub image: String,
    /// Team, when the source provided one.
    pub team: Option<RoleType>,
}

#[derive(Clone, Debug, serde::Deserialize)]
#[serde(untagged)]
enum RoleRecord {
    #[serde(rename_all = "camelCase")]
    ScriptTool {
        id: String,
        name: String,
        role_type: RoleType,
        icon: String,
        #[serde(default)]
        is_disabled: bool,
    },
    Simple {
        id: String,
        name: String,
        image: String,
        #[serde(default)]
        team: Option<RoleType>,
    },
}

#[derive(Clone, Debug, Default)]
/// Role id to [`RoleInfo`] mapping consumed by the asset lookups.
pub struct RoleCatalog {
    roles: BTreeMap<String, RoleInfo>,
}

impl RoleCatalog {
    /// Parse a role list.
    ///
    /// Accepts the script tool's `roles.json` records (`id`, `name`, `roleType`, `icon`, ...)
    /// and a simpler `{id, name, image, team?}` form; both may be mixed. Duplicate ids are
    /// rejected.
    pub fn from_json(json: &str) -> GrimResult<Self> {
        let records: Vec<RoleRecord> = serde_json::from_str(json)?;
        let mut catalog = Self::default();
        for record in records {
            let info = match record {
                RoleRecord::ScriptTool {
                    id,
                    name,
                    role_type,
                    icon,
                    is_disabled,
                } => {
                    if is_disabled {
                        tracing::debug!(role = %id, "catalog entry is disabled upstream");
                    }
                    RoleInfo {
                        id,
                        name,
                        image: icon,
                        team: Some(role_type),
                    }
                }
                RoleRecord::Simple {
                    id,
                    name,
                    image,
                    team,
                } => RoleInfo {
                    id,
                    name,
                    image,
                    team,
                },
            };
            catalog.insert(info)?;
        }
        Ok(catalog)
    }

    /// Add one role; ids must be unique.
    pub fn insert(&mut self, info: RoleInfo) -> GrimResult<()> {
        if info.id.is_empty() {
            return Err(GrimError::validation("role id must be non-empty"));
        }
        if self.roles.contains_key(&info.id) {
            return Err(GrimError::validation(format!(
                "duplicate role id '{}'",
                info.id
            )));
        }
        self.roles.insert(info.id.clone(), info);
        Ok(())
    }

    /// Lookup by id.
    pub fn get(&self, id: &str) -> GrimResult<&RoleInfo> {
        self.roles
            .get(id)
            .ok_or_else(|| GrimError::asset(format!("unknown role '{id}'")))
    }

    /// Whether `id` is known.
    pub fn contains(&self, id: &str) -> bool {
        self.roles.contains_key(id)
    }

    /// Number of roles.
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// True when the catalog holds no roles.
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Roles in id order.
    pub fn iter(&self) -> impl Iterator<Item = &RoleInfo> {
        self.roles.values()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/roles.rs"]
mod tests;
