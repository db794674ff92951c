#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// One occupant of a seat.
///
/// The renderer only reads players; it never mutates them.
pub struct Player {
    /// The player's real name, shown on the nameplate.
    pub name: String,
    /// Role identifier, resolved through the asset lookups.
    pub role: String,
    /// Draws the shroud over the seat.
    #[serde(default)]
    pub dead: bool,
    /// Travellers sit in the circle like everyone else; kept for callers that sort or filter.
    #[serde(default)]
    pub traveler: bool,
    /// Role is public, so it is drawn even without grim access.
    #[serde(default)]
    pub visible: bool,
    /// Reminder tokens in ring order, outermost first.
    #[serde(default)]
    pub reminders: Vec<Reminder>,
}

impl Player {
    /// Living, hidden player without reminders.
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            dead: false,
            traveler: false,
            visible: false,
            reminders: Vec::new(),
        }
    }

    /// Mark the player dead.
    pub fn dead(mut self) -> Self {
        self.dead = true;
        self
    }

    /// Make the role public.
    pub fn visible(mut self) -> Self {
        self.visible = true;
        self
    }

    /// Mark the player as a traveller.
    pub fn traveler(mut self) -> Self {
        self.traveler = true;
        self
    }

    /// Append a reminder token.
    pub fn reminder(mut self, icon: Option<&str>, label: impl Into<String>) -> Self {
        self.reminders.push(Reminder {
            icon: icon.map(str::to_string),
            label: label.into(),
        });
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Small token placed on an inner ring next to a seat.
pub struct Reminder {
    /// Role identifier whose image is used as the icon.
    #[serde(default)]
    pub icon: Option<String>,
    /// Free text, drawn verbatim around the token.
    pub label: String,
}

#[cfg(test)]
#[path = "../../tests/unit/model/player.rs"]
mod tests;
