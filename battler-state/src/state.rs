use std::fmt::{
    self,
    Display,
};

use ahash::HashSet;
use battler_data::{
    AdditionalEffect,
    Ability,
    BattleType,
    FieldStatus,
    HoldEffect,
    MoveEffect,
    Status,
    Type,
    Weather,
};
use serde::{
    Deserialize,
    Serialize,
};

/// The maximum number of move slots for a single Mon.
pub const MAX_MOVE_SLOTS: usize = 4;

fn default_true() -> bool {
    true
}

/// A reference to an active Mon by its position on the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BattlerRef {
    pub side: usize,
    pub slot: usize,
}

impl BattlerRef {
    pub fn new(side: usize, slot: usize) -> Self {
        Self { side, slot }
    }

    /// The index of the opposing side.
    pub fn foe_side(&self) -> usize {
        1 - self.side.min(1)
    }
}

impl Display for BattlerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "battler {} on side {}", self.slot, self.side)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SerializedMoveSlot {
    Name(String),
    Full {
        name: String,
        #[serde(default)]
        unavailable: bool,
    },
}

/// A single move slot in a Mon's moveset.
///
/// Empty slots are simply left out of the moveset. A slot can be deserialized from the move name
/// alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SerializedMoveSlot")]
pub struct MoveSlot {
    /// Name of the move.
    pub name: String,
    /// The move cannot be selected at this time (for instance, it is out of PP or disabled).
    #[serde(default)]
    pub unavailable: bool,
}

impl MoveSlot {
    pub fn new<S>(name: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            name: name.into(),
            unavailable: false,
        }
    }

    pub fn unavailable<S>(name: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            name: name.into(),
            unavailable: true,
        }
    }
}

impl From<SerializedMoveSlot> for MoveSlot {
    fn from(value: SerializedMoveSlot) -> Self {
        match value {
            SerializedMoveSlot::Name(name) => Self::new(name),
            SerializedMoveSlot::Full { name, unavailable } => Self { name, unavailable },
        }
    }
}

/// A snapshot of a single active Mon, as seen by the AI at one decision point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattlerSnapshot {
    pub name: String,
    #[serde(default)]
    pub ability: Ability,
    #[serde(default)]
    pub hold_effect: HoldEffect,
    #[serde(default)]
    pub types: Vec<Type>,
    #[serde(default)]
    pub moves: Vec<MoveSlot>,
    #[serde(default)]
    pub status: Option<Status>,
    /// Will fall asleep at the end of the next turn (for instance, from Yawn).
    #[serde(default)]
    pub drowsy: bool,
    /// Affected by terrain.
    ///
    /// Accounts for type, ability, item, and other field effects.
    #[serde(default = "default_true")]
    pub grounded: bool,
    #[serde(default)]
    pub speed: u32,
    #[serde(default)]
    pub hp: u32,
    #[serde(default)]
    pub max_hp: u32,
    #[serde(default)]
    pub fainted: bool,
}

impl Default for BattlerSnapshot {
    fn default() -> Self {
        Self {
            name: String::default(),
            ability: Ability::default(),
            hold_effect: HoldEffect::default(),
            types: Vec::default(),
            moves: Vec::default(),
            status: None,
            drowsy: false,
            grounded: true,
            speed: 0,
            hp: 0,
            max_hp: 0,
            fainted: false,
        }
    }
}

impl BattlerSnapshot {
    /// Checks if the Mon has the given type.
    pub fn has_type(&self, typ: Type) -> bool {
        self.types.contains(&typ)
    }

    /// Checks if the Mon has any of the given types.
    pub fn has_any_type<I>(&self, iter: I) -> bool
    where
        I: IntoIterator<Item = Type>,
    {
        iter.into_iter().any(|typ| self.has_type(typ))
    }

    /// Checks if the Mon is asleep.
    pub fn is_asleep(&self) -> bool {
        self.status == Some(Status::Sleep)
    }

    /// Checks if the Mon is asleep or will fall asleep soon.
    pub fn is_asleep_or_drowsy(&self) -> bool {
        self.is_asleep() || self.drowsy
    }

    /// Checks if the Mon is at full health.
    pub fn is_at_full_health(&self) -> bool {
        self.hp >= self.max_hp
    }

    /// The names of all moves that can currently be selected.
    pub fn available_moves(&self) -> impl Iterator<Item = &str> {
        self.moves
            .iter()
            .filter(|slot| !slot.unavailable && !slot.name.is_empty())
            .map(|slot| slot.name.as_str())
    }
}

/// A snapshot of one side of the battle.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SideSnapshot {
    /// Active Mons, indexed by slot.
    #[serde(default)]
    pub active: Vec<BattlerSnapshot>,
    /// Primary effects of all moves used by this side during the battle.
    #[serde(default)]
    pub used_move_effects: HashSet<MoveEffect>,
    /// Additional effects of all moves used by this side during the battle.
    #[serde(default)]
    pub used_additional_effects: HashSet<AdditionalEffect>,
}

impl SideSnapshot {
    /// Checks if the side has used a move with the given primary effect.
    pub fn has_used_move_effect(&self, effect: MoveEffect) -> bool {
        self.used_move_effects.contains(&effect)
    }

    /// Checks if the side has used a move with the given additional effect.
    pub fn has_used_additional_effect(&self, effect: AdditionalEffect) -> bool {
        self.used_additional_effects.contains(&effect)
    }
}

/// A snapshot of the whole field.
///
/// Snapshots are produced once per decision point and are never modified while they are being
/// evaluated.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSnapshot {
    #[serde(default)]
    pub battle_type: BattleType,
    #[serde(default)]
    pub weather: Option<Weather>,
    #[serde(default)]
    pub field_statuses: HashSet<FieldStatus>,
    #[serde(default)]
    pub sides: Vec<SideSnapshot>,
}

impl FieldSnapshot {
    /// Checks if the given field status is active.
    pub fn has_field_status(&self, status: FieldStatus) -> bool {
        self.field_statuses.contains(&status)
    }

    /// Checks if the active weather belongs to the primal class.
    pub fn has_primal_weather(&self) -> bool {
        self.weather.is_some_and(|weather| weather.is_primal())
    }
}
