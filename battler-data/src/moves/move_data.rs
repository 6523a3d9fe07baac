use ahash::HashSet;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    AdditionalEffect,
    MoveCategory,
    MoveEffect,
    MoveFlag,
    Type,
};

/// Data about a particular move.
///
/// Only the parts of a move that matter for scoring field effects are kept: its category and
/// type, its priority, its primary effect, any additional effects applied on hit, and its flags.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveData {
    /// Name of the move.
    pub name: String,
    /// Move category.
    pub category: MoveCategory,
    /// Move type.
    pub primary_type: Type,
    /// Base power.
    #[serde(default)]
    pub base_power: u32,
    /// Move priority.
    #[serde(default)]
    pub priority: i8,
    /// Primary effect of the move.
    #[serde(default)]
    pub effect: MoveEffect,
    /// Effects applied to the target when the move hits.
    #[serde(default)]
    pub additional_effects: Vec<AdditionalEffect>,
    /// Move flags.
    #[serde(default)]
    pub flags: HashSet<MoveFlag>,
}

impl MoveData {
    /// Checks if the move deals damage.
    pub fn is_damaging(&self) -> bool {
        self.category.is_damaging()
    }

    /// Checks if the move deals damage and is of the given type.
    pub fn is_damaging_of_type(&self, typ: Type) -> bool {
        self.is_damaging() && self.primary_type == typ
    }

    /// Checks if the move has the given flag.
    pub fn has_flag(&self, flag: MoveFlag) -> bool {
        self.flags.contains(&flag)
    }

    /// Checks if the move applies the given additional effect.
    pub fn has_additional_effect(&self, effect: AdditionalEffect) -> bool {
        self.additional_effects.contains(&effect)
    }
}
