use serde::{
    Deserialize,
    Serialize,
};

use crate::FieldEffectError;

/// Options that change how field effects are scored.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldEffectOptions {
    /// Should a foe that carries a move that never misses in the active weather make the weather
    /// unfavorable?
    ///
    /// Applies to rain and to hail or snow. Only considered once the Mon's own side has no reason
    /// to want the weather.
    #[serde(default)]
    pub penalize_foe_sure_hit_moves: bool,

    /// Does snow deal damage at the end of each turn, like hail?
    ///
    /// By default, snow does not deal damage, so Mons that would be hurt by hail are unaffected.
    #[serde(default)]
    pub snow_deals_damage: bool,
}

impl FieldEffectOptions {
    /// Parses options from a JSON document.
    ///
    /// Missing fields take their default value.
    pub fn from_json_str(json: &str) -> Result<Self, FieldEffectError> {
        serde_json::from_str(json).map_err(FieldEffectError::from)
    }
}
