use battler_data::{
    Ability,
    FieldStatus,
    HoldEffect,
    Weather,
};
use battler_state::BattlerRef;

use crate::FieldEffectContext;

/// Checks if the ability benefits from the given weather.
///
/// Abilities that ignore weather damage benefit from Sandstorm and Hail. Snow is only considered
/// damaging with [`FieldEffectOptions::snow_deals_damage`][`crate::FieldEffectOptions`], so use
/// [`has_weather_affinity`] when options are available.
pub fn ability_benefits_from_weather(ability: Ability, weather: Weather) -> bool {
    match ability {
        Ability::Forecast => {
            matches!(weather, Weather::Rain | Weather::HarshSunlight) || weather.is_icy()
        }
        Ability::MagicGuard | Ability::Overcoat => weather.is_damaging(false),
        Ability::SandForce | Ability::SandRush | Ability::SandVeil => weather == Weather::Sandstorm,
        Ability::IceBody | Ability::IceFace | Ability::SnowCloak => weather.is_icy(),
        Ability::SlushRush => weather == Weather::Snow,
        Ability::DrySkin | Ability::Hydration | Ability::RainDish | Ability::SwiftSwim => {
            weather == Weather::Rain
        }
        Ability::Chlorophyll
        | Ability::FlowerGift
        | Ability::Harvest
        | Ability::LeafGuard
        | Ability::OrichalcumPulse
        | Ability::Protosynthesis
        | Ability::SolarPower => weather == Weather::HarshSunlight,
        _ => false,
    }
}

/// Checks if the ability prevents damage from weather.
pub fn ability_ignores_weather_damage(ability: Ability) -> bool {
    matches!(ability, Ability::MagicGuard | Ability::Overcoat)
}

/// Checks if the ability benefits from the given field status.
///
/// No ability benefits from Misty Terrain or Psychic Terrain. Neither terrain boosts or otherwise
/// rewards any ability on its own.
pub fn ability_benefits_from_field_status(ability: Ability, status: FieldStatus) -> bool {
    match ability {
        Ability::HadronEngine | Ability::QuarkDrive | Ability::SurgeSurfer => {
            status == FieldStatus::ElectricTerrain
        }
        Ability::GrassPelt => status == FieldStatus::GrassyTerrain,
        _ => false,
    }
}

/// Checks if the ability benefits from the given weather, taking configured weather damage into
/// account.
pub fn has_weather_affinity(
    context: &FieldEffectContext,
    ability: Ability,
    weather: Weather,
) -> bool {
    ability_benefits_from_weather(ability, weather)
        || (ability_ignores_weather_damage(ability)
            && weather.is_damaging(context.options().snow_deals_damage))
}

/// Checks if the Mon takes no damage from Sandstorm.
pub fn is_immune_to_sandstorm(context: &FieldEffectContext, battler: BattlerRef) -> bool {
    context.battler(battler).is_some_and(|mon| {
        mon.types.iter().any(|typ| typ.resists_sandstorm())
            || mon.hold_effect == HoldEffect::SafetyGoggles
            || has_weather_affinity(context, mon.ability, Weather::Sandstorm)
    })
}
