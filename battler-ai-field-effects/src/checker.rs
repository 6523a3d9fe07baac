use battler_data::{
    Ability,
    FieldStatus,
    HoldEffect,
    Weather,
};
use battler_state::BattlerRef;

use crate::{
    FieldEffectContext,
    Verdict,
    evaluators::{
        Subject,
        electric_terrain,
        grassy_terrain,
        hail_or_snow,
        misty_terrain,
        psychic_terrain,
        rain,
        sandstorm,
        sun,
        trick_room,
    },
    predicates::ability_benefits_from_field_status,
};

/// Scores how the given weather would affect the side of the Mon.
///
/// The Mon is scored with the given ability and held item rather than the ones reported by the
/// battle state. In a doubles battle, the partner is scored with its own ability and item when the
/// Mon alone does not decide the verdict.
///
/// Returns [`Verdict::Blocked`] while a primal weather is active, since no other weather can be
/// set.
pub fn weather_verdict(
    context: &FieldEffectContext,
    battler: BattlerRef,
    ability: Ability,
    hold_effect: HoldEffect,
    weather: Weather,
) -> Verdict {
    if context.field().has_primal_weather() {
        log::trace!("{weather} for {battler} is blocked by primal weather");
        return Verdict::Blocked;
    }
    if context.battler(battler).is_none() {
        log::warn!("Cannot score {weather} for {battler}, which is not active");
        return Verdict::Neutral;
    }

    let subject = Subject::new(battler, ability, hold_effect);
    let verdict = match weather {
        Weather::Rain => rain(context, subject),
        Weather::HarshSunlight => sun(context, subject),
        Weather::Sandstorm => sandstorm(context, subject),
        Weather::Hail | Weather::Snow => hail_or_snow(context, subject, weather),
        _ => Verdict::Neutral,
    };
    log::debug!("{weather} for {battler} ({ability}, {hold_effect}) is {verdict}");
    verdict
}

/// Checks if the given weather would affect the side of the Mon as desired.
///
/// Pass [`Verdict::Blocked`] to check if weather cannot be changed at all.
pub fn check_weather_benefit(
    context: &FieldEffectContext,
    battler: BattlerRef,
    ability: Ability,
    hold_effect: HoldEffect,
    weather: Weather,
    desired: Verdict,
) -> bool {
    weather_verdict(context, battler, ability, hold_effect, weather) == desired
}

/// Scores how the given field status would affect the side of the Mon.
pub fn field_status_verdict(
    context: &FieldEffectContext,
    battler: BattlerRef,
    status: FieldStatus,
) -> Verdict {
    let Some(mon) = context.battler(battler) else {
        log::warn!("Cannot score {status} for {battler}, which is not active");
        return Verdict::Neutral;
    };

    if let Some(partner) = context.partner(battler)
        && context
            .battler(partner)
            .is_some_and(|partner| ability_benefits_from_field_status(partner.ability, status))
    {
        log::trace!("{status} for {battler} benefits the ability of partner {partner}");
        return Verdict::Positive;
    }

    let subject = Subject::new(battler, mon.ability, mon.hold_effect);
    let verdict = match status {
        FieldStatus::ElectricTerrain => electric_terrain(context, subject),
        FieldStatus::GrassyTerrain => grassy_terrain(context, subject),
        FieldStatus::MistyTerrain => misty_terrain(context, subject),
        FieldStatus::PsychicTerrain => psychic_terrain(context, subject),
        FieldStatus::TrickRoom => trick_room(context, subject),
    };
    log::debug!("{status} for {battler} is {verdict}");
    verdict
}

/// Checks if the given field status would affect the side of the Mon as desired.
pub fn check_field_status_benefit(
    context: &FieldEffectContext,
    battler: BattlerRef,
    status: FieldStatus,
    desired: Verdict,
) -> bool {
    field_status_verdict(context, battler, status) == desired
}
