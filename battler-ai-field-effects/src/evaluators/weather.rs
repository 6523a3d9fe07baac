use battler_data::{
    Ability,
    HoldEffect,
    MoveEffect,
    MoveFlag,
    Type,
    Weather,
};

use crate::{
    FieldEffectContext,
    Verdict,
    evaluators::Subject,
    predicates::{
        has_damaging_move_of_type,
        has_light_sensitive_move,
        has_move_with_flag,
        has_weather_affinity,
        is_immune_to_sandstorm,
        is_of_any_type,
        side_has_move_with_effect,
    },
};

/// Checks if the foe carries a move that never misses in the active weather, when configured.
fn foe_has_sure_hit_move(context: &FieldEffectContext, subject: Subject, flag: MoveFlag) -> bool {
    context.options().penalize_foe_sure_hit_moves
        && context
            .foe_of(subject.position)
            .is_some_and(|foe| has_move_with_flag(context, foe, flag))
}

/// Scores harsh sunlight.
pub(crate) fn sun(context: &FieldEffectContext, subject: Subject) -> Verdict {
    let position = subject.position;
    if subject.hold_effect == HoldEffect::UtilityUmbrella {
        return subject.evaluate_partner(context, sun).unwrap_or(Verdict::Neutral);
    }

    if has_weather_affinity(context, subject.ability, Weather::HarshSunlight)
        || has_light_sensitive_move(context, position)
        || has_damaging_move_of_type(context, position, Type::Fire)
    {
        return Verdict::Positive;
    }

    if let Some(verdict) = subject.evaluate_partner(context, sun) {
        return verdict;
    }

    if has_move_with_flag(context, position, MoveFlag::HalfAccuracyInSun)
        || has_damaging_move_of_type(context, position, Type::Water)
        || subject.ability == Ability::DrySkin
    {
        return Verdict::Negative;
    }

    Verdict::Neutral
}

/// Scores rain.
pub(crate) fn rain(context: &FieldEffectContext, subject: Subject) -> Verdict {
    let position = subject.position;
    if subject.hold_effect == HoldEffect::UtilityUmbrella {
        return subject.evaluate_partner(context, rain).unwrap_or(Verdict::Neutral);
    }

    if has_weather_affinity(context, subject.ability, Weather::Rain)
        || has_move_with_flag(context, position, MoveFlag::AlwaysHitsInRain)
        || has_damaging_move_of_type(context, position, Type::Water)
    {
        return Verdict::Positive;
    }

    if let Some(verdict) = subject.evaluate_partner(context, rain) {
        return verdict;
    }

    if has_light_sensitive_move(context, position)
        || has_damaging_move_of_type(context, position, Type::Fire)
    {
        return Verdict::Negative;
    }

    // Thunder and Hurricane never miss.
    if foe_has_sure_hit_move(context, subject, MoveFlag::AlwaysHitsInRain) {
        return Verdict::Negative;
    }

    Verdict::Neutral
}

/// Scores sandstorm.
///
/// Sandstorm helps a side when one of its Mons takes no damage from it while the opposing Mon
/// does.
pub(crate) fn sandstorm(context: &FieldEffectContext, subject: Subject) -> Verdict {
    let position = subject.position;
    if has_weather_affinity(context, subject.ability, Weather::Sandstorm)
        || is_of_any_type(context, position, &[Type::Rock])
        || side_has_move_with_effect(context, position, MoveEffect::ShoreUp)
    {
        return Verdict::Positive;
    }

    if subject.hold_effect == HoldEffect::SafetyGoggles
        || is_of_any_type(context, position, &[Type::Rock, Type::Ground, Type::Steel])
    {
        if context
            .foe_of(position)
            .is_some_and(|foe| !is_immune_to_sandstorm(context, foe))
        {
            return Verdict::Positive;
        }
        return subject
            .evaluate_partner(context, sandstorm)
            .unwrap_or(Verdict::Neutral);
    }

    subject
        .evaluate_partner(context, sandstorm)
        .unwrap_or(Verdict::Negative)
}

/// Scores hail or snow.
///
/// Only hail deals damage by default, so snow is mostly about Blizzard accuracy and sunlight
/// moves.
pub(crate) fn hail_or_snow(
    context: &FieldEffectContext,
    subject: Subject,
    weather: Weather,
) -> Verdict {
    let position = subject.position;
    if has_weather_affinity(context, subject.ability, weather)
        || is_of_any_type(context, position, &[Type::Ice])
        || has_move_with_flag(context, position, MoveFlag::AlwaysHitsInHailOrSnow)
        || side_has_move_with_effect(context, position, MoveEffect::AuroraVeil)
    {
        return Verdict::Positive;
    }

    if let Some(verdict) = subject.evaluate_partner(context, |context, partner| {
        hail_or_snow(context, partner, weather)
    }) {
        return verdict;
    }

    if weather.is_damaging(context.options().snow_deals_damage)
        && subject.hold_effect != HoldEffect::SafetyGoggles
    {
        return Verdict::Negative;
    }

    if has_light_sensitive_move(context, position) {
        return Verdict::Negative;
    }

    if foe_has_sure_hit_move(context, subject, MoveFlag::AlwaysHitsInHailOrSnow) {
        return Verdict::Negative;
    }

    Verdict::Neutral
}
