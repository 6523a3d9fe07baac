use battler_data::{
    AdditionalEffect,
    FieldStatus,
    MoveEffect,
    Type,
};
use battler_state::BattlerRef;

use crate::{
    FieldEffectContext,
    Verdict,
    evaluators::Subject,
    predicates::{
        ability_benefits_from_field_status,
        has_damaging_move_of_type,
        has_move_with_effect,
        is_asleep_or_drowsy,
        is_grounded,
        self_or_ally_grounded,
        side_has_ability,
        side_has_damaging_move_of_type,
        side_has_move_with_effect,
        side_used_additional_effect,
        side_used_move_effect,
    },
};

/// Checks if the foe can fully recover with Rest while terrain would keep it awake.
fn foe_rests_while_grounded(context: &FieldEffectContext, position: BattlerRef) -> bool {
    context.foe_of(position).is_some_and(|foe| {
        has_move_with_effect(context, foe, MoveEffect::Rest) && is_grounded(context, foe)
    })
}

/// Scores Electric Terrain.
pub(crate) fn electric_terrain(context: &FieldEffectContext, subject: Subject) -> Verdict {
    let position = subject.position;
    let foe_side = position.foe_side();
    let grounded = is_grounded(context, position);
    if ability_benefits_from_field_status(subject.ability, FieldStatus::ElectricTerrain)
        || has_move_with_effect(context, position, MoveEffect::RisingVoltage)
        || foe_rests_while_grounded(context, position)
        || (grounded && side_used_additional_effect(context, foe_side, AdditionalEffect::Sleep))
        || (grounded
            && (is_asleep_or_drowsy(context, position)
                || has_damaging_move_of_type(context, position, Type::Electric)))
    {
        return Verdict::Positive;
    }

    subject
        .evaluate_partner(context, electric_terrain)
        .unwrap_or(Verdict::Neutral)
}

/// Scores Grassy Terrain.
pub(crate) fn grassy_terrain(context: &FieldEffectContext, subject: Subject) -> Verdict {
    let position = subject.position;
    let foe_side = position.foe_side();
    let grounded = is_grounded(context, position);
    if ability_benefits_from_field_status(subject.ability, FieldStatus::GrassyTerrain)
        || side_has_move_with_effect(context, position, MoveEffect::GrassyGlide)
        || side_used_additional_effect(context, position.side, AdditionalEffect::FloralHealing)
        // Earthquake and Magnitude are weakened.
        || (grounded
            && (side_used_move_effect(context, foe_side, MoveEffect::Earthquake)
                || side_used_move_effect(context, foe_side, MoveEffect::Magnitude)))
        || (grounded && has_damaging_move_of_type(context, position, Type::Grass))
    {
        return Verdict::Positive;
    }

    subject
        .evaluate_partner(context, grassy_terrain)
        .unwrap_or(Verdict::Neutral)
}

/// Scores Misty Terrain.
pub(crate) fn misty_terrain(context: &FieldEffectContext, subject: Subject) -> Verdict {
    let position = subject.position;
    let foe_side = position.foe_side();
    let side_grounded = self_or_ally_grounded(context, position);
    if ability_benefits_from_field_status(subject.ability, FieldStatus::MistyTerrain)
        || side_has_move_with_effect(context, position, MoveEffect::MistyExplosion)
        || foe_rests_while_grounded(context, position)
        // Dragon moves are weakened.
        || (side_grounded && side_has_damaging_move_of_type(context, foe_side, Type::Dragon))
        || (side_grounded
            && side_used_additional_effect(context, foe_side, AdditionalEffect::Sleep))
        || (is_grounded(context, position) && is_asleep_or_drowsy(context, position))
    {
        return Verdict::Positive;
    }

    subject
        .evaluate_partner(context, misty_terrain)
        .unwrap_or(Verdict::Neutral)
}

/// Scores Psychic Terrain.
pub(crate) fn psychic_terrain(context: &FieldEffectContext, subject: Subject) -> Verdict {
    let position = subject.position;
    let foe_side = position.foe_side();
    if ability_benefits_from_field_status(subject.ability, FieldStatus::PsychicTerrain)
        || side_has_move_with_effect(context, position, MoveEffect::ExpandingForce)
        // Priority moves from the foe are blocked.
        || (self_or_ally_grounded(context, position)
            && side_has_ability(context, foe_side, |ability| ability.grants_priority()))
        || (is_grounded(context, position)
            && has_damaging_move_of_type(context, position, Type::Psychic))
    {
        return Verdict::Positive;
    }

    if let Some(verdict) = subject
        .evaluate_partner(context, psychic_terrain)
        .filter(|verdict| verdict.is_decisive())
    {
        return verdict;
    }

    if subject.ability.grants_priority() {
        return Verdict::Negative;
    }

    Verdict::Neutral
}
