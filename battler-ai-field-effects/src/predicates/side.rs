use battler_data::{
    AdditionalEffect,
    Ability,
    MoveEffect,
    Type,
};
use battler_state::BattlerRef;

use crate::{
    FieldEffectContext,
    predicates::{
        has_damaging_move_of_type,
        has_move_with_effect,
        is_grounded,
    },
};

/// Checks if the Mon or its partner has a move with the given primary effect.
pub fn side_has_move_with_effect(
    context: &FieldEffectContext,
    battler: BattlerRef,
    effect: MoveEffect,
) -> bool {
    has_move_with_effect(context, battler, effect)
        || context
            .partner(battler)
            .is_some_and(|partner| has_move_with_effect(context, partner, effect))
}

/// Checks if any Mon on the side has a damaging move of the given type.
pub fn side_has_damaging_move_of_type(
    context: &FieldEffectContext,
    side: usize,
    typ: Type,
) -> bool {
    context
        .side_battlers(side)
        .any(|battler| has_damaging_move_of_type(context, battler, typ))
}

/// Checks if any Mon on the side has an ability matching the predicate.
pub fn side_has_ability<F>(context: &FieldEffectContext, side: usize, predicate: F) -> bool
where
    F: Fn(Ability) -> bool,
{
    context.side_battlers(side).any(|battler| {
        context
            .battler(battler)
            .is_some_and(|mon| predicate(mon.ability))
    })
}

/// Checks if the side has used a move with the given primary effect during the battle.
pub fn side_used_move_effect(
    context: &FieldEffectContext,
    side: usize,
    effect: MoveEffect,
) -> bool {
    context
        .side(side)
        .is_some_and(|side| side.has_used_move_effect(effect))
}

/// Checks if the side has used a move with the given additional effect during the battle.
pub fn side_used_additional_effect(
    context: &FieldEffectContext,
    side: usize,
    effect: AdditionalEffect,
) -> bool {
    context
        .side(side)
        .is_some_and(|side| side.has_used_additional_effect(effect))
}

/// Checks if the Mon or its partner is affected by terrain.
pub fn self_or_ally_grounded(context: &FieldEffectContext, battler: BattlerRef) -> bool {
    is_grounded(context, battler)
        || context
            .partner(battler)
            .is_some_and(|partner| is_grounded(context, partner))
}
