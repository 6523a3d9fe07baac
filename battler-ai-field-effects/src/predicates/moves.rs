use battler_data::{
    Ability,
    FieldStatus,
    MoveCategory,
    MoveData,
    MoveEffect,
    MoveFlag,
    Type,
};
use battler_state::BattlerRef;

use crate::FieldEffectContext;

/// Checks if the move's power or effect changes depending on sunlight.
pub fn is_light_sensitive_move(move_data: &MoveData) -> bool {
    move_data.effect.is_light_sensitive()
}

/// Checks if the Mon has any move whose power or effect changes depending on sunlight.
pub fn has_light_sensitive_move(context: &FieldEffectContext, battler: BattlerRef) -> bool {
    context.moves(battler).iter().any(is_light_sensitive_move)
}

/// Checks if the Mon has a damaging move of the given type.
pub fn has_damaging_move_of_type(
    context: &FieldEffectContext,
    battler: BattlerRef,
    typ: Type,
) -> bool {
    context
        .moves(battler)
        .iter()
        .any(|move_data| move_data.is_damaging_of_type(typ))
}

/// Checks if the Mon has a move with the given flag.
pub fn has_move_with_flag(
    context: &FieldEffectContext,
    battler: BattlerRef,
    flag: MoveFlag,
) -> bool {
    context
        .moves(battler)
        .iter()
        .any(|move_data| move_data.has_flag(flag))
}

/// Checks if the Mon has a move with the given primary effect.
pub fn has_move_with_effect(
    context: &FieldEffectContext,
    battler: BattlerRef,
    effect: MoveEffect,
) -> bool {
    context
        .moves(battler)
        .iter()
        .any(|move_data| move_data.effect == effect)
}

/// Checks if the Mon has any of the given types.
pub fn is_of_any_type(context: &FieldEffectContext, battler: BattlerRef, types: &[Type]) -> bool {
    context
        .battler(battler)
        .is_some_and(|mon| mon.has_any_type(types.iter().copied()))
}

/// Checks if the Mon is affected by terrain.
pub fn is_grounded(context: &FieldEffectContext, battler: BattlerRef) -> bool {
    context.battler(battler).is_some_and(|mon| mon.grounded)
}

/// Checks if the Mon is asleep or will fall asleep at the end of the turn.
pub fn is_asleep_or_drowsy(context: &FieldEffectContext, battler: BattlerRef) -> bool {
    context
        .battler(battler)
        .is_some_and(|mon| mon.is_asleep_or_drowsy())
}

/// The priority the move would have if the Mon used it right now.
///
/// The Mon's ability is given explicitly, since it may differ from what the battle state reports.
pub fn effective_move_priority(
    context: &FieldEffectContext,
    battler: BattlerRef,
    ability: Ability,
    move_data: &MoveData,
) -> i8 {
    let mon = context.battler(battler);
    let mut boost = match ability {
        Ability::Prankster if move_data.category == MoveCategory::Status => 1,
        Ability::GaleWings
            if move_data.primary_type == Type::Flying
                && mon.is_some_and(|mon| mon.is_at_full_health()) =>
        {
            1
        }
        Ability::Triage if move_data.has_flag(MoveFlag::Heal) => 3,
        _ => 0,
    };
    if move_data.effect == MoveEffect::GrassyGlide
        && context.has_field_status(FieldStatus::GrassyTerrain)
        && mon.is_some_and(|mon| mon.grounded)
    {
        boost += 1;
    }
    move_data.priority.saturating_add(boost)
}
