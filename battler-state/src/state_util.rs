use std::cmp::Ordering;

use anyhow::{
    Error,
    Result,
};

use crate::{
    BattlerRef,
    BattlerSnapshot,
    FieldSnapshot,
    MAX_MOVE_SLOTS,
    SideSnapshot,
    StateError,
};

/// Validates that a snapshot describes a field that can be evaluated.
pub fn validate_field(state: &FieldSnapshot) -> Result<(), StateError> {
    if state.sides.len() != 2 {
        return Err(StateError::InvalidSideCount(state.sides.len()));
    }
    let max = state.battle_type.active_per_side();
    for (side, snapshot) in state.sides.iter().enumerate() {
        if snapshot.active.len() > max {
            return Err(StateError::TooManyActiveMons {
                side,
                count: snapshot.active.len(),
                max,
                battle_type: state.battle_type,
            });
        }
        for battler in &snapshot.active {
            if battler.moves.len() > MAX_MOVE_SLOTS {
                return Err(StateError::TooManyMoveSlots {
                    name: battler.name.clone(),
                    count: battler.moves.len(),
                    max: MAX_MOVE_SLOTS,
                });
            }
        }
    }
    Ok(())
}

/// A side of a battle.
pub fn side_or_else<'s>(state: &'s FieldSnapshot, side: usize) -> Result<&'s SideSnapshot> {
    state
        .sides
        .get(side)
        .ok_or_else(|| Error::msg("side not found"))
}

/// A side of a battle.
pub fn side<'s>(state: &'s FieldSnapshot, side: usize) -> Option<&'s SideSnapshot> {
    side_or_else(state, side).ok()
}

/// An active Mon.
pub fn battler_or_else<'s>(
    state: &'s FieldSnapshot,
    battler: BattlerRef,
) -> Result<&'s BattlerSnapshot> {
    side_or_else(state, battler.side)?
        .active
        .get(battler.slot)
        .ok_or_else(|| StateError::BattlerNotFound(battler).into())
}

/// An active Mon.
pub fn battler<'s>(state: &'s FieldSnapshot, battler: BattlerRef) -> Option<&'s BattlerSnapshot> {
    battler_or_else(state, battler).ok()
}

/// Checks if the Mon in the given position exists and has not fainted.
pub fn battler_is_alive(state: &FieldSnapshot, position: BattlerRef) -> bool {
    battler(state, position).is_some_and(|battler| !battler.fainted)
}

/// All Mons on a side that have not fainted, with their positions.
pub fn alive_battlers_on_side<'s>(
    state: &'s FieldSnapshot,
    side_index: usize,
) -> impl Iterator<Item = (BattlerRef, &'s BattlerSnapshot)> {
    side(state, side_index)
        .into_iter()
        .flat_map(|side| side.active.iter().enumerate())
        .filter(|(_, battler)| !battler.fainted)
        .map(move |(slot, battler)| (BattlerRef::new(side_index, slot), battler))
}

/// The partner of a Mon: the other Mon on the same side.
///
/// Returns the Mon itself if the battle is not a doubles battle, or if there is no partner that
/// can act.
pub fn partner_of(state: &FieldSnapshot, position: BattlerRef) -> BattlerRef {
    if state.battle_type.active_per_side() < 2 {
        return position;
    }
    let partner = BattlerRef::new(position.side, position.slot ^ 1);
    if battler_is_alive(state, partner) {
        partner
    } else {
        position
    }
}

/// Checks if the Mon has a partner that can act.
pub fn has_able_partner(state: &FieldSnapshot, position: BattlerRef) -> bool {
    partner_of(state, position) != position
}

/// The foe of a Mon: the Mon on the opposing side in the same slot.
///
/// If that Mon has fainted or does not exist, falls back to any other opposing Mon that can act.
pub fn foe_of(state: &FieldSnapshot, position: BattlerRef) -> Option<BattlerRef> {
    let foe = BattlerRef::new(position.foe_side(), position.slot);
    if battler_is_alive(state, foe) {
        return Some(foe);
    }
    alive_battlers_on_side(state, position.foe_side())
        .map(|(foe, _)| foe)
        .next()
}

/// Compares the average speed of all Mons that can act on two sides.
///
/// Returns [`None`] if either side has no Mon that can act.
pub fn compare_side_speed_average(
    state: &FieldSnapshot,
    side: usize,
    other: usize,
) -> Option<Ordering> {
    let (sum, count) = side_speed_total(state, side)?;
    let (other_sum, other_count) = side_speed_total(state, other)?;
    // Cross-multiplied to compare averages without truncation.
    Some((sum * other_count).cmp(&(other_sum * count)))
}

fn side_speed_total(state: &FieldSnapshot, side: usize) -> Option<(u64, u64)> {
    let (sum, count) = alive_battlers_on_side(state, side)
        .fold((0u64, 0u64), |(sum, count), (_, battler)| {
            (sum + battler.speed as u64, count + 1)
        });
    (count > 0).then_some((sum, count))
}
