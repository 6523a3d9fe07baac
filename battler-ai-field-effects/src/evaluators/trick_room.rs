use std::cmp::Ordering;

use battler_data::{
    FieldStatus,
    MoveCategory,
};
use battler_state::compare_side_speed_average;

use crate::{
    FieldEffectContext,
    Verdict,
    evaluators::Subject,
    predicates::effective_move_priority,
};

/// Checks if the Mon can move first with a priority move regardless of speed order.
///
/// Status moves with innate priority (like Protect) do not count, since they do not let the Mon
/// act before its foes in any meaningful way.
fn has_usable_priority(context: &FieldEffectContext, subject: Subject) -> bool {
    // Psychic Terrain blocks priority moves against grounded targets.
    if context.has_field_status(FieldStatus::PsychicTerrain) {
        return false;
    }
    context.moves(subject.position).iter().any(|move_data| {
        effective_move_priority(context, subject.position, subject.ability, move_data) > 0
            && !(move_data.priority > 0 && move_data.category == MoveCategory::Status)
    })
}

/// Scores Trick Room.
pub(crate) fn trick_room(context: &FieldEffectContext, subject: Subject) -> Verdict {
    let position = subject.position;

    if !context.is_doubles() {
        let ordering =
            compare_side_speed_average(context.field(), position.side, position.foe_side());
        // A tie should not flip the current state.
        return match ordering {
            Some(Ordering::Less) => Verdict::Positive,
            Some(Ordering::Greater) => Verdict::Negative,
            Some(Ordering::Equal) | None => Verdict::Neutral,
        };
    }

    if has_usable_priority(context, subject) {
        return subject
            .evaluate_partner(context, trick_room)
            .unwrap_or(Verdict::Neutral);
    }

    // Outspeeding or tying either foe is enough to not want speed order reversed.
    let speed = context.battler(position).map(|mon| mon.speed).unwrap_or_default();
    if context.side_battlers(position.foe_side()).any(|foe| {
        context
            .battler(foe)
            .is_some_and(|foe| speed >= foe.speed)
    }) {
        return Verdict::Negative;
    }

    subject
        .evaluate_partner(context, trick_room)
        .unwrap_or(Verdict::Positive)
}
