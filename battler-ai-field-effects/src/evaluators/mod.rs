mod terrain;
mod trick_room;
mod weather;

use battler_data::{
    Ability,
    HoldEffect,
};
use battler_state::BattlerRef;
pub(crate) use terrain::{
    electric_terrain,
    grassy_terrain,
    misty_terrain,
    psychic_terrain,
};
pub(crate) use trick_room::trick_room;
pub(crate) use weather::{
    hail_or_snow,
    rain,
    sandstorm,
    sun,
};

use crate::{
    FieldEffectContext,
    Verdict,
};

/// The Mon a condition is being scored for.
///
/// The ability and held item are given explicitly so that a caller can score a Mon as if it had a
/// different ability or item, without touching the battle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Subject {
    pub position: BattlerRef,
    pub ability: Ability,
    pub hold_effect: HoldEffect,
    /// Should the partner be scored when this Mon alone does not decide the verdict?
    pub recurse: bool,
}

impl Subject {
    pub fn new(position: BattlerRef, ability: Ability, hold_effect: HoldEffect) -> Self {
        Self {
            position,
            ability,
            hold_effect,
            recurse: true,
        }
    }

    /// Creates a subject with the ability and item reported by the battle state.
    pub fn from_state(context: &FieldEffectContext, position: BattlerRef) -> Self {
        let (ability, hold_effect) = context
            .battler(position)
            .map(|mon| (mon.ability, mon.hold_effect))
            .unwrap_or_default();
        Self::new(position, ability, hold_effect)
    }

    /// The partner to score next, if any.
    ///
    /// The partner is always scored with its own ability and item, and never scores its own
    /// partner in turn.
    pub fn partner(&self, context: &FieldEffectContext) -> Option<Self> {
        if !self.recurse {
            return None;
        }
        let partner = context.partner(self.position)?;
        Some(Self {
            recurse: false,
            ..Self::from_state(context, partner)
        })
    }

    /// Scores the same condition for the partner, if any.
    pub fn evaluate_partner<'d, F>(
        &self,
        context: &FieldEffectContext<'d>,
        evaluate: F,
    ) -> Option<Verdict>
    where
        F: FnOnce(&FieldEffectContext<'d>, Subject) -> Verdict,
    {
        let partner = self.partner(context)?;
        let verdict = evaluate(context, partner);
        log::trace!("Partner {} of {} scored {verdict}", partner.position, self.position);
        Some(verdict)
    }
}
