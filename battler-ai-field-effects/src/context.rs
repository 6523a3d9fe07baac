use ahash::HashMap;
use battler_data::{
    BattleType,
    DataStore,
    DataStoreByName,
    FieldStatus,
    MoveData,
};
use battler_state::{
    BattlerRef,
    BattlerSnapshot,
    FieldSnapshot,
    SideSnapshot,
    alive_battlers_on_side,
    battler,
    foe_of,
    has_able_partner,
    partner_of,
    side,
    validate_field,
};

use crate::{
    FieldEffectError,
    FieldEffectOptions,
};

/// Looks up a move by name.
///
/// Moves that cannot be resolved are logged and treated as an empty move slot.
fn resolve_move(data: &dyn DataStore, name: &str) -> Option<MoveData> {
    match data.get_move_by_name(name) {
        Ok(Some(move_data)) => Some(move_data),
        Ok(None) => {
            log::warn!("Move {name} does not exist, so it is ignored for field effects");
            None
        }
        Err(err) => {
            log::warn!("Failed to look up move {name}: {err:#}");
            None
        }
    }
}

/// Everything needed to score field effects at a single decision point.
///
/// The context only borrows the battle state, which must not change while the context is alive.
/// Move slots of every active Mon are resolved once, when the context is created.
#[derive(Clone)]
pub struct FieldEffectContext<'d> {
    field: &'d FieldSnapshot,
    options: &'d FieldEffectOptions,
    moves: HashMap<BattlerRef, Vec<MoveData>>,
}

impl<'d> FieldEffectContext<'d> {
    /// Creates a new context over the given snapshot.
    ///
    /// Fails if the snapshot does not describe a field that can be scored.
    pub fn new(
        data: &'d dyn DataStore,
        field: &'d FieldSnapshot,
        options: &'d FieldEffectOptions,
    ) -> Result<Self, FieldEffectError> {
        validate_field(field)?;
        let moves = field
            .sides
            .iter()
            .enumerate()
            .flat_map(|(side, snapshot)| {
                snapshot
                    .active
                    .iter()
                    .enumerate()
                    .map(move |(slot, battler)| (BattlerRef::new(side, slot), battler))
            })
            .map(|(position, battler)| {
                let moves = battler
                    .available_moves()
                    .filter_map(|name| resolve_move(data, name))
                    .collect::<Vec<_>>();
                (position, moves)
            })
            .collect();
        Ok(Self {
            field,
            options,
            moves,
        })
    }

    pub fn field(&self) -> &'d FieldSnapshot {
        self.field
    }

    pub fn options(&self) -> &'d FieldEffectOptions {
        self.options
    }

    /// Checks if the battle has two Mons per side.
    pub fn is_doubles(&self) -> bool {
        self.field.battle_type == BattleType::Doubles
    }

    pub fn has_field_status(&self, status: FieldStatus) -> bool {
        self.field.has_field_status(status)
    }

    pub fn side(&self, index: usize) -> Option<&'d SideSnapshot> {
        side(self.field, index)
    }

    pub fn battler(&self, position: BattlerRef) -> Option<&'d BattlerSnapshot> {
        battler(self.field, position)
    }

    pub fn partner_of(&self, position: BattlerRef) -> BattlerRef {
        partner_of(self.field, position)
    }

    pub fn has_able_partner(&self, position: BattlerRef) -> bool {
        has_able_partner(self.field, position)
    }

    /// The able partner of the Mon, if any.
    pub fn partner(&self, position: BattlerRef) -> Option<BattlerRef> {
        self.has_able_partner(position).then(|| self.partner_of(position))
    }

    pub fn foe_of(&self, position: BattlerRef) -> Option<BattlerRef> {
        foe_of(self.field, position)
    }

    /// All Mons on a side that have not fainted.
    pub fn side_battlers(&self, side: usize) -> impl Iterator<Item = BattlerRef> {
        alive_battlers_on_side(self.field, side).map(|(position, _)| position)
    }

    /// The data for all moves the Mon can currently select.
    pub fn moves(&self, position: BattlerRef) -> &[MoveData] {
        self.moves
            .get(&position)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
