use battler_data::{
    AdditionalEffect,
    BattleType,
    FieldStatus,
    MoveEffect,
    Weather,
};
use battler_state::{
    BattlerSnapshot,
    FieldSnapshot,
    SideSnapshot,
};

/// Field snapshot builder object for tests.
pub struct TestFieldBuilder {
    field: FieldSnapshot,
}

impl TestFieldBuilder {
    /// Creates a new [`TestFieldBuilder`] for a singles battle with two empty sides.
    pub fn new() -> Self {
        Self {
            field: FieldSnapshot {
                battle_type: BattleType::Singles,
                sides: Vec::from_iter([SideSnapshot::default(), SideSnapshot::default()]),
                ..Default::default()
            },
        }
    }

    /// Builds a new [`FieldSnapshot`] from the builder.
    pub fn build(self) -> FieldSnapshot {
        self.field
    }

    pub fn with_battle_type(mut self, battle_type: BattleType) -> Self {
        self.field.battle_type = battle_type;
        self
    }

    pub fn with_weather(mut self, weather: Weather) -> Self {
        self.field.weather = Some(weather);
        self
    }

    pub fn with_field_status(mut self, status: FieldStatus) -> Self {
        self.field.field_statuses.insert(status);
        self
    }

    pub fn add_mon_to_side_1(self, mon: BattlerSnapshot) -> Self {
        self.add_mon_to_side(0, mon)
    }

    pub fn add_mon_to_side_2(self, mon: BattlerSnapshot) -> Self {
        self.add_mon_to_side(1, mon)
    }

    pub fn with_used_move_effect(mut self, side: usize, effect: MoveEffect) -> Self {
        self.side_mut(side).used_move_effects.insert(effect);
        self
    }

    pub fn with_used_additional_effect(mut self, side: usize, effect: AdditionalEffect) -> Self {
        self.side_mut(side).used_additional_effects.insert(effect);
        self
    }

    fn add_mon_to_side(mut self, side: usize, mon: BattlerSnapshot) -> Self {
        self.side_mut(side).active.push(mon);
        self
    }

    fn side_mut(&mut self, side: usize) -> &mut SideSnapshot {
        &mut self.field.sides[side]
    }
}

/// Parses a single Mon for a test from JSON.
///
/// Fields that are left out take their default value, so tests only need to list what matters.
#[track_caller]
pub fn mon(json: &str) -> BattlerSnapshot {
    serde_json::from_str(json).unwrap()
}
