mod battle_type;

pub use battle_type::BattleType;
