mod hold_effect;

pub use hold_effect::HoldEffect;
