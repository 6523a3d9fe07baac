use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A non-volatile status condition on a Mon.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Status {
    #[string = "Burn"]
    #[alias = "brn"]
    Burn,
    #[string = "Freeze"]
    #[alias = "frz"]
    Freeze,
    #[string = "Paralysis"]
    #[alias = "par"]
    Paralysis,
    #[string = "Poison"]
    #[alias = "psn"]
    Poison,
    #[string = "Bad Poison"]
    #[alias = "tox"]
    BadPoison,
    #[string = "Sleep"]
    #[alias = "slp"]
    Sleep,
}
