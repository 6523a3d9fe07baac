mod ability;

pub use ability::Ability;
