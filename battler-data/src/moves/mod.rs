mod additional_effect;
mod move_category;
mod move_data;
mod move_effect;
mod move_flag;

pub use additional_effect::AdditionalEffect;
pub use move_category::MoveCategory;
pub use move_data::MoveData;
pub use move_effect::MoveEffect;
pub use move_flag::MoveFlag;
