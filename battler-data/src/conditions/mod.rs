mod field_status;
mod weather;

pub use field_status::FieldStatus;
pub use weather::Weather;
