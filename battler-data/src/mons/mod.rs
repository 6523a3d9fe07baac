mod status;
mod r#type;

pub use status::Status;
pub use r#type::Type;
