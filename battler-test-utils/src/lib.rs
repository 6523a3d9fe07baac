mod data_store;
mod error_assert;
mod test_field_builder;

pub use data_store::{
    TestDataStore,
    static_local_data_store,
    test_data_dir,
};
pub use error_assert::{
    assert_error_message,
    assert_error_message_contains,
};
pub use test_field_builder::{
    TestFieldBuilder,
    mon,
};
