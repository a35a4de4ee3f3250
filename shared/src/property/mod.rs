pub mod placeholders;
pub mod property;
pub mod property_key;
pub mod property_source;
