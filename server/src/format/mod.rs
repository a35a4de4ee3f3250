pub mod alignment;
pub mod composer;
