pub mod loader;
pub mod survey;
