pub mod aggregate;
pub mod impact;
