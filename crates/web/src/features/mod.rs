pub mod lifters;
pub mod root;
