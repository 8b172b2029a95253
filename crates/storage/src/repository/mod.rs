pub mod lifter;
pub mod table;
