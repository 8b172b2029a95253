pub mod lifter;
