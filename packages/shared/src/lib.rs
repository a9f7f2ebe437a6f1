//! Utilities shared by the MealMax packages.

pub mod logger;

pub use logger::setup_logger;
