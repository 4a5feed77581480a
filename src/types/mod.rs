pub mod alphabet;
pub mod span;
