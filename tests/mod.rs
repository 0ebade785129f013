pub mod macros;
pub mod may;
