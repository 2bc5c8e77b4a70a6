pub mod evaluations;
pub mod system;
