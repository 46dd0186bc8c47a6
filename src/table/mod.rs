pub mod column;
pub mod engine;
