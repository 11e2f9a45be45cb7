pub mod clock;
pub mod config;
pub mod engine;
pub mod player;
pub mod renderer;
pub mod types;
