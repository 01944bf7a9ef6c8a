pub mod commands;
pub mod render;
pub mod session;
pub mod setup;
