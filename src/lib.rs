pub mod color;
pub mod config;
pub mod game;
pub mod graphics;
pub mod input;
pub mod parallax;
pub mod spawner;
