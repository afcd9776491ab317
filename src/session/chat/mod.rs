// Chat presentation layer: terminal input, rendering and slash commands
pub mod animation;
pub mod commands;
pub mod display;
pub mod handlers;
pub mod helper;
pub mod input;
pub mod runner;
