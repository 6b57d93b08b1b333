pub mod config;
pub mod dashboard;
pub mod lab;
pub mod labs;
pub mod roster;
pub mod tui;
