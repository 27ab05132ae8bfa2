mod app;
pub mod cli;
mod config;
mod effects;
mod terminal_view;

pub use app::run_app;
