//! Terminal front-end: owns the state, runs effects, and draws the view.
mod app;
mod effects;
mod ui;

pub use app::run_app;
