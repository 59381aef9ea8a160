//! Geosketch Frontend
//!
//! egui-based application composing the drawing and measuring map panels.

mod app;
mod config;
mod panels;
mod plugins;

pub use app::GeosketchApp;
