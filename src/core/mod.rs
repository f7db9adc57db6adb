//! Core module - Application lifecycle, configuration, and events

pub mod app;
pub mod config;
pub mod events;
