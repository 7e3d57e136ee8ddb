// src/lib.rs

pub mod api;
pub mod classifier;
pub mod config;
pub mod recommend;
pub mod state;
pub mod vibes;
