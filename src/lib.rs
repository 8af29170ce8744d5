// src/lib.rs

pub mod agent;
pub mod config;
pub mod llm;
pub mod persona;
pub mod relay;
pub mod server;
