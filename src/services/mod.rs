// Service module exports

pub mod holiday;
pub mod progress;
pub mod render;
pub mod scheduler;
pub mod settings;
