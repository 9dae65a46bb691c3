// Module exports for models

pub mod holiday;
pub mod progress;
pub mod settings;
