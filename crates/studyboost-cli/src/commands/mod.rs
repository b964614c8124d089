pub mod apply;
pub mod config;
pub mod settings;
pub mod streak;
pub mod timer;
