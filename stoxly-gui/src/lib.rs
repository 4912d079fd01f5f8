pub mod app;
pub mod config;
pub mod dir;
pub mod gui;
pub mod login;
pub mod logger;
pub mod onboarding;
pub mod register;
pub mod services;
pub mod utils;
pub mod validation;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
