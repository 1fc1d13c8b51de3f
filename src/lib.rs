pub mod application;
pub mod models;
pub mod services;
pub mod sources;
pub mod utils;
