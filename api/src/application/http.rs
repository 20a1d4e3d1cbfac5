pub mod chat;
pub mod food_analysis;
pub mod health;
pub mod server;
