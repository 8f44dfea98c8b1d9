pub mod app;
pub mod deck;
pub mod state;
