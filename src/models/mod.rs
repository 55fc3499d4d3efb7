pub mod deck;
pub mod slide;
