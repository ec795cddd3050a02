//! HTTP endpoints

pub mod flashcards;
pub mod practice;
