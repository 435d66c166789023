pub mod calendar;
pub mod catalog;
pub mod commands;
pub mod events;
pub mod rows;
pub mod state;
pub mod states;
