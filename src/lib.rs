pub mod app;
pub mod builder;
pub mod survey;

mod launcher;
mod spinner;
