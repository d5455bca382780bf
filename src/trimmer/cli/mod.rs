mod commands;
mod interactive;
mod print;
mod setup;

pub use commands::run;
