pub mod commands;
pub mod script;
