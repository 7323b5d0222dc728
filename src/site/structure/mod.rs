//! Pages on site structure: the outline declaration and the config file.

pub mod config;
pub mod outline;
