pub mod config;
pub mod lookup;
