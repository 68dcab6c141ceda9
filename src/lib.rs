pub mod config;
pub mod io;
pub mod puzzle;
pub mod render;
pub mod scramble;
pub mod search;
