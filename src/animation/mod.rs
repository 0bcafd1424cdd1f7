pub mod config;
pub mod dots;
pub mod timeline;
