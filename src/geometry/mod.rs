pub mod cache;
pub mod path;
