pub mod polyline;
pub mod spec;
