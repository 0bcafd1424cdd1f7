pub mod backend;
pub mod record;
