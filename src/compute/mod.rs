pub mod buffer;
pub mod context;
pub mod kernel;
pub mod target;
