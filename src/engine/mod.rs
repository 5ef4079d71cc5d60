pub mod board;
pub(crate) mod kernels;
pub mod rules;
