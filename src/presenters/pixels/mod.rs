pub mod adapter;
pub mod factory;
mod frame_filter;
pub mod presenter;
