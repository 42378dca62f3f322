pub mod presenter;
pub mod renderer;
