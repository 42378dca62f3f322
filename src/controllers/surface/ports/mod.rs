pub mod render_target;
