pub mod render;

pub use render::{exit_code_for, run_render, run_render_impl};
