
mod eval_box;
mod eval_config;

pub use eval_box::*;
pub use eval_config::*;
