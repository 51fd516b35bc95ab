
mod annotations;
mod image_folder;

pub use annotations::*;
pub use image_folder::*;
