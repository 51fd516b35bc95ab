
mod greedy;
mod pixel;

pub use greedy::*;
pub use pixel::*;
