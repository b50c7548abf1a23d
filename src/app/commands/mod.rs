pub mod render;
pub mod sync;
