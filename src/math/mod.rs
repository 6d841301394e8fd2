pub mod vec3;
pub mod color;

pub use vec3::Vec3;
pub use color::{Color, hsv_to_rgb};
