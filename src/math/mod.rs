mod color;
mod transform;

pub use color::{srgb_to_linear, Color};
pub use transform::{normal_matrix, Transform};
