mod builder;
mod lab;

pub use builder::SceneBuilder;
pub use lab::{
    BarrierSpec, GroupSpec, AMBIENT_INTENSITY, BARRIERS, BARRIER_COLOR, DIRECTIONAL_INTENSITY,
    DIRECTIONAL_POSITION, GROUND_COLOR, GROUND_SIZE, GROUND_Y, LAB_GROUPS,
};
