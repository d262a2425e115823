pub mod app;
pub mod camera;
pub mod cli;
pub mod core;
pub mod figure;
pub mod geometry;
pub mod math;
pub mod overlay;
pub mod renderer;
pub mod scene;
pub mod scenes;
pub mod traits;
pub mod types;

pub use figure::{
    FigureAnimator, FigureRuntimeState, FigureSet, FigureSpec, RotationAxis, ShapeKind,
};
pub use scene::Scene;
pub use scenes::SceneBuilder;
