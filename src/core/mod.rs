pub mod clock;
pub mod gpu_context;
pub mod input_adapter;

pub use clock::FrameClock;
pub use gpu_context::{GpuContext, WindowSurface};
pub use input_adapter::WinitController;
