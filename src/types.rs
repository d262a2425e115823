use glam::{Mat4, Vec3};

/// Mesh vertex for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
        }
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Camera uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub position: [f32; 3],
    pub _pad: f32,
}

/// Ambient + one shadow-casting directional light
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightingUniform {
    pub light_view_proj: [[f32; 4]; 4],
    /// Unit vector from the surface towards the light
    pub direction: [f32; 3],
    pub directional_intensity: f32,
    pub directional_color: [f32; 3],
    pub ambient_intensity: f32,
    pub ambient_color: [f32; 3],
    /// One over the shadow map resolution
    pub shadow_texel: f32,
}

/// Per-object record in the object storage buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectData {
    pub model: [[f32; 4]; 4],
    pub normal_matrix: [[f32; 4]; 4],
    /// Linear RGB albedo, alpha unused
    pub color: [f32; 4],
    /// 1.0 if the object samples the shadow map
    pub receive_shadow: f32,
    pub _pad: [f32; 3],
}

impl ObjectData {
    pub fn new(model: Mat4, color: [f32; 3], receive_shadow: bool) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            normal_matrix: crate::math::normal_matrix(&model).to_cols_array_2d(),
            color: [color[0], color[1], color[2], 1.0],
            receive_shadow: if receive_shadow { 1.0 } else { 0.0 },
            _pad: [0.0; 3],
        }
    }
}
