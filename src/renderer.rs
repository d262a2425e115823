use anyhow::Result;
use glam::{Mat4, Vec3};
use std::sync::Arc;
use wgpu::util::DeviceExt;
use winit::window::Window;

use crate::camera::OrbitCamera;
use crate::core::{GpuContext, WindowSurface};
use crate::geometry::Geometry;
use crate::overlay::Overlay;
use crate::scene::{Light, NodeId, Scene};
use crate::types::{LightingUniform, ObjectData, Vertex};

pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color::WHITE;

/// Half-width of the square the shadow camera covers, in world units
pub const SHADOW_EXTENT: f32 = 18.0;
/// How far back along the light direction the shadow camera sits
pub const SHADOW_DISTANCE: f32 = 30.0;
const SHADOW_NEAR: f32 = 1.0;
const SHADOW_FAR: f32 = 60.0;

#[derive(Debug, Clone, Copy)]
pub struct RendererOptions {
    pub shadow_map_size: u32,
    pub show_overlay: bool,
}

impl Default for RendererOptions {
    fn default() -> Self {
        Self {
            shadow_map_size: 2048,
            show_overlay: true,
        }
    }
}

/// Orthographic view-projection for a directional light shining from
/// `position` towards `target`.
pub fn light_view_projection(position: Vec3, target: Vec3) -> Mat4 {
    let direction = (position - target).normalize_or(Vec3::Y);
    let eye = target + direction * SHADOW_DISTANCE;
    let up = if direction.cross(Vec3::Y).length_squared() < 1e-6 {
        Vec3::Z
    } else {
        Vec3::Y
    };
    let view = Mat4::look_at_rh(eye, target, up);
    let projection = Mat4::orthographic_rh(
        -SHADOW_EXTENT,
        SHADOW_EXTENT,
        -SHADOW_EXTENT,
        SHADOW_EXTENT,
        SHADOW_NEAR,
        SHADOW_FAR,
    );
    projection * view
}

/// Lighting uniform for the scene's ambient lights and first directional light
pub fn lighting_uniform(scene: &Scene, shadow_map_size: u32) -> LightingUniform {
    let (light_view_proj, direction, color, intensity) = match scene.key_light() {
        Some(Light::Directional {
            color,
            intensity,
            position,
            target,
            ..
        }) => (
            light_view_projection(*position, *target),
            (*position - *target).normalize_or(Vec3::Y),
            color.to_linear(),
            *intensity,
        ),
        _ => (Mat4::IDENTITY, Vec3::Y, [0.0; 3], 0.0),
    };

    LightingUniform {
        light_view_proj: light_view_proj.to_cols_array_2d(),
        direction: direction.to_array(),
        directional_intensity: intensity,
        directional_color: color,
        ambient_intensity: 1.0,
        ambient_color: scene.ambient(),
        shadow_texel: 1.0 / shadow_map_size.max(1) as f32,
    }
}

fn key_light_casts_shadow(scene: &Scene) -> bool {
    matches!(
        scene.key_light(),
        Some(Light::Directional {
            cast_shadow: true,
            ..
        })
    )
}

struct GpuMesh {
    geometry: Geometry,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

impl GpuMesh {
    fn upload(device: &wgpu::Device, geometry: Geometry) -> Self {
        let mesh = geometry.build();
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Mesh Vertices"),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Mesh Indices"),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            geometry,
            vertex_buffer,
            index_buffer,
            index_count: mesh.indices.len() as u32,
        }
    }
}

/// Rasterizes a `Scene`: one shadow-map pass from the key light, one lit
/// colour pass, then the optional egui overlay.
pub struct Renderer {
    gpu: GpuContext,
    surface: WindowSurface,
    options: RendererOptions,

    meshes: Vec<GpuMesh>,
    /// Index into `meshes` for every scene node
    node_meshes: Vec<usize>,

    camera_buffer: wgpu::Buffer,
    lighting_buffer: wgpu::Buffer,
    object_buffer: wgpu::Buffer,
    object_capacity: usize,
    objects: Vec<ObjectData>,

    scene_layout: wgpu::BindGroupLayout,
    shadow_pass_layout: wgpu::BindGroupLayout,
    scene_bind_group: wgpu::BindGroup,
    shadow_pass_bind_group: wgpu::BindGroup,
    shadow_map_bind_group: wgpu::BindGroup,

    scene_pipeline: wgpu::RenderPipeline,
    shadow_pipeline: wgpu::RenderPipeline,

    shadow_view: wgpu::TextureView,
    depth_view: wgpu::TextureView,

    overlay: Option<Overlay>,
}

impl Renderer {
    pub async fn new(window: Arc<Window>, scene: &Scene, options: RendererOptions) -> Result<Self> {
        let (gpu, surface) = GpuContext::for_window(window.clone()).await?;
        let device = gpu.device();

        let camera_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Camera Buffer"),
            size: std::mem::size_of::<crate::types::CameraUniform>() as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let lighting_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Lighting Buffer"),
            contents: bytemuck::cast_slice(&[lighting_uniform(scene, options.shadow_map_size)]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let object_capacity = scene.nodes().len().max(1);
        let object_buffer = Self::create_object_buffer(device, object_capacity);

        let scene_layout = Self::create_scene_layout(device);
        let shadow_pass_layout = Self::create_shadow_pass_layout(device);
        let shadow_map_layout = Self::create_shadow_map_layout(device);

        let scene_bind_group = Self::create_scene_bind_group(
            device,
            &scene_layout,
            &camera_buffer,
            &lighting_buffer,
            &object_buffer,
        );
        let shadow_pass_bind_group = Self::create_shadow_pass_bind_group(
            device,
            &shadow_pass_layout,
            &lighting_buffer,
            &object_buffer,
        );

        let shadow_view = Self::create_depth_view(
            device,
            "Shadow Map",
            options.shadow_map_size,
            options.shadow_map_size,
        );
        let shadow_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Shadow Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            compare: Some(wgpu::CompareFunction::LessEqual),
            ..Default::default()
        });
        let shadow_map_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &shadow_map_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&shadow_view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&shadow_sampler),
                },
            ],
            label: Some("shadow_map_bind_group"),
        });

        let scene_pipeline = Self::create_scene_pipeline(
            device,
            &scene_layout,
            &shadow_map_layout,
            surface.format(),
        );
        let shadow_pipeline = Self::create_shadow_pipeline(device, &shadow_pass_layout);

        let (width, height) = surface.size();
        let depth_view = Self::create_depth_view(device, "Depth Texture", width, height);

        let overlay = options
            .show_overlay
            .then(|| Overlay::new(device, surface.format(), &window));

        let mut renderer = Self {
            gpu,
            surface,
            options,
            meshes: Vec::new(),
            node_meshes: Vec::new(),
            camera_buffer,
            lighting_buffer,
            object_buffer,
            object_capacity,
            objects: Vec::with_capacity(object_capacity),
            scene_layout,
            shadow_pass_layout,
            scene_bind_group,
            shadow_pass_bind_group,
            shadow_map_bind_group,
            scene_pipeline,
            shadow_pipeline,
            shadow_view,
            depth_view,
            overlay,
        };
        renderer.sync_scene(scene);

        log::info!(
            "Renderer initialized: {} nodes, {} unique meshes, shadow map {}x{}",
            renderer.node_meshes.len(),
            renderer.meshes.len(),
            options.shadow_map_size,
            options.shadow_map_size
        );

        Ok(renderer)
    }

    pub fn size(&self) -> (u32, u32) {
        self.surface.size()
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if self.surface.resize(self.gpu.device(), width, height) {
            self.depth_view =
                Self::create_depth_view(self.gpu.device(), "Depth Texture", width, height);
        }
    }

    /// Reconfigure the surface after it was lost or became outdated
    pub fn reconfigure(&mut self) {
        self.surface.reconfigure(self.gpu.device());
    }

    /// Forward a window event to the overlay; true if it was consumed
    pub fn handle_event(&mut self, window: &Window, event: &winit::event::WindowEvent) -> bool {
        match self.overlay.as_mut() {
            Some(overlay) => overlay.handle_event(window, event),
            None => false,
        }
    }

    pub fn render(
        &mut self,
        scene: &Scene,
        camera: &OrbitCamera,
        window: &Window,
        fps: f32,
    ) -> Result<(), wgpu::SurfaceError> {
        self.sync_scene(scene);

        let (width, height) = self.surface.size();
        let aspect = width as f32 / height.max(1) as f32;

        let queue = self.gpu.queue();
        queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::cast_slice(&[camera.to_uniform(aspect)]),
        );
        queue.write_buffer(
            &self.lighting_buffer,
            0,
            bytemuck::cast_slice(&[lighting_uniform(scene, self.options.shadow_map_size)]),
        );

        self.objects.clear();
        self.objects.extend(scene.node_ids().map(|id| {
            let node = scene.node(id);
            ObjectData::new(scene.world_matrix(id), node.color.to_linear(), node.receive_shadow)
        }));
        queue.write_buffer(&self.object_buffer, 0, bytemuck::cast_slice(&self.objects));

        let output = self.surface.current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device()
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut shadow_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Shadow Pass"),
                color_attachments: &[],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.shadow_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            if key_light_casts_shadow(scene) {
                shadow_pass.set_pipeline(&self.shadow_pipeline);
                shadow_pass.set_bind_group(0, &self.shadow_pass_bind_group, &[]);
                for id in scene.node_ids().filter(|id| scene.node(*id).cast_shadow) {
                    self.draw_node(&mut shadow_pass, id);
                }
            }
        }

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            render_pass.set_pipeline(&self.scene_pipeline);
            render_pass.set_bind_group(0, &self.scene_bind_group, &[]);
            render_pass.set_bind_group(1, &self.shadow_map_bind_group, &[]);
            for id in scene.node_ids() {
                self.draw_node(&mut render_pass, id);
            }
        }

        if let Some(overlay) = self.overlay.as_mut() {
            overlay.render(
                self.gpu.device(),
                self.gpu.queue(),
                &mut encoder,
                &view,
                window,
                (width, height),
                fps,
            );
        }

        self.gpu.queue().submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Object index doubles as the instance index the shaders read
    fn draw_node(&self, pass: &mut wgpu::RenderPass<'_>, id: NodeId) {
        let mesh = &self.meshes[self.node_meshes[id.0]];
        let instance = id.0 as u32;
        pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
        pass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        pass.draw_indexed(0..mesh.index_count, 0, instance..instance + 1);
    }

    /// Upload meshes for nodes added since the last frame and grow the object buffer
    fn sync_scene(&mut self, scene: &Scene) {
        let device = self.gpu.device();

        for node in &scene.nodes()[self.node_meshes.len()..] {
            let index = match self.meshes.iter().position(|m| m.geometry == node.geometry) {
                Some(index) => index,
                None => {
                    self.meshes.push(GpuMesh::upload(device, node.geometry));
                    self.meshes.len() - 1
                }
            };
            self.node_meshes.push(index);
        }

        if scene.nodes().len() > self.object_capacity {
            self.object_capacity = scene.nodes().len().next_power_of_two();
            self.object_buffer = Self::create_object_buffer(device, self.object_capacity);
            self.scene_bind_group = Self::create_scene_bind_group(
                device,
                &self.scene_layout,
                &self.camera_buffer,
                &self.lighting_buffer,
                &self.object_buffer,
            );
            self.shadow_pass_bind_group = Self::create_shadow_pass_bind_group(
                device,
                &self.shadow_pass_layout,
                &self.lighting_buffer,
                &self.object_buffer,
            );
            log::debug!("Object buffer grown to {} entries", self.object_capacity);
        }
    }

    fn create_object_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Object Buffer"),
            size: (capacity * std::mem::size_of::<ObjectData>()) as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    fn create_depth_view(
        device: &wgpu::Device,
        label: &str,
        width: u32,
        height: u32,
    ) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });
        texture.create_view(&wgpu::TextureViewDescriptor::default())
    }

    fn uniform_entry(binding: u32, visibility: wgpu::ShaderStages) -> wgpu::BindGroupLayoutEntry {
        wgpu::BindGroupLayoutEntry {
            binding,
            visibility,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }
    }

    fn storage_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
        wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::VERTEX,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Storage { read_only: true },
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }
    }

    fn create_scene_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
        let stages = wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT;
        device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            entries: &[
                Self::uniform_entry(0, stages),
                Self::uniform_entry(1, stages),
                Self::storage_entry(2),
            ],
            label: Some("scene_bind_group_layout"),
        })
    }

    fn create_shadow_pass_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
        device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            entries: &[
                Self::uniform_entry(0, wgpu::ShaderStages::VERTEX),
                Self::storage_entry(1),
            ],
            label: Some("shadow_pass_bind_group_layout"),
        })
    }

    fn create_shadow_map_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
        device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Depth,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Comparison),
                    count: None,
                },
            ],
            label: Some("shadow_map_bind_group_layout"),
        })
    }

    fn create_scene_bind_group(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        camera_buffer: &wgpu::Buffer,
        lighting_buffer: &wgpu::Buffer,
        object_buffer: &wgpu::Buffer,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: camera_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: lighting_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: object_buffer.as_entire_binding(),
                },
            ],
            label: Some("scene_bind_group"),
        })
    }

    fn create_shadow_pass_bind_group(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        lighting_buffer: &wgpu::Buffer,
        object_buffer: &wgpu::Buffer,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: lighting_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: object_buffer.as_entire_binding(),
                },
            ],
            label: Some("shadow_pass_bind_group"),
        })
    }

    fn create_scene_pipeline(
        device: &wgpu::Device,
        scene_layout: &wgpu::BindGroupLayout,
        shadow_map_layout: &wgpu::BindGroupLayout,
        surface_format: wgpu::TextureFormat,
    ) -> wgpu::RenderPipeline {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Scene Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/scene.wgsl").into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Scene Pipeline Layout"),
            bind_group_layouts: &[scene_layout, shadow_map_layout],
            push_constant_ranges: &[],
        });

        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Scene Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        })
    }

    fn create_shadow_pipeline(
        device: &wgpu::Device,
        shadow_pass_layout: &wgpu::BindGroupLayout,
    ) -> wgpu::RenderPipeline {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Shadow Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/shadow.wgsl").into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Shadow Pipeline Layout"),
            bind_group_layouts: &[shadow_pass_layout],
            push_constant_ranges: &[],
        });

        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Shadow Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::layout()],
                compilation_options: Default::default(),
            },
            fragment: None,
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::LessEqual,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState {
                    constant: 2,
                    slope_scale: 2.0,
                    clamp: 0.0,
                },
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenes::{SceneBuilder, BARRIERS, DIRECTIONAL_POSITION};

    fn to_ndc(m: Mat4, p: Vec3) -> Vec3 {
        let clip = m * p.extend(1.0);
        clip.truncate() / clip.w
    }

    #[test]
    fn test_light_frustum_covers_enclosure() {
        let m = light_view_projection(DIRECTIONAL_POSITION, Vec3::ZERO);
        let wall_extent = BARRIERS
            .iter()
            .map(|b| b.position.x.abs().max(b.position.z.abs()) + b.size.z * 0.5)
            .fold(0.0_f32, f32::max);
        for x in [-wall_extent, wall_extent] {
            for y in [-0.5, 3.0] {
                for z in [-wall_extent, wall_extent] {
                    let corner = Vec3::new(x, y, z);
                    let ndc = to_ndc(m, corner);
                    assert!(ndc.x.abs() <= 1.0 && ndc.y.abs() <= 1.0, "{corner:?} -> {ndc:?}");
                    assert!(ndc.z >= 0.0 && ndc.z <= 1.0, "{corner:?} -> {ndc:?}");
                }
            }
        }
    }

    #[test]
    fn test_light_matrix_handles_vertical_light() {
        let m = light_view_projection(Vec3::new(0.0, 10.0, 0.0), Vec3::ZERO);
        assert!(m.is_finite());
        let ndc = to_ndc(m, Vec3::ZERO);
        assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
    }

    #[test]
    fn test_lighting_uniform_from_lab_scene() {
        let mut scene = Scene::new();
        SceneBuilder::new().build(&mut scene);
        let lighting = lighting_uniform(&scene, 2048);

        assert!((lighting.directional_intensity - 0.8).abs() < 1e-6);
        assert!((lighting.ambient_color[0] - 0.5).abs() < 1e-5);
        assert!((lighting.shadow_texel - 1.0 / 2048.0).abs() < 1e-9);
        let dir = Vec3::from_array(lighting.direction);
        assert!((dir - DIRECTIONAL_POSITION.normalize()).length() < 1e-5);
        assert!(key_light_casts_shadow(&scene));
    }

    #[test]
    fn test_lighting_uniform_without_lights() {
        let lighting = lighting_uniform(&Scene::new(), 1024);
        assert_eq!(lighting.directional_intensity, 0.0);
        assert_eq!(lighting.ambient_color, [0.0; 3]);
    }
}
