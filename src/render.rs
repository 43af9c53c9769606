use crate::constants::*;
use crate::scene::{
    drifter_position, drifter_roll, horizon_position, moon_position,
    particle_cloud_offset_y, SceneAssets, SceneState,
};
use glam::Vec3;
use web_sys as web;

static BACKDROP_WGSL: &str = include_str!("../shaders/backdrop.wgsl");

// Deep-violet page backdrop behind all sprites
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.020,
    g: 0.007,
    b: 0.036,
    a: 1.0,
};

// Fragment profiles, mirrored in backdrop.wgsl
mod kind {
    pub const STAR: f32 = 0.0;
    pub const PARTICLE: f32 = 1.0;
    pub const PLANET: f32 = 2.0;
    pub const RING: f32 = 3.0;
    pub const GLOW: f32 = 4.0;
    pub const STREAK_HEAD: f32 = 5.0;
    pub const STREAK_TRAIL: f32 = 6.0;
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Uniforms {
    view_proj: [[f32; 4]; 4],
    cam_right: [f32; 4],
    cam_up: [f32; 4],
    time: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct SpriteInstance {
    pos_size: [f32; 4],
    color: [f32; 4],
    params: [f32; 4],
}

impl SpriteInstance {
    fn new(pos: Vec3, size: f32, color: [f32; 4], params: [f32; 4]) -> Self {
        Self {
            pos_size: [pos.x, pos.y, pos.z, size],
            color,
            params,
        }
    }
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    uniform_buf: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    quad_buf: wgpu::Buffer,
    instance_buf: wgpu::Buffer,
    instance_capacity: usize,
    instances: Vec<SpriteInstance>,
    width: u32,
    height: u32,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        assets: &SceneAssets,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .unwrap_or(caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("backdrop"),
            source: wgpu::ShaderSource::Wgsl(BACKDROP_WGSL.into()),
        });

        let uniform_buf = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("backdrop-uniforms"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("backdrop-bind-layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("backdrop-bind"),
            layout: &bind_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buf.as_entire_binding(),
            }],
        });

        // unit quad, triangle strip
        let corners: [[f32; 2]; 4] = [[-0.5, -0.5], [0.5, -0.5], [-0.5, 0.5], [0.5, 0.5]];
        let quad_buf = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("backdrop-quad"),
            size: std::mem::size_of_val(&corners) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        queue.write_buffer(&quad_buf, 0, bytemuck::cast_slice(&corners));

        // fixed geometry plus a little headroom for the per-body sprites
        let instance_capacity = assets.stars.len() + assets.particles.len() + 64;
        let instance_buf = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("backdrop-instances"),
            size: (instance_capacity * std::mem::size_of::<SpriteInstance>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("backdrop-pipeline-layout"),
            bind_group_layouts: &[&bind_layout],
            push_constant_ranges: &[],
        });
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("backdrop-pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[
                    wgpu::VertexBufferLayout {
                        array_stride: 8,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &wgpu::vertex_attr_array![0 => Float32x2],
                    },
                    wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<SpriteInstance>() as u64,
                        step_mode: wgpu::VertexStepMode::Instance,
                        attributes: &wgpu::vertex_attr_array![
                            1 => Float32x4,
                            2 => Float32x4,
                            3 => Float32x4,
                        ],
                    },
                ],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    // premultiplied alpha
                    blend: Some(wgpu::BlendState {
                        color: wgpu::BlendComponent {
                            src_factor: wgpu::BlendFactor::One,
                            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
                            operation: wgpu::BlendOperation::Add,
                        },
                        alpha: wgpu::BlendComponent {
                            src_factor: wgpu::BlendFactor::One,
                            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
                            operation: wgpu::BlendOperation::Add,
                        },
                    }),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleStrip,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            uniform_buf,
            bind_group,
            quad_buf,
            instance_buf,
            instance_capacity,
            instances: Vec::with_capacity(instance_capacity),
            width,
            height,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    pub fn render(&mut self, state: &SceneState, assets: &SceneAssets) -> anyhow::Result<()> {
        self.build_instances(state, assets);

        let aspect = self.width as f32 / self.height.max(1) as f32;
        let view_proj =
            state.camera.projection_matrix(aspect) * state.camera.view_matrix();
        let rot = glam::Mat4::from_rotation_x(state.camera.pitch);
        let cam_right = rot.transform_vector3(Vec3::X);
        let cam_up = rot.transform_vector3(Vec3::Y);
        let uniforms = Uniforms {
            view_proj: view_proj.to_cols_array_2d(),
            cam_right: [cam_right.x, cam_right.y, cam_right.z, 0.0],
            cam_up: [cam_up.x, cam_up.y, cam_up.z, 0.0],
            time: [state.time, 0.0, 0.0, 0.0],
        };
        self.queue
            .write_buffer(&self.uniform_buf, 0, bytemuck::bytes_of(&uniforms));
        self.queue
            .write_buffer(&self.instance_buf, 0, bytemuck::cast_slice(&self.instances));

        let frame = self
            .surface
            .get_current_texture()
            .map_err(|e| anyhow::anyhow!("surface error: {:?}", e))?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("backdrop-encoder"),
            });
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("backdrop-pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            pass.set_pipeline(&self.pipeline);
            pass.set_bind_group(0, &self.bind_group, &[]);
            pass.set_vertex_buffer(0, self.quad_buf.slice(..));
            pass.set_vertex_buffer(1, self.instance_buf.slice(..));
            pass.draw(0..4, 0..self.instances.len() as u32);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    /// Flatten the scene into sprite instances, roughly back to front (no
    /// depth buffer; the sprites are all translucent).
    fn build_instances(&mut self, state: &SceneState, assets: &SceneAssets) {
        self.instances.clear();
        let scroll = state.scroll_y;

        for star in &assets.stars {
            self.instances.push(SpriteInstance::new(
                star.position,
                star.size,
                [1.0, 0.96, 0.90, star.brightness],
                [kind::STAR, star.twinkle_speed, star.twinkle_phase, 0.0],
            ));
        }

        // horizon glow band, far behind the bodies
        self.instances.push(SpriteInstance::new(
            horizon_position(scroll),
            80.0,
            [0.32, 0.14, 0.52, 0.45],
            [kind::GLOW, 45.0, 0.0, 0.0],
        ));

        // planets: farther one first
        for spec in [&assets.planets[1], &assets.planets[0]] {
            let pos = spec.position(scroll);
            self.instances.push(SpriteInstance::new(
                pos,
                spec.size * 2.4,
                [spec.color[0], spec.color[1], spec.color[2], 0.18],
                [kind::GLOW, 0.0, 0.0, 0.0],
            ));
            self.instances.push(SpriteInstance::new(
                pos,
                spec.size * 2.0,
                [spec.color[0], spec.color[1], spec.color[2], 1.0],
                [kind::PLANET, 0.0, state.planet_spin, 0.0],
            ));
            if spec.ringed {
                self.instances.push(SpriteInstance::new(
                    pos,
                    spec.size * 4.0,
                    [0.66, 0.33, 0.97, 0.6],
                    [kind::RING, 0.7, 0.0, 0.0],
                ));
            }
        }

        let primary = assets.planets[0].position(scroll);
        self.instances.push(SpriteInstance::new(
            moon_position(primary, state.moon_angle),
            MOON_SIZE * 2.0,
            [0.67, 0.67, 0.67, 1.0],
            [kind::PLANET, 0.0, state.moon_angle, 0.0],
        ));

        let rot = state.cloud_rotation();
        let cloud_lift = particle_cloud_offset_y(scroll);
        for point in &assets.particles {
            let pos = rot * point.position + Vec3::new(0.0, cloud_lift, 0.0);
            self.instances.push(SpriteInstance::new(
                pos,
                PARTICLE_SIZE * 4.0,
                [point.color[0], point.color[1], point.color[2], 0.8],
                [kind::PARTICLE, 0.0, 0.0, 0.0],
            ));
        }

        let trail_dir = Vec3::new(STREAK_VELOCITY_X, STREAK_VELOCITY_Y, STREAK_VELOCITY_Z)
            .normalize();
        let trail_angle = STREAK_VELOCITY_Y.atan2(STREAK_VELOCITY_X);
        for streak in &assets.streaks {
            if let Some(sample) = streak.sample(state.time) {
                let dim = 1.0 - 0.25 * sample.progress;
                self.instances.push(SpriteInstance::new(
                    sample.position - trail_dir,
                    2.0,
                    [0.75, 0.52, 0.99, 0.5 * dim],
                    [kind::STREAK_TRAIL, 0.08, trail_angle, 0.0],
                ));
                self.instances.push(SpriteInstance::new(
                    sample.position,
                    0.3,
                    [0.66, 0.33, 0.97, dim],
                    [kind::STREAK_HEAD, 0.0, 0.0, 0.0],
                ));
            }
        }

        // drifter: rolled core blob plus a wide violet halo
        let drifter = drifter_position(assets.drifter_base, state.time, scroll);
        self.instances.push(SpriteInstance::new(
            drifter,
            4.0,
            [0.66, 0.33, 0.97, 0.15],
            [kind::GLOW, 0.0, 0.0, 0.0],
        ));
        self.instances.push(SpriteInstance::new(
            drifter,
            2.5,
            [0.80, 0.85, 1.00, 0.55],
            [kind::GLOW, 2.0, drifter_roll(state.time, scroll), 0.0],
        ));

        debug_assert!(self.instances.len() <= self.instance_capacity);
    }
}
