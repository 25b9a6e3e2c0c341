use anyhow::{Context, Result};
use clap::Parser;
use egui::Context as EguiContext;
use mazen_common::ViewportContext;
use mazen_input::NavKey;
use mazen_render::LabelBoard;
use mazen_render_wgpu::WgpuRenderer;
use mazen_session::{MazeConfig, Session};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

#[derive(Parser)]
#[command(name = "mazen-desktop", about = "Walk through a grid enclosure")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// YAML config for the grid, viewer and controls
    #[arg(long)]
    config: Option<PathBuf>,
}

fn nav_key(key: KeyCode) -> Option<NavKey> {
    match key {
        KeyCode::KeyW => Some(NavKey::Forward),
        KeyCode::KeyS => Some(NavKey::Back),
        KeyCode::KeyA => Some(NavKey::StrafeLeft),
        KeyCode::KeyD => Some(NavKey::StrafeRight),
        KeyCode::KeyU => Some(NavKey::Ascend),
        KeyCode::KeyJ => Some(NavKey::Descend),
        _ => None,
    }
}

fn viewport_of(size: PhysicalSize<u32>) -> ViewportContext {
    ViewportContext::new(size.width as f32, size.height as f32)
}

/// Everything that exists only once a window and device are up.
struct Gpu {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    renderer: WgpuRenderer,
    egui_winit: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
}

impl Gpu {
    fn new(window: Arc<Window>, egui_ctx: &EguiContext) -> Result<Self> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .context("create surface")?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .context("find adapter")?;

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("mazen_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))
        .context("create device")?;

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .context("surface reports no formats")?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let renderer = WgpuRenderer::new(&device, surface_format, config.width, config.height);

        let egui_winit = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&device, surface_format, None, 1, false);

        tracing::info!(
            "GPU initialized with {} backend",
            adapter.get_info().backend.to_str()
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            renderer,
            egui_winit,
            egui_renderer,
        })
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        self.config.width = size.width.max(1);
        self.config.height = size.height.max(1);
        self.surface.configure(&self.device, &self.config);
        self.renderer
            .resize(&self.device, self.config.width, self.config.height);
    }
}

/// What to do when the surface texture cannot be acquired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SurfaceRecovery {
    /// Reconfigure the surface, then ask for another frame.
    Reconfigure,
    /// Ask for another frame as is.
    Retry,
    /// Drop the frame and wait for the next event.
    Skip,
}

fn surface_recovery(err: &wgpu::SurfaceError) -> SurfaceRecovery {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => SurfaceRecovery::Reconfigure,
        wgpu::SurfaceError::Timeout => SurfaceRecovery::Retry,
        _ => SurfaceRecovery::Skip,
    }
}

/// Draws the HUD labels in the top-left corner.
fn draw_hud(ctx: &EguiContext, hud: &LabelBoard, session: &Session) {
    egui::Area::new(egui::Id::new("hud"))
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(12.0, 12.0))
        .show(ctx, |ui| {
            for (_, text) in hud.iter() {
                ui.heading(text);
            }
            let state = session.viewer().state();
            ui.small(format!(
                "cell ({}, {})  heading {:.0}°",
                state.position_cell.x,
                state.position_cell.z,
                session.viewer().heading().to_degrees()
            ));
            ui.small("WASD: move | U/J: up/down | mouse: turn | Esc: quit");
        });
}

struct App {
    config: MazeConfig,
    window: Option<Arc<Window>>,
    gpu: Option<Gpu>,
    session: Option<Session>,
    hud: LabelBoard,
    egui_ctx: EguiContext,
}

impl App {
    fn new(config: MazeConfig) -> Self {
        Self {
            config,
            window: None,
            gpu: None,
            session: None,
            hud: LabelBoard::new(),
            egui_ctx: EguiContext::default(),
        }
    }

    fn start(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title("Mazen")
            .with_inner_size(PhysicalSize::new(
                self.config.viewport.width as u32,
                self.config.viewport.height as u32,
            ));
        let window = Arc::new(event_loop.create_window(attrs)?);
        let gpu = Gpu::new(window.clone(), &self.egui_ctx)?;

        // The viewer's turn math follows the real window size.
        let mut config = self.config.clone();
        config.viewport = viewport_of(window.inner_size());
        let session = config.enclosure()?.start_session(&mut self.hud)?;

        window.request_redraw();
        self.window = Some(window);
        self.gpu = Some(gpu);
        self.session = Some(session);
        Ok(())
    }

    fn redraw(&mut self) {
        let (Some(window), Some(gpu), Some(session)) =
            (&self.window, &mut self.gpu, &mut self.session)
        else {
            return;
        };

        let output = match gpu.surface.get_current_texture() {
            Ok(t) => t,
            Err(e) => {
                let recovery = surface_recovery(&e);
                match recovery {
                    SurfaceRecovery::Reconfigure => {
                        gpu.surface.configure(&gpu.device, &gpu.config);
                    }
                    SurfaceRecovery::Retry => tracing::debug!("surface error: {e}"),
                    SurfaceRecovery::Skip => tracing::error!("surface error: {e}"),
                }
                if recovery != SurfaceRecovery::Skip && session.wants_frame() {
                    window.request_redraw();
                }
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut frame = gpu.renderer.frame(&gpu.device, &gpu.queue, &view);
        if session.tick(&mut frame).is_none() {
            return;
        }

        let raw_input = gpu.egui_winit.take_egui_input(window);
        let hud = &self.hud;
        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            draw_hud(ctx, hud, session);
        });
        gpu.egui_winit
            .handle_platform_output(window, full_output.platform_output);

        let paint_jobs = self
            .egui_ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [gpu.config.width, gpu.config.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        for (id, image_delta) in &full_output.textures_delta.set {
            gpu.egui_renderer
                .update_texture(&gpu.device, &gpu.queue, *id, image_delta);
        }
        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("egui_encoder"),
            });
        gpu.egui_renderer.update_buffers(
            &gpu.device,
            &gpu.queue,
            &mut encoder,
            &paint_jobs,
            &screen_descriptor,
        );
        {
            let mut pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui_pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                })
                .forget_lifetime();
            gpu.egui_renderer
                .render(&mut pass, &paint_jobs, &screen_descriptor);
        }
        gpu.queue.submit(std::iter::once(encoder.finish()));
        for id in &full_output.textures_delta.free {
            gpu.egui_renderer.free_texture(id);
        }

        output.present();
        if session.wants_frame() {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.start(event_loop) {
            tracing::error!("failed to start: {e:#}");
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let (Some(window), Some(gpu)) = (&self.window, &mut self.gpu) {
            if gpu.egui_winit.on_window_event(window, &event).consumed {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                if let Some(session) = &mut self.session {
                    session.stop();
                }
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(new_size);
                }
                if let Some(session) = &mut self.session {
                    session.resize(viewport_of(new_size));
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                if let Some(session) = &mut self.session {
                    session.on_pointer_move(position.x as f32);
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                let Some(session) = &mut self.session else {
                    return;
                };
                if key == KeyCode::Escape {
                    session.stop();
                    event_loop.exit();
                } else if let Some(nav) = nav_key(key) {
                    session.on_key_down(nav);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = match &cli.config {
        Some(path) => {
            MazeConfig::load(path).with_context(|| format!("loading {}", path.display()))?
        }
        None => MazeConfig::default(),
    };

    tracing::info!("mazen-desktop starting");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    Ok(())
}
