//! Paddle Pong entry point
//!
//! Opens the window and runs one update-then-render per display refresh.

mod native_game {
    use std::sync::Arc;

    use winit::application::ApplicationHandler;
    use winit::dpi::LogicalSize;
    use winit::event::{ElementState, WindowEvent};
    use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
    use winit::keyboard::{KeyCode, PhysicalKey};
    use winit::window::{Window, WindowId};

    use paddle_pong::Settings;
    use paddle_pong::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
    use paddle_pong::platform::{self, HostError, Key, KeyboardState};
    use paddle_pong::renderer::{self, Frame, RenderState};
    use paddle_pong::sim::{GameState, tick};

    /// Everything that exists once the window is up
    struct Game {
        window: Arc<Window>,
        render_state: RenderState,
        state: GameState,
        keys: KeyboardState,
        frame: Frame,
    }

    struct App {
        settings: Settings,
        game: Option<Game>,
        fatal: Option<HostError>,
    }

    impl App {
        fn new(settings: Settings) -> Self {
            Self {
                settings,
                game: None,
                fatal: None,
            }
        }

        fn fail(&mut self, event_loop: &ActiveEventLoop, err: HostError) {
            self.fatal = Some(err);
            event_loop.exit();
        }

        fn create_game(&self, event_loop: &ActiveEventLoop) -> Result<Game, HostError> {
            let attributes = Window::default_attributes()
                .with_title(self.settings.title.clone())
                .with_inner_size(LogicalSize::new(SCREEN_WIDTH as f64, SCREEN_HEIGHT as f64))
                .with_resizable(self.settings.resizable);
            let window = Arc::new(
                event_loop
                    .create_window(attributes)
                    .map_err(|e| HostError::Window(e.to_string()))?,
            );

            let size = window.inner_size();
            log::info!("Window created: {}x{}", size.width, size.height);

            let render_state =
                pollster::block_on(create_renderer(window.clone(), &self.settings))?;

            Ok(Game {
                window,
                render_state,
                state: GameState::new(),
                keys: KeyboardState::new(),
                frame: Frame::new(),
            })
        }
    }

    async fn create_renderer(
        window: Arc<Window>,
        settings: &Settings,
    ) -> Result<RenderState, HostError> {
        let size = window.inner_size();
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());

        let surface = instance
            .create_surface(window)
            .map_err(|e| HostError::Surface(e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| HostError::Adapter(e.to_string()))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        RenderState::new(
            surface,
            &adapter,
            size.width,
            size.height,
            settings.vsync,
            settings.background,
        )
        .await
    }

    fn map_key(key_code: KeyCode) -> Option<Key> {
        match key_code {
            KeyCode::ArrowUp => Some(Key::Up),
            KeyCode::ArrowDown => Some(Key::Down),
            _ => None,
        }
    }

    /// Feed one physical key event into the held-key state
    fn handle_key(keys: &mut KeyboardState, key: PhysicalKey, state: ElementState) {
        let PhysicalKey::Code(key_code) = key else {
            return;
        };
        if let Some(key) = map_key(key_code) {
            match state {
                ElementState::Pressed => keys.key_down(key),
                ElementState::Released => keys.key_up(key),
            }
        }
    }

    /// Release held keys when the window loses focus so the paddle stops
    fn handle_focus(keys: &mut KeyboardState, focused: bool) {
        if !focused {
            keys.clear();
        }
    }

    impl ApplicationHandler for App {
        fn resumed(&mut self, event_loop: &ActiveEventLoop) {
            if self.game.is_some() {
                return;
            }
            match self.create_game(event_loop) {
                Ok(game) => self.game = Some(game),
                Err(e) => self.fail(event_loop, e),
            }
        }

        fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
            if let Some(game) = &self.game {
                game.window.request_redraw();
            }
        }

        fn window_event(
            &mut self,
            event_loop: &ActiveEventLoop,
            _window_id: WindowId,
            event: WindowEvent,
        ) {
            let Some(game) = self.game.as_mut() else {
                return;
            };

            match event {
                WindowEvent::CloseRequested => {
                    log::info!("Close requested, exiting.");
                    event_loop.exit();
                }

                WindowEvent::Resized(physical_size) => {
                    game.render_state
                        .resize(physical_size.width, physical_size.height);
                    log::debug!("Resized to {}x{}", physical_size.width, physical_size.height);
                }

                WindowEvent::Focused(focused) => handle_focus(&mut game.keys, focused),

                WindowEvent::KeyboardInput { event, .. } => {
                    handle_key(&mut game.keys, event.physical_key, event.state);
                }

                WindowEvent::RedrawRequested => {
                    let input = platform::poll(&game.keys);
                    tick(&mut game.state, &input);

                    game.frame.clear();
                    renderer::draw(&game.state, &mut game.frame, self.settings.foreground);

                    match game.render_state.render(game.frame.vertices()) {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            log::warn!("Surface lost, reconfiguring");
                            game.render_state.reconfigure();
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            self.fail(event_loop, HostError::OutOfMemory);
                        }
                        Err(e) => log::warn!("Render error: {:?}", e),
                    }
                }

                _ => {}
            }
        }
    }

    /// Run until the window closes or the host fails
    pub fn run() -> Result<(), HostError> {
        let event_loop = EventLoop::new().map_err(|e| HostError::EventLoop(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(Settings::load());
        event_loop
            .run_app(&mut app)
            .map_err(|e| HostError::EventLoop(e.to_string()))?;

        match app.fatal {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Paddle Pong starting...");

    if let Err(e) = native_game::run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
