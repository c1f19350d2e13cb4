use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

mod app;
mod input;

use app::App;
use input::Key;

// ---------------------------------------------------------------------------
// Handler — winit ApplicationHandler
// ---------------------------------------------------------------------------

struct Handler {
    window: Option<Arc<Window>>,
    app: Option<App>,
}

impl Handler {
    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Map the subset of physical keys the viewer reacts to.
fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Digit1 => Some(Key::Digit1),
        KeyCode::Digit2 => Some(Key::Digit2),
        KeyCode::Space => Some(Key::Space),
        KeyCode::Equal => Some(Key::Equal),
        KeyCode::Minus => Some(Key::Minus),
        KeyCode::KeyC => Some(Key::C),
        KeyCode::KeyR => Some(Key::R),
        KeyCode::KeyQ => Some(Key::Q),
        KeyCode::Escape => Some(Key::Escape),
        _ => None,
    }
}

impl ApplicationHandler for Handler {
    /// Called once on desktop when the event loop starts.
    /// Creates the window, then the pixel surface and render context.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let window_attrs = Window::default_attributes()
            .with_title("Fractal Viewer")
            .with_inner_size(winit::dpi::LogicalSize::new(800u32, 600u32));

        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .expect("failed to create window"),
        );

        log::info!("Window created (800×600)");

        let app = App::new(Arc::clone(&window));
        window.request_redraw();
        self.window = Some(window);
        self.app = Some(app);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            // ----------------------------------------------------------------
            // Exit
            // ----------------------------------------------------------------
            WindowEvent::CloseRequested => {
                log::info!("Close requested; exiting");
                event_loop.exit();
            }

            // ----------------------------------------------------------------
            // Keyboard — variant select, iterations, palette mode, reset, quit
            // ----------------------------------------------------------------
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                if let Some(app) = &mut self.app {
                    if let Some(action) = map_key(code).and_then(|key| app.on_key_pressed(key)) {
                        if app.handle_action(action) {
                            log::info!("Quit requested; exiting");
                            event_loop.exit();
                        } else {
                            self.request_redraw();
                        }
                    }
                }
            }

            // ----------------------------------------------------------------
            // Mouse — drag pans (applied on release), wheel zooms at cursor
            // ----------------------------------------------------------------
            WindowEvent::CursorMoved { position, .. } => {
                if let Some(app) = &mut self.app {
                    app.on_cursor_moved(position.x, position.y);
                }
            }

            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                if let Some(app) = &mut self.app {
                    match state {
                        ElementState::Pressed => app.on_mouse_pressed(),
                        ElementState::Released => {
                            if app.on_mouse_released() {
                                self.request_redraw();
                            }
                        }
                    }
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                if let Some(app) = &mut self.app {
                    let dy = match delta {
                        MouseScrollDelta::LineDelta(_, y) => f64::from(y),
                        MouseScrollDelta::PixelDelta(pos) => pos.y,
                    };
                    if app.on_scroll(dy) {
                        self.request_redraw();
                    }
                }
            }

            // ----------------------------------------------------------------
            // Resize — surface, buffer and viewport together
            // ----------------------------------------------------------------
            WindowEvent::Resized(new_size) => {
                if let Some(app) = &mut self.app {
                    app.resize(new_size.width, new_size.height);
                }
                self.request_redraw();
            }

            // ----------------------------------------------------------------
            // Redraw — render the frame and present it
            // ----------------------------------------------------------------
            WindowEvent::RedrawRequested => {
                if let Some(app) = &mut self.app {
                    if let Err(err) = app.render() {
                        log::error!("present failed: {err}");
                        event_loop.exit();
                    }
                }
            }

            _ => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    env_logger::init();

    let event_loop = EventLoop::new().expect("failed to create event loop");
    // Every state change requests its own redraw; idle costs nothing.
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut handler = Handler {
        window: None,
        app: None,
    };
    event_loop.run_app(&mut handler).expect("event loop error");
}
