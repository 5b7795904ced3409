//! Drag Maze entry point
//!
//! On the web this wires DOM pointer events, the restart button and the win
//! message to the controller. Natively it replays a scripted drag through the
//! maze and logs what happened.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

    use drag_maze::renderer::{RenderState, VertexBatch, draw_scene};
    use drag_maze::sim::{GameStatus, Level};
    use drag_maze::{Controller, PointerEvent, PointerPhase, Settings, Step};

    /// Game instance holding all state
    struct Game {
        controller: Controller,
        settings: Settings,
        batch: VertexBatch,
        render_state: Option<RenderState>,
        canvas: HtmlCanvasElement,
    }

    impl Game {
        fn new(canvas: HtmlCanvasElement, settings: Settings) -> Self {
            Self {
                controller: Controller::new(Level::classic()),
                batch: VertexBatch::new(settings.quality),
                settings,
                render_state: None,
                canvas,
            }
        }

        /// Top-left of the canvas in client coordinates
        fn surface_origin(&self) -> Vec2 {
            let rect = self.canvas.get_bounding_client_rect();
            Vec2::new(rect.left() as f32, rect.top() as f32)
        }

        fn dispatch(&mut self, event: PointerEvent) {
            let origin = self.surface_origin();
            let step = self.controller.handle(event, origin);
            self.finish(step);
        }

        fn restart(&mut self) {
            let step = self.controller.restart();
            self.finish(step);
        }

        fn finish(&mut self, step: Step) {
            log::debug!("{:?} -> {:?}", step.event, step.state.status);
            if step.redraw {
                self.redraw();
            }
        }

        /// Draw the current state and sync the win message
        fn redraw(&mut self) {
            draw_scene(
                &mut self.batch,
                self.controller.level(),
                self.controller.state(),
                &self.settings,
            );

            if let Some(ref mut render_state) = self.render_state {
                match render_state.present(self.batch.vertices()) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }

            self.update_message();
        }

        /// Show the win message exactly while the game is won
        fn update_message(&self) {
            let won = self.controller.state().status == GameStatus::Won;
            let message = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id("message"));
            if let Some(el) = message {
                let _ = el.class_list().toggle_with_force("show", won);
            }
        }
    }

    /// Settings from LocalStorage, overridden by a `?quality=` URL parameter
    fn load_settings(window: &web_sys::Window) -> Settings {
        let mut settings = Settings::load();
        let search = window.location().search().unwrap_or_default();
        let requested = web_sys::UrlSearchParams::new_with_str(&search)
            .ok()
            .and_then(|params| params.get("quality"));
        if let Some(preset) = settings.apply_quality_param(requested.as_deref()) {
            settings.save();
            log::info!("Quality set to {} from URL", preset.as_str());
        }
        settings
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Drag Maze starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("mazeCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let settings = load_settings(&window);
        let game = Rc::new(RefCell::new(Game::new(canvas.clone(), settings)));

        // Backing store at device resolution; CSS keeps the field size
        let (field_w, field_h) = {
            let g = game.borrow();
            (g.controller.level().width(), g.controller.level().height())
        };
        let dpr = window.device_pixel_ratio();
        let width = (field_w as f64 * dpr) as u32;
        let height = (field_h as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);
        let _ = canvas.set_attribute("tabindex", "0");

        setup_input_handlers(&canvas, game.clone());
        setup_restart_button(&canvas, game.clone());

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("Failed to create surface: {}", e);
                return;
            }
        };

        let adapter = match instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
        {
            Ok(adapter) => adapter,
            Err(e) => {
                log::error!("Failed to get adapter: {}", e);
                return;
            }
        };

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        match RenderState::new(surface, &adapter, width, height, (field_w, field_h)).await {
            Ok(render_state) => {
                let mut g = game.borrow_mut();
                g.render_state = Some(render_state);
                g.redraw();
            }
            Err(e) => {
                log::error!("Failed to create device: {}", e);
                return;
            }
        }

        log::info!("Drag Maze running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse
        let mouse_events = [
            ("mousedown", PointerPhase::Down),
            ("mousemove", PointerPhase::Move),
            ("mouseup", PointerPhase::Up),
            ("mouseleave", PointerPhase::Cancel),
        ];
        for (name, phase) in mouse_events {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                if phase == PointerPhase::Down {
                    event.prevent_default();
                }
                let pointer =
                    PointerEvent::mouse(phase, event.client_x() as f32, event.client_y() as f32);
                game.borrow_mut().dispatch(pointer);
            });
            let _ = canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch (first contact only)
        let touch_events = [
            ("touchstart", PointerPhase::Down),
            ("touchmove", PointerPhase::Move),
            ("touchend", PointerPhase::Up),
            ("touchcancel", PointerPhase::Cancel),
        ];
        for (name, phase) in touch_events {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if matches!(phase, PointerPhase::Down | PointerPhase::Move) {
                    event.prevent_default();
                }
                let contact = event
                    .touches()
                    .get(0)
                    .map(|t| (t.client_x() as f32, t.client_y() as f32));
                if let Some(pointer) = PointerEvent::touch(phase, contact) {
                    game.borrow_mut().dispatch(pointer);
                }
            });
            let _ = canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let button = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("restartBtn"));

        if let Some(btn) = button {
            let canvas = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().restart();
                let _ = canvas.focus();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        } else {
            log::warn!("No restart button found");
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Drag Maze (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");

    if !replay_route() {
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drag along `CLASSIC_ROUTE` in small steps, drawing into a vertex batch on every
/// redraw. Returns whether the goal was reached.
#[cfg(not(target_arch = "wasm32"))]
fn replay_route() -> bool {
    use drag_maze::renderer::{VertexBatch, draw_scene};
    use drag_maze::sim::{CLASSIC_ROUTE, GameEvent, GameStatus, Level};
    use drag_maze::{Controller, QualityPreset, Settings};
    use glam::Vec2;

    const STEP: f32 = 4.0;

    let mut settings = Settings::load();
    if let Ok(name) = std::env::var("DRAG_MAZE_QUALITY") {
        match QualityPreset::from_str(&name) {
            Some(preset) => settings.apply_preset(preset),
            None => log::warn!("Unknown quality preset {:?}, keeping {}", name, settings.quality.as_str()),
        }
    }

    let mut controller = Controller::new(Level::classic());
    let mut batch = VertexBatch::new(settings.quality);
    let mut redraws = 0u32;

    let mut draw = |controller: &Controller, batch: &mut VertexBatch| {
        draw_scene(batch, controller.level(), controller.state(), &settings);
        redraws += 1;
    };
    draw(&controller, &mut batch);

    let points: Vec<Vec2> = CLASSIC_ROUTE.iter().map(|&(x, y)| Vec2::new(x, y)).collect();
    let step = controller.on_pointer_down(points[0]);
    log::info!("Pointer down at start: {:?}", step.event);

    'route: for pair in points.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let samples = ((to - from).length() / STEP).ceil().max(1.0) as u32;
        for i in 1..=samples {
            let pos = from.lerp(to, i as f32 / samples as f32);
            let step = controller.on_pointer_move(pos);
            if step.redraw {
                draw(&controller, &mut batch);
            }
            match step.event {
                GameEvent::Collided => {
                    log::error!("Hit a wall at ({:.1}, {:.1})", pos.x, pos.y);
                    break 'route;
                }
                GameEvent::Won => {
                    log::info!("Reached the goal at ({:.1}, {:.1})", pos.x, pos.y);
                    break 'route;
                }
                _ => {}
            }
        }
    }

    let step = controller.on_pointer_up();
    if step.redraw {
        draw(&controller, &mut batch);
    }

    let state = controller.state();
    log::info!(
        "{} redraws, last frame {} vertices",
        redraws,
        batch.len()
    );
    match serde_json::to_string(state) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize state: {}", e),
    }

    state.status == GameStatus::Won
}
