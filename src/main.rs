//! Warrior Platformer entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, HtmlInputElement};

    use warrior_platformer::consts::*;
    use warrior_platformer::renderer::{BACKGROUND_IMAGE, DrawCommand, ImageHandle, Renderer, colors};
    use warrior_platformer::settings::{DebugOverlays, Settings};
    use warrior_platformer::sim::{AnimationState, Level};
    use warrior_platformer::FrameLoop;

    /// Canvas2D backend for the draw command stream
    struct CanvasRenderer {
        ctx: CanvasRenderingContext2d,
        width: f64,
        height: f64,
        images: HashMap<ImageHandle, HtmlImageElement>,
    }

    impl CanvasRenderer {
        fn new(ctx: CanvasRenderingContext2d, width: f64, height: f64) -> Self {
            Self {
                ctx,
                width,
                height,
                images: HashMap::new(),
            }
        }

        /// Start loading an image; drawing it is skipped until it completes
        fn load_image(&mut self, handle: ImageHandle) {
            match HtmlImageElement::new() {
                Ok(image) => {
                    image.set_src(handle);
                    self.images.insert(handle, image);
                }
                Err(e) => log::warn!("Could not create image for {handle}: {e:?}"),
            }
        }

        fn loaded(&self, handle: ImageHandle) -> Option<&HtmlImageElement> {
            self.images
                .get(handle)
                .filter(|image| image.complete() && image.natural_width() > 0)
        }
    }

    impl Renderer for CanvasRenderer {
        fn draw(&mut self, command: DrawCommand) {
            let ctx = &self.ctx;
            match command {
                DrawCommand::Clear { color } => {
                    ctx.set_fill_style_str(&colors::css(color));
                    ctx.fill_rect(0.0, 0.0, self.width, self.height);
                }
                DrawCommand::PushTransform { scale, translate } => {
                    ctx.save();
                    let _ = ctx.scale(scale as f64, scale as f64);
                    let _ = ctx.translate(translate.x as f64, translate.y as f64);
                }
                DrawCommand::PopTransform => ctx.restore(),
                DrawCommand::FillRect { rect, color } => {
                    ctx.set_fill_style_str(&colors::css(color));
                    ctx.fill_rect(
                        rect.position.x as f64,
                        rect.position.y as f64,
                        rect.width as f64,
                        rect.height as f64,
                    );
                }
                DrawCommand::Image { image, position } => {
                    if let Some(element) = self.loaded(image) {
                        let _ = ctx.draw_image_with_html_image_element(
                            element,
                            position.x as f64,
                            position.y as f64,
                        );
                    }
                }
                DrawCommand::Sprite {
                    image,
                    position,
                    frame,
                    frame_count,
                    scale,
                } => {
                    if let Some(element) = self.loaded(image) {
                        let frame_width = element.natural_width() as f64 / frame_count.max(1) as f64;
                        let frame_height = element.natural_height() as f64;
                        let _ = ctx
                            .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                                element,
                                frame as f64 * frame_width,
                                0.0,
                                frame_width,
                                frame_height,
                                position.x as f64,
                                position.y as f64,
                                frame_width * scale as f64,
                                frame_height * scale as f64,
                            );
                    }
                }
            }
        }

        fn image_ready(&self, image: ImageHandle) -> bool {
            self.loaded(image).is_some()
        }
    }

    /// Game instance holding all state
    struct Game {
        frame_loop: FrameLoop,
        renderer: CanvasRenderer,
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {e}").into());
        }

        log::info!("Warrior Platformer starting...");

        let Some(window) = web_sys::window() else {
            log::error!("No window");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };

        let Some(canvas) = document
            .query_selector("canvas")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No canvas element");
            return;
        };
        canvas.set_width(CANVAS_WIDTH as u32);
        canvas.set_height(CANVAS_HEIGHT as u32);

        let Some(ctx) = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
        else {
            log::error!("Canvas 2D context unavailable");
            return;
        };

        let mut renderer = CanvasRenderer::new(ctx, CANVAS_WIDTH as f64, CANVAS_HEIGHT as f64);
        renderer.load_image(BACKGROUND_IMAGE);
        for state in AnimationState::ALL {
            renderer.load_image(state.descriptor().image);
        }

        let settings = Settings::load();
        let game = Rc::new(RefCell::new(Game {
            frame_loop: FrameLoop::new(Level::demo(), &settings),
            renderer,
        }));

        setup_input_handlers(game.clone());
        setup_overlay_checkboxes(game.clone());

        request_animation_frame(game);

        log::info!("Warrior Platformer running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        for (event_name, pressed) in [("keydown", true), ("keyup", false)] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                game.borrow_mut()
                    .frame_loop
                    .keys
                    .handle_code(&event.code(), pressed);
            });
            let _ = window
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    const OVERLAY_IDS: [&str; 3] = [
        DebugOverlays::HITBOX_ID,
        DebugOverlays::CAMERA_BOX_ID,
        DebugOverlays::BLOCKS_ID,
    ];

    fn overlay_checkbox(document: &web_sys::Document, id: &str) -> Option<HtmlInputElement> {
        document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    }

    /// Mirror the three debug checkboxes into the overlay flags and persist them
    fn setup_overlay_checkboxes(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Restore the saved toggles into the page
        if let Some(document) = window.document() {
            let overlays = game.borrow().frame_loop.overlays;
            for id in OVERLAY_IDS {
                if let (Some(input), Some(enabled)) =
                    (overlay_checkbox(&document, id), overlays.by_id(id))
                {
                    input.set_checked(enabled);
                }
            }
        }

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let mut g = game.borrow_mut();
            for id in OVERLAY_IDS {
                if let Some(input) = overlay_checkbox(&document, id) {
                    g.frame_loop.overlays.set_by_id(id, input.checked());
                }
            }
            log::debug!("Overlays: {:?}", g.frame_loop.overlays);
            g.frame_loop.settings().save();
        });
        let _ = window.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            let Game {
                frame_loop,
                renderer,
            } = &mut *g;
            frame_loop.frame(renderer);
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

/// Frames simulated by the headless native run
#[cfg(not(target_arch = "wasm32"))]
const NATIVE_FRAMES: u32 = 600;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use warrior_platformer::FrameLoop;
    use warrior_platformer::renderer::DrawList;
    use warrior_platformer::settings::Settings;
    use warrior_platformer::sim::Level;

    env_logger::init();
    log::info!("Warrior Platformer (native) starting...");
    log::info!("Native mode is headless - serve the wasm build for the playable version");

    let settings = Settings::load();
    let level = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path).map(|json| Level::from_json(&json)) {
            Ok(Ok(level)) => level,
            Ok(Err(e)) => {
                log::warn!("Failed to parse {path}: {e}, using demo level");
                Level::demo()
            }
            Err(e) => {
                log::warn!("Failed to read {path}: {e}, using demo level");
                Level::demo()
            }
        },
        None => Level::demo(),
    };
    log::info!("Level has {} collision blocks", level.block_count());

    let mut game = FrameLoop::new(level, &settings);
    let mut renderer = DrawList::new();

    // Scripted run: settle, walk right, jump, walk back left
    for frame in 0..NATIVE_FRAMES {
        match frame {
            60 => {
                game.keys.handle_code("ArrowRight", true);
            }
            180 => {
                game.keys.handle_code("ArrowUp", true);
            }
            300 => {
                game.keys.handle_code("ArrowRight", false);
                game.keys.handle_code("ArrowLeft", true);
            }
            480 => {
                game.keys.handle_code("ArrowLeft", false);
            }
            _ => {}
        }

        renderer.clear();
        game.frame(&mut renderer);

        if frame % 60 == 0 {
            log::debug!(
                "frame {frame}: actor {:?} velocity {:?} camera {:?} animation {:?}",
                game.state.actor.position,
                game.state.actor.velocity,
                game.ctx.camera.position,
                game.animator.state
            );
        }
    }

    let actor = &game.state.actor;
    println!(
        "Simulated {} ticks: actor at ({:.2}, {:.2}), camera at ({:.2}, {:.2}), {} draw commands in last frame",
        game.state.time_ticks,
        actor.position.x,
        actor.position.y,
        game.ctx.camera.position.x,
        game.ctx.camera.position.y,
        renderer.len()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
