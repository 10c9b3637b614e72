//! Dino Runner entry point
//!
//! Handles platform-specific initialization and starts the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};
    use wasm_bindgen::prelude::*;

    use dino_runner::platform::web::{CanvasSurface, DomScore, WebScheduler, js_error, window};
    use dino_runner::sim::{Activation, GameState, SpriteId};
    use dino_runner::{Game, PlatformError, Settings};

    const CANVAS_ID: &str = "gameCanvas";
    const SCORE_ID: &str = "score";

    type WebGame = Game<CanvasSurface, DomScore, WebScheduler>;

    pub fn run() -> Result<(), PlatformError> {
        let settings = Settings::load();
        let tuning = settings.tuning.clone();

        let mut surface = CanvasSurface::from_canvas_id(CANVAS_ID, tuning.field_width, tuning.field_height)?;
        let score = DomScore::from_id(SCORE_ID)?;

        let seed = js_sys::Date::now() as u64;
        let mut state = GameState::new(seed, tuning);

        // Sprites are decoration; a missing image just keeps the rectangles
        let actor_sprite = match &settings.actor_sprite {
            Some(url) => surface.load_sprite(SpriteId::Actor, url).ok().map(|_| SpriteId::Actor),
            None => None,
        };
        let obstacle_sprite = match &settings.obstacle_sprite {
            Some(url) => surface
                .load_sprite(SpriteId::Obstacle, url)
                .ok()
                .map(|_| SpriteId::Obstacle),
            None => None,
        };
        state.set_sprites(actor_sprite, obstacle_sprite);

        let window = window()?;
        let key_label = settings.activate_label().to_string();
        let game: Rc<RefCell<WebGame>> = Rc::new_cyclic(|weak: &Weak<RefCell<WebGame>>| {
            let weak = weak.clone();
            let callback = Closure::<dyn FnMut(f64)>::new(move |time: f64| {
                if let Some(game) = weak.upgrade() {
                    game.borrow_mut().on_frame(time);
                }
            });
            RefCell::new(Game::new(
                state,
                surface,
                score,
                WebScheduler::new(window, callback),
                key_label,
            ))
        });

        setup_input_handlers(game.clone(), &settings)?;

        game.borrow_mut().start();
        log::info!("Dino Runner running!");
        Ok(())
    }

    fn setup_input_handlers(game: Rc<RefCell<WebGame>>, settings: &Settings) -> Result<(), PlatformError> {
        let activate_key = settings.activate_key.clone();
        let demo_key = settings.demo_key.clone();

        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            let code = event.code();
            if code == activate_key {
                // Keep Space from scrolling the page
                event.prevent_default();
                if game.borrow_mut().activate() == Activation::Restart {
                    log::info!("Restarted by key");
                }
            } else if code == demo_key {
                let on = game.borrow_mut().toggle_demo();
                log::info!("Demo mode: {}", on);
            }
        });
        window()?
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
            .map_err(js_error)?;
        closure.forget();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

    log::info!("Dino Runner starting...");
    if let Err(e) = wasm_game::run() {
        log::error!("Failed to start: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use dino_runner::Settings;

    env_logger::init();
    log::info!("Dino Runner (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for the web version");

    let settings = match std::env::args().nth(1) {
        Some(path) => match Settings::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        },
        None => Settings::default(),
    };

    let seed = std::env::var("DINO_RUNNER_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_SEED);

    let (score, frames) = run_headless(&settings, seed);
    println!("Seed {}: score {} after {} frames", seed, score, frames);
}

#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_SEED: u64 = 42;

/// Stop a headless run that never collides (10 minutes at 60 Hz)
#[cfg(not(target_arch = "wasm32"))]
const MAX_HEADLESS_FRAMES: u64 = 60 * 60 * 10;

/// Play one session with the autopilot at a fixed 60 Hz clock
#[cfg(not(target_arch = "wasm32"))]
fn run_headless(settings: &dino_runner::Settings, seed: u64) -> (u64, u64) {
    use dino_runner::consts::FRAME_MS;
    use dino_runner::sim::{GameState, autopilot, tick};

    let mut state = GameState::new(seed, settings.tuning.clone());
    log::info!("Headless session with seed: {}", seed);

    let mut frame = 0;
    while frame < MAX_HEADLESS_FRAMES {
        if autopilot::should_jump(&state) {
            state.activate();
        }
        let outcome = tick(&mut state, frame as f64 * FRAME_MS);
        frame += 1;
        if !outcome.wants_next_frame() {
            break;
        }
    }

    if state.is_running() {
        log::info!("Frame cap reached with score {}", state.score);
    }
    (state.score, frame)
}
