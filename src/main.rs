//! Lacetti Run entry point
//!
//! Web: wires the canvas, keyboard and restart button, then runs the
//! animation-frame loop. Native: headless soak runner.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use lacetti_run::Game;
    use lacetti_run::Tuning;
    use lacetti_run::platform::storage::LocalStorageStore;
    use lacetti_run::renderer::canvas::CanvasRenderer;

    /// Game instance plus its browser-side collaborators
    struct App {
        game: Game<LocalStorageStore>,
        renderer: CanvasRenderer,
    }

    impl App {
        /// One animation frame: simulate, paint, refresh readouts
        fn frame(&mut self, time: f64) {
            let report = self.game.frame(time);
            self.renderer.render(&self.game.draw());

            set_text("score", &report.score.to_string());
            if let Some(best) = report.new_best {
                set_text("best", &best.to_string());
            }
        }
    }

    fn set_text(id: &str, text: &str) {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        {
            el.set_text_content(Some(text));
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialised".into());
        }

        log::info!("Lacetti Run starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        // Pages without the game canvas simply skip the game
        let Some(canvas) = document
            .get_element_by_id("game-canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::info!("No #game-canvas on this page");
            return;
        };

        let renderer = match CanvasRenderer::new(&canvas) {
            Ok(r) => r,
            Err(e) => {
                log::error!("Canvas setup failed: {:?}", e);
                return;
            }
        };

        let mut tuning = Tuning::load();
        tuning.width = renderer.size.0 as f32;
        tuning.height = renderer.size.1 as f32;
        let seed = tuning.seed.unwrap_or_else(|| js_sys::Date::now() as u64);

        let game = Game::new(tuning, seed, LocalStorageStore::new());
        set_text("best", &game.best().to_string());
        set_text("score", "0");

        let app = Rc::new(RefCell::new(App { game, renderer }));

        setup_input_handlers(app.clone());
        setup_restart_button(app.clone());
        request_animation_frame(app);

        log::info!("Lacetti Run running!");
    }

    fn setup_input_handlers(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                app.borrow_mut().game.keys.key_down(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                app.borrow_mut().game.keys.key_up(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key-up events are lost while the window is unfocused
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                app.borrow_mut().game.keys.clear();
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(app: Rc<RefCell<App>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        if let Some(btn) = document.get_element_by_id("restart") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                app.borrow_mut().game.reset();
                set_text("score", "0");
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        // once_into_js frees the callback after it fires
        let callback = Closure::once_into_js(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(callback.unchecked_ref());
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        app.borrow_mut().frame(time);
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use anyhow::{Result, anyhow};
    use clap::Parser;

    use lacetti_run::platform::storage::FileStore;
    use lacetti_run::{Game, Tuning, autopilot};

    #[derive(Parser)]
    #[command(name = "lacetti-run")]
    #[command(about = "Run Lacetti Run sessions headless and keep the best score")]
    struct Args {
        /// Total ticks to simulate across all sessions
        #[arg(long, default_value_t = 36_000)]
        ticks: u64,
        /// Spawner seed (defaults to the tuning seed, then 1)
        #[arg(long)]
        seed: Option<u64>,
        /// JSON tuning file
        #[arg(long)]
        tuning: Option<PathBuf>,
        /// Where the best score is kept
        #[arg(long, default_value = "lacetti_best.txt")]
        best_file: PathBuf,
        /// Steer with the autopilot instead of driving straight
        #[arg(long)]
        autopilot: bool,
    }

    pub fn run() -> Result<()> {
        env_logger::init();
        let args = Args::parse();
        if args.ticks == 0 {
            return Err(anyhow!("--ticks must be > 0"));
        }

        let tuning = Tuning::load_file(args.tuning.as_deref())?;
        let seed = args.seed.or(tuning.seed).unwrap_or(1);
        let mut game = Game::new(tuning, seed, FileStore::new(args.best_file.clone()));
        log::info!("Lacetti Run (native) starting, best so far {}", game.best());

        let mut sessions = 1u32;
        let mut coins = 0u32;
        let mut scores = Vec::new();
        for _ in 0..args.ticks {
            if game.state().game_over() {
                scores.push(game.score_display());
                game.reset();
                sessions += 1;
            }
            let input = if args.autopilot {
                autopilot::next_input(game.state())
            } else {
                Default::default()
            };
            game.keys.clear();
            apply_input(&mut game, input);
            let report = game.step(1000.0 / 60.0);
            coins += report.coins;
        }
        scores.push(game.score_display());

        let longest = scores.iter().copied().max().unwrap_or(0);
        println!("Sessions:   {}", sessions);
        println!("Coins:      {}", coins);
        println!("Top score:  {}", longest);
        println!("Best ever:  {}", game.best());
        println!("Best file:  {}", game.store().path().display());
        Ok(())
    }

    /// Feed a steering decision through the same key path a player uses
    fn apply_input<S: lacetti_run::BestScoreStore>(
        game: &mut Game<S>,
        input: lacetti_run::sim::TickInput,
    ) {
        for (held, key) in [
            (input.left, "ArrowLeft"),
            (input.right, "ArrowRight"),
            (input.up, "ArrowUp"),
            (input.down, "ArrowDown"),
        ] {
            if held {
                game.keys.key_down(key);
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
