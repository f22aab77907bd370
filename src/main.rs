//! Jungle Fury entry point
//!
//! On the web this wires the DOM (canvas, HUD, keyboard) to a `GameSession`
//! driven by `requestAnimationFrame`. Natively it runs a headless race.

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use jungle_fury::assets::{Assets, web::ImageAssets, web::spawn_loads};
    use jungle_fury::consts::{HEIGHT, WIDTH};
    use jungle_fury::platform::web::RafScheduler;
    use jungle_fury::renderer::{build_frame, canvas};
    use jungle_fury::ui::Screen;
    use jungle_fury::{GameSession, Tuning};

    /// Game instance holding all state
    struct Game {
        session: GameSession<RafScheduler>,
        ctx: CanvasRenderingContext2d,
        images: ImageAssets,
    }

    impl Game {
        fn render(&self) {
            let images = self.images.borrow();
            let cmds = build_frame(self.session.snapshot(), &*images);
            canvas::draw(&self.ctx, &cmds, &images);
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let screen = self.session.screen();

            if let Some(el) = document.get_element_by_id("hud") {
                let _ = el.set_attribute("class", screen.as_str());
            }
            if let Some(el) = document.get_element_by_id("hud-status") {
                el.set_text_content(Some(screen.status_text()));
            }
            if let Some(el) = document.get_element_by_id("start-btn") {
                let class = if screen == Screen::Start { "" } else { "hidden" };
                let _ = el.set_attribute("class", class);
            }
            if let Some(el) = document.get_element_by_id("restart-btn") {
                let class = if screen.is_over() { "" } else { "hidden" };
                let _ = el.set_attribute("class", class);
            }
        }

        fn refresh(&self) {
            self.render();
            self.update_hud();
        }
    }

    fn on_frame(game: &Weak<RefCell<Game>>, token: jungle_fury::platform::FrameToken) {
        let Some(game) = game.upgrade() else {
            return;
        };
        let mut g = game.borrow_mut();
        if let Some(events) = g.session.on_frame(token) {
            for event in events {
                log::trace!("{:?}", event);
            }
            g.refresh();
        }
    }

    #[wasm_bindgen(start)]
    pub fn wasm_main() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        log::info!("Jungle Fury starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document");
            return;
        };
        let Some(canvas) = document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No #canvas element");
            return;
        };
        canvas.set_width(WIDTH as u32);
        canvas.set_height(HEIGHT as u32);

        let Some(ctx) = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
        else {
            log::error!("Canvas 2D context unavailable");
            return;
        };

        let seed = js_sys::Date::now() as u64;
        let tuning = Tuning::load();
        let images: ImageAssets = Rc::new(RefCell::new(Assets::new()));

        // Images arrive in the background; the game never waits for them
        spawn_loads(&images);

        let game = Rc::new_cyclic(|weak: &Weak<RefCell<Game>>| {
            let weak = weak.clone();
            let scheduler = RafScheduler::new(move |token, _time| on_frame(&weak, token));
            RefCell::new(Game {
                session: GameSession::new(seed, tuning, scheduler),
                ctx,
                images,
            })
        });
        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(game.clone());
        setup_buttons(game.clone());

        game.borrow().refresh();
        log::info!("Jungle Fury ready!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        for (event_name, pressed) in [("keydown", true), ("keyup", false)] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                if g.session.key_event(&event.key(), pressed) {
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        if let Some(btn) = document.get_element_by_id("start-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut g = game.borrow_mut();
                g.session.start_game();
                g.refresh();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let seed = js_sys::Date::now() as u64;
                let mut g = game.borrow_mut();
                g.session.reset_with_seed(seed);
                g.refresh();
                log::info!("Game reset with seed: {}", seed);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

/// Headless race: `jungle-fury [seed] [tuning.json]`
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use jungle_fury::platform::ManualScheduler;
    use jungle_fury::{GameSession, Tuning};

    env_logger::init();
    log::info!("Jungle Fury (native) starting...");
    log::info!("Native mode runs headless - build for wasm32 to play in the browser");

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(rand::random);
    let tuning = args
        .next()
        .map(|path| Tuning::load_file(std::path::Path::new(&path)))
        .unwrap_or_default();

    let mut session = GameSession::new(seed, tuning, ManualScheduler::new());
    session.start_game();

    const MAX_FRAMES: usize = 10_000;
    let mut frames = 0;
    while frames < MAX_FRAMES {
        let Some(token) = session.frames_mut().scheduler_mut().next_frame() else {
            break;
        };
        if session.on_frame(token).is_some() {
            frames += 1;
        }
    }

    let snap = session.snapshot();
    println!(
        "seed {}: {:?} after {} ticks (player at {:.0},{:.0}, {}/{} AI cars intact)",
        seed,
        session.screen(),
        snap.tick,
        snap.player.x,
        snap.player.y,
        snap.ai_cars.iter().filter(|c| c.alive).count(),
        snap.ai_cars.len(),
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
