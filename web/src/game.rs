use std::cell::RefCell;
use std::rc::Rc;
use std::result::Result;

use gemcrush_core::*;
use gloo::timers::future::TimeoutFuture;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_time::Instant;

use crate::audio::{AudioSink, JsAudio};
use crate::session::{Pacing, Session};
use crate::utils::js_random_seed;
use crate::Args;

struct Inner {
    session: Session<JsAudio>,
    pacing: Pacing,
    on_change: Option<js_sys::Function>,
}

type Shared = Rc<RefCell<Inner>>;

#[derive(Serialize)]
struct Hint {
    from: Position,
    to: Position,
}

/// The engine as seen from the page.
#[wasm_bindgen]
pub struct WasmGame {
    inner: Shared,
}

#[wasm_bindgen]
impl WasmGame {
    /// Starts a game configured from the location hash.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmGame {
        let args = Args::from_location();
        let seed = args.seed.unwrap_or_else(js_random_seed);
        log::info!("new game with seed {seed}");

        let engine = MatchEngine::new(args.config(), seed);
        WasmGame {
            inner: Rc::new(RefCell::new(Inner {
                session: Session::new(engine, JsAudio::default()),
                pacing: args.pacing(),
                on_change: None,
            })),
        }
    }

    #[wasm_bindgen(js_name = setAudio)]
    pub fn set_audio(&self, sink: AudioSink) {
        self.inner
            .borrow_mut()
            .session
            .audio_mut()
            .inner_mut()
            .attach(sink);
    }

    /// `callback` runs after every visible change, read the new state with `snapshot()`.
    #[wasm_bindgen(js_name = setOnChange)]
    pub fn set_on_change(&self, callback: js_sys::Function) {
        self.inner.borrow_mut().on_change = Some(callback);
    }

    /// Returns whether the click changed anything.
    #[wasm_bindgen(js_name = handleGemClick)]
    pub fn handle_gem_click(&self, row: u32, col: u32) -> Result<bool, JsError> {
        let outcome = self
            .inner
            .borrow_mut()
            .session
            .click_at(row, col, Instant::now())?;

        if let Some(ticket) = outcome.ticket() {
            let delay = self.inner.borrow().pacing.clear_delay_ms;
            run_cascade(self.inner.clone(), ticket, delay);
        }
        if outcome.has_update() {
            notify_change(&self.inner);
        }
        Ok(outcome.has_update())
    }

    #[wasm_bindgen(js_name = resetGame)]
    pub fn reset_game(&self) {
        self.inner.borrow_mut().session.reset_game();
        notify_change(&self.inner);
    }

    #[wasm_bindgen(js_name = nextLevel)]
    pub fn next_level(&self) {
        self.inner.borrow_mut().session.next_level();
        notify_change(&self.inner);
    }

    /// Returns the new setting.
    #[wasm_bindgen(js_name = toggleSound)]
    pub fn toggle_sound(&self) -> bool {
        self.inner.borrow_mut().session.audio_mut().toggle_sound()
    }

    #[wasm_bindgen(js_name = isSoundEnabled)]
    pub fn is_sound_enabled(&self) -> bool {
        self.inner.borrow().session.audio().is_sound_enabled()
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = self.inner.borrow().session.snapshot();
        to_js(&snapshot)
    }

    /// A productive swap as `{from, to}`, or `null` when the board has none.
    pub fn hint(&self) -> Result<JsValue, JsValue> {
        let hint = self
            .inner
            .borrow()
            .session
            .engine()
            .hint()
            .map(|(from, to)| Hint {
                from: from.into(),
                to: to.into(),
            });
        to_js(&hint)
    }
}

impl Default for WasmGame {
    fn default() -> Self {
        Self::new()
    }
}

fn to_js(value: &impl Serialize) -> Result<JsValue, JsValue> {
    let json = serde_json::to_string(value).map_err(JsError::from)?;
    js_sys::JSON::parse(&json)
}

/// Calls the page callback with no borrow held, it usually reads the snapshot right away.
fn notify_change(inner: &Shared) {
    let callback = inner.borrow().on_change.clone();
    if let Some(callback) = callback {
        if let Err(err) = callback.call0(&JsValue::NULL) {
            log::error!("change callback failed: {err:?}");
        }
    }
}

/// Steps the cascade on timers until it settles or a new level makes the ticket stale.
fn run_cascade(inner: Shared, ticket: CascadeTicket, first_delay: u32) {
    spawn_local(async move {
        let mut delay = first_delay;
        loop {
            TimeoutFuture::new(delay).await;

            let step = inner.borrow_mut().session.step(ticket, Instant::now());
            let progress = match step {
                Ok(progress) => progress,
                Err(GameError::StaleCascade) => return,
                Err(err) => {
                    log::error!("cascade step failed: {err}");
                    return;
                }
            };
            notify_change(&inner);

            let next = inner.borrow().pacing.delay_after(progress);
            match next {
                Some(next) => delay = next,
                None => {
                    schedule_combo_expiry(inner);
                    return;
                }
            }
        }
    });
}

fn schedule_combo_expiry(inner: Shared) {
    let Some(deadline) = inner.borrow().session.engine().combo_expires_at() else {
        return;
    };
    let wait = deadline.saturating_duration_since(Instant::now());
    let millis = u32::try_from(wait.as_millis()).unwrap_or(u32::MAX);

    spawn_local(async move {
        TimeoutFuture::new(millis).await;
        let expired = inner.borrow_mut().session.expire_combo(Instant::now());
        if expired {
            notify_change(&inner);
        }
    });
}
