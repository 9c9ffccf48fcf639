use gemcrush_core::Notifier;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Page-side sound player. A missing method only logs a warning.
    pub type AudioSink;

    #[wasm_bindgen(method, catch, js_name = playGemSelect)]
    fn play_gem_select(this: &AudioSink) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = playInvalidMove)]
    fn play_invalid_move(this: &AudioSink) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = playGemCrush)]
    fn play_gem_crush(this: &AudioSink, match_count: u32) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = playCombo)]
    fn play_combo(this: &AudioSink, combo: u32) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = playLevelComplete)]
    fn play_level_complete(this: &AudioSink) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = playGameOver)]
    fn play_game_over(this: &AudioSink) -> Result<(), JsValue>;
}

/// Routes engine cues to the page, silent until a sink is attached.
#[derive(Default)]
pub(crate) struct JsAudio {
    sink: Option<AudioSink>,
}

impl JsAudio {
    pub(crate) fn attach(&mut self, sink: AudioSink) {
        self.sink = Some(sink);
    }

    fn play(&self, cue: &str, call: impl FnOnce(&AudioSink) -> Result<(), JsValue>) {
        if let Some(sink) = &self.sink {
            if let Err(err) = call(sink) {
                log::warn!("audio cue {cue} failed: {err:?}");
            }
        }
    }
}

impl Notifier for JsAudio {
    fn play_gem_select(&mut self) {
        self.play("gem select", AudioSink::play_gem_select);
    }

    fn play_invalid_move(&mut self) {
        self.play("invalid move", AudioSink::play_invalid_move);
    }

    fn play_gem_crush(&mut self, match_count: u32) {
        self.play("gem crush", |sink| sink.play_gem_crush(match_count));
    }

    fn play_combo(&mut self, combo: u32) {
        self.play("combo", |sink| sink.play_combo(combo));
    }

    fn play_level_complete(&mut self) {
        self.play("level complete", AudioSink::play_level_complete);
    }

    fn play_game_over(&mut self) {
        self.play("game over", AudioSink::play_game_over);
    }
}
