use clap::Parser;
use gemcrush_core::GameConfig;
use wasm_bindgen::prelude::*;

pub use game::WasmGame;

mod audio;
mod game;
mod session;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub(crate) struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Moves granted per level
    #[arg(long, default_value_t = GameConfig::default().moves)]
    moves: u32,

    /// Score target of the first level
    #[arg(long, default_value_t = GameConfig::default().target)]
    target: u32,

    /// Pause between scoring a batch and clearing it
    #[arg(long, default_value_t = 300)]
    clear_delay_ms: u32,

    /// Pause between a refill and the next match check
    #[arg(long, default_value_t = 300)]
    settle_delay_ms: u32,
}

impl Args {
    /// Parses `#--seed=42&-vv` style fragments, an empty hash gives the defaults.
    pub(crate) fn from_hash(hash: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(hash.split(['#', '&']))
    }

    pub(crate) fn from_location() -> Self {
        let location_hash = gloo::utils::window()
            .location()
            .hash()
            .unwrap_or_default();

        Self::from_hash(&location_hash).unwrap_or_else(|err| {
            log::warn!("ignoring location hash {location_hash:?}: {err}");
            Self::default()
        })
    }

    pub(crate) fn config(&self) -> GameConfig {
        let defaults = GameConfig::default();
        GameConfig::new(
            self.moves,
            self.target,
            defaults.target_step,
            defaults.combo_window_ms,
        )
    }

    pub(crate) fn pacing(&self) -> session::Pacing {
        session::Pacing {
            clear_delay_ms: self.clear_delay_ms,
            settle_delay_ms: self.settle_delay_ms,
        }
    }
}

impl Default for Args {
    fn default() -> Self {
        Self {
            verbose: Default::default(),
            seed: None,
            moves: GameConfig::default().moves,
            target: GameConfig::default().target,
            clear_delay_ms: 300,
            settle_delay_ms: 300,
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let args = Args::from_location();
    if let Some(log_level) = args.verbose.log_level() {
        if let Err(err) = console_log::init_with_level(log_level) {
            web_sys::console::error_1(&format!("Error initializing logger: {err}").into());
        }
    }
    log::debug!("gemcrush started with {args:?}");
}
