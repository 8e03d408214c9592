use clap::Parser;
use lights_out_core::{Coord, DEFAULT_CHANCE_LIT, DEFAULT_SIZE, GameConfig};
use wasm_bindgen::prelude::*;

mod cell;
mod game;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of rows on the board
    #[arg(long, default_value_t = DEFAULT_SIZE.0)]
    rows: Coord,

    /// Number of columns on the board
    #[arg(long, default_value_t = DEFAULT_SIZE.1)]
    cols: Coord,

    /// Chance for each light to start lit, from 0 to 1
    #[arg(long, default_value_t = DEFAULT_CHANCE_LIT)]
    chance: f64,
}

impl Args {
    /// Parses a location hash such as `#--rows=3&--chance=0.5&-v`, the leading empty item stands in for the program
    /// name.
    fn from_hash(hash: &str) -> Result<Self, clap::Error> {
        let args = hash.split(['#', '&']).filter(|arg| !arg.is_empty());
        Self::try_parse_from(std::iter::once("").chain(args))
    }

    fn game_config(&self) -> lights_out_core::Result<GameConfig> {
        GameConfig::new(self.rows, self.cols, self.chance)
    }
}

impl Default for Args {
    fn default() -> Self {
        Self {
            verbose: clap_verbosity_flag::Verbosity::new(0, 0),
            seed: None,
            rows: DEFAULT_SIZE.0,
            cols: DEFAULT_SIZE.1,
            chance: DEFAULT_CHANCE_LIT,
        }
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let (args, parse_error) = match Args::from_hash(&location_hash) {
        Ok(args) => (args, None),
        Err(err) => (Args::default(), Some(err)),
    };
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    if let Some(err) = parse_error {
        log::error!("could not parse args, using defaults: {}", err);
    }
    log::debug!("args: {:?}", args);

    let config = args.game_config().unwrap_or_else(|err| {
        log::error!("invalid board configuration, using defaults: {}", err);
        GameConfig::default()
    });
    let seed = args.seed.unwrap_or_else(utils::js_random_seed);

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, game::GameProps { config, seed })
        .render();
}
