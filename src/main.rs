use std::{env, fs};
use anyhow::Result;
use chrono::Utc;
use log::{error, info, warn};
use spotprice::config::Config;
use spotprice::data_files::load_into_state;
use spotprice::initialization::init;
use spotprice::state::AppState;
use spotprice::summary::Summary;

fn main() {
    let (config, mut state) = match init(env::args().nth(1)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };

    if let Err(e) = run(&config, &mut state) {
        error!("{}", e);
    }
}

/// Loads prices and the latest cached exchange rate, then prints a summary
///
/// # Arguments
///
/// * 'config' - the loaded configuration
/// * 'state' - application state to load data into
fn run(config: &Config, state: &mut AppState) -> Result<()> {
    state.set_now(Utc::now());

    load_into_state(&config.files, state);

    if state.needs_exchange_rate_refresh() {
        warn!("exchange rate {}/{} needs to be refreshed", state.price_currency(), state.currency());
    }

    match state.current_price() {
        Ok(p) => info!("current price {} ({})", p.formatted_price(state.currency()), p.level(state.price_limits())),
        Err(e) => warn!("no current price: {}", e),
    }
    if let Ok(w) = state.cheapest_window() {
        info!("cheapest window {}", w);
    }

    let summary = Summary::from_state(state);
    info!("status: {}", summary.status);
    let json = serde_json::to_string_pretty(&summary)?;

    if let Some(summary_file) = &config.files.summary_file {
        fs::write(summary_file, &json)?;
    }
    println!("{}", json);

    Ok(())
}
