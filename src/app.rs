use std::io::BufRead;
use std::time::Instant;

use anyhow::{Context, Result};

use crate::config::{city_label, CityConfig};
use crate::data::filter::{filtered_view, TripView};
use crate::data::loader;
use crate::data::pager::Pages;
use crate::data::stats;
use crate::ui::{prompt, render};

// ---------------------------------------------------------------------------
// Interactive query cycle
// ---------------------------------------------------------------------------

/// Run the query cycle until the user declines to restart.
///
/// Selections are read from `input`, so the whole cycle can be driven by a
/// scripted buffer as well as stdin. Load failures and empty datasets send
/// the user back to the city menu; no error from the data layer escapes
/// this loop.
pub fn run(config: &CityConfig, input: &mut dyn BufRead) -> Result<()> {
    println!("\nHello! Let's explore some US bikeshare data!\n");

    loop {
        let city = prompt::choose_city(config, input)?;
        let (month, day) = prompt::choose_filters(input)?;

        let path = config
            .path_for(&city)
            .context("selected city missing from configuration")?;

        let table = match loader::load_table(path) {
            Ok(table) if !table.is_empty() => table,
            Ok(_) => {
                log::warn!("{city}: dataset holds no trips");
                render::no_data();
                continue;
            }
            Err(e) => {
                log::error!("failed to load {city}: {e}");
                render::no_data();
                continue;
            }
        };
        log::info!("loaded {} trips for {city}", table.len());

        let view = filtered_view(&table, month, day);
        log::debug!("{} of {} trips match the filters", view.len(), table.len());

        render::banner(&city_label(&city), month, day);

        let started = Instant::now();
        let travel = stats::travel_times(&view);
        render::travel_times(&travel, started.elapsed());

        let started = Instant::now();
        let stations = stats::popular_stations(&view);
        render::popular_stations(&stations, started.elapsed());

        let started = Instant::now();
        let durations = stats::trip_durations(&view);
        render::trip_durations(&durations, started.elapsed());

        let started = Instant::now();
        let demographics = stats::user_demographics(&view);
        render::user_demographics(&demographics, started.elapsed());

        paginate(&view, input);

        if !prompt::confirm("\nWould you like to restart?", input)? {
            break;
        }
    }

    render::completion();
    Ok(())
}

/// Raw-record pagination: one confirmation up front, then five records per
/// page while the user keeps accepting. Stops without asking again once the
/// view is exhausted, and a failed prompt read stops it early instead of
/// ending the cycle.
fn paginate(view: &TripView<'_>, input: &mut dyn BufRead) {
    let mut pages = Pages::new(view);
    let mut question = "Would you like to see raw data?";

    while pages.has_more() {
        match prompt::confirm(question, input) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => {
                log::error!("raw data pagination stopped: {e}");
                break;
            }
        }
        if let Some(page) = pages.next() {
            render::raw_page(&page);
        }
        question = "More raw data?";
    }
}
