use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use chrono::Weekday;

use crate::config::{city_label, CityConfig};
use crate::data::filter::{DayFilter, MonthFilter};

// ---------------------------------------------------------------------------
// Line input
// ---------------------------------------------------------------------------

/// Print the prompt marker, then read one trimmed line. EOF reads as an
/// empty line, so a scripted or exhausted input source selects defaults.
fn prompt_line(input: &mut dyn BufRead) -> Result<String> {
    print!("> ");
    io::stdout().flush().context("flushing prompt")?;

    let mut line = String::new();
    input.read_line(&mut line).context("reading selection")?;
    Ok(line.trim().to_string())
}

// ---------------------------------------------------------------------------
// Menus
// ---------------------------------------------------------------------------

/// Numbered city menu built from the configuration. Unrecognized input
/// falls back to the first configured city.
pub fn choose_city(config: &CityConfig, input: &mut dyn BufRead) -> Result<String> {
    let cities: Vec<&str> = config.cities().collect();
    let first = *cities.first().context("no cities configured")?;

    println!("Please choose a city -- enter 1-{} <default 1>:", cities.len());
    for (i, city) in cities.iter().enumerate() {
        println!("{}: {}", i + 1, city_label(city));
    }

    let choice = prompt_line(input)?;
    let city = choice
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| cities.get(i).copied())
        .unwrap_or(first);

    println!("City selected: {}\n", city_label(city));
    Ok(city.to_string())
}

/// Filter gate plus the month and day menus behind it. Declining leaves
/// both filters unrestricted.
pub fn choose_filters(input: &mut dyn BufRead) -> Result<(MonthFilter, DayFilter)> {
    if confirm("Would you like to filter the data?", input)? {
        println!("Filtering selected...\n");
        let month = choose_month(input)?;
        let day = choose_day(input)?;
        Ok((month, day))
    } else {
        println!("Filtering NOT selected...\n");
        Ok((MonthFilter::All, DayFilter::All))
    }
}

/// Month menu, January through June (the range the bundled datasets cover).
/// Anything outside 1-6 selects all months.
pub fn choose_month(input: &mut dyn BufRead) -> Result<MonthFilter> {
    println!("Please choose a month -- enter 1-6 <default all months JAN-JUN>:");
    println!("1: JAN    4: APR");
    println!("2: FEB    5: MAY");
    println!("3: MAR    6: JUN");

    let choice = prompt_line(input)?;
    let filter = match choice.parse::<u32>() {
        Ok(n @ 1..=6) => MonthFilter::Month(n),
        _ => MonthFilter::All,
    };

    println!("Month selected: {filter}\n");
    Ok(filter)
}

/// Day-of-week menu. Anything outside 1-7 selects all days.
pub fn choose_day(input: &mut dyn BufRead) -> Result<DayFilter> {
    println!("Please choose a day of week -- enter 1-7 <default all>:");
    println!("1: MON    4: THU    7: SUN");
    println!("2: TUE    5: FRI");
    println!("3: WED    6: SAT");

    let choice = prompt_line(input)?;
    let filter = match choice.parse::<u8>() {
        Ok(1) => DayFilter::Day(Weekday::Mon),
        Ok(2) => DayFilter::Day(Weekday::Tue),
        Ok(3) => DayFilter::Day(Weekday::Wed),
        Ok(4) => DayFilter::Day(Weekday::Thu),
        Ok(5) => DayFilter::Day(Weekday::Fri),
        Ok(6) => DayFilter::Day(Weekday::Sat),
        Ok(7) => DayFilter::Day(Weekday::Sun),
        _ => DayFilter::All,
    };

    println!("Day selected: {filter}\n");
    Ok(filter)
}

/// y/n confirmation; only "y" or "yes" (any case) count as yes, everything
/// else -- including an empty default -- is no.
pub fn confirm(question: &str, input: &mut dyn BufRead) -> Result<bool> {
    println!("{question} Enter y or n <default n>");
    let choice = prompt_line(input)?.to_lowercase();
    Ok(choice == "y" || choice == "yes")
}
