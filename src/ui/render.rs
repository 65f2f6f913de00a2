use std::time::Duration;

use crate::data::filter::{DayFilter, MonthFilter};
use crate::data::model::{month_name, TripRecord};
use crate::data::stats::{
    DemographicsReport, DurationReport, StationsReport, StatsError, TravelTimesReport,
};

const RULE: &str = "-----------------------------------------------";
const STARS: &str = "***********************************";

/// Banner naming the city and filters the reports below were computed for.
pub fn banner(city_label: &str, month: MonthFilter, day: DayFilter) {
    println!("{STARS}");
    println!("Calculating statistics for:");
    println!("     City:  {city_label}");
    println!("     Month: {month}");
    println!("     Day:   {day}");
    println!("{STARS}");
}

fn execution_time(elapsed: Duration) {
    println!("\nExecution time {:.3} seconds", elapsed.as_secs_f64());
}

/// Most frequent times of travel.
pub fn travel_times(result: &Result<TravelTimesReport, StatsError>, elapsed: Duration) {
    println!("\n{RULE}");
    println!("Calculating Most Frequent Times of Travel...\n");
    match result {
        Ok(report) => {
            println!("Month: {}\nCount: ({})", month_name(report.month.value), report.month.count);
            println!("\nDay:   {}\nCount: ({})", report.weekday.value, report.weekday.count);
            println!("\nHour:  {}\nCount: ({})", report.hour.value, report.hour.count);
            execution_time(elapsed);
        }
        Err(e) => println!("Could not compute travel time statistics: {e}"),
    }
    println!("{RULE}");
}

/// Most popular stations and trip.
pub fn popular_stations(result: &Result<StationsReport, StatsError>, elapsed: Duration) {
    println!("Calculating Most Popular Stations and Trip...\n");
    match result {
        Ok(report) => {
            println!("Start Station: {}\nCount: ({})", report.start.value, report.start.count);
            println!("\nEnd Station:   {}\nCount: ({})", report.end.value, report.end.count);
            println!(
                "\nTrip:          {}\n               To\n               {}\nCount:         ({})",
                report.trip.value.0, report.trip.value.1, report.trip.count
            );
            execution_time(elapsed);
        }
        Err(e) => println!("Could not compute station statistics: {e}"),
    }
    println!("{RULE}");
}

/// Total and average trip duration.
pub fn trip_durations(result: &Result<DurationReport, StatsError>, elapsed: Duration) {
    println!("Calculating Trip Duration...\n");
    match result {
        Ok(report) => {
            println!("Total Travel Time:   {} seconds", report.total_secs);
            println!("Average Travel Time: {:.2} seconds", report.mean_secs);
            execution_time(elapsed);
        }
        Err(e) => println!("Could not compute duration statistics: {e}"),
    }
    println!("{RULE}");
}

/// User type, gender, and birth-year breakdowns. Sections whose columns the
/// dataset lacks are called out as unavailable rather than shown as zeros.
pub fn user_demographics(result: &Result<DemographicsReport, StatsError>, elapsed: Duration) {
    println!("Calculating User Stats...\n");
    match result {
        Ok(report) => {
            println!("User Type Counts:");
            for (user_type, count) in &report.user_types {
                println!("  {user_type}: {count}");
            }

            match &report.genders {
                Some(genders) => {
                    println!("\nGender Counts:");
                    for (gender, count) in genders {
                        println!("  {gender}: {count}");
                    }
                }
                None => println!("\n*** Gender information NOT available in the dataset ***"),
            }

            match &report.birth_years {
                Some(years) => {
                    println!("\nEarliest Birth Year:    {}", years.earliest);
                    println!("Latest Birth Year:      {}", years.latest);
                    println!("Most Common Birth Year: {}", years.most_common.value);
                }
                None => println!("\n*** Birth year information NOT available in the dataset ***"),
            }
            execution_time(elapsed);
        }
        Err(e) => println!("Could not compute user statistics: {e}"),
    }
    println!("{RULE}");
}

/// One page of raw records, one line each.
pub fn raw_page(page: &[&TripRecord]) {
    for record in page {
        println!("{record}");
    }
}

/// Shown when a city's dataset failed to load or held no trips.
pub fn no_data() {
    println!("\n*** No trip data found for this city, please try another city ***");
}

/// Graceful exit notice.
pub fn completion() {
    println!("\nSuccessful program completion.\n");
}
