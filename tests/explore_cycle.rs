use std::io::{Cursor, Write};

use citycycle::app;
use citycycle::config::CityConfig;
use tempfile::NamedTempFile;

// Seven trips across January-June 2017; Gender and Birth Year present.
const FIXTURE_CSV: &str = "\
Start Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
2017-01-02 08:00:00,100,Canal St,State St,Subscriber,Male,1985.0
2017-01-09 09:00:00,200,Canal St,Clark St,Subscriber,Female,1992.0
2017-01-16 10:00:00,300,State St,Clark St,Customer,,
2017-02-06 11:00:00,400,Clark St,Canal St,Subscriber,Female,1992.0
2017-03-15 12:00:00,500,Clark St,State St,Customer,Male,1970.0
2017-04-14 13:00:00,600,State St,Canal St,Subscriber,Female,1988.0
2017-06-18 14:00:00,700,Canal St,State St,Customer,Male,
";

// Same shape as the Washington dataset: no Gender, no Birth Year.
const NO_DEMOGRAPHICS_CSV: &str = "\
Start Time,Trip Duration,Start Station,End Station,User Type
2017-01-02 08:00:00,100,Canal St,State St,Subscriber
2017-01-09 09:00:00,200,Canal St,Clark St,Subscriber
";

const MALFORMED_CSV: &str = "\
Start Time,Trip Duration,Start Station,End Station,User Type
2017-01-02 08:00:00,100,Canal St,State St,Subscriber
not-a-timestamp,200,Canal St,Clark St,Subscriber
";

fn write_fixture(content: &str) -> NamedTempFile {
    let mut tmp = NamedTempFile::new().unwrap();
    write!(tmp, "{content}").unwrap();
    tmp
}

#[test]
fn full_cycle_with_filters_and_raw_pages() {
    let tmp = write_fixture(FIXTURE_CSV);
    let config = CityConfig::new([("fixture_city", tmp.path().to_path_buf())]);

    // city 1, filter yes, month January, day all, one (short) page of raw
    // data accepted, no restart.
    let script = "1\ny\n1\n0\ny\nn\n";
    app::run(&config, &mut Cursor::new(script)).unwrap();
}

#[test]
fn cycle_without_filters_runs_every_report() {
    let tmp = write_fixture(FIXTURE_CSV);
    let config = CityConfig::new([("fixture_city", tmp.path().to_path_buf())]);

    let script = "1\nn\nn\nn\n";
    app::run(&config, &mut Cursor::new(script)).unwrap();
}

#[test]
fn missing_demographics_cycle_still_completes() {
    let tmp = write_fixture(NO_DEMOGRAPHICS_CSV);
    let config = CityConfig::new([("plain_city", tmp.path().to_path_buf())]);

    let script = "1\nn\nn\nn\n";
    app::run(&config, &mut Cursor::new(script)).unwrap();
}

#[test]
fn load_failure_reprompts_for_another_city() {
    let bad = write_fixture(MALFORMED_CSV);
    let good = write_fixture(FIXTURE_CSV);
    let config = CityConfig::new([
        ("bad_city", bad.path().to_path_buf()),
        ("good_city", good.path().to_path_buf()),
    ]);

    // First selection hits the malformed dataset and must loop straight
    // back to the city menu; the second runs a clean cycle.
    let script = "1\nn\n2\nn\nn\nn\n";
    app::run(&config, &mut Cursor::new(script)).unwrap();
}

#[test]
fn filters_that_match_nothing_still_complete_the_cycle() {
    let tmp = write_fixture(FIXTURE_CSV);
    let config = CityConfig::new([("fixture_city", tmp.path().to_path_buf())]);

    // May is empty in the fixture: every report fails with an empty-view
    // message, pagination has nothing to offer, and the cycle still ends
    // gracefully.
    let script = "1\ny\n5\n0\nn\n";
    app::run(&config, &mut Cursor::new(script)).unwrap();
}

#[test]
fn exhausted_input_falls_back_to_defaults_and_exits() {
    let tmp = write_fixture(FIXTURE_CSV);
    let config = CityConfig::new([("fixture_city", tmp.path().to_path_buf())]);

    // EOF everywhere: default city, no filters, no raw data, no restart.
    app::run(&config, &mut Cursor::new("")).unwrap();
}
