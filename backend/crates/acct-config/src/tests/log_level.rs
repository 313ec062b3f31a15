use crate::LogLevel;

use std::str::FromStr;

use googletest::assert_that;
use googletest::prelude::eq;
use log::LevelFilter;

#[test]
fn given_known_level_names_when_parsed_then_map_to_filters() {
    assert_that!(LogLevel::from_str("DEBUG").unwrap().0, eq(LevelFilter::Debug));
    assert_that!(LogLevel::from_str("warn").unwrap().0, eq(LevelFilter::Warn));
    assert_that!(LogLevel::from_str("off").unwrap().0, eq(LevelFilter::Off));
}

#[test]
fn given_unknown_level_name_when_parsed_then_falls_back_to_info() {
    assert_that!(LogLevel::from_str("verbose").unwrap().0, eq(LevelFilter::Info));
}
