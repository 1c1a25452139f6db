use chrono::NaiveDate;
use serde::Serialize;
use veritas_validator::date as calendar;

use super::{Context, Outcome};
use crate::cli::DateQuery;

#[derive(Serialize)]
#[serde(untagged)]
enum DateReport {
    LeapYear {
        year: i32,
        leap_year: bool,
    },
    DaysInMonth {
        year: i32,
        month: u32,
        days: u32,
    },
    MonthBound {
        date: NaiveDate,
        matches: bool,
        bound: NaiveDate,
    },
    Weekday {
        date: NaiveDate,
        weekday: String,
        weekend: bool,
    },
}

pub fn run(ctx: &Context, query: DateQuery) -> anyhow::Result<Outcome> {
    let (report, human) = match query {
        DateQuery::LeapYear { year } => {
            let leap_year = calendar::is_leap_year(year);
            (DateReport::LeapYear { year, leap_year }, leap_year.to_string())
        }
        DateQuery::DaysInMonth { year, month } => {
            let days = calendar::days_in_month(year, month)?;
            (DateReport::DaysInMonth { year, month, days }, days.to_string())
        }
        DateQuery::FirstDay { date } => {
            let matches = calendar::is_first_day_of_month(date);
            let bound = calendar::first_day_of_month(date);
            (DateReport::MonthBound { date, matches, bound }, matches.to_string())
        }
        DateQuery::LastDay { date } => {
            let matches = calendar::is_last_day_of_month(date);
            let bound = calendar::last_day_of_month(date);
            (DateReport::MonthBound { date, matches, bound }, matches.to_string())
        }
        DateQuery::Weekday { date } => {
            let weekday = calendar::weekday(date).to_string();
            let weekend = calendar::is_weekend(date);
            let human = weekday.clone();
            (DateReport::Weekday { date, weekday, weekend }, human)
        }
    };

    ctx.emit(&report, human)?;
    Ok(Outcome::Valid)
}
