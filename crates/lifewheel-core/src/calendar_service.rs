//! Quarterly-review calendar export in ICS text form.

use std::fmt::Write as _;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use lifewheel_domain::Locale;
use uuid::Uuid;

use crate::strings::strings;

/// Quarter-end anchors within the planning year.
const QUARTERS: [(u32, u32, &str); 4] = [
    (3, 31, "Q1"),
    (6, 30, "Q2"),
    (9, 30, "Q3"),
    (12, 31, "Q4"),
];

pub struct CalendarService;

impl CalendarService {
    /// Renders four one-hour review events, one per quarter of `plan_year`,
    /// each with a unique identifier.
    pub fn ics(locale: Locale, plan_year: i32) -> String {
        let mut out = String::from("BEGIN:VCALENDAR\nVERSION:2.0\nPRODID:-//Lifewheel//EN\n");
        for (month, day, quarter) in QUARTERS {
            // Fixed month/day pairs are always valid dates.
            let start = NaiveDate::from_ymd_opt(plan_year, month, day)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap();
            let end = start + Duration::hours(1);
            let _ = writeln!(
                out,
                "BEGIN:VEVENT\nUID:{}@lifewheel\nDTSTART:{}\nDTEND:{}\nSUMMARY:{} {}\nEND:VEVENT",
                Uuid::new_v4(),
                stamp(start),
                stamp(end),
                quarter,
                strings(locale).calendar_review
            );
        }
        out.push_str("END:VCALENDAR");
        out
    }
}

fn stamp(moment: NaiveDateTime) -> String {
    moment.format("%Y%m%dT%H%M%SZ").to_string()
}
