use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

use crate::error::{LunarError, Result};
use crate::phase;
use crate::types::{CalendarCell, ForecastEntry, LuckyDay, LunarConfig, MonthGrid};

pub const DAYS_PER_WEEK: usize = 7;
pub const GRID_WEEKS: usize = 6;
pub const GRID_CELLS: usize = GRID_WEEKS * DAYS_PER_WEEK;
pub const FORECAST_DAYS: i64 = 7;
pub const OUTLOOK_DAYS: i64 = 30;

fn add_days(date: NaiveDate, days: u64) -> Result<NaiveDate> {
    date.checked_add_days(Days::new(days))
        .ok_or(LunarError::DateOutOfRange)
}

fn day_sequence(start: NaiveDate, day_count: i64) -> Result<Vec<NaiveDate>> {
    if day_count < 0 {
        return Err(LunarError::NegativeDayCount(day_count));
    }
    if day_count > 0 {
        add_days(start, day_count as u64 - 1)?;
    }
    (0..day_count as u64).map(|offset| add_days(start, offset)).collect()
}

pub fn expand_range(
    config: &LunarConfig,
    start: NaiveDate,
    day_count: i64,
) -> Result<Vec<ForecastEntry>> {
    let dates = day_sequence(start, day_count)?;
    tracing::debug!(%start, day_count, "expanding moon phase range");
    Ok(dates
        .into_iter()
        .map(|date| ForecastEntry {
            date,
            moon_phase: phase::moon_phase(config, date),
        })
        .collect())
}

/// Seven days starting the day after `today`. Entries carry no luck message.
pub fn seven_day_forecast(config: &LunarConfig, today: NaiveDate) -> Result<Vec<ForecastEntry>> {
    let tomorrow = add_days(today, 1)?;
    expand_range(config, tomorrow, FORECAST_DAYS)
}

/// Thirty consecutive days from `start`, each annotated with its luck message.
pub fn monthly_outlook(config: &LunarConfig, start: NaiveDate) -> Result<Vec<LuckyDay>> {
    Ok(day_sequence(start, OUTLOOK_DAYS)?
        .into_iter()
        .map(|date| {
            let moon_phase = phase::moon_phase(config, date);
            LuckyDay {
                date,
                moon_phase,
                luck: moon_phase.kind.luck(),
            }
        })
        .collect())
}

pub fn first_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    if !(1..=12).contains(&month) {
        return Err(LunarError::InvalidMonth(month));
    }
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(LunarError::InvalidYear(year))
}

/// Days between the most recent `week_start` and `date`, in 0..7.
pub fn days_into_week(date: NaiveDate, week_start: Weekday) -> u32 {
    let day = date.weekday().num_days_from_sunday();
    let start = week_start.num_days_from_sunday();
    (day + 7 - start) % 7
}

pub fn grid_start(first: NaiveDate, week_start: Weekday) -> Result<NaiveDate> {
    let offset = days_into_week(first, week_start);
    first
        .checked_sub_days(Days::new(offset as u64))
        .ok_or(LunarError::DateOutOfRange)
}

/// Builds the 42-cell page for `month` of `year`. `month` is 1-based (1 = January)
/// and is rejected rather than normalized when out of range.
pub fn build_month_grid(config: &LunarConfig, year: i32, month: u32) -> Result<MonthGrid> {
    let first = first_of_month(year, month)?;
    let start = grid_start(first, config.week_start)?;
    let dates = day_sequence(start, GRID_CELLS as i64)?;

    let cells: Vec<CalendarCell> = dates
        .into_iter()
        .map(|date| {
            if date.year() == year && date.month() == month {
                let moon_phase = phase::moon_phase(config, date);
                CalendarCell::InMonth {
                    date,
                    moon_phase,
                    luck: moon_phase.kind.luck(),
                }
            } else {
                CalendarCell::Padding { date }
            }
        })
        .collect();

    tracing::debug!(year, month, %start, "built month grid");
    Ok(MonthGrid::new(year, month, cells))
}

/// Month navigation state held by a caller and passed back in on each request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthCursor {
    first: NaiveDate,
}

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        Ok(Self {
            first: first_of_month(year, month)?,
        })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn next(&self) -> Result<Self> {
        self.first
            .checked_add_months(Months::new(1))
            .map(|first| Self { first })
            .ok_or(LunarError::DateOutOfRange)
    }

    pub fn prev(&self) -> Result<Self> {
        self.first
            .checked_sub_months(Months::new(1))
            .map(|first| Self { first })
            .ok_or(LunarError::DateOutOfRange)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    pub fn title(&self) -> String {
        crate::format::month_title(self.first)
    }

    pub fn grid(&self, config: &LunarConfig) -> Result<MonthGrid> {
        build_month_grid(config, self.year(), self.month())
    }
}
