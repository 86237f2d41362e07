pub mod calendar;
pub mod error;
pub mod format;
pub mod luck;
pub mod phase;
pub mod types;

pub use calendar::{
    build_month_grid, days_into_week, expand_range, first_of_month, grid_start, monthly_outlook,
    seven_day_forecast, MonthCursor, DAYS_PER_WEEK, FORECAST_DAYS, GRID_CELLS, GRID_WEEKS,
    OUTLOOK_DAYS,
};

pub use error::{LunarError, Result};

pub use format::{format_long, format_short, month_title};

pub use luck::{annotate, LUCK_FALLBACK};

pub use phase::{
    classify, days_since_reference, illumination, moon_phase, moon_phase_at, phase_details,
    phase_fraction, reference_new_moon, validate_config, REFERENCE_NEW_MOON_YMD,
    SYNODIC_MONTH_DAYS,
};

pub use types::{
    AssetTable, CalendarCell, ForecastEntry, LuckyDay, LunarConfig, MonthGrid, MoonPhase,
    PhaseKind,
};
