use chrono::{DateTime, NaiveDate, TimeZone};

use crate::error::{LunarError, Result};
use crate::types::{LunarConfig, MoonPhase, PhaseKind};

pub const SYNODIC_MONTH_DAYS: f64 = 29.530588853;
pub const REFERENCE_NEW_MOON_YMD: (i32, u32, u32) = (2024, 1, 11);

// Upper edges of each bucket, in cycle order. Anything at or past the last edge wraps
// back to new moon.
const PHASE_EDGES: [(f64, PhaseKind); 8] = [
    (0.0625, PhaseKind::NewMoon),
    (0.1875, PhaseKind::WaxingCrescent),
    (0.3125, PhaseKind::FirstQuarter),
    (0.4375, PhaseKind::WaxingGibbous),
    (0.5625, PhaseKind::FullMoon),
    (0.6875, PhaseKind::WaningGibbous),
    (0.8125, PhaseKind::ThirdQuarter),
    (0.9375, PhaseKind::WaningCrescent),
];

pub fn reference_new_moon() -> NaiveDate {
    let (year, month, day) = REFERENCE_NEW_MOON_YMD;
    NaiveDate::from_ymd_opt(year, month, day).expect("reference new moon is a valid date")
}

pub fn days_since_reference(config: &LunarConfig, date: NaiveDate) -> f64 {
    date.signed_duration_since(config.reference_new_moon).num_days() as f64
}

/// Normalized position within the cycle for a day offset from a known new moon.
/// Always in [0, 1) for a positive finite cycle length, including negative offsets.
pub fn phase_fraction(days: f64, synodic_month_days: f64) -> f64 {
    let phase = days.rem_euclid(synodic_month_days) / synodic_month_days;
    // rem_euclid may round up to the divisor itself
    if phase >= 1.0 {
        0.0
    } else {
        phase
    }
}

pub fn illumination(phase: f64) -> u8 {
    let lit = 50.0 * (1.0 - (2.0 * std::f64::consts::PI * phase).cos());
    lit.round().clamp(0.0, 100.0) as u8
}

pub fn classify(phase: f64) -> PhaseKind {
    PHASE_EDGES
        .iter()
        .find(|(edge, _)| phase < *edge)
        .map(|&(_, kind)| kind)
        .unwrap_or(PhaseKind::NewMoon)
}

pub fn phase_details(phase: f64) -> MoonPhase {
    MoonPhase {
        phase,
        kind: classify(phase),
        illumination: illumination(phase),
    }
}

/// Expects a config that passes [`validate_config`]; `Default` and
/// [`LunarConfig::from_toml_str`] always do.
pub fn moon_phase(config: &LunarConfig, date: NaiveDate) -> MoonPhase {
    debug_assert!(
        validate_config(config).is_ok(),
        "invalid synodic_month_days: {}",
        config.synodic_month_days
    );
    let days = days_since_reference(config, date);
    phase_details(phase_fraction(days, config.synodic_month_days))
}

/// Phase for the calendar date `dt` falls on in its own time zone; time of day is ignored.
pub fn moon_phase_at<Tz: TimeZone>(config: &LunarConfig, dt: &DateTime<Tz>) -> MoonPhase {
    moon_phase(config, dt.date_naive())
}

pub fn validate_config(config: &LunarConfig) -> Result<()> {
    let synodic = config.synodic_month_days;
    if !synodic.is_finite() || synodic <= 0.0 {
        return Err(LunarError::InvalidConfig(format!(
            "synodic_month_days must be a positive finite number, got {}",
            synodic
        )));
    }
    Ok(())
}

impl LunarConfig {
    /// Parses a TOML document. Keys left out keep their default values.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: LunarConfig = toml::from_str(source)?;
        validate_config(&config)?;
        tracing::debug!(
            reference = %config.reference_new_moon,
            synodic = config.synodic_month_days,
            week_start = %config.week_start,
            "loaded lunar config"
        );
        Ok(config)
    }
}
