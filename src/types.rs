use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// The eight display classifications of the lunar cycle, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseKind {
    #[serde(rename = "New Moon")]
    NewMoon,
    #[serde(rename = "Waxing Crescent")]
    WaxingCrescent,
    #[serde(rename = "First Quarter")]
    FirstQuarter,
    #[serde(rename = "Waxing Gibbous")]
    WaxingGibbous,
    #[serde(rename = "Full Moon")]
    FullMoon,
    #[serde(rename = "Waning Gibbous")]
    WaningGibbous,
    #[serde(rename = "Third Quarter")]
    ThirdQuarter,
    #[serde(rename = "Waning Crescent")]
    WaningCrescent,
}

impl PhaseKind {
    pub const ALL: [PhaseKind; 8] = [
        PhaseKind::NewMoon,
        PhaseKind::WaxingCrescent,
        PhaseKind::FirstQuarter,
        PhaseKind::WaxingGibbous,
        PhaseKind::FullMoon,
        PhaseKind::WaningGibbous,
        PhaseKind::ThirdQuarter,
        PhaseKind::WaningCrescent,
    ];

    /// Position of this phase in [`PhaseKind::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            PhaseKind::NewMoon => "New Moon",
            PhaseKind::WaxingCrescent => "Waxing Crescent",
            PhaseKind::FirstQuarter => "First Quarter",
            PhaseKind::WaxingGibbous => "Waxing Gibbous",
            PhaseKind::FullMoon => "Full Moon",
            PhaseKind::WaningGibbous => "Waning Gibbous",
            PhaseKind::ThirdQuarter => "Third Quarter",
            PhaseKind::WaningCrescent => "Waning Crescent",
        }
    }

    /// Stable asset key, resolved to a concrete path by an [`AssetTable`].
    pub fn image_key(self) -> &'static str {
        match self {
            PhaseKind::NewMoon => "moon-new",
            PhaseKind::WaxingCrescent => "moon-waxing-crescent",
            PhaseKind::FirstQuarter => "moon-first-quarter",
            PhaseKind::WaxingGibbous => "moon-waxing-gibbous",
            PhaseKind::FullMoon => "moon-full",
            PhaseKind::WaningGibbous => "moon-waning-gibbous",
            PhaseKind::ThirdQuarter => "moon-third-quarter",
            PhaseKind::WaningCrescent => "moon-waning-crescent",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            PhaseKind::NewMoon => "\u{1F311}",
            PhaseKind::WaxingCrescent => "\u{1F312}",
            PhaseKind::FirstQuarter => "\u{1F313}",
            PhaseKind::WaxingGibbous => "\u{1F314}",
            PhaseKind::FullMoon => "\u{1F315}",
            PhaseKind::WaningGibbous => "\u{1F316}",
            PhaseKind::ThirdQuarter => "\u{1F317}",
            PhaseKind::WaningCrescent => "\u{1F318}",
        }
    }

    /// Looks up a phase by its exact display name.
    pub fn from_name(name: &str) -> Option<PhaseKind> {
        PhaseKind::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl std::fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoonPhase {
    /// Position within the synodic cycle, in [0, 1).
    pub phase: f64,
    pub kind: PhaseKind,
    /// Percent of the visible disk lit, in [0, 100].
    pub illumination: u8,
}

impl MoonPhase {
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn image_key(&self) -> &'static str {
        self.kind.image_key()
    }

    pub fn emoji(&self) -> &'static str {
        self.kind.emoji()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ForecastEntry {
    pub date: NaiveDate,
    pub moon_phase: MoonPhase,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LuckyDay {
    pub date: NaiveDate,
    pub moon_phase: MoonPhase,
    pub luck: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CalendarCell {
    InMonth {
        date: NaiveDate,
        moon_phase: MoonPhase,
        luck: &'static str,
    },
    Padding {
        date: NaiveDate,
    },
}

impl CalendarCell {
    pub fn date(&self) -> NaiveDate {
        match self {
            CalendarCell::InMonth { date, .. } | CalendarCell::Padding { date } => *date,
        }
    }

    pub fn moon_phase(&self) -> Option<&MoonPhase> {
        match self {
            CalendarCell::InMonth { moon_phase, .. } => Some(moon_phase),
            CalendarCell::Padding { .. } => None,
        }
    }

    pub fn luck(&self) -> Option<&'static str> {
        match self {
            CalendarCell::InMonth { luck, .. } => Some(luck),
            CalendarCell::Padding { .. } => None,
        }
    }

    pub fn is_padding(&self) -> bool {
        matches!(self, CalendarCell::Padding { .. })
    }
}

/// A six-week calendar page. Always holds exactly [`crate::calendar::GRID_CELLS`] cells.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthGrid {
    year: i32,
    month: u32,
    cells: Vec<CalendarCell>,
}

impl MonthGrid {
    pub(crate) fn new(year: i32, month: u32, cells: Vec<CalendarCell>) -> Self {
        Self { year, month, cells }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// 1-based month (1 = January).
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn cells(&self) -> &[CalendarCell] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<CalendarCell> {
        self.cells
    }

    /// Rows of seven cells, first row starting on the configured week start.
    pub fn weeks(&self) -> std::slice::Chunks<'_, CalendarCell> {
        self.cells.chunks(crate::calendar::DAYS_PER_WEEK)
    }

    pub fn in_month(&self) -> impl Iterator<Item = &CalendarCell> {
        self.cells.iter().filter(|cell| !cell.is_padding())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LunarConfig {
    pub reference_new_moon: NaiveDate,
    pub synodic_month_days: f64,
    pub week_start: Weekday,
}

impl Default for LunarConfig {
    fn default() -> Self {
        Self {
            reference_new_moon: crate::phase::reference_new_moon(),
            synodic_month_days: crate::phase::SYNODIC_MONTH_DAYS,
            week_start: Weekday::Sun,
        }
    }
}

/// Maps each phase to the asset path a presentation layer should display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetTable {
    paths: [String; 8],
}

impl AssetTable {
    /// Builds `<prefix>/<image key>.png` for every phase.
    pub fn with_prefix(prefix: &str) -> Self {
        let prefix = prefix.trim_end_matches('/');
        Self {
            paths: PhaseKind::ALL.map(|kind| format!("{}/{}.png", prefix, kind.image_key())),
        }
    }

    pub fn from_fn<F: FnMut(PhaseKind) -> String>(f: F) -> Self {
        Self {
            paths: PhaseKind::ALL.map(f),
        }
    }

    pub fn path(&self, kind: PhaseKind) -> &str {
        &self.paths[kind.index()]
    }

    pub fn image_ref(&self, moon_phase: &MoonPhase) -> &str {
        self.path(moon_phase.kind)
    }
}

impl Default for AssetTable {
    fn default() -> Self {
        Self::with_prefix("/images")
    }
}
