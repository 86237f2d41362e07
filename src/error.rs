use thiserror::Error;

#[derive(Error, Debug)]
pub enum LunarError {
    #[error("Day count must not be negative: {0}")]
    NegativeDayCount(i64),

    #[error("Month out of range (expected 1..=12): {0}")]
    InvalidMonth(u32),

    #[error("Year out of supported calendar range: {0}")]
    InvalidYear(i32),

    #[error("Date arithmetic left the supported calendar range")]
    DateOutOfRange,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, LunarError>;
