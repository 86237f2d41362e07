use chrono::Local;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use moon_luck::calendar::{monthly_outlook, seven_day_forecast, MonthCursor};
use moon_luck::format::{format_long, format_short};
use moon_luck::phase::moon_phase;
use moon_luck::types::{AssetTable, CalendarCell, LunarConfig};

fn main() -> moon_luck::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "moon_luck=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = LunarConfig::default();
    let assets = AssetTable::default();
    let today = Local::now().date_naive();

    let tonight = moon_phase(&config, today);
    println!("=== Tonight's Moon ===");
    println!("{}", format_long(today));
    println!("{} {}", tonight.emoji(), tonight.name());
    println!("Illumination: {}%", tonight.illumination);
    println!("Cycle position: {:.3}", tonight.phase);
    println!("Image: {}", assets.image_ref(&tonight));
    println!("Luck: {}", tonight.kind.luck());
    println!();

    println!("--- Next 7 Days ---");
    for entry in seven_day_forecast(&config, today)? {
        println!(
            "{:<12} {} {:<16} {:>3}%",
            format_short(entry.date),
            entry.moon_phase.emoji(),
            entry.moon_phase.name(),
            entry.moon_phase.illumination
        );
    }
    println!();

    println!("--- Next 30 Days: Full Moons ---");
    for day in monthly_outlook(&config, today)?
        .iter()
        .filter(|d| d.moon_phase.illumination >= 99)
    {
        println!("{}: {}", format_short(day.date), day.luck);
    }
    println!();

    let cursor = MonthCursor::from_date(today);
    let grid = cursor.grid(&config)?;
    println!("--- {} ---", cursor.title());
    println!(" Sun  Mon  Tue  Wed  Thu  Fri  Sat");
    for week in grid.weeks() {
        let row: Vec<String> = week
            .iter()
            .map(|cell| match cell {
                CalendarCell::InMonth { date, moon_phase, .. } => {
                    format!("{:>2}{} ", date.format("%-d"), moon_phase.emoji())
                }
                CalendarCell::Padding { .. } => "  .  ".to_string(),
            })
            .collect();
        println!("{}", row.join(""));
    }

    Ok(())
}
