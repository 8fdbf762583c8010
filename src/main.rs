use anyhow::Result;
use chrono::Local;

use sunnyside_engine as engine;
use sunnyside_session::{Phase, Session, SessionConfig};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let session = Session::new(SessionConfig::default())?;
    session.start().await;

    let snapshot = session.snapshot();
    tracing::info!(phase = ?snapshot.phase, "session started");
    println!("☀️ Sunny Side — {}", snapshot.location.display_name);

    if snapshot.phase != Phase::Ready {
        if let Some(message) = snapshot.last_error {
            println!("{message}");
        }
        return Ok(());
    }

    let Some(forecast) = snapshot.forecast else {
        return Ok(());
    };
    let unit = snapshot.unit;

    if let Some(today) = forecast.today() {
        let descriptor = engine::describe(today.code);
        let temp = engine::reframe::temperature(today.high, unit);
        let uv = engine::reframe::uv(today.uv_max);
        println!("\n\"{}\"", descriptor.optimistic);
        println!("{} {}", temp.emoji, temp.comment);
        println!("💨 {}", engine::reframe::wind(today.wind_max));
        println!("🔆 {}", uv.text);
        println!(
            "✨ {}",
            engine::reframe::affirmation(today.precip_chance, today.code)
        );
    }

    println!("\nNext hours:");
    for hour in forecast
        .upcoming_hours(Local::now().naive_local())
        .iter()
        .take(6)
    {
        println!(
            "  {}  {}  {:>3.0}{}",
            hour.time.format("%H:%M"),
            engine::reframe::display_icon(hour.precip_chance, hour.code),
            hour.temperature,
            unit.symbol(),
        );
    }

    println!("\n10-day optimistic forecast:");
    let today_date = Local::now().date_naive();
    for day in &forecast.daily {
        let precip = engine::reframe::precipitation(day.precip_chance, day.code);
        println!(
            "  {:<9} {}  {:>3.0}{} / {:>3.0}{}  {} {}",
            engine::dates::day_name(day.date, today_date),
            engine::reframe::display_icon(day.precip_chance, day.code),
            day.high,
            unit.symbol(),
            day.low,
            unit.symbol(),
            precip.emoji,
            precip.text,
        );
    }

    println!("\nPowered by Open-Meteo · Always looking on the bright side ☀️");
    Ok(())
}
