//! Host entry point: wires the irrigation loop to the system clock and
//! the logging sink, then polls forever.

use std::thread;
use std::time::Duration;

use anyhow::Context;
use log::info;

use agrisense::adapters::{LogEventSink, MemoryStore, SystemClock};
use agrisense::alerts::AlertKind;
use agrisense::app::ports::Clock;
use agrisense::app::service::IrrigationService;
use agrisense::crop::{days_since_start, fertilizer_due, percent_complete, stage_for_day};
use agrisense::profile::Session;
use agrisense::{SystemConfig, TickDriver};

/// How often the main loop wakes to check driver deadlines.
const POLL_INTERVAL_MS: u64 = 250;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SystemConfig::default();
    config
        .validate()
        .map_err(agrisense::Error::Config)
        .context("invalid default configuration")?;

    let mut storage = MemoryStore::new();
    let mut session = Session::load_or_default(&storage);
    if !session.is_logged_in() {
        session.login(&mut storage, "rajesh@farm.com", "demo")?;
    }

    let clock = SystemClock;
    let crop_start_ms = session.profile().crop_start_ms;
    let season_days = u32::from(config.crop_season_days);
    let day = days_since_start(crop_start_ms, clock.now_ms());
    info!(
        "{} growing {} in {}: day {}, {} ({}% of season)",
        session.profile().name,
        session.profile().crop,
        session.profile().farm_location,
        day,
        stage_for_day(day),
        percent_complete(day, season_days),
    );

    let service = IrrigationService::new(config);
    let mut driver = TickDriver::new(service, clock);
    let mut sink = LogEventSink::new();
    driver.start(&mut sink);

    let mut last_day = day;
    loop {
        driver.poll(&mut sink);

        // Fertilizer reminders land on day rollover.
        let today = days_since_start(crop_start_ms, clock.now_ms());
        if today != last_day {
            last_day = today;
            info!(
                "season day {}: {} ({}%)",
                today,
                stage_for_day(today),
                percent_complete(today, season_days)
            );
            if fertilizer_due(today) {
                driver.service_mut().alerts_mut().raise(
                    AlertKind::Fertilizer,
                    "NPK top dressing due this week.",
                    clock.now_ms(),
                );
            }
        }

        thread::sleep(Duration::from_millis(POLL_INTERVAL_MS));
    }
}
