// Holiday Countdown
// Main entry point

use std::path::PathBuf;
use std::time::Duration as StdDuration;

use anyhow::{bail, Context, Result};
use chrono::Local;
use holiday_countdown::services::render::{MemoryPage, RenderOutcome};
use holiday_countdown::services::scheduler::{CountdownWidget, PageEvent};
use holiday_countdown::services::settings::SettingsService;

const USAGE: &str = "Usage: holiday-countdown [--config PATH] [--json] [--watch]";

#[derive(Debug, Default, PartialEq)]
struct CliOptions {
    config: Option<PathBuf>,
    json: bool,
    watch: bool,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<CliOptions> {
    let mut options = CliOptions::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = args.next().context("--config needs a path")?;
                options.config = Some(PathBuf::from(path));
            }
            "--json" => options.json = true,
            "--watch" | "-w" => options.watch = true,
            other => bail!("Unknown argument '{}'\n{}", other, USAGE),
        }
    }
    Ok(options)
}

fn format_outcome(outcome: &RenderOutcome, json: bool) -> Result<String> {
    if json {
        return serde_json::to_string_pretty(outcome).context("Failed to serialize render outcome");
    }

    let snapshot = match outcome {
        RenderOutcome::Rendered(snapshot) => snapshot,
        RenderOutcome::Skipped { missing } => {
            return Ok(format!("(not rendered, missing targets: {})", missing.join(", ")));
        }
    };

    let mut lines = vec![format!(
        "{}  {}  {}",
        snapshot.holiday_name, snapshot.holiday_date, snapshot.days_until
    )];
    for period in &snapshot.periods {
        lines.push(format!(
            "{}  {:>6.2}%  {}{}",
            period.label, period.progress.percentage, period.progress.remaining, period.unit
        ));
    }
    Ok(lines.join("\n"))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let options = parse_args(std::env::args().skip(1))?;
    let settings_path = options
        .config
        .clone()
        .unwrap_or_else(SettingsService::default_path);
    let settings = SettingsService::new(settings_path)
        .load()
        .context("Failed to load settings")?;

    log::info!("Starting Holiday Countdown");

    let mut page = MemoryPage::with_targets(settings.targets.all());
    let mut widget = CountdownWidget::new(settings);
    widget.handle_event(&mut page, PageEvent::ContentLoaded, Local::now().naive_local());

    if let Some(outcome) = widget.last_outcome() {
        println!("{}", format_outcome(outcome, options.json)?);
    }

    if !options.watch {
        return Ok(());
    }

    loop {
        let wait = widget
            .next_due_in(Local::now().naive_local())
            .unwrap_or_else(|| StdDuration::from_secs(60));

        tokio::select! {
            _ = tokio::time::sleep(wait) => {
                if let Some(outcome) = widget.tick(&mut page, Local::now().naive_local()) {
                    println!("{}", format_outcome(&outcome, options.json)?);
                }
            }
            signal = tokio::signal::ctrl_c() => {
                signal.context("Failed to listen for Ctrl-C")?;
                widget.handle_event(&mut page, PageEvent::NavigationBegin, Local::now().naive_local());
                break;
            }
        }
    }

    Ok(())
}
