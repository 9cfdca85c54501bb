mod error;
mod key;
mod merge;
mod parser;
mod pipeline;
mod settings;
mod store;

use std::time::Instant;

use settings::Settings;
use tracing::info;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let t0 = Instant::now();
    let settings = Settings::load()?;
    info!(
        workshops_dir = %settings.workshops_dir.display(),
        store = %settings.store_path.display(),
        "Starting workshop sync"
    );

    let stats = pipeline::run(&settings)?;
    stats.print();

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("Done in {}", format_duration(elapsed));
    }
    Ok(())
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}
