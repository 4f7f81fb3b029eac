use anyhow::Result;
use clap::Parser;

use price_zones::analysis::{format_gain, format_rupiah};
use price_zones::{Cli, ZoneReport, ZoneRequest};

fn main() -> Result<()> {
    // A. Init Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Load and evaluate
    let request = ZoneRequest::load_from_path(&args.input)?;
    log::info!(
        "Loaded {:?}: {} daily samples, recommendation {}",
        args.input,
        request.daily.len(),
        request.recommendation
    );
    let mut report = request.evaluate();
    if args.snap_ticks {
        report = report.snapped_to_ticks();
    }

    if !report.diagnostics.has_sell_data() {
        log::warn!(
            "⚠️  No valid shark sell averages in {:?}; sell zone and target are 0",
            args.input
        );
    }

    // D. Output
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report);
    }
    Ok(())
}

fn print_summary(report: &ZoneReport) {
    let zones = &report.zones;
    println!("Recommendation: {}", report.recommendation);
    println!("  Buy zone:     {}", format_rupiah(zones.buy_zone));
    println!(
        "  Target price: {} ({})",
        format_rupiah(zones.target_price),
        format_gain(zones.potential_gain_pct())
    );
    println!("  Sell zone:    {}", format_rupiah(zones.sell_zone));
    println!("  Stop loss:    {}", format_rupiah(zones.stop_loss));
    if let (Some(low), Some(high)) = (report.diagnostics.min_price, report.diagnostics.max_price) {
        println!("  Shark range:  {} - {}", format_rupiah(low), format_rupiah(high));
    }
    println!();
    println!("{}", report.advice);
}
