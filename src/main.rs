use std::io::{stderr, stdout, BufWriter, Write};
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use transaction_monitor::{EventBus, FeedSimulator, StateBridge, TransactionStatus, TransactionStore};

#[tokio::main]
async fn main() -> Result<()> {
    //NOTE: Two positional arguments do not warrant pulling in the clap crate.
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|arg| arg == "-h" || arg == "--help") {
        eprintln!("Usage: transaction-monitor [duration_seconds:optional] [log_level:optional]");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        exit(0);
    }

    let duration = args.get(1)
        .map(|s| parse_duration(s)).unwrap_or_else(|| Duration::from_secs(5));
    let log_level = args.get(2)
        .map(|s| parse_log_level(s)).unwrap_or(LevelFilter::ERROR);

    setup_logging(log_level);

    let store = Arc::new(TransactionStore::new());
    let bus = Arc::new(EventBus::new());
    let bridge = StateBridge::new(store.clone(), bus.clone());

    let reconciler = spawn_reconciler(bridge.clone());

    let simulator = FeedSimulator::new(store, bus);
    simulator.connect();

    sleep(duration).await;

    simulator.disconnect();
    reconciler.abort();

    info!("Feed ran for {duration:?}, {} transactions admitted", bridge.transactions().len());

    write_report_to_stdout(&bridge)?;

    Ok(())
}

/// Consumer standing in for the dashboard: completes every pending
/// transaction it sees on the added stream and broadcasts the outcome.
fn spawn_reconciler(bridge: StateBridge) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut added = bridge.on_transaction_added();

        while let Some(tx) = added.recv().await {
            if tx.status != TransactionStatus::Pending {
                continue;
            }

            if bridge.reconcile_transaction(&tx.id, TransactionStatus::Completed) {
                bridge.emit_transaction_updated(tx.id.clone(), TransactionStatus::Completed);
                bridge.emit_transaction_reconciled(tx.id);
            }
        }
    })
}

fn parse_duration(seconds: &str) -> Duration {
    match seconds.parse::<u64>() {
        Ok(secs) => Duration::from_secs(secs),
        Err(_) => {
            eprintln!("Invalid duration '{}', defaulting to 5 seconds", seconds);
            Duration::from_secs(5)
        }
    }
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: The breakdown report goes to stdout, so logging has to stay on stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_report_to_stdout(bridge: &StateBridge) -> Result<()> {
    let summary = bridge.summary_breakdown();
    let mut output = BufWriter::new(stdout().lock());

    writeln!(output, "type,count,volume,percentage")?;

    let buckets = [("ach", &summary.breakdown.ach), ("card", &summary.breakdown.card), ("wire", &summary.breakdown.wire)];

    for (name, bucket) in buckets {
        writeln!(output, "{},{},{},{:.2}", name, bucket.count, bucket.volume, bucket.percentage)?;
    }

    writeln!(output, "total,{},{},{:.2}", summary.total_transactions, summary.total_amount, summary.failure_rate)?;

    output.flush()?;

    Ok(())
}
