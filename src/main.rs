use anyhow::Result;
use chrono::Local;
use clap::Parser;
use privat::PrivatApi;

mod error;
mod exchange_rates;
mod privat;
mod rates;

/// The archive is only asked for this many days per run, however many were
/// requested.
const MAX_DAYS: i64 = 10;

#[derive(Parser)]
#[command(
    name = "kursy",
    version,
    about = "EUR/USD exchange rates from the PrivatBank archive"
)]
struct Cli {
    /// Number of days of history to fetch, starting from today (at most 10)
    #[arg(allow_negative_numbers = true)]
    days: i64,
}

fn effective_days(requested: i64) -> u32 {
    requested.clamp(0, MAX_DAYS) as u32
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args = Cli::parse();
    let api = PrivatApi::new();

    let report =
        rates::collect(&api, Local::now().date_naive(), effective_days(args.days)).await?;

    for entry in &report {
        println!("{}", serde_json::to_string(entry)?);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::effective_days;

    #[test]
    fn effective_days_clamps_both_ends() {
        assert_eq!(effective_days(-3), 0);
        assert_eq!(effective_days(0), 0);
        assert_eq!(effective_days(7), 7);
        assert_eq!(effective_days(10), 10);
        assert_eq!(effective_days(15), 10);
    }
}
