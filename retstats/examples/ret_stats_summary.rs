use retstats::{
    calculator::ReturnStatsCalculator,
    config::RetStatsConfig,
    error::RetStatsError,
    logging::init_logging_from_config,
    table::Observations,
    test_utils::{daily_index, gaussian_samples, price_walk, time_start},
};
use tracing::info;

const CONFIG: &str = r#"{ "annualisation": "annual_252", "log_format": "text" }"#;

// 三年日度数据，三个资产
const ROWS: usize = 366 + 365 + 365;

fn main() -> Result<(), RetStatsError> {
    let config = RetStatsConfig::from_json_str(CONFIG)?;
    init_logging_from_config(&config);

    let assets = [
        ("Equity", 0.0004, 0.012),
        ("Bonds", 0.0001, 0.003),
        ("Crypto", 0.0010, 0.045),
    ];

    let columns = assets
        .iter()
        .enumerate()
        .map(|(seed, (name, mean, std))| {
            let returns = gaussian_samples(seed as u64, ROWS - 1, *mean, *std);
            (*name, price_walk(100.0, &returns))
        });

    let prices = Observations::new(daily_index(time_start(), ROWS), columns)?;

    let mut calculator = ReturnStatsCalculator::new();
    let stats = calculator.compute_from_prices(&prices, config.annualisation)?;

    stats.print_summary();

    for line in calculator.summary()? {
        info!(%line, "ReturnStats summary");
    }

    for (name, yoy) in calculator.yoy_rets()? {
        for annual in yoy {
            info!(column = %name, year = annual.year, yoy = annual.value, "year on year return");
        }
    }

    Ok(())
}
