//! Compound Projection CLI
//!
//! Command-line front end for single projections and scenario batches

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use compound_projection::{
    config::DisplayConfig,
    export::{write_batch_csv, write_results_csv, write_summary_json},
    simulation::{coerce_number, coerce_period, load_scenarios},
    Calculator, PeriodType, RateType, ScenarioRunner, SimulationInputs, SimulationResult,
};
use log::info;
use std::convert::Infallible;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "compound_projection", version, about = "Compound interest projection with monthly contributions")]
struct Cli {
    /// Display configuration (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Project a single set of inputs
    Simulate(SimulateArgs),
    /// Run every scenario in a CSV file
    Batch(BatchArgs),
}

#[derive(Args, Debug)]
struct SimulateArgs {
    /// Initial capital
    #[arg(long, default_value = "1000", value_parser = amount, allow_hyphen_values = true)]
    initial: f64,

    /// Contribution added each month (negative for withdrawals)
    #[arg(long, default_value = "500", value_parser = amount, allow_hyphen_values = true)]
    monthly: f64,

    /// Interest rate in percent
    #[arg(long, default_value = "12", value_parser = amount)]
    rate: f64,

    /// Basis of the rate: monthly or yearly
    #[arg(long, default_value = "yearly")]
    rate_type: RateType,

    /// Duration magnitude (fractions truncate)
    #[arg(long, default_value = "10", value_parser = period)]
    period: u32,

    /// Basis of the duration: monthly or yearly
    #[arg(long, default_value = "yearly")]
    period_type: PeriodType,

    /// Print every month
    #[arg(long)]
    table: bool,

    /// Print the downsampled chart series
    #[arg(long)]
    chart: bool,

    /// Write all rows to a CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write the summary to a JSON file
    #[arg(long)]
    json: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct BatchArgs {
    /// Scenario CSV (name,initial_value,monthly_value,interest_rate,period,rate_type,period_type)
    #[arg(short, long)]
    input: PathBuf,

    /// Write headline totals per scenario to a CSV file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn amount(text: &str) -> std::result::Result<f64, Infallible> {
    Ok(coerce_number(text))
}

fn period(text: &str) -> std::result::Result<u32, Infallible> {
    Ok(coerce_period(text))
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => DisplayConfig::from_json_path(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => DisplayConfig::default(),
    };

    match cli.command {
        Command::Simulate(args) => simulate(args, &config),
        Command::Batch(args) => batch(args, &config),
    }
}

fn simulate(args: SimulateArgs, config: &DisplayConfig) -> Result<()> {
    let inputs = SimulationInputs::new(
        args.initial,
        args.monthly,
        args.rate,
        args.rate_type,
        args.period,
        args.period_type,
    );
    let fmt = &config.currency;

    let mut calculator = Calculator::new(inputs);
    let summary = calculator.calculate().clone();

    println!("Projection: {} months at {} per month", inputs.total_months(), fmt.format_rate(inputs.monthly_rate()));
    println!("  Total amount:   {}", fmt.format(summary.total_amount));
    println!("  Total invested: {}", fmt.format(summary.total_invested));
    println!("  Total interest: {}", fmt.format(summary.total_interest));

    if args.chart {
        let points = calculator.chart_points(config.max_chart_points);
        println!("\nChart ({} of {} months):", points.len(), summary.results.len());
        print_chart(&points, config);
    }

    if args.table {
        println!();
        print_table(calculator.table_rows(), config);
    }

    if let Some(path) = &args.csv {
        let file = File::create(path).with_context(|| format!("Unable to create {}", path.display()))?;
        write_results_csv(BufWriter::new(file), &summary.results)?;
        info!("wrote {} rows to {}", summary.results.len(), path.display());
        println!("\nFull results written to: {}", path.display());
    }

    if let Some(path) = &args.json {
        let file = File::create(path).with_context(|| format!("Unable to create {}", path.display()))?;
        write_summary_json(BufWriter::new(file), &summary)?;
        println!("Summary written to: {}", path.display());
    }

    Ok(())
}

fn batch(args: BatchArgs, config: &DisplayConfig) -> Result<()> {
    let scenarios = load_scenarios(&args.input)
        .with_context(|| format!("Failed to load scenarios from {}", args.input.display()))?;
    let fmt = &config.currency;

    let runner = ScenarioRunner::new();
    let results = runner.run_scenarios(&scenarios);
    let comparison = ScenarioRunner::compare_results(&scenarios, &results);

    println!("{:<20} {:>6} {:>10} {:>20} {:>20} {:>20} {:>10}",
        "Scenario", "Months", "Rate/mo", "Invested", "Interest", "Total", "Interest%");
    println!("{}", "-".repeat(112));
    for row in &comparison {
        println!("{:<20} {:>6} {:>10} {:>20} {:>20} {:>20} {:>10}",
            row.name,
            row.total_months,
            fmt.format_rate(row.monthly_rate),
            fmt.format(row.total_invested),
            fmt.format(row.total_interest),
            fmt.format(row.total_amount),
            fmt.format_rate(row.interest_share),
        );
    }

    if let Some(path) = &args.output {
        let file = File::create(path).with_context(|| format!("Unable to create {}", path.display()))?;
        write_batch_csv(BufWriter::new(file), &results)?;
        println!("\nBatch results written to: {}", path.display());
    }

    Ok(())
}

fn print_table(rows: &[SimulationResult], config: &DisplayConfig) {
    let fmt = &config.currency;
    println!("{:>6} {:>18} {:>20} {:>20} {:>20}", "Month", "Interest", "Invested", "Interest (acc)", "Total");
    println!("{}", "-".repeat(88));
    for row in rows {
        println!("{:>6} {:>18} {:>20} {:>20} {:>20}",
            row.month,
            format!("+{}", fmt.format(row.interest)),
            fmt.format(row.total_invested),
            fmt.format(row.total_interest),
            fmt.format(row.total_amount),
        );
    }
}

fn print_chart(points: &[SimulationResult], config: &DisplayConfig) {
    const WIDTH: f64 = 50.0;
    let fmt = &config.currency;
    let peak = points
        .iter()
        .map(|p| p.total_amount.abs().max(p.total_invested.abs()))
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);

    for point in points {
        let bar = if peak > 0.0 && point.total_amount.is_finite() {
            ((point.total_amount.abs() / peak) * WIDTH).round() as usize
        } else {
            0
        };
        println!("{:>6} {:>10} {}", point.month, fmt.format_compact(point.total_amount), "#".repeat(bar));
    }
}
