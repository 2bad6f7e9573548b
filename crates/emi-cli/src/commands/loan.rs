use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use emi_core::loan::{self, PaymentSummary};
use emi_core::schedule::{self, ScheduleEntry};
use emi_core::types::LoanInput;

use crate::input;
use crate::limits;
use crate::view::ScheduleView;

/// The three loan parameters, shared by every subcommand.
#[derive(Args)]
pub struct LoanArgs {
    /// Loan principal in rupees
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual interest rate in percent (e.g. 7.5)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Tenure in years
    #[arg(long)]
    pub years: Option<u32>,

    /// Clamp inputs into the form's documented ranges
    #[arg(long)]
    pub clamp: bool,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for the payment summary
#[derive(Args)]
pub struct PaymentArgs {
    #[command(flatten)]
    pub loan: LoanArgs,
}

/// Arguments for the amortization schedule
#[derive(Args)]
pub struct ScheduleArgs {
    #[command(flatten)]
    pub loan: LoanArgs,

    /// First payment month (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    /// Expand the panel for a specific year (repeatable)
    #[arg(long = "expand")]
    pub expand: Vec<i32>,

    /// Expand every year panel and show all years
    #[arg(long)]
    pub expand_all: bool,

    /// Press "show more" this many times (four more years each press)
    #[arg(long, default_value = "0")]
    pub more: u32,
}

/// The schedule as the shell displays it: one panel per calendar year,
/// with the view state baked in for the renderer.
#[derive(Serialize)]
struct ScheduleDisplay {
    start: NaiveDate,
    summary: PaymentSummary,
    total_years: usize,
    visible_years: usize,
    years: Vec<YearPanel>,
}

#[derive(Serialize)]
struct YearPanel {
    year: i32,
    months: usize,
    expanded: bool,
    entries: Vec<ScheduleEntry>,
}

pub fn run_payment(args: PaymentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan_input = resolve_loan(&args.loan)?;
    let summary = loan::payment_summary(&loan_input)?;
    Ok(serde_json::to_value(summary)?)
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan_input = resolve_loan(&args.loan)?;
    let summary = loan::payment_summary(&loan_input)?;
    let schedule = schedule::generate_schedule(&loan_input, args.start_date)?;

    let years: Vec<i32> = schedule.years.keys().copied().collect();
    let mut view = ScheduleView::new();
    if args.expand_all {
        view.reveal_all(&years);
    }
    for year in &args.expand {
        view.toggle_year(*year);
    }
    for _ in 0..args.more {
        view.show_more(years.len());
    }

    let panels: Vec<YearPanel> = schedule
        .years
        .iter()
        .map(|(year, entries)| YearPanel {
            year: *year,
            months: entries.len(),
            expanded: view.is_open(*year),
            entries: entries.clone(),
        })
        .collect();

    let display = ScheduleDisplay {
        start: schedule.start,
        summary,
        total_years: years.len(),
        visible_years: view.visible_count().min(years.len()),
        years: panels,
    };
    Ok(serde_json::to_value(display)?)
}

/// Loan parameters come from a JSON file, piped JSON, or individual flags,
/// in that order of precedence.
fn resolve_loan(args: &LoanArgs) -> Result<LoanInput, Box<dyn std::error::Error>> {
    let loan_input: LoanInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(piped) = input::stdin::read_stdin()? {
        piped
    } else {
        LoanInput {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            annual_rate_pct: args.rate.ok_or("--rate is required (or provide --input)")?,
            term_years: args.years.ok_or("--years is required (or provide --input)")?,
        }
    };

    if args.clamp {
        Ok(limits::clamp(&loan_input))
    } else {
        Ok(loan_input)
    }
}
