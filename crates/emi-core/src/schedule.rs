//! Amortization schedule generation.
//!
//! Replays a fixed-rate loan month by month and buckets the resulting
//! ledger by calendar year. The schedule is anchored to a start date; when
//! none is given it starts at the current month, so the ledger always reads
//! as beginning "this month".

use std::collections::BTreeMap;

use chrono::{Datelike, Local, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::EmiError;
use crate::loan::monthly_payment;
use crate::types::{LoanInput, Money};
use crate::EmiResult;

/// One month of the ledger. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Short month name, e.g. "Jan".
    pub month: String,
    pub principal_paid: Money,
    pub interest: Money,
    pub payment: Money,
    /// Outstanding balance after this month's payment.
    pub balance: Money,
}

/// The full ledger, keyed by calendar year in ascending order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    /// First payment month.
    pub start: NaiveDate,
    pub years: BTreeMap<i32, Vec<ScheduleEntry>>,
}

impl AmortizationSchedule {
    /// Total number of monthly entries across all years.
    pub fn entry_count(&self) -> usize {
        self.years.values().map(Vec::len).sum()
    }

    /// Number of distinct calendar years the ledger spans.
    pub fn year_count(&self) -> usize {
        self.years.len()
    }

    /// Balance remaining after the final payment.
    pub fn final_balance(&self) -> Option<Money> {
        self.years
            .values()
            .next_back()
            .and_then(|entries| entries.last())
            .map(|entry| entry.balance)
    }

    /// Entries in chronological order, with their calendar year.
    pub fn iter_months(&self) -> impl Iterator<Item = (i32, &ScheduleEntry)> {
        self.years
            .iter()
            .flat_map(|(year, entries)| entries.iter().map(move |e| (*year, e)))
    }
}

/// Replay the loan month by month from `start` (today's month when `None`).
///
/// Each month accrues `balance * monthly_rate` of interest; the rest of the
/// fixed payment retires principal. Residual balance after the final payment
/// is left as-is rather than reconciled to exactly zero.
pub fn generate_schedule(
    input: &LoanInput,
    start: Option<NaiveDate>,
) -> EmiResult<AmortizationSchedule> {
    let payment = monthly_payment(input)?;
    let rate = input.monthly_rate();
    let start = start.unwrap_or_else(|| Local::now().date_naive());

    let mut years: BTreeMap<i32, Vec<ScheduleEntry>> = BTreeMap::new();
    let mut balance = input.principal;

    for i in 0..input.months() {
        let interest = balance * rate;
        let principal_paid = payment - interest;
        balance -= principal_paid;

        let date = start
            .checked_add_months(Months::new(i))
            .ok_or_else(|| EmiError::DateError(format!("Schedule month {i} out of range")))?;

        years.entry(date.year()).or_default().push(ScheduleEntry {
            month: date.format("%b").to_string(),
            principal_paid,
            interest,
            payment,
            balance,
        });
    }

    Ok(AmortizationSchedule { start, years })
}
