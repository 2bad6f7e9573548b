use napi::Result as NapiResult;
use napi_derive::napi;

use emi_core::types::LoanInput;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Parse the three loan parameters out of a JSON string.
fn parse_loan(input_json: &str) -> NapiResult<LoanInput> {
    serde_json::from_str(input_json).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Core contract: payment, schedule, formatting
// ---------------------------------------------------------------------------

#[napi]
pub fn monthly_payment(input_json: String) -> NapiResult<String> {
    let input = parse_loan(&input_json)?;
    let payment = emi_core::loan::monthly_payment(&input).map_err(to_napi_error)?;
    serde_json::to_string(&payment).map_err(to_napi_error)
}

#[napi]
pub fn payment_summary(input_json: String) -> NapiResult<String> {
    let input = parse_loan(&input_json)?;
    let summary = emi_core::loan::payment_summary(&input).map_err(to_napi_error)?;
    serde_json::to_string(&summary).map_err(to_napi_error)
}

#[napi]
pub fn amortization_schedule(
    input_json: String,
    start_date: Option<String>,
) -> NapiResult<String> {
    let input = parse_loan(&input_json)?;
    let start = match start_date {
        Some(s) => Some(s.parse::<chrono::NaiveDate>().map_err(to_napi_error)?),
        None => None,
    };
    let schedule =
        emi_core::schedule::generate_schedule(&input, start).map_err(to_napi_error)?;
    serde_json::to_string(&schedule).map_err(to_napi_error)
}

#[napi]
pub fn format_inr(amount: String) -> NapiResult<String> {
    let amount: rust_decimal::Decimal = amount.parse().map_err(to_napi_error)?;
    Ok(emi_core::format::format_inr(amount))
}
