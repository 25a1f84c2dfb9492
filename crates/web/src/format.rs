//! Display formatting for product fields.

use jiff::Timestamp;
use rust_decimal::{Decimal, RoundingStrategy};

/// Dollar amount with exactly two decimal places, e.g. `$1.50`.
pub fn format_price(price: Decimal) -> String {
    let rounded = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    format!("${rounded:.2}")
}

/// Calendar date of the timestamp in UTC, as `dd/mm/YYYY`.
pub fn format_created_date(created_at: Timestamp) -> String {
    created_at.strftime("%d/%m/%Y").to_string()
}
