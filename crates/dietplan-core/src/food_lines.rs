//! Free-text food list parsing
//!
//! Each input line has the shape `item: quantity`. The line is split on the
//! first colon only, both halves are trimmed, and a missing or blank quantity
//! becomes [`DEFAULT_QUANTITY`]. Blank lines are kept as entries with an empty
//! item; the backend decides what to do with them.

use crate::types::FoodLine;

/// Quantity used when a line does not specify one
pub const DEFAULT_QUANTITY: &str = "1 unit";

/// Parse a single `item: quantity` line
pub fn parse_food_line(line: &str) -> FoodLine {
    let (item, quantity) = match line.split_once(':') {
        Some((item, quantity)) => (item, quantity.trim()),
        None => (line, ""),
    };

    let quantity = if quantity.is_empty() {
        DEFAULT_QUANTITY
    } else {
        quantity
    };

    FoodLine::new(item.trim(), quantity)
}

/// Parse multi-line input into one [`FoodLine`] per line
///
/// Lines are separated by `\n`; a trailing `\r` is removed by trimming.
pub fn parse_food_lines(text: &str) -> Vec<FoodLine> {
    text.split('\n').map(parse_food_line).collect()
}
