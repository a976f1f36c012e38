//! Price formatting.

use serde::{Deserialize, Serialize};

/// Upper bound on `fraction_digits`; more would overflow the integer scaling.
const MAX_FRACTION_DIGITS: u32 = 6;

/// How amounts are rendered on cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PriceFormat {
    pub symbol: String,
    pub thousands_separator: String,
    pub decimal_separator: String,
    pub fraction_digits: u32,
    /// Put a space between the symbol and the amount.
    pub symbol_spacing: bool,
}

impl PriceFormat {
    /// Argentine pesos, no decimals: `12500` renders as `$ 12.500`.
    pub fn ars() -> Self {
        Self {
            symbol: "$".to_string(),
            thousands_separator: ".".to_string(),
            decimal_separator: ",".to_string(),
            fraction_digits: 0,
            symbol_spacing: true,
        }
    }

    /// Render `amount`, rounding half away from zero.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn format(&self, amount: f64) -> String {
        let digits = self.fraction_digits.min(MAX_FRACTION_DIGITS);
        let scale = 10_u64.pow(digits);
        let scaled = (amount.abs() * scale as f64).round() as u64;
        let integer = scaled / scale;
        let fraction = scaled % scale;

        let mut out = String::new();
        if amount < 0.0 && scaled != 0 {
            out.push('-');
        }
        out.push_str(&self.symbol);
        if self.symbol_spacing && !self.symbol.is_empty() {
            out.push(' ');
        }
        out.push_str(&group_thousands(integer, &self.thousands_separator));
        if digits > 0 {
            out.push_str(&self.decimal_separator);
            out.push_str(&format!("{fraction:0width$}", width = digits as usize));
        }
        out
    }
}

impl Default for PriceFormat {
    fn default() -> Self {
        Self::ars()
    }
}

fn group_thousands(value: u64, separator: &str) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}
