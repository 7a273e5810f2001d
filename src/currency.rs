//! Static currency conversion.
//!
//! Rates are expressed relative to [`BASE_CURRENCY`] (rate 1). Every conversion goes through
//! the base: `amount / rate[source] * rate[target]`.

use std::fmt;

use crate::error::{ExplorerError, ExplorerResult};

/// The currency every rate is relative to.
pub const BASE_CURRENCY: &str = "USD";

const DEFAULT_RATES: [(&str, f64); 8] = [
    ("USD", 1.0),
    ("EUR", 0.9),
    ("CAD", 1.4),
    ("GBP", 0.8),
    ("CHF", 0.95),
    ("NZD", 1.66),
    ("AUD", 1.62),
    ("JPY", 107.92),
];

/// Amounts shown in each row of a [`ConversionTable`].
const TABLE_AMOUNTS: [f64; 9] = [10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0];

/// An ordered set of currency codes and their rates.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyTable {
    rates: Vec<(String, f64)>,
}

impl Default for CurrencyTable {
    fn default() -> Self {
        Self {
            rates: DEFAULT_RATES.iter().map(|&(code, rate)| (code.to_owned(), rate)).collect(),
        }
    }
}

impl CurrencyTable {
    /// Build a table from `(code, rate)` pairs, keeping their order.
    ///
    /// Every rate must be positive and finite, otherwise [`ExplorerError::InvalidRate`].
    pub fn new<I, S>(rates: I) -> ExplorerResult<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let rates = rates
            .into_iter()
            .map(|(code, rate)| {
                let code = code.into();
                if rate.is_finite() && rate > 0.0 {
                    Ok((code, rate))
                } else {
                    Err(ExplorerError::InvalidRate { code, rate })
                }
            })
            .collect::<ExplorerResult<Vec<_>>>()?;
        Ok(Self { rates })
    }

    /// Supported codes in table order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.rates.iter().map(|(code, _)| code.as_str())
    }

    /// Returns `true` if `code` is supported.
    pub fn contains(&self, code: &str) -> bool {
        self.rates.iter().any(|(c, _)| c == code)
    }

    /// The rate of `code` relative to the base currency.
    pub fn rate(&self, code: &str) -> ExplorerResult<f64> {
        self.rates
            .iter()
            .find(|(c, _)| c == code)
            .map(|&(_, rate)| rate)
            .ok_or_else(|| ExplorerError::UnknownCurrency { code: code.to_owned() })
    }

    /// Convert `amount` from `source` to `target`.
    pub fn convert(&self, amount: f64, source: &str, target: &str) -> ExplorerResult<f64> {
        let source_rate = self.rate(source)?;
        let target_rate = self.rate(target)?;
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ExplorerError::InvalidAmount { amount });
        }
        let in_base = amount / source_rate;
        Ok(in_base * target_rate)
    }

    /// Conversions of 10, 20, ..., 90 units of `home` into every supported currency.
    ///
    /// `home` comes first, the other currencies follow in table order.
    pub fn conversion_table(&self, home: &str) -> ExplorerResult<ConversionTable> {
        self.rate(home)?;
        let codes: Vec<String> = std::iter::once(home)
            .chain(self.codes().filter(|c| *c != home))
            .map(str::to_owned)
            .collect();

        let mut rows = Vec::with_capacity(TABLE_AMOUNTS.len());
        for amount in TABLE_AMOUNTS {
            let row = codes
                .iter()
                .map(|target| self.convert(amount, home, target))
                .collect::<ExplorerResult<Vec<f64>>>()?;
            rows.push(row);
        }

        Ok(ConversionTable {
            home: home.to_owned(),
            codes,
            rows,
        })
    }
}

/// Convert with the built-in rates.
pub fn convert(amount: f64, source: &str, target: &str) -> ExplorerResult<f64> {
    CurrencyTable::default().convert(amount, source, target)
}

/// Grid of converted amounts; `rows[i][j]` is the `i`-th amount of `home` in `codes[j]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionTable {
    pub home: String,
    pub codes: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}

impl fmt::Display for ConversionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Options for converting from {}:", self.home)?;
        let header: Vec<String> = self.codes.iter().map(|c| format!("{c:<10}")).collect();
        writeln!(f, "{}", header.join(" ").trim_end())?;
        for row in &self.rows {
            let cells: Vec<String> = row.iter().map(|v| format!("{v:<10.2}")).collect();
            writeln!(f, "{}", cells.join(" ").trim_end())?;
        }
        Ok(())
    }
}
