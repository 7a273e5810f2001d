//! Price summaries over a selection of listings.

/// Which statistic a report shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    /// Lowest matching price.
    Min,
    /// Arithmetic mean of matching prices.
    Avg,
    /// Highest matching price.
    Max,
}

impl StatKind {
    /// Human-readable name used in report titles.
    pub fn name(self) -> &'static str {
        match self {
            StatKind::Min => "Minimum",
            StatKind::Avg => "Average",
            StatKind::Max => "Maximum",
        }
    }
}

/// Min/avg/max of a non-empty set of prices.
///
/// Duplicates are all counted; `min <= avg <= max` always holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub min: u32,
    pub avg: f64,
    pub max: u32,
    /// Number of listings the summary was computed from.
    pub count: usize,
}

impl Stats {
    /// Read one statistic as a float (for uniform table rendering).
    pub fn get(&self, kind: StatKind) -> f64 {
        match kind {
            StatKind::Min => f64::from(self.min),
            StatKind::Avg => self.avg,
            StatKind::Max => f64::from(self.max),
        }
    }
}

/// Summarize `prices`.
///
/// Returns `None` if `prices` is empty.
pub fn summarize<I>(prices: I) -> Option<Stats>
where
    I: IntoIterator<Item = u32>,
{
    let mut acc: Option<(u32, u32, u64, usize)> = None;
    for p in prices {
        acc = Some(match acc {
            Some((min, max, sum, count)) => (min.min(p), max.max(p), sum + u64::from(p), count + 1),
            None => (p, p, u64::from(p), 1),
        });
    }

    acc.map(|(min, max, sum, count)| Stats {
        min,
        // The mean of integers in [min, max] cannot leave that range, but float rounding on
        // huge sums could nudge it past an endpoint.
        avg: (sum as f64 / count as f64).clamp(f64::from(min), f64::from(max)),
        max,
        count,
    })
}
