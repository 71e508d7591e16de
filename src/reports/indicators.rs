//! Spending indicators
//!
//! Computes the derived aggregates shown in the indicator panel: total
//! spend, average spend per day over the fixed 30-day period, and the
//! three largest expenses. Indicators are recomputed on demand and never
//! cached; they go stale the moment the ledger changes.

use serde::Serialize;

use crate::models::Expense;

/// Fixed period length used for the per-day average
pub const DAYS_IN_MONTH: u32 = 30;

/// Derived aggregate values for a ledger snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Indicators {
    /// Sum of all amounts, unrounded
    pub total: f64,
    /// Total divided by the 30-day period, rounded to cents
    pub average_per_day: f64,
    /// The highest-amount expenses, descending, at most three
    pub top3: Vec<Expense>,
}

impl Indicators {
    /// Compute indicators for a snapshot
    ///
    /// Pure: the input is never mutated (sorting happens on a copy), and
    /// repeated calls on the same snapshot produce identical results.
    /// The total stays unrounded; only the per-day average is rounded,
    /// half-up at the cent boundary.
    pub fn compute(snapshot: &[Expense]) -> Self {
        let total: f64 = snapshot.iter().map(|e| e.amount()).sum();
        let average_per_day = round_to_cents(total / f64::from(DAYS_IN_MONTH));
        let top3 = top_expenses(snapshot, 3);

        Self {
            total,
            average_per_day,
            top3,
        }
    }
}

/// The `limit` highest-amount expenses, descending by amount
///
/// Ties keep their original insertion order (stable sort). Returns fewer
/// than `limit` entries when the snapshot is smaller.
pub fn top_expenses(snapshot: &[Expense], limit: usize) -> Vec<Expense> {
    let mut sorted = snapshot.to_vec();
    // Amounts are finite by the Expense invariant, so the comparison
    // never actually hits the Equal fallback for non-comparable values.
    sorted.sort_by(|a, b| {
        b.amount()
            .partial_cmp(&a.amount())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sorted.truncate(limit);
    sorted
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Expense> {
        let mut ledger = crate::ledger::Ledger::new();
        ledger.load_sample();
        ledger.snapshot()
    }

    #[test]
    fn test_compute_empty() {
        let indicators = Indicators::compute(&[]);
        assert_eq!(indicators.total, 0.0);
        assert_eq!(indicators.average_per_day, 0.0);
        assert!(indicators.top3.is_empty());
    }

    #[test]
    fn test_compute_sample() {
        let indicators = Indicators::compute(&sample());
        assert_eq!(indicators.total, 75000.0);
        assert_eq!(indicators.average_per_day, 2500.0);

        let names: Vec<&str> = indicators.top3.iter().map(|e| e.category()).collect();
        assert_eq!(names, vec!["Rent", "Groceries", "Entertainment"]);
        assert_eq!(indicators.top3[0].amount(), 40000.0);
    }

    #[test]
    fn test_average_rounds_half_up_to_cents() {
        // 100.30 / 30 = 3.3433... -> 3.34
        let snapshot = vec![Expense::new("A", 100.30).unwrap()];
        assert_eq!(Indicators::compute(&snapshot).average_per_day, 3.34);

        // 10.05 / 30 = 0.335 -> 0.34 (half rounds up)
        let snapshot = vec![Expense::new("A", 10.05).unwrap()];
        assert_eq!(Indicators::compute(&snapshot).average_per_day, 0.34);
    }

    #[test]
    fn test_total_is_not_rounded() {
        let snapshot = vec![
            Expense::new("A", 0.1).unwrap(),
            Expense::new("B", 0.2).unwrap(),
        ];
        // The raw f64 sum, not 0.3
        assert_eq!(Indicators::compute(&snapshot).total, 0.1 + 0.2);
    }

    #[test]
    fn test_top_expenses_fewer_than_limit() {
        let snapshot = vec![
            Expense::new("A", 2.0).unwrap(),
            Expense::new("B", 1.0).unwrap(),
        ];
        let top = top_expenses(&snapshot, 3);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].category(), "A");
    }

    #[test]
    fn test_top_expenses_stable_on_ties() {
        let snapshot = vec![
            Expense::new("First", 100.0).unwrap(),
            Expense::new("Second", 100.0).unwrap(),
            Expense::new("Third", 100.0).unwrap(),
            Expense::new("Fourth", 100.0).unwrap(),
        ];
        let top = top_expenses(&snapshot, 3);
        let names: Vec<&str> = top.iter().map(|e| e.category()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_compute_does_not_mutate_input() {
        let snapshot = sample();
        let before = snapshot.clone();
        let _ = Indicators::compute(&snapshot);
        assert_eq!(snapshot, before);
    }

    #[test]
    fn test_compute_is_idempotent() {
        let snapshot = sample();
        let first = Indicators::compute(&snapshot);
        let second = Indicators::compute(&snapshot);
        assert_eq!(first, second);
    }

    #[test]
    fn test_serialization() {
        let indicators = Indicators::compute(&sample());
        let json = serde_json::to_string(&indicators).unwrap();
        assert!(json.contains("\"total\":75000.0"));
        assert!(json.contains("\"average_per_day\":2500.0"));
    }
}
