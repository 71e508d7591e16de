//! Expense table and indicator formatting
//!
//! Formats the expense list as a numbered table (the numbers are the
//! indices `del` takes) and the computed indicators as a summary block.

use crate::display::currency::format_currency;
use crate::models::Expense;
use crate::reports::Indicators;

/// Format a snapshot of expenses as a table
pub fn format_expense_table(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    // Calculate column widths
    let index_width = (expenses.len() - 1).to_string().len().max(1);
    let category_width = expenses
        .iter()
        .map(|e| e.category().len())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>index_width$}  {:<category_width$}  {:>12}\n",
        "#",
        "Category",
        "Amount",
        index_width = index_width,
        category_width = category_width,
    ));
    output.push_str(&format!(
        "{:-<index_width$}  {:-<category_width$}  {:->12}\n",
        "",
        "",
        "",
        index_width = index_width,
        category_width = category_width,
    ));

    for (index, expense) in expenses.iter().enumerate() {
        output.push_str(&format!(
            "{:>index_width$}  {:<category_width$}  {:>12}\n",
            index,
            expense.category(),
            format_currency(expense.amount()),
            index_width = index_width,
            category_width = category_width,
        ));
    }

    let total: f64 = expenses.iter().map(|e| e.amount()).sum();
    output.push_str(&format!(
        "{:-<index_width$}  {:-<category_width$}  {:->12}\n",
        "",
        "",
        "",
        index_width = index_width,
        category_width = category_width,
    ));
    output.push_str(&format!(
        "{:>index_width$}  {:<category_width$}  {:>12}\n",
        "",
        "TOTAL",
        format_currency(total),
        index_width = index_width,
        category_width = category_width,
    ));

    output
}

/// Format computed indicators as a summary block
pub fn format_indicators(indicators: &Indicators) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Total spending:  {}\n",
        format_currency(indicators.total)
    ));
    output.push_str(&format!(
        "Average per day: {}\n",
        format_currency(indicators.average_per_day)
    ));

    output.push_str("Top 3 expenses:\n");
    if indicators.top3.is_empty() {
        output.push_str("  (none)\n");
    } else {
        for (rank, expense) in indicators.top3.iter().enumerate() {
            output.push_str(&format!(
                "  {}. {} ({})\n",
                rank + 1,
                expense.category(),
                format_currency(expense.amount()),
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Ledger;

    fn sample() -> Vec<Expense> {
        let mut ledger = Ledger::new();
        ledger.load_sample();
        ledger.snapshot()
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(format_expense_table(&[]), "No expenses recorded.\n");
    }

    #[test]
    fn test_table_lists_rows_with_indices() {
        let table = format_expense_table(&sample());
        assert!(table.contains("Groceries"));
        assert!(table.contains("$15,000"));
        assert!(table.contains("TOTAL"));
        assert!(table.contains("$75,000"));
        // Row indices are what `del` consumes
        assert!(table.lines().any(|l| l.trim_start().starts_with("0  ")));
        assert!(table.lines().any(|l| l.trim_start().starts_with("5  ")));
    }

    #[test]
    fn test_indicator_block() {
        let indicators = Indicators::compute(&sample());
        let block = format_indicators(&indicators);
        assert!(block.contains("Total spending:  $75,000"));
        assert!(block.contains("Average per day: $2,500"));
        assert!(block.contains("1. Rent ($40,000)"));
        assert!(block.contains("2. Groceries ($15,000)"));
        assert!(block.contains("3. Entertainment ($10,000)"));
    }

    #[test]
    fn test_indicator_block_empty() {
        let indicators = Indicators::compute(&[]);
        let block = format_indicators(&indicators);
        assert!(block.contains("Total spending:  $0"));
        assert!(block.contains("(none)"));
    }
}
