//! CSV export
//!
//! Writes a ledger snapshot as `category,amount` rows. Exporting is a
//! one-way view of the current contents; nothing is ever read back in.

use std::io::Write;
use std::path::Path;

use crate::error::OutlayResult;
use crate::models::Expense;

/// Write a snapshot as CSV to any writer
pub fn write_snapshot_csv<W: Write>(expenses: &[Expense], writer: W) -> OutlayResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["category", "amount"])?;
    for expense in expenses {
        let amount = expense.amount().to_string();
        csv_writer.write_record([expense.category(), amount.as_str()])?;
    }
    csv_writer.flush()?;

    Ok(())
}

/// Write a snapshot as CSV to a file path
pub fn export_snapshot_to_path(expenses: &[Expense], path: &Path) -> OutlayResult<()> {
    let file = std::fs::File::create(path)?;
    write_snapshot_csv(expenses, file)
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
    fn test_write_snapshot_csv() {
        let mut buffer = Vec::new();
        write_snapshot_csv(&sample(), &mut buffer).unwrap();

        let csv = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "category,amount");
        assert_eq!(lines[1], "Groceries,15000");
        assert_eq!(lines[2], "Rent,40000");
        assert_eq!(lines[6], "Gym,3000");
    }

    #[test]
    fn test_write_empty_snapshot() {
        let mut buffer = Vec::new();
        write_snapshot_csv(&[], &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "category,amount\n");
    }

    #[test]
    fn test_fractional_amounts_keep_their_precision() {
        let expenses = vec![Expense::new("Coffee", 4.5).unwrap()];
        let mut buffer = Vec::new();
        write_snapshot_csv(&expenses, &mut buffer).unwrap();
        assert!(String::from_utf8(buffer).unwrap().contains("Coffee,4.5"));
    }

    #[test]
    fn test_export_to_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("expenses.csv");

        export_snapshot_to_path(&sample(), &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("category,amount"));
        assert!(contents.contains("Rent,40000"));
    }
}
