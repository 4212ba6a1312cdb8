//! Writing merged transactions to disk.

use anyhow::{Context, Result};
use clap::ValueEnum;
use ledgerline_ingest::TransactionRecord;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// date,description,amount,balance,source_file
    #[default]
    Csv,
    /// Array of records, pretty-printed
    Json,
}

pub fn write_records(path: &Path, records: &[TransactionRecord], format: ExportFormat) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }

    match format {
        ExportFormat::Csv => write_csv(path, records),
        ExportFormat::Json => {
            let json = serde_json::to_string_pretty(records).context("serialize records")?;
            fs::write(path, json).with_context(|| format!("write {}", path.display()))
        }
    }
}

fn write_csv(path: &Path, records: &[TransactionRecord]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path).with_context(|| format!("create {}", path.display()))?;
    if records.is_empty() {
        wtr.write_record(["date", "description", "amount", "balance", "source_file"])?;
    }
    for r in records {
        wtr.serialize(r)?;
    }
    wtr.flush().with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn records() -> Vec<TransactionRecord> {
        vec![
            TransactionRecord {
                date: NaiveDate::from_ymd_opt(2024, 3, 14),
                description: "ONLINE TRANSFER TO SAVINGS".to_string(),
                amount: Some(dec!(250.00)),
                balance: Some(dec!(5430.10)),
                source_id: "2024-03.pdf".to_string(),
            },
            TransactionRecord {
                date: None,
                description: "Pending, held".to_string(),
                amount: None,
                balance: None,
                source_id: "2024-03.pdf".to_string(),
            },
        ]
    }

    #[test]
    fn test_csv_export() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("processed").join("all_transactions.csv");
        write_records(&p, &records(), ExportFormat::Csv).unwrap();

        let out = fs::read_to_string(&p).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "date,description,amount,balance,source_file");
        assert_eq!(lines[1], "2024-03-14,ONLINE TRANSFER TO SAVINGS,250.00,5430.10,2024-03.pdf");
        assert_eq!(lines[2], ",\"Pending, held\",,,2024-03.pdf");
    }

    #[test]
    fn test_csv_export_empty_has_header() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("empty.csv");
        write_records(&p, &[], ExportFormat::Csv).unwrap();
        assert_eq!(
            fs::read_to_string(&p).unwrap().trim_end(),
            "date,description,amount,balance,source_file"
        );
    }

    #[test]
    fn test_json_export() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("all.json");
        write_records(&p, &records(), ExportFormat::Json).unwrap();

        let back: Vec<TransactionRecord> =
            serde_json::from_str(&fs::read_to_string(&p).unwrap()).unwrap();
        assert_eq!(back, records());
    }
}
