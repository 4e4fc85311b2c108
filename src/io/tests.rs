use super::{load_history, read_csv, read_json, InputFormat, LoadError};

use anyhow::Result;
use std::io::Write;
use std::path::Path;
use tempfile::Builder;

use crate::models::{TransactionError, TransactionType};
use crate::types::{Amount, AmountError};

const JSON_HISTORY: &str = r#"[
    { "date": "2010-03-01", "type": "contribution", "amount": { "dollars": 500, "cents": 0 } },
    { "date": "2009-06-01", "type": "contribution", "amount": { "dollars": 2000, "cents": 0 } },
    { "date": "2009-07-01", "type": "withdrawal", "amount": { "dollars": 1000, "cents": 25 } }
]"#;

const CSV_HISTORY: &str = "date,type,amount\n2009-06-01,contribution,\"$2,000.00\"\n 2009-07-01 , withdrawal , $1000.25\n";

#[test]
fn test_input_format_is_chosen_by_extension() -> Result<()> {
    assert_eq!(InputFormat::from_path(Path::new("history.json"))?, InputFormat::Json);
    assert_eq!(InputFormat::from_path(Path::new("HISTORY.CSV"))?, InputFormat::Csv);
    assert!(matches!(InputFormat::from_path(Path::new("history.txt")), Err(LoadError::UnsupportedFormat(_))));
    assert!(matches!(InputFormat::from_path(Path::new("history")), Err(LoadError::UnsupportedFormat(_))));

    Ok(())
}

#[test]
fn test_json_records_are_converted_in_input_order() -> Result<()> {
    let transactions = read_json(JSON_HISTORY.as_bytes())?;

    assert_eq!(transactions.len(), 3);
    assert_eq!(transactions[0].amount, Amount::from_dollars(500));
    assert_eq!(transactions[2].transaction_type, TransactionType::Withdrawal);
    assert_eq!(transactions[2].amount, Amount::new(1_000, 25));

    Ok(())
}

#[test]
fn test_csv_statement_rows_are_converted() -> Result<()> {
    let transactions = read_csv(CSV_HISTORY.as_bytes())?;

    assert_eq!(transactions.len(), 2);
    assert_eq!(transactions[0].amount, Amount::from_dollars(2_000));
    assert_eq!(transactions[1].transaction_type, TransactionType::Withdrawal);
    assert_eq!(transactions[1].amount, Amount::new(1_000, 25));

    Ok(())
}

#[test]
fn test_json_with_unknown_type_is_rejected_with_its_index() {
    let json = r#"[
        { "date": "2009-06-01", "type": "contribution", "amount": { "dollars": 1, "cents": 0 } },
        { "date": "2009-06-02", "type": "deposit", "amount": { "dollars": 1, "cents": 0 } }
    ]"#;

    let result = read_json(json.as_bytes());

    assert!(matches!(result, Err(LoadError::Record { index: 1, source: TransactionError::UnknownType(_) })));
}

#[test]
fn test_json_with_oversized_amount_is_rejected_not_wrapped() {
    let json = r#"[
        { "date": "2009-06-01", "type": "contribution", "amount": { "dollars": 92233720368547759, "cents": 0 } }
    ]"#;

    let result = read_json(json.as_bytes());

    assert!(matches!(
        result,
        Err(LoadError::Record { index: 0, source: TransactionError::Amount(AmountError::Overflow) })
    ));
}

#[test]
fn test_json_with_missing_cents_is_rejected() {
    let result = read_json(r#"[{ "date": "2009-06-01", "type": "contribution", "amount": { "dollars": 7 } }]"#.as_bytes());

    assert!(matches!(result, Err(LoadError::Json(_))));
}

#[test]
fn test_json_with_non_iso_date_is_rejected() {
    let result = read_json(r#"[{ "date": "209-06-01", "type": "contribution", "amount": { "dollars": 7, "cents": 0 } }]"#.as_bytes());

    assert!(matches!(result, Err(LoadError::Record { index: 0, source: TransactionError::InvalidDate { .. } })));
}

#[test]
fn test_json_with_wrong_shape_is_rejected() {
    let result = read_json(r#"[{ "date": "2009-06-01", "type": "contribution", "amount": "$1.00" }]"#.as_bytes());

    assert!(matches!(result, Err(LoadError::Json(_))));
}

#[test]
fn test_csv_with_bad_amount_or_date_is_rejected() {
    let bad_amount = "date,type,amount\n2009-06-01,contribution,lots\n";
    let bad_date = "date,type,amount\n2009-06-01,contribution,$1.00\n06/02/2009,withdrawal,$1.00\n";

    assert!(matches!(read_csv(bad_amount.as_bytes()), Err(LoadError::Amount { index: 0, .. })));
    assert!(matches!(read_csv(bad_date.as_bytes()), Err(LoadError::Record { index: 1, source: TransactionError::InvalidDate { .. } })));
}

#[test]
fn test_history_loads_from_json_file_sorted_by_date() -> Result<()> {
    let mut file = Builder::new().suffix(".json").tempfile()?;
    write!(file, "{JSON_HISTORY}")?;

    let history = load_history(file.path())?;
    let summary = history.year_summary(2009)?;

    assert_eq!(history.len(), 3);
    assert_eq!(history.contributions(), vec![Amount::from_dollars(2_000), Amount::from_dollars(500)]);
    assert_eq!(summary.withdrawals, Amount::new(1_000, 25));

    Ok(())
}

#[test]
fn test_history_loads_from_csv_file() -> Result<()> {
    let mut file = Builder::new().suffix(".csv").tempfile()?;
    write!(file, "{CSV_HISTORY}")?;

    let history = load_history(file.path())?;

    assert_eq!(history.year_summary(2009)?.contributions, Amount::from_dollars(2_000));

    Ok(())
}

#[test]
fn test_missing_file_reports_io_error() {
    let result = load_history(Path::new("missing-history.json"));

    assert!(matches!(result, Err(LoadError::Io { .. })));
}
