//! CSV ingestion for the two input tables.
//!
//! The files are produced by the upstream data-preparation pipeline; this
//! module only parses and type-checks them. Any failure maps to [`DataError`]
//! and callers report it once with the remediation hint, there is no partial
//! load.

use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

use chrono::NaiveDateTime;
use serde::Deserialize;
use thiserror::Error;

use crate::data::model::{RfmProfile, Tables, Transaction};

#[derive(Error, Debug)]
pub enum DataError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("malformed CSV in {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("unreadable timestamp {value:?} in {path}")]
    BadTimestamp { path: String, value: String },

    #[error("unreadable customer id {value:?} in {path}")]
    BadCustomerId { path: String, value: String },

    #[error("{path} has neither a TotalPrice nor a UnitPrice column")]
    MissingPrice { path: String },

    #[error("{path} contains no rows")]
    EmptyTable { path: String },
}

/// Timestamp formats the upstream pipeline is known to emit.
const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %H:%M:%S",
];

/// Raw transaction row as it appears in the file. Calendar columns the
/// pipeline may also write (`YearMonth`, `Hour`, `DayName`) are ignored and
/// re-derived from the timestamp instead.
#[derive(Debug, Deserialize)]
struct TransactionRow {
    #[serde(rename = "InvoiceNo")]
    invoice_no: String,
    #[serde(rename = "StockCode")]
    stock_code: String,
    #[serde(rename = "Description", default)]
    description: String,
    #[serde(rename = "Quantity")]
    quantity: i64,
    #[serde(rename = "UnitPrice", default)]
    unit_price: Option<f64>,
    #[serde(rename = "TotalPrice", default)]
    total_price: Option<f64>,
    #[serde(rename = "CustomerID")]
    customer_id: String,
    #[serde(rename = "Country")]
    country: String,
    #[serde(rename = "InvoiceDate")]
    invoice_date: String,
}

#[derive(Debug, Deserialize)]
struct RfmRow {
    #[serde(rename = "CustomerID")]
    customer_id: String,
    #[serde(rename = "Recency")]
    recency: i64,
    #[serde(rename = "Frequency")]
    frequency: u64,
    #[serde(rename = "Monetary")]
    monetary: f64,
    #[serde(rename = "RFM_Score_Numeric")]
    rfm_score: f64,
    #[serde(rename = "Segment")]
    segment: String,
}

/// Loads and joins both tables. The RFM side may reference customers the
/// transaction table has never seen; those are counted, not rejected.
pub fn load_tables(transactions_path: &Path, rfm_path: &Path) -> Result<Tables, DataError> {
    let transactions = load_transactions(transactions_path)?;
    let rfm = load_rfm(rfm_path)?;

    let known: HashSet<u64> = transactions.iter().map(|t| t.customer_id).collect();
    let rfm_orphans = rfm.iter().filter(|p| !known.contains(&p.customer_id)).count();

    log::info!(
        "loaded {} transactions, {} customer profiles",
        transactions.len(),
        rfm.len()
    );
    if rfm_orphans > 0 {
        log::warn!(
            "{} RFM profiles reference customers absent from the transaction table",
            rfm_orphans
        );
    }

    Ok(Tables {
        transactions,
        rfm,
        rfm_orphans,
    })
}

/// Loads the cleaned transaction table.
///
/// An empty table is an error: every dashboard view keys off the invoice
/// date span, so there is nothing to show without rows.
pub fn load_transactions(path: &Path) -> Result<Vec<Transaction>, DataError> {
    let mut reader = open_csv(path)?;
    let path_str = path.display().to_string();

    let headers = reader.headers().map_err(|source| DataError::Csv {
        path: path_str.clone(),
        source,
    })?;
    let has_total = headers.iter().any(|h| h == "TotalPrice");
    let has_unit = headers.iter().any(|h| h == "UnitPrice");
    if !has_total && !has_unit {
        return Err(DataError::MissingPrice { path: path_str });
    }

    let mut out = Vec::new();
    for row in reader.deserialize::<TransactionRow>() {
        let row = row.map_err(|source| DataError::Csv {
            path: path_str.clone(),
            source,
        })?;
        out.push(to_transaction(row, &path_str)?);
    }
    if out.is_empty() {
        return Err(DataError::EmptyTable { path: path_str });
    }
    Ok(out)
}

/// Loads the RFM segmentation table. May be empty; the segment views then
/// render as "no data".
pub fn load_rfm(path: &Path) -> Result<Vec<RfmProfile>, DataError> {
    let mut reader = open_csv(path)?;
    let path_str = path.display().to_string();

    let mut out = Vec::new();
    for row in reader.deserialize::<RfmRow>() {
        let row = row.map_err(|source| DataError::Csv {
            path: path_str.clone(),
            source,
        })?;
        out.push(RfmProfile {
            customer_id: parse_customer_id(&row.customer_id, &path_str)?,
            recency: row.recency,
            frequency: row.frequency,
            monetary: row.monetary,
            rfm_score: row.rfm_score,
            segment: row.segment,
        });
    }
    Ok(out)
}

fn open_csv(path: &Path) -> Result<csv::Reader<File>, DataError> {
    let file = File::open(path).map_err(|source| DataError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(csv::Reader::from_reader(file))
}

fn to_transaction(row: TransactionRow, path: &str) -> Result<Transaction, DataError> {
    let invoice_date = parse_timestamp(&row.invoice_date, path)?;
    let customer_id = parse_customer_id(&row.customer_id, path)?;

    let quantity = row.quantity;
    let unit_price = match (row.unit_price, row.total_price) {
        (Some(unit), _) => unit,
        (None, Some(total)) if quantity != 0 => total / quantity as f64,
        _ => 0.0,
    };
    let total_price = row
        .total_price
        .unwrap_or_else(|| quantity as f64 * unit_price);

    Ok(Transaction {
        invoice_no: row.invoice_no,
        stock_code: row.stock_code,
        description: row.description,
        quantity,
        unit_price,
        total_price,
        customer_id,
        country: row.country,
        invoice_date,
    })
}

fn parse_timestamp(value: &str, path: &str) -> Result<NaiveDateTime, DataError> {
    for format in TIMESTAMP_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(ts);
        }
    }
    Err(DataError::BadTimestamp {
        path: path.to_string(),
        value: value.to_string(),
    })
}

/// Customer ids travel through the pipeline as floats ("17850.0"); accept
/// both that and the plain integer form.
fn parse_customer_id(value: &str, path: &str) -> Result<u64, DataError> {
    let trimmed = value.trim();
    if let Ok(id) = trimmed.parse::<u64>() {
        return Ok(id);
    }
    if let Ok(float) = trimmed.parse::<f64>() {
        if float >= 0.0 && float.fract() == 0.0 {
            return Ok(float as u64);
        }
    }
    Err(DataError::BadCustomerId {
        path: path.to_string(),
        value: value.to_string(),
    })
}
