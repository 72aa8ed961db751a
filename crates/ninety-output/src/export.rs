//! Table export.
//!
//! Writes the rendered organizations table to CSV or JSON, with the same
//! `N/A` placeholders the on-screen table shows.

use crate::report::OrganizationRow;
use ninety_metrics::Metric;
use ninety_model::Organization;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values format.
    Csv,

    /// Compact JSON format.
    Json,

    /// Pretty-printed JSON format.
    PrettyJson,
}

impl ExportFormat {
    /// Get the file extension for this format.
    pub const fn extension(&self) -> &str {
        match self {
            Self::Csv => "csv",
            Self::Json | Self::PrettyJson => "json",
        }
    }
}

/// Write the organizations table to `writer` in the given format.
pub fn export_table(
    orgs: &[Organization],
    format: ExportFormat,
    writer: impl Write,
) -> Result<(), ExportError> {
    let rows: Vec<OrganizationRow> = orgs.iter().map(OrganizationRow::build).collect();

    match format {
        ExportFormat::Csv => {
            let mut csv_writer = csv::Writer::from_writer(writer);

            let mut header = vec!["Organization", "Latest Filing"];
            header.extend(Metric::ALL.iter().map(|metric| metric.name()));
            csv_writer.write_record(&header)?;

            for row in &rows {
                let mut record = vec![row.name.as_str(), row.latest_filing.as_str()];
                record.extend(row.cells.iter().map(String::as_str));
                csv_writer.write_record(&record)?;
            }
            csv_writer.flush()?;
        }
        ExportFormat::Json => serde_json::to_writer(writer, &rows)?,
        ExportFormat::PrettyJson => serde_json::to_writer_pretty(writer, &rows)?,
    }

    Ok(())
}

/// Write the organizations table to a file.
pub fn export_table_to_path(
    orgs: &[Organization],
    format: ExportFormat,
    path: impl AsRef<Path>,
) -> Result<(), ExportError> {
    let file = File::create(path)?;
    export_table(orgs, format, file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ninety_model::dataset::organizations_from_json;

    fn dataset() -> Vec<Organization> {
        organizations_from_json(
            r#"[
                {
                    "id": "a", "name": "Harbor Fund",
                    "returns": [{
                        "filedOn": "2024-04-01",
                        "taxPeriodStartDate": "2023-01-01",
                        "taxPeriodEndDate": "2023-12-31",
                        "totalRevenue": "1052300.00"
                    }]
                },
                {"id": "b", "name": "Quiet Trust", "returns": []}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_csv_export() {
        let mut buffer = Vec::new();
        export_table(&dataset(), ExportFormat::Csv, &mut buffer).unwrap();
        let csv = String::from_utf8(buffer).unwrap();

        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Organization,Latest Filing,Revenue,Expenses,Assets,Liabilities,Employees"
        );
        assert_eq!(
            lines.next().unwrap(),
            "Harbor Fund,\"Apr 01, 2024\",\"$1,052,300\",N/A,N/A,N/A,N/A"
        );
        assert_eq!(
            lines.next().unwrap(),
            "Quiet Trust,No filings,N/A,N/A,N/A,N/A,N/A"
        );
    }

    #[test]
    fn test_json_export_round_trips() {
        let mut buffer = Vec::new();
        export_table(&dataset(), ExportFormat::Json, &mut buffer).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

        assert_eq!(value.as_array().unwrap().len(), 2);
        assert_eq!(value[0]["name"], "Harbor Fund");
        assert_eq!(value[0]["latestFiling"], "Apr 01, 2024");
        assert_eq!(value[1]["cells"][0], "N/A");
    }

    #[test]
    fn test_extensions() {
        assert_eq!(ExportFormat::Csv.extension(), "csv");
        assert_eq!(ExportFormat::PrettyJson.extension(), "json");
    }
}
