//! Demonstration of the dashboard derivation pipeline.

use ninety::MetricUnit;
use ninety::metrics::{Metric, SortState, sort_by_metric};
use ninety::model::dataset::organizations_from_json;
use ninety::output::{DeltaDisplay, ExportFormat, OrganizationRow, export_table};

const DATASET: &str = r#"[
    {
        "id": "a", "name": "Alder Foundation",
        "returns": [{
            "filedOn": "2024-04-15",
            "taxPeriodStartDate": "2023-01-01",
            "taxPeriodEndDate": "2023-12-31",
            "employeeCount": 40,
            "pyEmployeeCount": 32,
            "totalRevenue": "1052300.00",
            "pyTotalRevenue": "980000.00"
        }]
    },
    {"id": "b", "name": "Birch Trust", "returns": []},
    {
        "id": "c", "name": "Cedar Relief",
        "returns": [{
            "filedOn": "2024-02-01",
            "taxPeriodStartDate": "2023-01-01",
            "taxPeriodEndDate": "2023-12-31",
            "totalRevenue": "450000.00"
        }]
    }
]"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Ninety Dashboard Demo ===\n");

    let mut orgs = organizations_from_json(DATASET)?;

    println!("1. Table sorted by revenue, descending\n");
    sort_by_metric(&mut orgs, Metric::TotalRevenue, SortState::Descending);
    for org in &orgs {
        let row = OrganizationRow::build(org);
        println!("   {:<20} {:<14} {}", row.name, row.latest_filing, row.cells[0]);
    }

    println!("\n2. Year-over-year revenue delta for each organization\n");
    for org in &orgs {
        let delta = Metric::TotalRevenue.latest_delta(org);
        let display = DeltaDisplay::new(delta, MetricUnit::Currency);
        println!("   {:<20} {display}", org.name);
    }

    println!("\n3. CSV export\n");
    let mut buffer = Vec::new();
    export_table(&orgs, ExportFormat::Csv, &mut buffer)?;
    println!("{}", String::from_utf8(buffer)?);

    Ok(())
}
