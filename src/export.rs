use crate::results::ResultRow;
use std::error::Error;
use std::path::Path;

/// Column headers of the export file, matching the original report layout
const HEADERS: [&str; 5] = ["Watch Name", "Brand", "Price", "Availability", "Link"];

/// Writes all rows to one CSV file, overwriting any previous run's output
pub fn write_rows<P: AsRef<Path>>(path: P, rows: &[ResultRow]) -> Result<(), Box<dyn Error>> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(HEADERS)?;
    for row in rows {
        let price = row.price.to_string();
        writer.write_record([
            row.name.as_str(),
            row.brand.as_str(),
            price.as_str(),
            row.availability.as_str(),
            row.link.as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
