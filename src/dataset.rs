// dataset.rs
use crate::errors::ScrapeError;
use crate::records::ListingRecord;
use serde::Serialize;
use std::path::Path;

/// Fixed column order of the output dataset. The url field is
/// internal-only and never serialized.
pub const COLUMNS: &[&str] = &[
    "location",
    "property_type",
    "bedrooms",
    "bathrooms",
    "size_sqft",
    "amenities",
    "price_kes",
    "listing_date",
    "source",
];

#[derive(Serialize)]
struct Row<'a> {
    location: &'a str,
    property_type: &'a str,
    bedrooms: u32,
    bathrooms: u32,
    size_sqft: f64,
    amenities: String,
    price_kes: f64,
    listing_date: &'a str,
    source: &'a str,
}

impl<'a> Row<'a> {
    fn from_record(record: &'a ListingRecord) -> Self {
        Self {
            location: &record.location,
            property_type: record.property_type.label(),
            bedrooms: record.bedrooms,
            bathrooms: record.bathrooms,
            size_sqft: record.size_sqft,
            amenities: record.amenities.join(", "),
            price_kes: record.price_kes,
            listing_date: &record.listing_date,
            source: record.source.label(),
        }
    }
}

/// Writes the final collection as CSV, truncating any previous run's
/// file. The header is written even for an empty collection.
pub fn write_dataset(records: &[ListingRecord], destination: &Path) -> Result<(), ScrapeError> {
    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| ScrapeError::Io(e.to_string()))?;
        }
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(destination)
        .map_err(|e| ScrapeError::Csv(e.to_string()))?;

    writer
        .write_record(COLUMNS)
        .map_err(|e| ScrapeError::Csv(e.to_string()))?;

    for record in records {
        writer
            .serialize(Row::from_record(record))
            .map_err(|e| ScrapeError::Csv(e.to_string()))?;
    }

    writer.flush().map_err(|e| ScrapeError::Io(e.to_string()))?;
    Ok(())
}
