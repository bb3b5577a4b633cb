use crate::records::{PropertyType, Source};
use chrono::Local;

/// Raw output of one listing-card parse, not yet validated.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub location: String,
    pub property_type: PropertyType,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub size_sqft: f64,
    pub amenities: Vec<String>,
    pub price_kes: f64,
    pub source: Source,
    pub url: Option<String>,
}

impl Candidate {
    /// Promotes the candidate into an immutable record, or discards it.
    ///
    /// A non-positive price means the card was unpriceable and the
    /// candidate is dropped. Land-like types always carry zero
    /// bedrooms/bathrooms, whatever the raw text said.
    pub fn validate(self) -> Option<ListingRecord> {
        if !(self.price_kes > 0.0) {
            return None;
        }

        let (bedrooms, bathrooms) = if self.property_type.is_land_like() {
            (0, 0)
        } else {
            (self.bedrooms, self.bathrooms)
        };

        Some(ListingRecord {
            location: self.location,
            property_type: self.property_type,
            bedrooms,
            bathrooms,
            size_sqft: self.size_sqft,
            amenities: self.amenities,
            price_kes: self.price_kes,
            listing_date: scrape_date(),
            source: self.source,
            url: self.url,
        })
    }
}

/// One validated listing. Immutable after creation; `listing_date` is
/// the scrape date, not the original posting date.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingRecord {
    pub location: String,
    pub property_type: PropertyType,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub size_sqft: f64,
    pub amenities: Vec<String>,
    pub price_kes: f64,
    pub listing_date: String,
    pub source: Source,
    /// Unique within one source's pipeline; dropped from the dataset.
    pub url: Option<String>,
}

impl ListingRecord {
    /// Identity used to collapse records across sources, which lack
    /// comparable URLs. Deliberately coarse: two genuinely distinct
    /// units sharing price, location, bedrooms and type will conflate.
    pub fn composite_key(&self) -> (u64, String, u32, PropertyType) {
        (
            self.price_kes.to_bits(),
            self.location.clone(),
            self.bedrooms,
            self.property_type,
        )
    }
}

/// Today's date in ISO format (YYYY-MM-DD).
pub(crate) fn scrape_date() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}
