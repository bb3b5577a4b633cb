// jiji.rs
use crate::extract::{fields, gazetteer};
use crate::records::{Candidate, ListingRecord, PropertyType, Source};
use crate::sources::PropertySource;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};
use url::Url;

const BASE: &str = "https://jiji.co.ke";

/// Listing cards on Jiji are anchors whose href carries the category
/// path segment.
static CATEGORY_HREF_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"/(houses-apartments-for-sale|land-and-plots-for-sale)/").unwrap()
});
static ANCHOR_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").unwrap());

/// Jiji.co.ke: compact card text like
/// "3bdrm Apartment in Kilimani KSh 8,500,000 120 sqm pool gym".
pub struct JijiSource;

impl PropertySource for JijiSource {
    fn source(&self) -> Source {
        Source::Jiji
    }

    fn extract(&self, html: &str) -> Vec<ListingRecord> {
        let document = Html::parse_document(html);
        let mut records = Vec::new();

        for element in document.select(&ANCHOR_SELECTOR) {
            let Some(href) = element.value().attr("href") else {
                continue;
            };
            if !CATEGORY_HREF_RE.is_match(href) {
                continue;
            }

            let text = element
                .text()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .collect::<Vec<_>>()
                .join(" ");

            match parse_card(&text, href) {
                Some(record) => records.push(record),
                None => log::debug!("Skipping unpriceable Jiji card: {href}"),
            }
        }

        records
    }
}

fn parse_card(text: &str, href: &str) -> Option<ListingRecord> {
    // Unpriceable card rejects the whole candidate.
    let price_kes = fields::price_kes(text)?;

    let bedrooms = fields::first_match(
        text,
        &[fields::bedrooms_bdrm, fields::bedrooms_keyword],
    )
    .unwrap_or(0);

    // Jiji cards rarely state bathrooms; estimate from bedrooms.
    let bathrooms = if bedrooms > 0 {
        (bedrooms - 1).max(1)
    } else {
        1
    };

    let property_type = PropertyType::first_in(text, PropertyType::JIJI_SCAN_ORDER)
        .unwrap_or(PropertyType::Other);

    let location = gazetteer::match_area(text)
        .unwrap_or(gazetteer::FALLBACK_AREA)
        .to_string();

    Candidate {
        location,
        property_type,
        bedrooms,
        bathrooms,
        size_sqft: fields::size_sqft_from_area(text).unwrap_or(0.0),
        amenities: fields::amenities(text),
        price_kes,
        source: Source::Jiji,
        url: absolute_url(href),
    }
    .validate()
}

fn absolute_url(href: &str) -> Option<String> {
    if href.starts_with("http") {
        return Some(href.to_string());
    }
    Url::parse(BASE)
        .ok()?
        .join(href)
        .ok()
        .map(String::from)
}
