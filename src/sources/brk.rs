// brk.rs
use crate::extract::{fields, gazetteer};
use crate::records::{Candidate, ListingRecord, PropertyType, Source};
use crate::sources::PropertySource;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use url::Url;

const BASE: &str = "https://www.buyrentkenya.com";

static DIV_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("div").unwrap());
static ANCHOR_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").unwrap());

/// BuyRentKenya: listing cards are divs whose class list contains
/// `listing-card`; details come heavily structured in child fragments.
pub struct BrkSource;

impl PropertySource for BrkSource {
    fn source(&self) -> Source {
        Source::BuyRentKenya
    }

    fn extract(&self, html: &str) -> Vec<ListingRecord> {
        let document = Html::parse_document(html);
        let mut records = Vec::new();

        for card in document.select(&DIV_SELECTOR) {
            let is_card = card
                .value()
                .attr("class")
                .is_some_and(|c| c.to_lowercase().contains("listing-card"));
            if !is_card {
                continue;
            }

            match parse_card(&card) {
                Some(record) => records.push(record),
                None => log::debug!("Skipping unpriceable BRK card"),
            }
        }

        records
    }
}

fn parse_card(card: &ElementRef) -> Option<ListingRecord> {
    let text_parts: Vec<&str> = card
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect();
    let full_text = text_parts.join(" ");

    // Price lives in the fragment carrying the currency marker,
    // e.g. "KSh 40,000 / month".
    let price_kes = text_parts
        .iter()
        .find(|t| t.contains("KSh"))
        .and_then(|t| fields::price_kes(t))?;

    let bedrooms = fields::first_match(&full_text, &[fields::bedrooms_keyword]).unwrap_or(0);
    // Unlike Jiji, missing bathrooms stay at zero here.
    let bathrooms = fields::first_match(&full_text, &[fields::bathrooms_keyword]).unwrap_or(0);

    let property_type =
        PropertyType::first_in_ignore_case(&full_text, PropertyType::BRK_SCAN_ORDER)
            .unwrap_or(PropertyType::House);

    let location = location_from_parts(&text_parts)
        .or_else(|| gazetteer::match_area(&full_text).map(str::to_string))
        .unwrap_or_else(|| gazetteer::FALLBACK_AREA.to_string());

    Candidate {
        location,
        property_type,
        bedrooms,
        bathrooms,
        size_sqft: fields::size_sqft_from_area(&full_text).unwrap_or(0.0),
        amenities: fields::amenities(&full_text),
        price_kes,
        source: Source::BuyRentKenya,
        url: card_url(card),
    }
    .validate()
}

/// Cards commonly read "Title | Location | N Bedrooms | ...": take the
/// short fragment just before the bedroom fragment.
fn location_from_parts(text_parts: &[&str]) -> Option<String> {
    let bedrooms_index = text_parts
        .iter()
        .position(|part| part.contains("Bedroom") && part.len() < 20)?;
    if bedrooms_index == 0 {
        return None;
    }
    let candidate = text_parts[bedrooms_index - 1];
    if candidate.is_empty() || candidate.len() >= 50 {
        return None;
    }
    Some(candidate.to_string())
}

fn card_url(card: &ElementRef) -> Option<String> {
    let href = card
        .select(&ANCHOR_SELECTOR)
        .next()?
        .value()
        .attr("href")?;
    if href.starts_with("http") {
        return Some(href.to_string());
    }
    Url::parse(BASE).ok()?.join(href).ok().map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <div class="listing-card-v2 shadow">
            <a href="/listings/spacious-westlands-house-111">Spacious family home</a>
            <span>Westlands</span>
            <span>4 Bedrooms</span>
            <span>3 Bathrooms</span>
            <span>KSh 150,000 / month</span>
            <span>250 m²</span>
            <span>Garden, ample parking and 24hr security</span>
          </div>
          <div class="listing-card">
            <a href="/listings/bedsitter-222">Bedsitter to let</a>
            <span>Kasarani</span>
            <span>KSh 9,500 / month</span>
          </div>
          <div class="listing-card">
            <a href="/listings/no-price-333">Charming villa, call for price</a>
            <span>Karen</span>
          </div>
          <div class="promo-banner">
            <span>KSh 1 promotion, not a listing</span>
          </div>
        </body></html>
    "#;

    #[test]
    fn extracts_only_priced_listing_cards() {
        let records = BrkSource.extract(PAGE);
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn structured_card_fields() {
        let records = BrkSource.extract(PAGE);
        let house = &records[0];

        assert_eq!(house.price_kes, 150_000.0);
        assert_eq!(house.bedrooms, 4);
        assert_eq!(house.bathrooms, 3);
        assert_eq!(house.property_type, PropertyType::House);
        // Fragment just before "4 Bedrooms".
        assert_eq!(house.location, "Westlands");
        assert_eq!(house.size_sqft, 2690.98);
        assert_eq!(house.amenities, vec!["Parking", "Security", "Garden"]);
        assert_eq!(house.source, Source::BuyRentKenya);
        assert_eq!(
            house.url.as_deref(),
            Some("https://www.buyrentkenya.com/listings/spacious-westlands-house-111")
        );
    }

    #[test]
    fn sparse_card_uses_source_defaults() {
        let records = BrkSource.extract(PAGE);
        let bedsitter = &records[1];

        assert_eq!(bedsitter.bedrooms, 0);
        // BRK default: missing bathrooms stay 0, no estimate.
        assert_eq!(bedsitter.bathrooms, 0);
        assert_eq!(bedsitter.property_type, PropertyType::House);
        // No bedroom fragment, so the gazetteer resolves the location.
        assert_eq!(bedsitter.location, "Kasarani");
        assert_eq!(bedsitter.size_sqft, 0.0);
    }
}
