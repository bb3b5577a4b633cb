//! Fixed Nairobi neighborhood gazetteer.

/// Catch-all when no neighborhood matches.
pub const FALLBACK_AREA: &str = "Nairobi";

/// Neighborhoods recognized in listing text, first match wins. Names
/// appear in listings in this proper-case form.
pub const NAIROBI_AREAS: &[&str] = &[
    "Kilimani",
    "Westlands",
    "Lavington",
    "Riverside Drive",
    "Nairobi Central",
    "Kahawa",
    "Upperhill",
    "Kasarani",
    "Utawala",
    "Kileleshwa",
    "Karen",
    "Runda",
    "Parklands",
    "South B",
    "South C",
    "Langata",
    "Embakasi",
    "Donholm",
    "Ruaka",
    "Ngong",
    "Kitisuru",
    "Muthaiga",
    "Spring Valley",
    "Ridgeways",
    "Gigiri",
    "Syokimau",
    "Mlolongo",
    "Athi River",
];

/// First gazetteer entry appearing in `text`.
pub fn match_area(text: &str) -> Option<&'static str> {
    NAIROBI_AREAS.iter().copied().find(|area| text.contains(area))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_listed_match_wins() {
        // Kilimani precedes Westlands in the gazetteer.
        let text = "Off Westlands road, Kilimani side";
        assert_eq!(match_area(text), Some("Kilimani"));
    }

    #[test]
    fn unknown_areas_fall_through() {
        assert_eq!(match_area("3bdrm in Naivasha town"), None);
    }
}
