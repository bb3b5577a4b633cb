use std::fmt;

/// Property category inferred from listing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyType {
    House,
    Apartment,
    Villa,
    Maisonette,
    Townhouse,
    Bungalow,
    Mansion,
    Land,
    Plot,
    Other,
}

impl PropertyType {
    /// Keyword scan order for Jiji listing text. First match wins;
    /// callers fall back to `Other`.
    pub const JIJI_SCAN_ORDER: &'static [PropertyType] = &[
        PropertyType::Apartment,
        PropertyType::House,
        PropertyType::Villa,
        PropertyType::Maisonette,
        PropertyType::Townhouse,
        PropertyType::Bungalow,
        PropertyType::Mansion,
        PropertyType::Land,
        PropertyType::Plot,
    ];

    /// BuyRentKenya scans more specific types before generic ones and
    /// falls back to `House` (its categories are house-centric). No
    /// land-like entries: BRK never infers Land/Plot, and its
    /// case-folded matching would otherwise fire `Land` on
    /// neighborhood names like "Westlands".
    pub const BRK_SCAN_ORDER: &'static [PropertyType] = &[
        PropertyType::Townhouse,
        PropertyType::Villa,
        PropertyType::Maisonette,
        PropertyType::Bungalow,
        PropertyType::Mansion,
        PropertyType::Apartment,
        PropertyType::House,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::House => "House",
            PropertyType::Apartment => "Apartment",
            PropertyType::Villa => "Villa",
            PropertyType::Maisonette => "Maisonette",
            PropertyType::Townhouse => "Townhouse",
            PropertyType::Bungalow => "Bungalow",
            PropertyType::Mansion => "Mansion",
            PropertyType::Land => "Land",
            PropertyType::Plot => "Plot",
            PropertyType::Other => "Other",
        }
    }

    /// First type whose proper-case keyword appears in `text`,
    /// scanning in the given per-source order. Jiji cards capitalize
    /// type words, and the exact-case match keeps neighborhood names
    /// like "Westlands" or "Parklands" from satisfying `Land`.
    pub fn first_in(text: &str, scan_order: &[PropertyType]) -> Option<PropertyType> {
        scan_order
            .iter()
            .copied()
            .find(|t| text.contains(t.label()))
    }

    /// Case-folded variant for BuyRentKenya's free-form card text,
    /// which spells types in lowercase. Only safe with scan orders
    /// that hold no land-like entries.
    pub fn first_in_ignore_case(text: &str, scan_order: &[PropertyType]) -> Option<PropertyType> {
        let lower = text.to_lowercase();
        scan_order
            .iter()
            .copied()
            .find(|t| lower.contains(&t.label().to_lowercase()))
    }

    /// Land and plots have no rooms; bedroom/bathroom counts extracted
    /// from their text describe something else (often nearby builds).
    pub fn is_land_like(&self) -> bool {
        matches!(self, PropertyType::Land | PropertyType::Plot)
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
