mod listing;
mod property_type;
mod source;

pub use listing::{Candidate, ListingRecord};
pub use property_type::PropertyType;
pub use source::Source;
