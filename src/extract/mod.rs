pub mod fields;
pub mod gazetteer;
