pub mod deleted;
pub mod parse;
