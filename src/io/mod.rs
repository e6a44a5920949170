pub mod input;
pub mod output;

pub use input::{load_catalog_file, parse_catalog_json};
pub use output::{write_transcript_json, MinutesDocument};
