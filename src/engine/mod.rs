pub mod analyzer;
pub mod extractor;

pub mod constants {
    include!(concat!(env!("OUT_DIR"), "/analyzer_constants.rs"));
}
