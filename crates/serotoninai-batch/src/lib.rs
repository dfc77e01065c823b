//! serotoninai-batch: client-side batch processing.
//!
//! 1. `ingest`: pull compound names out of an uploaded CSV
//! 2. `preview`: summary table of a batch response
//! 3. `export`: flatten results and serialize them back to CSV

pub mod ingest;
pub mod preview;
pub mod export;

pub use export::{export_filename, flatten_record, to_csv};
pub use ingest::{compound_column, extract_compounds, parse_compounds};
pub use preview::{build_preview, PreviewTable};
