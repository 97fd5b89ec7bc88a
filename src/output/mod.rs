//! Output formatting module

pub mod formatter;
pub mod report;

pub use formatter::{parse_output_format, save_report_to_file, OutputFormatter, ReportGenerator};
pub use report::{RankingReport, SkippedFile, StoredRecordsView};
