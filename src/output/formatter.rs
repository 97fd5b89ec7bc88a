//! Rendering of ranking results and stored resumes

use crate::config::{OutputConfig, OutputFormat};
use crate::error::{Result, ResumeRankerError};
use crate::output::report::{round_score, RankingReport, StoredRecordsView};
use colored::{Color, Colorize};
use std::path::Path;

pub trait OutputFormatter {
    fn format_ranking(&self, report: &RankingReport) -> Result<String>;
    fn format_records(&self, view: &StoredRecordsView) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

pub struct ConsoleFormatter {
    use_colors: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter;

pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{} {}\n", "█".blue().bold(), title.blue().bold())
        } else {
            format!("\n█ {}\n", title)
        }
    }

    fn score_color(score: f32) -> Color {
        match score {
            s if s >= 0.5 => Color::Green,
            s if s >= 0.2 => Color::Yellow,
            _ => Color::Red,
        }
    }

    fn name_width<'a>(names: impl Iterator<Item = &'a str>, header: &str) -> usize {
        names
            .map(|n| n.chars().count())
            .chain(std::iter::once(header.chars().count()))
            .max()
            .unwrap_or(0)
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_ranking(&self, report: &RankingReport) -> Result<String> {
        let mut output = self.format_header("RESUME RANKING");

        if report.results.is_empty() {
            output.push_str("No resumes were ranked.\n");
        } else {
            let width = Self::name_width(report.results.iter().map(|r| r.name.as_str()), "Resume");
            output.push_str(&format!("{:>4}  {:<width$}  {:>8}\n", "#", "Resume", "Score", width = width));
            for (position, result) in report.results.iter().enumerate() {
                let score = format!("{:>8.4}", result.score);
                output.push_str(&format!(
                    "{:>4}  {:<width$}  {}\n",
                    position + 1,
                    result.name,
                    self.colorize(&score, Self::score_color(result.score)),
                    width = width
                ));
            }
        }

        for skipped in &report.skipped {
            output.push_str(&self.colorize(
                &format!("⚠️  Skipped {}: {}\n", skipped.path, skipped.reason),
                Color::Yellow,
            ));
        }

        Ok(output)
    }

    fn format_records(&self, view: &StoredRecordsView) -> Result<String> {
        let mut output = self.format_header("STORED RESUMES");

        if view.is_empty() {
            output.push_str("No resumes found in database.\n");
            return Ok(output);
        }

        let width = Self::name_width(view.rows.iter().map(|r| r.name.as_str()), "Resume Name");
        output.push_str(&format!(
            "{:<width$}  {:>8}  {:<16}  {}\n",
            "Resume Name",
            "Score",
            "Uploaded At",
            "Job Description",
            width = width
        ));
        for row in &view.rows {
            output.push_str(&format!(
                "{:<width$}  {:>8.4}  {:<16}  {}\n",
                row.name,
                row.score,
                row.uploaded_at,
                row.job_description,
                width = width
            ));
        }
        output.push_str(&self.colorize(
            &format!("✅ {} resumes loaded.\n", view.rows.len()),
            Color::Green,
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn to_json<T: serde::Serialize>(&self, value: &T) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(serde_json::to_string(value)?)
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_ranking(&self, report: &RankingReport) -> Result<String> {
        self.to_json(report)
    }

    fn format_records(&self, view: &StoredRecordsView) -> Result<String> {
        self.to_json(view)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    fn escape_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_ranking(&self, report: &RankingReport) -> Result<String> {
        let mut output = String::from("# Resume Ranking\n\n");
        output.push_str(&format!(
            "*Generated: {}*\n\n",
            report.generated_at.format("%Y-%m-%d %H:%M UTC")
        ));

        output.push_str("| # | Resume | Score |\n|---|--------|-------|\n");
        for (position, result) in report.results.iter().enumerate() {
            output.push_str(&format!(
                "| {} | {} | {:.4} |\n",
                position + 1,
                Self::escape_cell(&result.name),
                round_score(result.score)
            ));
        }

        if !report.skipped.is_empty() {
            output.push_str("\n## Skipped Files\n\n");
            for skipped in &report.skipped {
                output.push_str(&format!("- `{}`: {}\n", skipped.path, skipped.reason));
            }
        }

        Ok(output)
    }

    fn format_records(&self, view: &StoredRecordsView) -> Result<String> {
        let mut output = String::from("# Stored Resumes\n\n");
        if view.is_empty() {
            output.push_str("No resumes found in database.\n");
            return Ok(output);
        }

        output.push_str("| Resume Name | Score | Job Description | Uploaded At |\n");
        output.push_str("|-------------|-------|-----------------|-------------|\n");
        for row in &view.rows {
            output.push_str(&format!(
                "| {} | {:.4} | {} | {} |\n",
                Self::escape_cell(&row.name),
                row.score,
                Self::escape_cell(&row.job_description),
                row.uploaded_at
            ));
        }
        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, true)
    }

    pub fn with_options(use_colors: bool, pretty_json: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter,
        }
    }

    pub fn from_config(config: &OutputConfig) -> Self {
        Self::with_options(config.color_output, config.pretty_json)
    }

    fn formatter(&self, format: OutputFormat) -> &dyn OutputFormatter {
        match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Markdown => &self.markdown_formatter,
        }
    }

    pub fn generate_ranking(&self, report: &RankingReport, format: OutputFormat) -> Result<String> {
        self.formatter(format).format_ranking(report)
    }

    pub fn generate_records(&self, view: &StoredRecordsView, format: OutputFormat) -> Result<String> {
        self.formatter(format).format_records(view)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse an output format name given on the command line
pub fn parse_output_format(format: &str) -> Result<OutputFormat> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(ResumeRankerError::InvalidInput(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        ))),
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(file_path, content).map_err(|e| {
        ResumeRankerError::OutputFormatting(format!(
            "Failed to write report to '{}': {}",
            file_path.display(),
            e
        ))
    })
}
