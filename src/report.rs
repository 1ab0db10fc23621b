/// Rendering of benchmark reports for stdout
use crate::types::{BenchReport, OutputFormat, Result};

/// Three-line text report, lined up with the C and Python runs of the suite
pub fn render_text(report: &BenchReport) -> String {
    let mut content = String::new();
    content.push_str(&format!("{}:\n", report.label));
    content.push_str(&format!("Resultado: {}\n", report.result));
    content.push_str(&format!(
        "Tempo de execução: {:.4} segundos\n",
        report.elapsed_secs
    ));
    content
}

/// Pretty-printed JSON object with every report field
pub fn render_json(report: &BenchReport) -> Result<String> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}

pub fn render(report: &BenchReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => render_json(report),
    }
}
