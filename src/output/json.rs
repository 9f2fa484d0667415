use super::Formatter;
use crate::processing::FilterRun;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, run: &FilterRun, limit: usize) -> String {
        let shown = limit.min(run.output.len());
        serde_json::json!({
            "name": run.name,
            "coefficients": run.coefficients,
            "input": &run.input[..shown],
            "output": &run.output[..shown],
        })
        .to_string()
    }
}
