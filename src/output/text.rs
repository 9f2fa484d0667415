use super::Formatter;
use crate::processing::FilterRun;

pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn format(&self, run: &FilterRun, limit: usize) -> String {
        let rule = "=".repeat(70);
        let mut lines = vec![
            rule.clone(),
            run.name.clone(),
            format!("Coefficients: {:?}", run.coefficients),
            rule,
        ];
        lines.extend(
            run.output
                .iter()
                .take(limit)
                .enumerate()
                .map(|(i, y)| format!("Sample {:2}: {:7.4}", i, y)),
        );
        format!("{}\n", lines.join("\n"))
    }
}
