use super::Formatter;
use crate::processing::FilterRun;

pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format(&self, run: &FilterRun, limit: usize) -> String {
        let name = quote_field(&run.name);
        run.input
            .iter()
            .zip(&run.output)
            .take(limit)
            .enumerate()
            .map(|(n, (x, y))| format!("{},{},{},{}", name, n, x, y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn header(&self) -> Option<&'static str> {
        Some("filter,n,input,output")
    }
}

fn quote_field(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
