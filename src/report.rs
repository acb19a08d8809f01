use std::{
    fmt,
    fs::File,
    io::{self, Write},
    path::Path,
};

use crate::error::SalesError;

pub const DEFAULT_LABEL: &str = "TC3";

#[derive(Debug, PartialEq, Clone)]
pub struct Report {
    pub label: String,
    pub total_sales: f64,
    /// Seconds.
    pub elapsed_time: f64,
    /// Seconds.
    pub calculation_time: f64,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.label)?;
        writeln!(f, "TOTAL SALES: {:.2}", self.total_sales)?;
        writeln!(
            f,
            "TIME ELAPSED FOR EXECUTION: {:.6} seconds",
            self.elapsed_time
        )?;
        writeln!(
            f,
            "TIME FOR DATA CALCULATION: {:.6} seconds",
            self.calculation_time
        )
    }
}

impl Report {
    pub fn print(&self, output: &mut dyn Write) -> io::Result<()> {
        write!(output, "{}", self)?;
        output.flush()
    }

    /// Replaces the file at `path` with the rendered report.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), SalesError> {
        let path = path.as_ref();
        File::create(path)
            .and_then(|mut file| file.write_all(self.to_string().as_bytes()))
            .map_err(|source| SalesError::WriteReport {
                path: path.to_path_buf(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn report() -> Report {
        Report {
            label: DEFAULT_LABEL.to_string(),
            total_sales: 6.0,
            elapsed_time: 0.0123456789,
            calculation_time: 0.000042,
        }
    }

    #[test]
    fn renders_four_lines() {
        let expected = "TC3\n\
                        TOTAL SALES: 6.00\n\
                        TIME ELAPSED FOR EXECUTION: 0.012346 seconds\n\
                        TIME FOR DATA CALCULATION: 0.000042 seconds\n";

        assert_eq!(report().to_string(), expected);
    }

    #[test]
    fn total_rounds_to_two_decimals() {
        let report = Report {
            total_sales: 2481.866,
            ..report()
        };

        assert!(report.to_string().contains("TOTAL SALES: 2481.87\n"));
    }

    #[test]
    fn print_matches_file_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("SalesResults.txt");
        let mut console = Vec::new();

        report().print(&mut console).unwrap();
        report().write_to(&path).unwrap();

        assert_eq!(fs::read(&path).unwrap(), console);
    }

    #[test]
    fn write_overwrites_previous_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("SalesResults.txt");
        fs::write(&path, "a much longer previous report that must disappear\n".repeat(10)).unwrap();

        report().write_to(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), report().to_string());
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("SalesResults.txt");

        let err = report().write_to(&path).unwrap_err();

        assert!(matches!(err, SalesError::WriteReport { .. }));
    }
}
