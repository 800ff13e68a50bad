//! Result of a pipeline run

use serde::Serialize;
use std::fmt;

/// Mean and population standard deviation of the analysed column
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnalysisSummary {
    pub average: f64,
    pub std_deviation: f64,
}

impl fmt::Display for AnalysisSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Average: {:.2}", self.average)?;
        write!(f, "Standard Deviation: {:.2}", self.std_deviation)
    }
}
