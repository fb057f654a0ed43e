use std::io::Write;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::config::OutputFormat;
use crate::error::Result;

/// The first line each strategy prints, ahead of its cycle count.
pub trait OutcomeLine {
    fn outcome_line(&self) -> String;
}

/// One strategy's outcome and the ticks of every timed run.
#[derive(Debug, Clone, PartialEq)]
pub struct Report<R> {
    pub name: String,
    pub outcome: R,
    pub cycles: Vec<u64>,
}

impl<R> Report<R> {
    pub fn min(&self) -> u64 {
        self.cycles.iter().copied().min().unwrap_or(0)
    }

    pub fn max(&self) -> u64 {
        self.cycles.iter().copied().max().unwrap_or(0)
    }

    pub fn median(&self) -> f64 {
        if self.cycles.is_empty() {
            return 0.0;
        }
        let mut sorted = self.cycles.clone();
        sorted.sort_unstable();
        let mid = sorted.len() / 2;
        if sorted.len() % 2 == 0 {
            (sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0
        } else {
            sorted[mid] as f64
        }
    }

    pub fn mean(&self) -> f64 {
        if self.cycles.is_empty() {
            return 0.0;
        }
        self.cycles.iter().map(|&c| c as f64).sum::<f64>() / self.cycles.len() as f64
    }

    /// Sample variance; zero below two samples.
    pub fn variance(&self) -> f64 {
        if self.cycles.len() < 2 {
            return 0.0;
        }
        let mean = self.mean();
        let sum_sq: f64 = self.cycles.iter().map(|&c| (c as f64 - mean).powi(2)).sum();
        sum_sq / (self.cycles.len() - 1) as f64
    }

    fn cycles_text(&self) -> String {
        match self.cycles.as_slice() {
            [single] => single.to_string(),
            _ => format!(
                "{} (min {}, max {}, n={})",
                self.median(),
                self.min(),
                self.max(),
                self.cycles.len()
            ),
        }
    }
}

impl<R: Serialize> Serialize for Report<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Report", 6)?;
        s.serialize_field("name", &self.name)?;
        s.serialize_field("outcome", &self.outcome)?;
        s.serialize_field("cycles", &self.cycles)?;
        s.serialize_field("min", &self.min())?;
        s.serialize_field("median", &self.median())?;
        s.serialize_field("variance", &self.variance())?;
        s.end()
    }
}

/// A titled group of reports, e.g. one input set.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Section<R> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub reports: Vec<Report<R>>,
}

/// Everything one driver run produced.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Document<R> {
    pub benchmark: &'static str,
    pub clock: &'static str,
    pub sections: Vec<Section<R>>,
}

impl<R: OutcomeLine + Serialize> Document<R> {
    pub fn render<W: Write>(&self, format: OutputFormat, w: &mut W) -> Result<()> {
        match format {
            OutputFormat::Human => self.render_human(w),
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *w, self)?;
                writeln!(w)?;
                Ok(())
            }
        }
    }

    fn render_human<W: Write>(&self, w: &mut W) -> Result<()> {
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                writeln!(w)?;
            }
            if let Some(title) = &section.title {
                writeln!(w, "{title}")?;
                writeln!(w, "{}", "=".repeat(title.len()))?;
            }
            for report in &section.reports {
                writeln!(w, "{}", report.outcome.outcome_line())?;
                writeln!(w, "{}: {}\n--", report.name, report.cycles_text())?;
            }
        }
        Ok(())
    }
}
