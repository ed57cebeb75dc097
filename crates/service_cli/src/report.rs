//! Result rendering: table, JSON and CSV.

use pricer_engines::GreeksResult;
use serde::Serialize;
use std::fmt::Write as _;
use std::str::FromStr;

use crate::input::Method;
use crate::{CliError, Result};

/// Output format for command results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Boxed text table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
    /// Comma-separated values with a header row
    Csv,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, csv, table",
                other
            ))),
        }
    }
}

/// Rounded call and put prices from one method.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LegQuotes {
    /// Call price
    pub call: f64,
    /// Put price
    pub put: f64,
}

/// One column per method; `None` when the method was skipped or failed.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MethodQuotes {
    /// Closed-form column
    pub black_scholes: Option<LegQuotes>,
    /// Lattice column
    pub binomial: Option<LegQuotes>,
    /// Simulation column
    pub monte_carlo: Option<LegQuotes>,
    /// 95% confidence half-widths of the simulation column
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monte_carlo_ci95: Option<LegQuotes>,
}

impl MethodQuotes {
    /// Column for `method`.
    pub fn get(&self, method: Method) -> Option<LegQuotes> {
        match method {
            Method::BlackScholes => self.black_scholes,
            Method::Binomial => self.binomial,
            Method::MonteCarlo => self.monte_carlo,
        }
    }

    /// Replaces the column for `method`.
    pub fn set(&mut self, method: Method, quotes: Option<LegQuotes>) {
        match method {
            Method::BlackScholes => self.black_scholes = quotes,
            Method::Binomial => self.binomial = quotes,
            Method::MonteCarlo => self.monte_carlo = quotes,
        }
    }

    /// Cells for the call and put rows, empty where a column is absent.
    fn rows(&self) -> [(&'static str, [String; 3]); 2] {
        let cell = |method: Method, pick: fn(&LegQuotes) -> f64| {
            self.get(method)
                .map(|q| format!("{:.4}", pick(&q)))
                .unwrap_or_default()
        };
        let row = |pick: fn(&LegQuotes) -> f64| Method::ALL.map(|m| cell(m, pick));
        [("Call", row(|q| q.call)), ("Put", row(|q| q.put))]
    }

    /// Renders in `format`.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Table => {
                let headers = Method::ALL.map(Method::label);
                let mut out = render_table("Option", &headers, &self.rows());
                if let Some(ci) = self.monte_carlo_ci95 {
                    let _ = write!(
                        out,
                        "\nMonte Carlo 95% CI: call ±{:.4}, put ±{:.4}",
                        ci.call, ci.put
                    );
                }
                Ok(out)
            }
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Csv => {
                let mut writer = csv::Writer::from_writer(Vec::new());
                writer.write_record(["option", "black_scholes", "binomial", "monte_carlo"])?;
                for (label, cells) in self.rows() {
                    writer.write_record(
                        std::iter::once(label.to_ascii_lowercase()).chain(cells),
                    )?;
                }
                finish_csv(writer)
            }
        }
    }
}

/// Closed-form Greeks for both legs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GreeksReport {
    /// Call sensitivities
    pub call: GreeksResult<f64>,
    /// Put sensitivities
    pub put: GreeksResult<f64>,
}

impl GreeksReport {
    fn rows(&self) -> [(&'static str, [String; 2]); 5] {
        let pair = |pick: fn(&GreeksResult<f64>) -> f64| {
            [format!("{:.4}", pick(&self.call)), format!("{:.4}", pick(&self.put))]
        };
        [
            ("Delta", pair(|g| g.delta)),
            ("Gamma", pair(|g| g.gamma)),
            ("Vega", pair(|g| g.vega)),
            ("Theta", pair(|g| g.theta)),
            ("Rho", pair(|g| g.rho)),
        ]
    }

    /// Renders in `format`.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Table => Ok(render_table("Greek", &["Call", "Put"], &self.rows())),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Csv => {
                let mut writer = csv::Writer::from_writer(Vec::new());
                writer.write_record(["greek", "call", "put"])?;
                for (label, cells) in self.rows() {
                    writer.write_record(
                        std::iter::once(label.to_ascii_lowercase()).chain(cells),
                    )?;
                }
                finish_csv(writer)
            }
        }
    }
}

/// Everything `vanilla price` prints: the method comparison and, when
/// requested, the Greeks.
///
/// JSON output is a single document with the Greeks under `greeks`; the
/// text formats print the two reports one after the other.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PriceReport {
    /// Method comparison
    #[serde(flatten)]
    pub quotes: MethodQuotes,
    /// Closed-form Greeks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub greeks: Option<GreeksReport>,
}

impl PriceReport {
    /// Renders in `format`.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Table | OutputFormat::Csv => {
                let mut out = self.quotes.render(format)?;
                if let Some(greeks) = &self.greeks {
                    if !out.ends_with('\n') {
                        out.push('\n');
                    }
                    out.push('\n');
                    out.push_str(&greeks.render(format)?);
                }
                Ok(out)
            }
        }
    }
}

fn finish_csv(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| CliError::Serialization(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| CliError::Serialization(e.to_string()))
}

/// Box-drawing table with a leading label column.
fn render_table<const N: usize>(
    corner: &str,
    headers: &[&str; N],
    rows: &[(&str, [String; N])],
) -> String {
    let label_width = rows
        .iter()
        .map(|(label, _)| label.len())
        .chain(std::iter::once(corner.len()))
        .max()
        .unwrap_or(0);
    let widths: Vec<usize> = (0..N)
        .map(|i| {
            rows.iter()
                .map(|(_, cells)| cells[i].len())
                .chain(std::iter::once(headers[i].len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let rule = |left: &str, mid: &str, right: &str| {
        let mut line = format!("{}{}", left, "─".repeat(label_width + 2));
        for w in &widths {
            line.push_str(mid);
            line.push_str(&"─".repeat(w + 2));
        }
        line.push_str(right);
        line
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", rule("┌", "┬", "┐"));
    let _ = write!(out, "│ {:<lw$} ", corner, lw = label_width);
    for (h, w) in headers.iter().zip(&widths) {
        let _ = write!(out, "│ {:<w$} ", h, w = w);
    }
    let _ = writeln!(out, "│");
    let _ = writeln!(out, "{}", rule("├", "┼", "┤"));
    for (label, cells) in rows {
        let _ = write!(out, "│ {:<lw$} ", label, lw = label_width);
        for (c, w) in cells.iter().zip(&widths) {
            let _ = write!(out, "│ {:>w$} ", c, w = w);
        }
        let _ = writeln!(out, "│");
    }
    out.push_str(&rule("└", "┴", "┘"));
    out
}
