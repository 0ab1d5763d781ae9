//! Cleaned daily CSV reader.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use clima_series::{DailyObservation, DailySeries, Variable};
use tracing::{debug, info};

use crate::error::IoError;

/// Field values treated as "no value" besides the empty field.
const MISSING_MARKERS: [&str; 4] = ["nan", "NaN", "NA", "null"];

// ---------------------------------------------------------------------------
// ReaderConfig
// ---------------------------------------------------------------------------

/// Column names and date format of the cleaned daily CSV.
///
/// The defaults match the cleaned-data layout: `date`, `temp_max`,
/// `temp_min`, `temp_mean`, `precipitation`, with optional `year` and
/// `day_of_year` columns and ISO dates.
#[derive(Debug, Clone, PartialEq)]
pub struct ReaderConfig {
    date_column: String,
    year_column: String,
    day_of_year_column: String,
    variable_columns: BTreeMap<Variable, String>,
    date_format: String,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            date_column: "date".to_string(),
            year_column: "year".to_string(),
            day_of_year_column: "day_of_year".to_string(),
            variable_columns: Variable::ALL
                .into_iter()
                .map(|v| (v, v.name().to_string()))
                .collect(),
            date_format: "%Y-%m-%d".to_string(),
        }
    }
}

impl ReaderConfig {
    /// Sets the date column name.
    pub fn with_date_column(mut self, name: impl Into<String>) -> Self {
        self.date_column = name.into();
        self
    }

    /// Sets the optional year column name.
    pub fn with_year_column(mut self, name: impl Into<String>) -> Self {
        self.year_column = name.into();
        self
    }

    /// Sets the optional day-of-year column name.
    pub fn with_day_of_year_column(mut self, name: impl Into<String>) -> Self {
        self.day_of_year_column = name.into();
        self
    }

    /// Sets the column holding `variable`.
    pub fn with_variable_column(mut self, variable: Variable, name: impl Into<String>) -> Self {
        self.variable_columns.insert(variable, name.into());
        self
    }

    /// Sets the `chrono` format string of the date column.
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// Returns the date column name.
    pub fn date_column(&self) -> &str {
        &self.date_column
    }

    /// Returns the optional year column name.
    pub fn year_column(&self) -> &str {
        &self.year_column
    }

    /// Returns the optional day-of-year column name.
    pub fn day_of_year_column(&self) -> &str {
        &self.day_of_year_column
    }

    /// Returns the column holding `variable`.
    pub fn variable_column(&self, variable: Variable) -> &str {
        self.variable_columns
            .get(&variable)
            .map_or(variable.name(), String::as_str)
    }

    /// Returns the date format.
    pub fn date_format(&self) -> &str {
        &self.date_format
    }
}

// ---------------------------------------------------------------------------
// Reading
// ---------------------------------------------------------------------------

/// Reads a cleaned daily CSV file into a validated [`DailySeries`].
///
/// # Errors
///
/// - [`IoError::FileNotFound`] if `path` does not exist.
/// - [`IoError::MissingColumn`] if a required column is absent.
/// - [`IoError::Parse`] for an unparseable date or number.
/// - [`IoError::Validation`] if the rows break the input contract.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn read_daily_csv(path: &Path, config: &ReaderConfig) -> Result<DailySeries, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = std::fs::File::open(path)?;
    let series = parse_daily_csv(file, &path.display().to_string(), config)?;
    info!(
        n_days = series.len(),
        n_years = series.n_years(),
        "daily observations loaded"
    );
    Ok(series)
}

/// Parses cleaned daily CSV from any reader. `source_name` labels errors.
///
/// Empty fields and the markers `nan`, `NaN`, `NA`, `null` are missing
/// values. When `year` or `day_of_year` columns are present they are kept
/// and checked against the date; otherwise both are derived from it.
pub fn parse_daily_csv<R: Read>(
    reader: R,
    source_name: &str,
    config: &ReaderConfig,
) -> Result<DailySeries, IoError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let find = |name: &str| headers.iter().position(|h| h == name);
    let require = |name: &str| {
        find(name).ok_or_else(|| IoError::MissingColumn {
            name: name.to_string(),
            source_name: source_name.to_string(),
        })
    };

    let date_idx = require(config.date_column())?;
    let var_idx: Vec<(Variable, usize)> = Variable::ALL
        .into_iter()
        .map(|v| require(config.variable_column(v)).map(|i| (v, i)))
        .collect::<Result<_, _>>()?;
    let year_idx = find(config.year_column());
    let doy_idx = find(config.day_of_year_column());
    debug!(?year_idx, ?doy_idx, "optional calendar columns");

    let mut observations = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());
        let field = |idx: usize| record.get(idx).unwrap_or("");
        let parse_err = |column: &str, reason: String| IoError::Parse {
            line,
            column: column.to_string(),
            reason,
        };

        let date = NaiveDate::parse_from_str(field(date_idx), config.date_format())
            .map_err(|e| parse_err(config.date_column(), format!("{e}: '{}'", field(date_idx))))?;

        let mut values = [None; 4];
        for (slot, &(variable, idx)) in values.iter_mut().zip(&var_idx) {
            *slot = parse_value(field(idx))
                .map_err(|reason| parse_err(config.variable_column(variable), reason))?;
        }
        let [temp_max, temp_min, temp_mean, precipitation] = values;
        let mut obs = DailyObservation::new(date, temp_max, temp_min, temp_mean, precipitation);

        if let Some(idx) = year_idx {
            obs.year = field(idx)
                .parse()
                .map_err(|e| parse_err(config.year_column(), format!("{e}: '{}'", field(idx))))?;
        }
        if let Some(idx) = doy_idx {
            obs.day_of_year = field(idx).parse().map_err(|e| {
                parse_err(config.day_of_year_column(), format!("{e}: '{}'", field(idx)))
            })?;
        }
        observations.push(obs);
    }

    Ok(DailySeries::new(observations)?)
}

/// Parses one numeric field; missing markers become `None`.
fn parse_value(s: &str) -> Result<Option<f64>, String> {
    if s.is_empty() || MISSING_MARKERS.contains(&s) {
        return Ok(None);
    }
    s.parse::<f64>()
        .map(Some)
        .map_err(|e| format!("{e}: '{s}'"))
}
