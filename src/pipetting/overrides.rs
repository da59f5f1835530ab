//! Optimized pipetting parameters keyed by pipette model and liquid name.
//!
//! The table is a CSV file with one row per (pipette model, liquid) pair:
//!
//! ```text
//! Pipette,Liquid,Aspiration Rate (µL/s),Aspiration Delay (s),Aspiration Withdrawal Rate (mm/s),Dispense Rate (µL/s),Dispense Delay (s),Blowout Rate (µL/s),Touch tip
//! P300,Glycerol 90%,10,5,1,10,5,2,Yes
//! ```
//!
//! Columns are located by header name, so their order is free and extra
//! columns are ignored. Fields follow RFC 4180 quoting and are trimmed.
//! `Touch tip` is true only for the exact value `Yes`.

mod error;

pub use error::{OverrideTableError, RowError};

use std::{fs, io, path::Path, time::Duration};

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;
use tracing::{trace, warn};

use crate::support::constraint::{Constrained, NonNegative, StrictlyPositive};

/// File name conventionally used for the override table.
pub const DEFAULT_OVERRIDE_TABLE_FILE: &str = "optimized_pipette_parameters.csv";

const PIPETTE: &str = "Pipette";
const LIQUID: &str = "Liquid";
const ASPIRATION_RATE: &str = "Aspiration Rate (\u{b5}L/s)";
const ASPIRATION_DELAY: &str = "Aspiration Delay (s)";
const WITHDRAWAL_RATE: &str = "Aspiration Withdrawal Rate (mm/s)";
const DISPENSE_RATE: &str = "Dispense Rate (\u{b5}L/s)";
const DISPENSE_DELAY: &str = "Dispense Delay (s)";
const BLOWOUT_RATE: &str = "Blowout Rate (\u{b5}L/s)";
const TOUCH_TIP: &str = "Touch tip";

const COLUMNS: [&str; 9] = [
    PIPETTE,
    LIQUID,
    ASPIRATION_RATE,
    ASPIRATION_DELAY,
    WITHDRAWAL_RATE,
    DISPENSE_RATE,
    DISPENSE_DELAY,
    BLOWOUT_RATE,
    TOUCH_TIP,
];

/// Optimized parameters for one liquid on one pipette model.
///
/// Rates are in µL/s and the withdrawal speed in mm/s.
#[derive(Debug, Clone, PartialEq)]
pub struct Overrides {
    pub pipette: String,
    pub liquid: String,
    pub aspiration_rate: f64,
    pub aspiration_delay: Duration,
    pub withdrawal_speed: f64,
    pub dispense_rate: f64,
    pub dispense_delay: Duration,
    pub blowout_rate: f64,
    pub touch_tip: bool,
}

/// A loaded override table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverrideTable {
    rows: Vec<Overrides>,
}

/// Returns the pipette model for an instrument name.
///
/// The model is the part of the name before the first `_`, uppercased:
/// `p300_single_gen2` becomes `P300`.
#[must_use]
pub fn pipette_model(instrument_name: &str) -> String {
    instrument_name
        .split_once('_')
        .map_or(instrument_name, |(model, _)| model)
        .to_uppercase()
}

impl OverrideTable {
    /// Creates a table from already-validated rows.
    #[must_use]
    pub fn new(rows: Vec<Overrides>) -> Self {
        Self { rows }
    }

    /// Reads a table from `path`.
    ///
    /// A missing file is not an error: a warning is logged and an empty table
    /// is returned, so handling falls back to computed defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, OverrideTableError> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(text) => Self::parse(&text),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                warn!(
                    path = %path.display(),
                    "override table not found; optimized parameters will not be available"
                );
                Ok(Self::default())
            }
            Err(source) => Err(OverrideTableError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Parses a table from CSV text.
    ///
    /// # Errors
    ///
    /// Returns an error if the header lacks a required column, the CSV is
    /// malformed, or a value is out of range.
    pub fn parse(text: &str) -> Result<Self, OverrideTableError> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .from_reader(text.trim_start_matches('\u{feff}').as_bytes());

        let headers = normalize_headers(reader.headers()?);
        if headers.is_empty() {
            return Err(OverrideTableError::MissingHeader);
        }
        if let Some(column) = COLUMNS
            .into_iter()
            .find(|column| !headers.iter().any(|name| name == *column))
        {
            return Err(OverrideTableError::MissingColumn(column));
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let line = record.position().map_or(0, csv::Position::line);
            let raw: RawRow = record.deserialize(Some(&headers))?;
            rows.push(
                raw.validate()
                    .map_err(|source| OverrideTableError::Row { line, source })?,
            );
        }

        Ok(Self { rows })
    }

    /// Finds the overrides for a liquid on the named instrument.
    ///
    /// The instrument name is reduced with [`pipette_model`] before matching.
    /// When several rows match, the first wins.
    #[must_use]
    pub fn lookup(&self, instrument_name: &str, liquid: &str) -> Option<&Overrides> {
        let model = pipette_model(instrument_name);
        let found = self
            .rows
            .iter()
            .find(|row| row.pipette == model && row.liquid == liquid);

        if found.is_none() {
            trace!(pipette = %model, liquid, "no override row");
        }
        found
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Overrides> {
        self.rows.iter()
    }
}

/// One table row as written, before range checks.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Pipette")]
    pipette: String,
    #[serde(rename = "Liquid")]
    liquid: String,
    #[serde(rename = "Aspiration Rate (\u{b5}L/s)")]
    aspiration_rate: f64,
    #[serde(rename = "Aspiration Delay (s)")]
    aspiration_delay: f64,
    #[serde(rename = "Aspiration Withdrawal Rate (mm/s)")]
    withdrawal_rate: f64,
    #[serde(rename = "Dispense Rate (\u{b5}L/s)")]
    dispense_rate: f64,
    #[serde(rename = "Dispense Delay (s)")]
    dispense_delay: f64,
    #[serde(rename = "Blowout Rate (\u{b5}L/s)")]
    blowout_rate: f64,
    #[serde(rename = "Touch tip")]
    touch_tip: String,
}

impl RawRow {
    fn validate(self) -> Result<Overrides, RowError> {
        Ok(Overrides {
            pipette: self.pipette,
            liquid: self.liquid,
            aspiration_rate: rate(ASPIRATION_RATE, self.aspiration_rate)?,
            aspiration_delay: delay(ASPIRATION_DELAY, self.aspiration_delay)?,
            withdrawal_speed: rate(WITHDRAWAL_RATE, self.withdrawal_rate)?,
            dispense_rate: rate(DISPENSE_RATE, self.dispense_rate)?,
            dispense_delay: delay(DISPENSE_DELAY, self.dispense_delay)?,
            blowout_rate: rate(BLOWOUT_RATE, self.blowout_rate)?,
            touch_tip: self.touch_tip == "Yes",
        })
    }
}

/// Rewrites the Greek mu some editors use to the micro sign.
fn normalize_headers(headers: &StringRecord) -> StringRecord {
    headers
        .iter()
        .map(|name| name.replace('\u{3bc}', "\u{b5}"))
        .collect()
}

fn rate(column: &'static str, value: f64) -> Result<f64, RowError> {
    let value = Constrained::<f64, StrictlyPositive>::new(value)
        .map_err(|source| RowError::Constraint { column, source })?;
    Ok(value.into_inner())
}

fn delay(column: &'static str, value: f64) -> Result<Duration, RowError> {
    let seconds =
        NonNegative::new(value).map_err(|source| RowError::Constraint { column, source })?;
    Duration::try_from_secs_f64(seconds.into_inner())
        .map_err(|source| RowError::Delay { column, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{env, process};

    use crate::support::constraint::ConstraintError;

    const HEADER: &str = "Pipette,Liquid,Aspiration Rate (\u{b5}L/s),Aspiration Delay (s),\
        Aspiration Withdrawal Rate (mm/s),Dispense Rate (\u{b5}L/s),Dispense Delay (s),\
        Blowout Rate (\u{b5}L/s),Touch tip";

    fn table(rows: &[&str]) -> String {
        let mut text = String::from(HEADER);
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        text
    }

    #[test]
    fn pipette_model_from_instrument_name() {
        assert_eq!(pipette_model("p300_single_gen2"), "P300");
        assert_eq!(pipette_model("p1000_single_flex"), "P1000");
        assert_eq!(pipette_model("p20"), "P20");
    }

    #[test]
    fn parses_rows() {
        let table = OverrideTable::parse(&table(&[
            "P300,Glycerol 90%,10,5,1,10,5,2,Yes",
            "P300,Water,92.86,1,5,92.86,0.5,92.86,No",
        ]))
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(
            table.lookup("p300_single_gen2", "Glycerol 90%"),
            Some(&Overrides {
                pipette: "P300".into(),
                liquid: "Glycerol 90%".into(),
                aspiration_rate: 10.0,
                aspiration_delay: Duration::from_secs(5),
                withdrawal_speed: 1.0,
                dispense_rate: 10.0,
                dispense_delay: Duration::from_secs(5),
                blowout_rate: 2.0,
                touch_tip: true,
            })
        );

        let water = table.lookup("p300_single_gen2", "Water").unwrap();
        assert!(!water.touch_tip);
        assert_eq!(water.dispense_delay, Duration::from_millis(500));
    }

    #[test]
    fn lookup_requires_both_keys() {
        let table =
            OverrideTable::parse(&table(&["P300,Glycerol 90%,10,5,1,10,5,2,Yes"])).unwrap();

        assert!(table.lookup("p20_single_gen2", "Glycerol 90%").is_none());
        assert!(table.lookup("p300_single_gen2", "glycerol 90%").is_none());
        assert!(table.lookup("p300_multi_gen2", "Glycerol 90%").is_some());
    }

    #[test]
    fn first_matching_row_wins() {
        let table = OverrideTable::parse(&table(&[
            "P300,Water,50,0,5,50,0,50,No",
            "P300,Water,70,0,5,70,0,70,No",
        ]))
        .unwrap();

        let row = table.lookup("p300_single_gen2", "Water").unwrap();
        assert!((row.aspiration_rate - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn columns_are_found_by_name() {
        let text = "Touch tip,Liquid,Notes,Pipette,Blowout Rate (\u{b5}L/s),\
            Dispense Delay (s),Dispense Rate (\u{b5}L/s),\
            Aspiration Withdrawal Rate (mm/s),Aspiration Delay (s),Aspiration Rate (\u{b5}L/s)\n\
            Yes,\"PEG 8000, 50%\",viscous,P20,3,2,4,1,2,5";

        let table = OverrideTable::parse(text).unwrap();
        let row = table.lookup("p20_single_gen2", "PEG 8000, 50%").unwrap();
        assert!((row.aspiration_rate - 5.0).abs() < f64::EPSILON);
        assert!((row.blowout_rate - 3.0).abs() < f64::EPSILON);
        assert!(row.touch_tip);
    }

    #[test]
    fn accepts_greek_mu_and_byte_order_mark() {
        let text = format!(
            "\u{feff}{}\nP300,Water,1,0,1,1,0,1,No",
            HEADER.replace('\u{b5}', "\u{3bc}")
        );
        let table = OverrideTable::parse(&text).unwrap();
        assert!(table.lookup("p300", "Water").is_some());
    }

    #[test]
    fn blank_lines_are_skipped() {
        let table = OverrideTable::parse(&format!(
            "{}\n\n{}\n\n",
            table(&["P300,Water,1,0,1,1,0,1,No"]),
            "P20,Water,1,0,1,1,0,1,No"
        ))
        .unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn quoted_fields_may_span_lines() {
        let table = OverrideTable::parse(&table(&[
            "P300,\"Glycerol\n90%\",10,5,1,10,5,2,Yes",
            "P300,\"Say \"\"when\"\"\",1,0,1,1,0,1,No",
        ]))
        .unwrap();

        assert_eq!(table.len(), 2);
        let glycerol = table.lookup("p300_single_gen2", "Glycerol\n90%").unwrap();
        assert!(glycerol.touch_tip);
        assert!(table.lookup("p300_single_gen2", "Say \"when\"").is_some());
    }

    #[test]
    fn missing_column_is_reported() {
        let err = OverrideTable::parse("Pipette,Liquid\nP300,Water").unwrap_err();
        assert!(matches!(
            err,
            OverrideTableError::MissingColumn(ASPIRATION_RATE)
        ));

        assert!(matches!(
            OverrideTable::parse("").unwrap_err(),
            OverrideTableError::MissingHeader
        ));
    }

    #[test]
    fn malformed_rows_are_csv_errors() {
        let err = OverrideTable::parse(&table(&[
            "P300,Water,1,0,1,1,0,1,No",
            "P300,Ethanol,fast,0,1,1,0,1,No",
        ]))
        .unwrap_err();
        let OverrideTableError::Csv(err) = err else {
            panic!("unexpected error: {err}");
        };
        assert!(matches!(err.kind(), csv::ErrorKind::Deserialize { .. }));

        let err = OverrideTable::parse(&table(&["P300,Water,1,0,1"])).unwrap_err();
        let OverrideTableError::Csv(err) = err else {
            panic!("unexpected error: {err}");
        };
        assert!(matches!(
            err.kind(),
            csv::ErrorKind::UnequalLengths {
                expected_len: 9,
                len: 5,
                ..
            }
        ));
    }

    #[test]
    fn range_errors_report_line() {
        let err = OverrideTable::parse(&table(&[
            "P300,Water,1,0,1,1,0,1,No",
            "P300,Ethanol,1,0,1,1,0,-1,No",
        ]))
        .unwrap_err();
        match err {
            OverrideTableError::Row { line, source } => {
                assert_eq!(line, 3);
                assert_eq!(
                    source,
                    RowError::Constraint {
                        column: BLOWOUT_RATE,
                        source: ConstraintError::Negative
                    }
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rates_and_delays_are_range_checked() {
        let err = OverrideTable::parse(&table(&["P300,Water,0,0,1,1,0,1,No"])).unwrap_err();
        assert!(matches!(
            err,
            OverrideTableError::Row {
                source: RowError::Constraint {
                    column: ASPIRATION_RATE,
                    source: ConstraintError::Zero
                },
                ..
            }
        ));

        let err = OverrideTable::parse(&table(&["P300,Water,1,-2,1,1,0,1,No"])).unwrap_err();
        assert!(matches!(
            err,
            OverrideTableError::Row {
                source: RowError::Constraint {
                    column: ASPIRATION_DELAY,
                    source: ConstraintError::Negative
                },
                ..
            }
        ));

        let err = OverrideTable::parse(&table(&["P300,Water,1,inf,1,1,0,1,No"])).unwrap_err();
        assert!(matches!(
            err,
            OverrideTableError::Row {
                source: RowError::Delay {
                    column: ASPIRATION_DELAY,
                    ..
                },
                ..
            }
        ));
    }

    #[test]
    fn missing_file_yields_empty_table() {
        // Only the recovery is checked here; the warning goes to whatever
        // `tracing` subscriber the caller installs.
        let path = env::temp_dir().join(format!(
            "liquidlib-missing-{}-{DEFAULT_OVERRIDE_TABLE_FILE}",
            process::id()
        ));
        let table = OverrideTable::load(&path).unwrap();
        assert!(table.is_empty());
        assert!(table.lookup("p300_single_gen2", "Water").is_none());
    }

    #[test]
    fn loads_from_file() {
        let path = env::temp_dir().join(format!("liquidlib-overrides-{}.csv", process::id()));
        fs::write(&path, table(&["P300,Glycerol 90%,10,5,1,10,5,2,Yes"])).unwrap();

        let loaded = OverrideTable::load(&path);
        fs::remove_file(&path).unwrap();

        let table = loaded.unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.iter().next().unwrap().liquid, "Glycerol 90%");
    }

    #[test]
    fn unreadable_path_is_an_error() {
        // A directory exists but cannot be read as a file.
        let err = OverrideTable::load(env::temp_dir()).unwrap_err();
        assert!(matches!(err, OverrideTableError::Io { .. }));
    }
}
