//! Polars export of label tables, and series import from a frame.

use chrono::{DateTime, NaiveDateTime};
use polars::prelude::*;
use thiserror::Error;

use crate::annotate::{DegreeLabels, DirectionLabels};
use crate::domain::{SeriesError, TimeSeries};
use crate::signals::SignalTable;

#[derive(Debug, Error)]
pub enum FrameError {
    #[error("polars: {0}")]
    Polars(#[from] PolarsError),

    #[error("missing column '{0}'")]
    MissingColumn(String),

    #[error("null timestamp at row {0}")]
    NullTime(usize),

    #[error("timestamp out of range at row {0}")]
    TimeOutOfRange(usize),

    #[error(transparent)]
    Series(#[from] SeriesError),
}

fn time_column(index: impl Iterator<Item = NaiveDateTime>) -> Result<Column, FrameError> {
    let millis: Vec<i64> = index.map(|t| t.and_utc().timestamp_millis()).collect();
    Ok(Column::new("time".into(), millis)
        .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))?)
}

/// Columns: `time`, `value`, `peak`, `trough`, `pt`.
pub fn degree_frame(labels: &DegreeLabels) -> Result<DataFrame, FrameError> {
    Ok(DataFrame::new(vec![
        time_column(labels.index.iter().copied())?,
        Column::new("value".into(), labels.values.clone()),
        Column::new("peak".into(), labels.peak.clone()),
        Column::new("trough".into(), labels.trough.clone()),
        Column::new("pt".into(), labels.pt.clone()),
    ])?)
}

/// Columns: `position`, `time`, `value`, `direction`.
pub fn direction_frame(labels: &DirectionLabels) -> Result<DataFrame, FrameError> {
    let positions: Vec<u64> = labels.positions.iter().map(|&p| p as u64).collect();
    let direction: Vec<i32> = labels.direction.iter().map(|&d| d as i32).collect();
    Ok(DataFrame::new(vec![
        Column::new("position".into(), positions),
        time_column(labels.index.iter().copied())?,
        Column::new("value".into(), labels.values.clone()),
        Column::new("direction".into(), direction),
    ])?)
}

/// Columns: `position`, `time`, `value`, `signal`, `pos`.
pub fn signal_frame(table: &SignalTable) -> Result<DataFrame, FrameError> {
    let rows = table.rows();
    Ok(DataFrame::new(vec![
        Column::new(
            "position".into(),
            rows.iter().map(|r| r.position as u64).collect::<Vec<_>>(),
        ),
        time_column(rows.iter().map(|r| r.time))?,
        Column::new("value".into(), rows.iter().map(|r| r.value).collect::<Vec<_>>()),
        Column::new(
            "signal".into(),
            rows.iter().map(|r| r.signal as i32).collect::<Vec<_>>(),
        ),
        Column::new("pos".into(), rows.iter().map(|r| r.pos as i32).collect::<Vec<_>>()),
    ])?)
}

/// Read a series from a datetime (or epoch-millisecond) column and a numeric
/// column. Null values become NaN; null timestamps are an error.
pub fn series_from_frame(
    df: &DataFrame,
    time_col: &str,
    value_col: &str,
) -> Result<TimeSeries, FrameError> {
    let times = df
        .column(time_col)
        .map_err(|_| FrameError::MissingColumn(time_col.to_string()))?
        .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))?
        .cast(&DataType::Int64)?;
    let values = df
        .column(value_col)
        .map_err(|_| FrameError::MissingColumn(value_col.to_string()))?
        .cast(&DataType::Float64)?;

    let millis = times.i64()?;
    let index = millis
        .into_iter()
        .enumerate()
        .map(|(row, ms)| {
            let ms = ms.ok_or(FrameError::NullTime(row))?;
            DateTime::from_timestamp_millis(ms)
                .map(|dt| dt.naive_utc())
                .ok_or(FrameError::TimeOutOfRange(row))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let values = values
        .f64()?
        .into_iter()
        .map(|v| v.unwrap_or(f64::NAN))
        .collect();

    Ok(TimeSeries::new(index, values)?)
}
