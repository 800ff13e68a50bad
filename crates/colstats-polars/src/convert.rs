//! Conversion between polars cells and [`Value`]

use crate::{Error, Result};
use colstats_core::Value;
use polars::prelude::*;

/// Convert a single polars cell
///
/// Nulls and NaN floats become [`Value::Missing`]. Types without a numeric
/// or boolean meaning keep their display text.
pub fn cell_value(cell: AnyValue<'_>) -> Value {
    match cell {
        AnyValue::Null => Value::Missing,
        AnyValue::Boolean(b) => Value::Bool(b),
        AnyValue::Int32(v) => Value::Integer(v as i64),
        AnyValue::Int64(v) => Value::Integer(v),
        AnyValue::UInt32(v) => Value::Integer(v as i64),
        AnyValue::UInt64(v) => match i64::try_from(v) {
            Ok(i) => Value::Integer(i),
            Err(_) => Value::Float(v as f64),
        },
        AnyValue::Float32(v) => float_value(v as f64),
        AnyValue::Float64(v) => float_value(v),
        AnyValue::String(s) => Value::String(s.to_string()),
        AnyValue::StringOwned(s) => Value::String(s.to_string()),
        other => Value::String(other.to_string()),
    }
}

fn float_value(v: f64) -> Value {
    if v.is_nan() {
        Value::Missing
    } else {
        Value::Float(v)
    }
}

/// Look up a column by name
pub(crate) fn lookup_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.get_column_index(name)
        .map(|idx| &df.get_columns()[idx])
        .ok_or_else(|| Error::ColumnNotFound(name.to_string()))
}

/// All cells of a column in row order, missing cells included
pub fn column_values(df: &DataFrame, name: &str) -> Result<Vec<Value>> {
    let column = lookup_column(df, name)?;
    let series = column.as_materialized_series();
    (0..series.len())
        .map(|i| -> Result<Value> { Ok(cell_value(series.get(i)?)) })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_conversion() {
        assert_eq!(cell_value(AnyValue::Null), Value::Missing);
        assert_eq!(cell_value(AnyValue::Int64(7)), Value::Integer(7));
        assert_eq!(cell_value(AnyValue::Float64(1.5)), Value::Float(1.5));
        assert_eq!(cell_value(AnyValue::Float64(f64::NAN)), Value::Missing);
        assert_eq!(cell_value(AnyValue::Boolean(true)), Value::Bool(true));
        assert_eq!(cell_value(AnyValue::String("oops")), Value::from("oops"));
        assert_eq!(cell_value(AnyValue::UInt64(u64::MAX)), Value::Float(u64::MAX as f64));
    }

    #[test]
    fn test_column_values_with_nulls() {
        let df = df!["value" => [Some(1.0), None, Some(3.0)]].unwrap();
        let values = column_values(&df, "value").unwrap();
        assert_eq!(
            values,
            vec![Value::Float(1.0), Value::Missing, Value::Float(3.0)]
        );
    }

    #[test]
    fn test_missing_column() {
        let df = df!["value" => [1i64, 2, 3]].unwrap();
        assert!(matches!(
            column_values(&df, "other"),
            Err(Error::ColumnNotFound(name)) if name == "other"
        ));
    }
}
