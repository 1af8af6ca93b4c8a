use calc_core::RawInputs;
use toml::{Table, Value};

use crate::loader::BatchLoadError;

/// Read the form values of one calculation from a flat TOML table.
///
/// Strings are taken verbatim; integers, floats and booleans are rendered
/// back to text so the engine parses them like typed input. Arrays, tables
/// and datetimes are rejected.
///
/// ```
/// let inputs = calc_data::load_inputs_toml("price = 35000\nrate = 5.5\n").unwrap();
///
/// assert_eq!(inputs.get("price"), Some("35000"));
/// assert_eq!(inputs.get("rate"), Some("5.5"));
/// ```
pub fn load_inputs_toml(text: &str) -> Result<RawInputs, BatchLoadError> {
    let table: Table = text.parse()?;
    let mut inputs = RawInputs::new();

    for (key, value) in table {
        let text = match value {
            Value::String(s) => s,
            Value::Integer(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Boolean(b) => b.to_string(),
            Value::Datetime(_) | Value::Array(_) | Value::Table(_) => {
                return Err(BatchLoadError::UnsupportedValue { key });
            }
        };
        inputs.insert(key, text);
    }

    Ok(inputs)
}
