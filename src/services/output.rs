use crate::domain::models::JsonOut;
use serde::Serialize;

/// Wraps `data` in the `{ "ok": true, "data": ... }` envelope.
pub fn json_envelope<T: Serialize>(data: T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&JsonOut { ok: true, data })?)
}

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!("{}", json_envelope(data)?);
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!("{}", json_envelope(&data)?);
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

/// Placeholder for an absent text column.
pub fn or_dash(value: Option<impl ToString>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}
