//! Assertions over `--format json` command output.

use anyhow::{Context, Result};
use serde_json::Value;

fn entries(json: &Value) -> Result<&Vec<Value>> {
    json["content"]["entries"]
        .as_array()
        .context("Expected 'content.entries' array in JSON")
}

/// Assert the number of rows in a list result.
pub fn assert_entry_count(json: &Value, expected: usize) -> Result<()> {
    let entries = entries(json)?;
    if entries.len() != expected {
        anyhow::bail!("Expected {} entries, got {}", expected, entries.len());
    }
    Ok(())
}

/// Assert the current page and page count of a list result.
pub fn assert_page(json: &Value, current: u64, count: u64) -> Result<()> {
    let page = &json["content"]["page"];
    let actual = (
        page["current"].as_u64().context("missing content.page.current")?,
        page["count"].as_u64().context("missing content.page.count")?,
    );
    if actual != (current, count) {
        anyhow::bail!(
            "Expected page {} of {}, got {} of {}",
            current,
            count,
            actual.0,
            actual.1
        );
    }
    Ok(())
}

/// Collect one string field from every entry of a list result.
pub fn entry_field<'a>(json: &'a Value, field: &str) -> Result<Vec<&'a str>> {
    entries(json)?
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            entry[field]
                .as_str()
                .with_context(|| format!("Entry {} missing string field {}", i, field))
        })
        .collect()
}
