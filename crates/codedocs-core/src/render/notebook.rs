//! Code-cell extraction from notebook documents.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct Notebook {
    /// Kept loose so non-code cells are never inspected beyond their type
    #[serde(default)]
    cells: Vec<Value>,
}

/// Cell source is usually a list of line fragments, sometimes a single string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CellSource {
    Lines(Vec<String>),
    Text(String),
}

impl Default for CellSource {
    fn default() -> Self {
        CellSource::Lines(Vec::new())
    }
}

impl CellSource {
    fn concat(&self) -> String {
        match self {
            CellSource::Lines(lines) => lines.concat(),
            CellSource::Text(text) => text.clone(),
        }
    }
}

/// Extract the text of every code cell.
///
/// Fragments within a cell are concatenated as-is; cells are joined with `\n`.
pub fn extract_code(json: &str) -> Result<String, serde_json::Error> {
    let value: Value = serde_json::from_str(json)?;
    if !value.is_object() {
        return Err(serde::de::Error::custom("notebook root is not an object"));
    }
    let notebook: Notebook = serde_json::from_value(value)?;

    let mut cells = Vec::new();
    for cell in &notebook.cells {
        let Some(fields) = cell.as_object() else {
            return Err(serde::de::Error::custom("notebook cell is not an object"));
        };
        if fields.get("cell_type").and_then(Value::as_str) != Some("code") {
            continue;
        }
        let source = match fields.get("source") {
            Some(source) => CellSource::deserialize(source)?,
            None => CellSource::default(),
        };
        cells.push(source.concat());
    }

    Ok(cells.join("\n"))
}
