use crate::outline::{Outline, OutlineNode};
use anyhow::{Context, Result};
use brotli::enc::BrotliEncoderParams;
use brotli::CompressorWriter;
use std::fs::File;
use std::io::{BufWriter, Write};

/// Writes outline payload files in the canonical camelCase wrapper form.
pub struct OutlineWriter {
    writer: Box<dyn Write>,
}

impl OutlineWriter {
    /// Creates a new OutlineWriter for the specified file path.
    ///
    /// Automatically enables Brotli compression if the file path ends with
    /// `.br` (e.g., `outline.json.br`).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use lectree::OutlineWriter;
    /// # fn main() -> anyhow::Result<()> {
    /// // Uncompressed payload
    /// let mut writer = OutlineWriter::new("outline.json")?;
    ///
    /// // Compressed payload
    /// let mut writer = OutlineWriter::new("outline.json.br")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(file_path: &str) -> Result<Self> {
        let file = File::create(file_path)
            .with_context(|| format!("Failed to create file: {}", file_path))?;

        let writer: Box<dyn Write> = if file_path.ends_with(".br") {
            // Brotli compression enabled
            let buf_writer = BufWriter::new(file);
            let params = BrotliEncoderParams {
                quality: 6,  // Balanced compression
                lgwin: 22,   // Window size
                ..Default::default()
            };
            Box::new(CompressorWriter::with_params(buf_writer, 4096, &params))
        } else {
            // No compression
            Box::new(BufWriter::new(file))
        };

        Ok(OutlineWriter { writer })
    }

    /// Serializes the outline as a wrapper document and writes it out.
    pub fn write_outline(&mut self, outline: &Outline) -> Result<()> {
        let mut document = serde_json::Map::new();
        document.insert(
            "title".to_string(),
            outline
                .title
                .clone()
                .map(serde_json::Value::String)
                .unwrap_or(serde_json::Value::Null),
        );
        document.insert(
            "lectures".to_string(),
            serde_json::Value::Array(outline.roots.iter().map(node_to_value).collect()),
        );

        let json = serde_json::to_string_pretty(&serde_json::Value::Object(document))
            .context("Failed to serialize outline to JSON")?;

        writeln!(self.writer, "{}", json).context("Failed to write outline")?;
        self.writer.flush().context("Failed to flush writer")?;

        Ok(())
    }
}

impl Drop for OutlineWriter {
    fn drop(&mut self) {
        let _ = self.writer.flush();
    }
}

fn node_to_value(node: &OutlineNode) -> serde_json::Value {
    let mut map = serde_json::Map::new();
    map.insert("id".to_string(), serde_json::Value::String(node.id.clone()));
    map.insert("title".to_string(), serde_json::Value::String(node.title.clone()));

    if let Some(label) = &node.numbering_label {
        map.insert(
            "numberingLabel".to_string(),
            serde_json::Value::String(label.clone()),
        );
    }
    if let Some(index) = node.order_index {
        map.insert("orderIndex".to_string(), serde_json::Value::Number(index.into()));
    }

    map.insert(
        "children".to_string(),
        serde_json::Value::Array(node.children.iter().map(node_to_value).collect()),
    );

    serde_json::Value::Object(map)
}

/// Convenience helper: writes `outline` to `file_path` in one call.
pub fn save_outline(outline: &Outline, file_path: &str) -> Result<()> {
    let mut writer = OutlineWriter::new(file_path)?;
    writer.write_outline(outline)
}
