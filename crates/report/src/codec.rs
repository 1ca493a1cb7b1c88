use std::io::{Read, Write};
use std::path::Path;

use extract::Triple;

use crate::error::{ReportError, Result};

const UTF8_BOM: &str = "\u{feff}";

/// A serialized form of a triple list. `path` names the file behind the
/// reader or writer and only appears in errors.
pub trait TripleCodec {
    fn extension(&self) -> &'static str;

    fn write_triples(&self, triples: &[Triple], writer: &mut dyn Write, path: &Path) -> Result<()>;

    fn read_triples(&self, reader: &mut dyn Read, path: &Path) -> Result<Vec<Triple>>;
}

pub struct JsonCodec;

impl TripleCodec for JsonCodec {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn write_triples(&self, triples: &[Triple], writer: &mut dyn Write, path: &Path) -> Result<()> {
        serde_json::to_writer_pretty(&mut *writer, triples)?;
        writer.write_all(b"\n").map_err(|e| ReportError::io(path, e))?;
        Ok(())
    }

    fn read_triples(&self, reader: &mut dyn Read, _path: &Path) -> Result<Vec<Triple>> {
        Ok(serde_json::from_reader(reader)?)
    }
}

/// `subject,predicate,object,type` rows.
pub struct CsvCodec {
    /// Prefix output with a UTF-8 BOM so spreadsheet tools detect the encoding.
    pub bom: bool,
}

impl Default for CsvCodec {
    fn default() -> Self {
        Self { bom: true }
    }
}

impl TripleCodec for CsvCodec {
    fn extension(&self) -> &'static str {
        "csv"
    }

    fn write_triples(&self, triples: &[Triple], writer: &mut dyn Write, path: &Path) -> Result<()> {
        if self.bom {
            writer
                .write_all(UTF8_BOM.as_bytes())
                .map_err(|e| ReportError::io(path, e))?;
        }

        let mut csv_writer = csv::Writer::from_writer(writer);
        // Header is written from the field names, renamed `kind` -> `type`.
        for triple in triples {
            csv_writer.serialize(triple)?;
        }
        if triples.is_empty() {
            csv_writer.write_record(["subject", "predicate", "object", "type"])?;
        }
        csv_writer.flush().map_err(|e| ReportError::io(path, e))?;
        Ok(())
    }

    fn read_triples(&self, reader: &mut dyn Read, path: &Path) -> Result<Vec<Triple>> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .map_err(|e| ReportError::io(path, e))?;
        let content = content.strip_prefix(UTF8_BOM).unwrap_or(&content);

        let mut csv_reader = csv::Reader::from_reader(content.as_bytes());
        let mut triples = Vec::new();
        for row in csv_reader.deserialize() {
            triples.push(row?);
        }
        Ok(triples)
    }
}

fn codec_for(path: &Path) -> Result<Box<dyn TripleCodec>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => Ok(Box::new(JsonCodec)),
        Some("csv") => Ok(Box::new(CsvCodec::default())),
        _ => Err(ReportError::UnsupportedFormat(path.to_path_buf())),
    }
}

/// Load a triple file written by an earlier run, choosing the codec by extension.
pub fn load_triples(path: &Path) -> Result<Vec<Triple>> {
    let codec = codec_for(path)?;

    let mut file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ReportError::Lookup(path.to_path_buf()));
        }
        Err(e) => return Err(ReportError::io(path, e)),
    };

    codec.read_triples(&mut file, path)
}

pub fn save_triples(path: &Path, triples: &[Triple]) -> Result<()> {
    let codec = codec_for(path)?;
    let mut file = std::fs::File::create(path).map_err(|e| ReportError::io(path, e))?;
    codec.write_triples(triples, &mut file, path)
}
