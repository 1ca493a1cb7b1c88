use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use tracing::info;

use extract::{Entity, Relation, Triple};

use crate::analysis::AnalysisReport;
use crate::codec::{CsvCodec, JsonCodec, TripleCodec};
use crate::error::{ReportError, Result};
use crate::text::render_text_report;

/// Everything one run persists.
pub struct Artifacts<'a> {
    pub entities: &'a [Entity],
    pub relations: &'a [Relation],
    pub triples: &'a [Triple],
    pub focus_triples: &'a [Triple],
    pub report: &'a AnalysisReport,
}

pub struct ArtifactWriter {
    output_dir: PathBuf,
}

impl ArtifactWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Write the full artifact set, stopping at the first failure.
    pub fn write_all(&self, artifacts: &Artifacts<'_>) -> Result<Vec<PathBuf>> {
        std::fs::create_dir_all(&self.output_dir)
            .map_err(|e| ReportError::io(&self.output_dir, e))?;

        let mut written = vec![
            self.write_json("entities.json", &artifacts.entities)?,
            self.write_json("relations.json", &artifacts.relations)?,
        ];

        for (stem, triples) in [
            ("triples", artifacts.triples),
            ("focus_triples", artifacts.focus_triples),
        ] {
            written.push(self.write_triples(stem, triples, &JsonCodec)?);
            written.push(self.write_triples(stem, triples, &CsvCodec::default())?);
        }

        written.push(self.write_json("statistics.json", &artifacts.report.statistics)?);
        written.push(self.write_json("analysis.json", artifacts.report)?);
        written.push(self.write_text("report.txt", &render_text_report(artifacts.report))?);

        info!(
            dir = %self.output_dir.display(),
            files = written.len(),
            "Artifacts written"
        );

        Ok(written)
    }

    fn create(&self, name: &str) -> Result<(PathBuf, BufWriter<File>)> {
        let path = self.output_dir.join(name);
        let file = File::create(&path).map_err(|e| ReportError::io(&path, e))?;
        Ok((path, BufWriter::new(file)))
    }

    fn write_json<T: Serialize + ?Sized>(&self, name: &str, value: &T) -> Result<PathBuf> {
        let (path, mut writer) = self.create(name)?;
        serde_json::to_writer_pretty(&mut writer, value)?;
        std::io::Write::flush(&mut writer).map_err(|e| ReportError::io(&path, e))?;
        Ok(path)
    }

    fn write_triples(
        &self,
        stem: &str,
        triples: &[Triple],
        codec: &dyn TripleCodec,
    ) -> Result<PathBuf> {
        let (path, mut writer) = self.create(&format!("{}.{}", stem, codec.extension()))?;
        codec.write_triples(triples, &mut writer, &path)?;
        std::io::Write::flush(&mut writer).map_err(|e| ReportError::io(&path, e))?;
        Ok(path)
    }

    fn write_text(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.output_dir.join(name);
        std::fs::write(&path, content).map_err(|e| ReportError::io(&path, e))?;
        Ok(path)
    }
}
