pub mod analysis;
pub mod checklist;
pub mod codec;
pub mod error;
pub mod stats;
pub mod text;
pub mod writer;

pub use analysis::{AnalysisReport, FocusSummary, ReportGenerator};
pub use checklist::{
    ChecklistItem, ChecklistReport, ChecklistResult, ChecklistScope, default_checklist, evaluate,
};
pub use codec::{CsvCodec, JsonCodec, TripleCodec, load_triples, save_triples};
pub use error::{ReportError, Result};
pub use stats::{Statistics, sorted_desc};
pub use text::render_text_report;
pub use writer::{ArtifactWriter, Artifacts};
