//! Association table loader.
//!
//! Parses the HPO `phenotype_to_genes.txt` release (tab-separated):
//!
//! ```text
//! hpo_id      hpo_name        ncbi_gene_id  gene_symbol  disease_id
//! HP:0000002  Abnormality...  81848         SPRY4        ORPHA:432
//! ```
//!
//! Column 0 is the phenotype term and column 3 the gene symbol. Rows that are
//! too short or fail validation are skipped, never fatal.

use std::path::Path;

use phenorank_common::{GeneSymbol, PhenorankError, PhenotypeTerm, Result};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::index::AssociationIndex;

/// Rows need at least this many tab-separated columns.
pub const MIN_COLUMNS: usize = 5;
const TERM_COLUMN: usize = 0;
const GENE_COLUMN: usize = 3;
const HEADER_TOKEN: &str = "hpo_id";

/// What a single load did with the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Non-blank lines seen, header included
    pub lines_read: usize,
    pub header_skipped: bool,
    /// Rows that passed validation (duplicates included)
    pub records_accepted: usize,
    /// Rows dropped as short or malformed
    pub lines_skipped: usize,
    /// False when the source file did not exist
    pub source_present: bool,
}

/// Build an index from the full text of an association table.
pub fn parse_association_table(text: &str) -> (AssociationIndex, LoadReport) {
    // `lines()` splits on LF and strips a trailing CR.
    let mut lines = text.lines().filter(|l| !l.trim().is_empty()).peekable();

    let mut report = LoadReport {
        source_present: true,
        ..LoadReport::default()
    };

    if let Some(first) = lines.peek() {
        if first.to_lowercase().starts_with(HEADER_TOKEN) {
            lines.next();
            report.lines_read += 1;
            report.header_skipped = true;
        }
    }

    let mut builder = AssociationIndex::builder();
    for (line_no, line) in lines.enumerate() {
        report.lines_read += 1;
        match parse_row(line) {
            Some((term, gene)) => {
                builder.insert(term, gene);
                report.records_accepted += 1;
            }
            None => {
                report.lines_skipped += 1;
                debug!(line_no, "Skipping malformed association row");
            }
        }
    }

    (builder.build(), report)
}

fn parse_row(line: &str) -> Option<(PhenotypeTerm, GeneSymbol)> {
    let cols: Vec<&str> = line.split('\t').collect();
    if cols.len() < MIN_COLUMNS {
        return None;
    }
    let term = PhenotypeTerm::parse(cols[TERM_COLUMN])?;
    let gene = GeneSymbol::parse(cols[GENE_COLUMN])?;
    Some((term, gene))
}

/// Read and parse the association table at `path`.
///
/// A missing file is not an error: a warning is logged and an empty index is
/// returned so the service keeps running without reference data. Any other
/// I/O failure is returned to the caller.
pub fn load_association_file(path: &Path) -> Result<(AssociationIndex, LoadReport)> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!(
                path = %path.display(),
                "Association file missing, continuing with empty index"
            );
            return Ok((AssociationIndex::empty(), LoadReport::default()));
        }
        Err(e) => return Err(PhenorankError::io(path, e)),
    };

    // Invalid UTF-8 becomes U+FFFD; only the rows it lands in can fail validation.
    let text = String::from_utf8_lossy(&bytes);
    let (index, report) = parse_association_table(&text);
    let stats = index.stats();
    info!(
        path = %path.display(),
        terms = stats.terms,
        genes = stats.genes,
        associations = stats.associations,
        skipped = report.lines_skipped,
        "Loaded phenotype-to-gene associations"
    );
    Ok((index, report))
}
