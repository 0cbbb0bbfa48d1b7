//! Cross-reference links for candidate genes.
//!
//! Convenience lookups only: URLs are built from the symbol and never
//! checked against the target resource.

use phenorank_common::GeneSymbol;
use serde::{Deserialize, Serialize};

pub fn ensembl_url(gene: &GeneSymbol) -> String {
    format!("https://www.ensembl.org/Homo_sapiens/Gene/Summary?g={gene}")
}

pub fn ucsc_url(gene: &GeneSymbol) -> String {
    format!("https://genome.ucsc.edu/cgi-bin/hgTracks?db=hg38&position={gene}")
}

pub fn ncbi_url(gene: &GeneSymbol) -> String {
    format!("https://www.ncbi.nlm.nih.gov/gene/?term={gene}[sym] AND human[orgn]")
}

/// Lookup links for one gene, keyed by resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossReferences {
    pub ensembl: String,
    pub ucsc: String,
    pub ncbi: String,
}

impl CrossReferences {
    pub fn for_gene(gene: &GeneSymbol) -> Self {
        Self {
            ensembl: ensembl_url(gene),
            ucsc: ucsc_url(gene),
            ncbi: ncbi_url(gene),
        }
    }

    /// Flattened as gene browser, genome browser, gene database.
    pub fn into_vec(self) -> Vec<String> {
        vec![self.ensembl, self.ucsc, self.ncbi]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_for_gene() {
        let gene = GeneSymbol::parse("scn1a").unwrap();
        let links = CrossReferences::for_gene(&gene);
        assert_eq!(links.ensembl, "https://www.ensembl.org/Homo_sapiens/Gene/Summary?g=SCN1A");
        assert_eq!(links.ucsc, "https://genome.ucsc.edu/cgi-bin/hgTracks?db=hg38&position=SCN1A");
        assert_eq!(links.ncbi, "https://www.ncbi.nlm.nih.gov/gene/?term=SCN1A[sym] AND human[orgn]");
    }

    #[test]
    fn test_flattened_order() {
        let gene = GeneSymbol::parse("GENEA").unwrap();
        let flat = CrossReferences::for_gene(&gene).into_vec();
        assert_eq!(flat.len(), 3);
        assert!(flat[0].contains("ensembl.org"));
        assert!(flat[1].contains("genome.ucsc.edu"));
        assert!(flat[2].contains("ncbi.nlm.nih.gov"));
    }
}
