//! Tool implementations for RecruitEM.
//!
//! Specialist agents reach the outside world only through these tools:
//! an assessment link lookup, a context retrieval over the catalog and
//! tip table, and a preparation tip generator with an optional
//! generative backend.

pub mod assessment_link;
pub mod context_retrieval;
pub mod prep_tip;

pub use assessment_link::{AssessmentLink, LookupAssessmentLinkTool};
pub use context_retrieval::{ContextSource, RetrieveContextTool, RetrievedContext};
pub use prep_tip::{DelegatedTip, KeywordTip, PreparationTipTool, TipOutcome, TipSource, TipStrategy};

use recruitem_core::catalog::Catalog;
use recruitem_core::tips::TipTable;
use recruitem_core::tool::ToolRegistry;
use std::sync::Arc;

/// Create a registry holding the three dispatcher tools.
///
/// Without `delegated`, tip generation requests fall back to keyword
/// tips and are reported as such.
pub fn default_registry(
    catalog: Arc<dyn Catalog>,
    tips: Arc<TipTable>,
    delegated: Option<DelegatedTip>,
) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Box::new(LookupAssessmentLinkTool::new(catalog.clone())));
    registry.register(Box::new(RetrieveContextTool::new(catalog, tips.clone())));

    let mut tip_tool = PreparationTipTool::new(KeywordTip::new(tips));
    if let Some(delegated) = delegated {
        tip_tool = tip_tool.with_augmented(delegated);
    }
    registry.register(Box::new(tip_tool));
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use recruitem_core::StaticCatalog;

    #[test]
    fn registry_contains_all_tools() {
        let registry = default_registry(
            Arc::new(StaticCatalog::builtin()),
            Arc::new(TipTable::builtin()),
            None,
        );
        let names: Vec<String> = registry.definitions().into_iter().map(|d| d.name).collect();
        assert_eq!(
            names,
            vec![
                "generate_preparation_tip",
                "lookup_assessment_link",
                "retrieve_context"
            ]
        );
    }
}
