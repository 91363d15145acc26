//! Alternate multiplicative scoring models.
//!
//! Both plug into the engine through the same scorer/selector traits as the
//! weighted-ratio pair, via `InterviewEngine::with_strategy`.

pub mod entropy;
pub mod geometric;

use std::cmp::Ordering;

use crate::catalog::CatalogSnapshot;
use crate::models::{Disease, DiseaseId, SymptomId};

use super::session::DiagnosticSession;
use super::types::{DiseaseResult, MAX_PROBABILITY};

pub use entropy::InformationGainStrategy;
pub use geometric::GeometricMeanScorer;

/// Association weights are on a 0-100 scale; the multiplicative models use 0-1.
const WEIGHT_SCALE: f64 = 100.0;

/// Factor for a confirmed symptom the disease does not list.
const UNMATCHED_FACTOR: f64 = 0.1;

/// Normalized probabilities below this are not reported.
const RANKING_FLOOR: f64 = 0.01;

/// Product of per-symptom factors over confirmed symptoms, with the number of
/// confirmed symptoms the disease lists.
///
/// `None` when the disease lists an exclusive symptom the owner denied,
/// which rules the disease out.
pub(crate) fn likelihood(
    snapshot: &CatalogSnapshot,
    session: &DiagnosticSession,
    disease_id: DiseaseId,
) -> Option<(f64, usize)> {
    let excluded = snapshot
        .associations_for(disease_id)
        .any(|a| a.is_exclusive && session.is_denied(a.symptom_id));
    if excluded {
        return None;
    }

    let mut product = 1.0;
    let mut matched = 0;
    for symptom_id in session.selected_symptoms() {
        match snapshot.association(disease_id, symptom_id) {
            Some(assoc) => {
                product *= assoc.weight / WEIGHT_SCALE;
                matched += 1;
            }
            None => product *= UNMATCHED_FACTOR,
        }
    }
    Some((product, matched))
}

/// Scale so the values sum to 1. An all-zero input stays all zero.
pub(crate) fn normalize(raw: &mut [(DiseaseId, f64)]) {
    let sum: f64 = raw.iter().map(|(_, p)| p).sum();
    if sum > 0.0 {
        for (_, p) in raw.iter_mut() {
            *p /= sum;
        }
    }
}

/// Shannon entropy in nats; zero entries contribute nothing.
pub(crate) fn entropy(distribution: &[(DiseaseId, f64)]) -> f64 {
    distribution
        .iter()
        .map(|(_, p)| *p)
        .filter(|p| *p > 0.0)
        .map(|p| -p * p.ln())
        .sum()
}

/// Confirmed symptoms that `disease_id` lists.
pub(crate) fn supporting_symptoms(
    snapshot: &CatalogSnapshot,
    session: &DiagnosticSession,
    disease_id: DiseaseId,
) -> Vec<SymptomId> {
    session
        .selected_symptoms()
        .filter(|&s| snapshot.association(disease_id, s).is_some())
        .collect()
}

/// Turn a normalized distribution into a ranking: drop entries below the
/// floor, cap at the maximum, highest first.
pub(crate) fn into_ranking(
    snapshot: &CatalogSnapshot,
    session: &DiagnosticSession,
    distribution: &[(DiseaseId, f64)],
) -> Vec<DiseaseResult> {
    let mut results: Vec<DiseaseResult> = distribution
        .iter()
        .filter(|(_, p)| *p >= RANKING_FLOOR)
        .filter_map(|&(id, p)| {
            let disease: &Disease = snapshot.disease(id)?;
            Some(DiseaseResult {
                disease: disease.clone(),
                probability: p.min(MAX_PROBABILITY),
                supporting_symptoms: supporting_symptoms(snapshot, session, id),
                recommendation: None,
            })
        })
        .collect();

    results.sort_by(|a, b| {
        b.probability
            .partial_cmp(&a.probability)
            .unwrap_or(Ordering::Equal)
    });
    results
}
