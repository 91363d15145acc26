//! Geometric-mean scorer.
//!
//! Same multiplicative model as the information-gain strategy, but the
//! normalizing exponent depends on how much of a disease's own symptom list
//! has been confirmed, so well-covered diseases are penalized less for the
//! confirmed symptoms they do not list.

use crate::catalog::CatalogSnapshot;
use crate::models::DiseaseId;

use super::super::session::DiagnosticSession;
use super::super::types::{DiseaseResult, DiseaseScorer};
use super::{into_ranking, likelihood, normalize};

const HIGH_MATCH_RATIO: f64 = 0.5;
const LOW_MATCH_RATIO: f64 = 0.2;
const HIGH_MATCH_DAMPING: f64 = 0.7;
const PARTIAL_MATCH_EXPONENT: f64 = 0.6;
const LOW_MATCH_EXPONENT: f64 = 0.7;

/// Normalizing exponent for a disease listing `n` symptoms, `ratio` of them confirmed.
pub fn exponent(n: usize, ratio: f64) -> f64 {
    let n = n as f64;
    if ratio > HIGH_MATCH_RATIO {
        1.0 / (n * (1.0 - HIGH_MATCH_DAMPING * ratio))
    } else if ratio >= LOW_MATCH_RATIO {
        PARTIAL_MATCH_EXPONENT / n
    } else {
        LOW_MATCH_EXPONENT / n
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GeometricMeanScorer;

impl GeometricMeanScorer {
    /// Normalized probabilities for every disease with associations, catalog order.
    pub fn distribution(
        &self,
        snapshot: &CatalogSnapshot,
        session: &DiagnosticSession,
    ) -> Vec<(DiseaseId, f64)> {
        let mut raw: Vec<(DiseaseId, f64)> = snapshot
            .diseases()
            .iter()
            .filter_map(|d| {
                let n = snapshot.associations_for(d.id).count();
                if n == 0 {
                    return None;
                }
                let p = match likelihood(snapshot, session, d.id) {
                    None => 0.0,
                    Some((product, matched)) => {
                        product.powf(exponent(n, matched as f64 / n as f64))
                    }
                };
                Some((d.id, p))
            })
            .collect();
        normalize(&mut raw);
        raw
    }
}

impl DiseaseScorer for GeometricMeanScorer {
    fn score_diseases(
        &self,
        snapshot: &CatalogSnapshot,
        session: &DiagnosticSession,
    ) -> Vec<DiseaseResult> {
        into_ranking(snapshot, session, &self.distribution(snapshot, session))
    }
}
