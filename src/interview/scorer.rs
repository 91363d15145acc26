//! Weighted-ratio disease scorer, the default model behind the live interview.
//!
//! Per disease: confirmed weight over total weight, with required symptoms
//! counting double. An exclusive symptom confirmed short-circuits to the
//! maximum probability; an explicitly denied required symptom scales the
//! ratio down; diseases that do not include the main complaint are halved.

use std::cmp::Ordering;

use crate::catalog::CatalogSnapshot;
use crate::models::enums::SymptomAnswer;
use crate::models::{Disease, SymptomId};

use super::session::DiagnosticSession;
use super::types::{DiseaseResult, DiseaseScorer, MAX_PROBABILITY, MIN_REPORTED_PROBABILITY};

/// Raw weight above which a denied required symptom is a critical denial.
const CRITICAL_DENIAL_WEIGHT: f64 = 80.0;
const CRITICAL_DENIAL_FACTOR: f64 = 0.1;
const WEAK_DENIAL_FACTOR: f64 = 0.4;
const MISSING_MAIN_COMPLAINT_FACTOR: f64 = 0.5;

/// Evidence gathered for one disease before adjustment.
#[derive(Debug, Default)]
struct Evidence {
    total: f64,
    current: f64,
    exclusively_confirmed: bool,
    critically_denied: bool,
    weakly_denied: bool,
    has_main_complaint: bool,
    supporting: Vec<SymptomId>,
}

impl Evidence {
    fn probability(&self, main_complaint_set: bool) -> f64 {
        if self.exclusively_confirmed {
            return MAX_PROBABILITY;
        }

        let mut p = if self.total > 0.0 {
            self.current / self.total
        } else {
            0.0
        };

        if self.critically_denied {
            p *= CRITICAL_DENIAL_FACTOR;
        } else if self.weakly_denied {
            p *= WEAK_DENIAL_FACTOR;
        }

        if main_complaint_set && !self.has_main_complaint {
            p *= MISSING_MAIN_COMPLAINT_FACTOR;
        }

        p.min(MAX_PROBABILITY)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedRatioScorer;

impl WeightedRatioScorer {
    fn gather(
        &self,
        snapshot: &CatalogSnapshot,
        session: &DiagnosticSession,
        disease: &Disease,
    ) -> Option<Evidence> {
        let mut evidence = Evidence::default();
        let mut any = false;
        let main_complaint = session.main_complaint_id();

        for assoc in snapshot.associations_for(disease.id) {
            any = true;
            let weight = assoc.scoring_weight();
            evidence.total += weight;

            if main_complaint == Some(assoc.symptom_id) {
                evidence.has_main_complaint = true;
            }

            match session.answer(assoc.symptom_id) {
                Some(SymptomAnswer::Yes) => {
                    evidence.current += weight;
                    evidence.supporting.push(assoc.symptom_id);
                    if assoc.is_exclusive {
                        evidence.exclusively_confirmed = true;
                    }
                }
                Some(SymptomAnswer::No) if assoc.is_required => {
                    if assoc.weight > CRITICAL_DENIAL_WEIGHT {
                        evidence.critically_denied = true;
                    } else {
                        evidence.weakly_denied = true;
                    }
                }
                // Ordinary denials, uncertain answers and unasked symptoms
                // simply earn nothing.
                _ => {}
            }
        }

        any.then_some(evidence)
    }
}

impl DiseaseScorer for WeightedRatioScorer {
    fn score_diseases(
        &self,
        snapshot: &CatalogSnapshot,
        session: &DiagnosticSession,
    ) -> Vec<DiseaseResult> {
        let main_complaint_set = session.main_complaint_id().is_some();

        let mut results: Vec<DiseaseResult> = snapshot
            .diseases()
            .iter()
            .filter_map(|disease| {
                let evidence = self.gather(snapshot, session, disease)?;
                let probability = evidence.probability(main_complaint_set);
                (probability > MIN_REPORTED_PROBABILITY).then(|| DiseaseResult {
                    disease: disease.clone(),
                    probability,
                    supporting_symptoms: evidence.supporting,
                    recommendation: None,
                })
            })
            .collect();

        // Stable: equal probabilities keep catalog order.
        results.sort_by(|a, b| {
            b.probability
                .partial_cmp(&a.probability)
                .unwrap_or(Ordering::Equal)
        });

        results
    }
}
