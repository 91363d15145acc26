//! Candidate-pool question selector, paired with the weighted-ratio scorer.
//!
//! Candidates are the unasked symptoms of the leading diseases. Each is scored
//! by summing association weight times disease probability over the diseases
//! that back it, boosted when the association is required or the symptom
//! shares the main complaint's category.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use crate::catalog::{category_symptoms_or_empty, symptom_or_none, CatalogSnapshot};
use crate::models::{DiseaseId, Symptom, SymptomId};

use super::session::DiagnosticSession;
use super::types::{DiseaseResult, QuestionSelector, Selection, SelectionContext};

/// A symptom eligible to be asked next.
#[derive(Debug, Clone)]
pub(crate) struct Candidate {
    pub symptom_id: SymptomId,
    pub score: f64,
    /// Highest-weight association backing this symptom, `None` for category filler.
    pub representative: Option<(DiseaseId, f64)>,
    pub symptom: Option<Symptom>,
}

impl Candidate {
    fn synthetic(symptom: Symptom, weight: f64) -> Self {
        Self {
            symptom_id: symptom.id,
            score: weight,
            representative: None,
            symptom: Some(symptom),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CandidatePoolSelector;

impl CandidatePoolSelector {
    /// All candidates, best first.
    pub(crate) fn candidates(
        &self,
        ctx: &SelectionContext<'_>,
        session: &DiagnosticSession,
        ranked: &[DiseaseResult],
    ) -> Vec<Candidate> {
        let cfg = ctx.config;
        let asked = session.asked_symptoms();

        let mut candidates = Vec::new();
        for &size in &cfg.candidate_pool_sizes {
            let pool = &ranked[..size.min(ranked.len())];
            candidates = disease_backed(ctx.snapshot, pool, &asked, cfg.required_selection_boost);
            if !candidates.is_empty() || size >= ranked.len() {
                break;
            }
        }

        let category = session.main_complaint_category();

        if candidates.is_empty() {
            if let Some(category) = category {
                candidates = category_symptoms_or_empty(
                    ctx.catalog,
                    category,
                    &asked,
                    cfg.category_fallback_limit,
                )
                .into_iter()
                .map(|s| Candidate::synthetic(s, cfg.category_fallback_weight))
                .collect();
            }
        }

        if candidates.len() < cfg.supplement_below {
            if let Some(category) = category {
                let mut exclude = asked.clone();
                exclude.extend(candidates.iter().map(|c| c.symptom_id));
                candidates.extend(
                    category_symptoms_or_empty(ctx.catalog, category, &exclude, cfg.supplement_limit)
                        .into_iter()
                        .map(|s| Candidate::synthetic(s, cfg.supplement_weight)),
                );
            }
        }

        for candidate in &mut candidates {
            if candidate.symptom.is_none() {
                candidate.symptom = symptom_or_none(ctx.catalog, candidate.symptom_id);
            }
            let same_category = match (category, &candidate.symptom) {
                (Some(category), Some(symptom)) => symptom.in_category(category),
                _ => false,
            };
            if same_category {
                candidate.score *= cfg.category_boost;
            }
        }

        candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        candidates
    }
}

impl QuestionSelector for CandidatePoolSelector {
    fn select_next(
        &self,
        ctx: &SelectionContext<'_>,
        session: &DiagnosticSession,
        ranked: &[DiseaseResult],
    ) -> Option<Selection> {
        let candidates = self.candidates(ctx, session, ranked);

        let chosen = candidates
            .iter()
            .find(|c| !session.was_recently_asked(c.symptom_id))
            .or_else(|| candidates.first());

        let Some(chosen) = chosen else {
            tracing::debug!(session_id = %session.id(), "No candidate symptoms left");
            return None;
        };

        if chosen.score < ctx.config.prune_score_floor
            && session.question_count() >= ctx.config.prune_after_questions
        {
            tracing::debug!(
                session_id = %session.id(),
                symptom_id = chosen.symptom_id,
                score = chosen.score,
                "Best candidate too weak this late in the interview"
            );
            return None;
        }

        tracing::debug!(
            session_id = %session.id(),
            symptom_id = chosen.symptom_id,
            score = chosen.score,
            backing_disease = ?chosen.representative.map(|(d, _)| d),
            candidates = candidates.len(),
            "Selected next symptom"
        );

        Some(Selection {
            symptom_id: chosen.symptom_id,
            score: chosen.score,
            symptom: chosen.symptom.clone(),
        })
    }
}

/// Unasked symptoms of the diseases in `pool`, in first-seen order.
fn disease_backed(
    snapshot: &CatalogSnapshot,
    pool: &[DiseaseResult],
    asked: &HashSet<SymptomId>,
    required_boost: f64,
) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = Vec::new();
    let mut index: HashMap<SymptomId, usize> = HashMap::new();

    for result in pool {
        for assoc in snapshot.associations_for(result.disease_id()) {
            if asked.contains(&assoc.symptom_id) {
                continue;
            }
            let weight = if assoc.is_required {
                assoc.weight * required_boost
            } else {
                assoc.weight
            };
            let contribution = weight * result.probability;

            let idx = *index.entry(assoc.symptom_id).or_insert_with(|| {
                candidates.push(Candidate {
                    symptom_id: assoc.symptom_id,
                    score: 0.0,
                    representative: None,
                    symptom: None,
                });
                candidates.len() - 1
            });

            let candidate = &mut candidates[idx];
            candidate.score += contribution;
            let heavier = candidate
                .representative
                .map_or(true, |(_, w)| assoc.weight > w);
            if heavier {
                candidate.representative = Some((result.disease_id(), assoc.weight));
            }
        }
    }

    candidates
}
