//! Information-gain strategy.
//!
//! Diseases get `P(D) ∝ Π factor(s)` over confirmed symptoms, taken to the
//! power `1/|confirmed|` and normalized across diseases. The next question is
//! the symptom whose confirmation would lower the distribution's entropy the
//! most, plus a bonus for symptoms that few diseases share.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::catalog::{category_symptoms_or_empty, symptom_or_none, CatalogSnapshot};
use crate::models::enums::SymptomAnswer;
use crate::models::{DiseaseId, SymptomId};

use super::super::session::DiagnosticSession;
use super::super::types::{
    DiseaseResult, DiseaseScorer, QuestionSelector, Selection, SelectionContext,
};
use super::{entropy, into_ranking, likelihood, normalize, WEIGHT_SCALE};

const RARITY_SCALE: f64 = 0.5;
const REQUIRED_BONUS: f64 = 0.1;
const UNASSOCIATED_PENALTY: f64 = -0.5;

#[derive(Debug, Clone, Copy, Default)]
pub struct InformationGainStrategy;

impl InformationGainStrategy {
    /// Normalized `P(D)` for every disease with associations, catalog order.
    pub fn distribution(
        &self,
        snapshot: &CatalogSnapshot,
        session: &DiagnosticSession,
    ) -> Vec<(DiseaseId, f64)> {
        let confirmed = session.selected_count();
        let mut raw: Vec<(DiseaseId, f64)> = snapshot
            .diseases()
            .iter()
            .filter(|d| snapshot.associations_for(d.id).next().is_some())
            .map(|d| {
                let p = match likelihood(snapshot, session, d.id) {
                    None => 0.0,
                    Some(_) if confirmed == 0 => 1.0,
                    Some((product, _)) => product.powf(1.0 / confirmed as f64),
                };
                (d.id, p)
            })
            .collect();
        normalize(&mut raw);
        raw
    }

    /// Bonus for symptoms shared by few diseases, or a penalty when none list it.
    fn rarity(&self, snapshot: &CatalogSnapshot, symptom_id: SymptomId) -> f64 {
        let mut count = 0usize;
        let mut weight_sum = 0.0;
        let mut any_required = false;
        for assoc in snapshot.associations_of_symptom(symptom_id) {
            count += 1;
            weight_sum += assoc.weight;
            any_required |= assoc.is_required;
        }
        if count == 0 {
            return UNASSOCIATED_PENALTY;
        }

        let average = weight_sum / count as f64;
        let mut bonus = (1.0 / count as f64) * (average / WEIGHT_SCALE) * RARITY_SCALE;
        if any_required {
            bonus += REQUIRED_BONUS;
        }
        bonus
    }

    /// Entropy drop from confirming `symptom_id`, plus its rarity bonus.
    fn value(
        &self,
        snapshot: &CatalogSnapshot,
        session: &DiagnosticSession,
        before: f64,
        symptom_id: SymptomId,
    ) -> f64 {
        let mut simulated = session.clone();
        simulated.record_answer(symptom_id, SymptomAnswer::Yes);
        let after = entropy(&self.distribution(snapshot, &simulated));
        before - after + self.rarity(snapshot, symptom_id)
    }
}

impl DiseaseScorer for InformationGainStrategy {
    fn score_diseases(
        &self,
        snapshot: &CatalogSnapshot,
        session: &DiagnosticSession,
    ) -> Vec<DiseaseResult> {
        into_ranking(snapshot, session, &self.distribution(snapshot, session))
    }
}

impl QuestionSelector for InformationGainStrategy {
    fn select_next(
        &self,
        ctx: &SelectionContext<'_>,
        session: &DiagnosticSession,
        _ranked: &[DiseaseResult],
    ) -> Option<Selection> {
        let snapshot = ctx.snapshot;
        let distribution = self.distribution(snapshot, session);
        let asked = session.asked_symptoms();

        let mut seen: HashSet<SymptomId> = HashSet::new();
        let mut candidates: Vec<SymptomId> = Vec::new();
        for &(disease_id, p) in &distribution {
            if p <= 0.0 {
                continue;
            }
            for assoc in snapshot.associations_for(disease_id) {
                if !asked.contains(&assoc.symptom_id) && seen.insert(assoc.symptom_id) {
                    candidates.push(assoc.symptom_id);
                }
            }
        }
        if let Some(category) = session.main_complaint_category() {
            let mut exclude = asked.clone();
            exclude.extend(seen.iter().copied());
            candidates.extend(
                category_symptoms_or_empty(
                    ctx.catalog,
                    category,
                    &exclude,
                    ctx.config.category_fallback_limit,
                )
                .into_iter()
                .map(|s| s.id),
            );
        }

        if candidates.is_empty() {
            tracing::debug!(session_id = %session.id(), "No candidate symptoms left");
            return None;
        }

        let before = entropy(&distribution);
        let mut scored: Vec<(SymptomId, f64)> = candidates
            .into_iter()
            .map(|s| (s, self.value(snapshot, session, before, s)))
            .collect();
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        let &(symptom_id, score) = scored
            .iter()
            .find(|(s, _)| !session.was_recently_asked(*s))
            .or_else(|| scored.first())?;

        tracing::debug!(
            session_id = %session.id(),
            symptom_id,
            score,
            entropy = before,
            "Selected most informative symptom"
        );

        Some(Selection {
            symptom_id,
            score,
            symptom: symptom_or_none(ctx.catalog, symptom_id),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryCatalog;
    use crate::config::InterviewConfig;
    use crate::models::{DiseaseSymptomAssociation, Symptom};

    fn assoc(disease_id: i64, symptom_id: i64, weight: f64, is_exclusive: bool) -> DiseaseSymptomAssociation {
        DiseaseSymptomAssociation {
            disease_id,
            symptom_id,
            weight,
            is_required: false,
            is_exclusive,
        }
    }

    fn two_disease_catalog() -> InMemoryCatalog {
        InMemoryCatalog::new()
            .with_symptom(1, "Coughing", Some("Respiratory"))
            .with_symptom(2, "Sneezing", Some("Respiratory"))
            .with_symptom(9, "Wheezing", Some("Respiratory"))
            .with_disease(1, "Kennel cough", "Respiratory")
            .with_disease(2, "Rhinitis", "Respiratory")
            .with_association(assoc(1, 1, 100.0, false))
            .with_association(assoc(2, 2, 100.0, false))
    }

    fn select(catalog: &InMemoryCatalog, session: &DiagnosticSession) -> Option<Selection> {
        let snapshot = CatalogSnapshot::load(catalog);
        let config = InterviewConfig::default();
        let ctx = SelectionContext {
            catalog,
            snapshot: &snapshot,
            config: &config,
        };
        InformationGainStrategy.select_next(&ctx, session, &[])
    }

    #[test]
    fn nothing_confirmed_gives_uniform_distribution() {
        let catalog = two_disease_catalog();
        let snapshot = CatalogSnapshot::load(&catalog);
        let dist = InformationGainStrategy.distribution(&snapshot, &DiagnosticSession::new());
        assert_eq!(dist, vec![(1, 0.5), (2, 0.5)]);
    }

    #[test]
    fn unmatched_confirmation_costs_a_tenth() {
        let catalog = two_disease_catalog();
        let snapshot = CatalogSnapshot::load(&catalog);
        let mut session = DiagnosticSession::new();
        session.record_answer(1, SymptomAnswer::Yes);

        let dist = InformationGainStrategy.distribution(&snapshot, &session);
        assert!((dist[0].1 - 1.0 / 1.1).abs() < 1e-12);
        assert!((dist[1].1 - 0.1 / 1.1).abs() < 1e-12);
    }

    #[test]
    fn denied_exclusive_symptom_rules_disease_out() {
        let catalog = two_disease_catalog().with_association(assoc(1, 9, 100.0, true));
        let snapshot = CatalogSnapshot::load(&catalog);
        let mut session = DiagnosticSession::new();
        session.record_answer(9, SymptomAnswer::No);

        let dist = InformationGainStrategy.distribution(&snapshot, &session);
        assert_eq!(dist, vec![(1, 0.0), (2, 1.0)]);

        let ranked = InformationGainStrategy.score_diseases(&snapshot, &session);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].disease_id(), 2);
        assert_eq!(ranked[0].probability, 0.95);
    }

    #[test]
    fn ranking_lists_supporting_symptoms() {
        let catalog = two_disease_catalog();
        let snapshot = CatalogSnapshot::load(&catalog);
        let mut session = DiagnosticSession::new();
        session.record_answer(1, SymptomAnswer::Yes);

        let ranked = InformationGainStrategy.score_diseases(&snapshot, &session);
        assert_eq!(ranked[0].disease_id(), 1);
        assert_eq!(ranked[0].supporting_symptoms, vec![1]);
        assert!(ranked[1].supporting_symptoms.is_empty());
    }

    #[test]
    fn prefers_discriminating_symptom_over_unlinked_one() {
        let catalog = two_disease_catalog();
        let complaint = Symptom {
            id: 50,
            name: "Nasal noise".into(),
            category: Some("Respiratory".into()),
        };
        let session = DiagnosticSession::with_main_complaint(&complaint);

        let pick = select(&catalog, &session).unwrap();
        assert_eq!(pick.symptom_id, 1);
        assert_eq!(pick.symptom.unwrap().name, "Coughing");
    }

    #[test]
    fn unlinked_symptom_is_penalized() {
        let catalog = two_disease_catalog();
        let snapshot = CatalogSnapshot::load(&catalog);
        assert_eq!(InformationGainStrategy.rarity(&snapshot, 9), -0.5);
        assert_eq!(InformationGainStrategy.rarity(&snapshot, 1), 0.5);
    }

    #[test]
    fn required_association_adds_rarity_bonus() {
        let required = DiseaseSymptomAssociation {
            is_required: true,
            ..assoc(1, 9, 100.0, false)
        };
        let catalog = two_disease_catalog()
            .with_association(required)
            .with_association(assoc(1, 3, 80.0, false))
            .with_association(DiseaseSymptomAssociation {
                is_required: true,
                ..assoc(2, 3, 40.0, false)
            });
        let snapshot = CatalogSnapshot::load(&catalog);

        assert!((InformationGainStrategy.rarity(&snapshot, 9) - 0.6).abs() < 1e-12);
        // (1/2) * 0.6 * 0.5 + 0.1
        assert!((InformationGainStrategy.rarity(&snapshot, 3) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn recency_and_asked_are_respected() {
        let catalog = two_disease_catalog();
        let mut session = DiagnosticSession::new();
        session.remember_selection(1);
        assert_eq!(select(&catalog, &session).unwrap().symptom_id, 2);

        session.record_answer(1, SymptomAnswer::No);
        session.record_answer(2, SymptomAnswer::No);
        assert!(select(&catalog, &session).is_none());
    }
}
