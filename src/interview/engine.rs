//! Interview loop: score, decide whether to stop, pick the next question.
//!
//! `next_step` never fails. Catalog problems inside a step are logged and
//! treated as missing data, so the worst case is a finished interview with
//! an empty report.

use crate::catalog::{symptom_named_or_none, symptom_or_none, Catalog, CatalogSnapshot};
use crate::config::InterviewConfig;
use crate::models::enums::{FollowUpDimension, SymptomAnswer};
use crate::models::{Symptom, SymptomId};

use super::followup::{self, FollowUpQuestion};
use super::scorer::WeightedRatioScorer;
use super::selector::CandidatePoolSelector;
use super::session::DiagnosticSession;
use super::stopping::StoppingPolicy;
use super::types::{
    DiagnosisEntry, DiseaseResult, DiseaseScorer, InterviewError, QuestionSelector,
    Recommendation, SelectionContext, StepResult, NO_DESCRIPTION,
};

/// Wording used when the chosen symptom cannot be looked up.
const UNNAMED_SYMPTOM: &str = "this symptom";

pub fn question_text(symptom_name: &str) -> String {
    format!(
        "Has your pet shown any signs of {}?",
        symptom_name.trim().to_lowercase()
    )
}

/// Drives adaptive interviews over one catalog.
///
/// Defaults to the weighted-ratio scorer with the candidate-pool selector;
/// [`InterviewEngine::with_strategy`] swaps in another pair.
pub struct InterviewEngine<C: Catalog> {
    catalog: C,
    config: InterviewConfig,
    scorer: Box<dyn DiseaseScorer>,
    selector: Box<dyn QuestionSelector>,
    stopping: StoppingPolicy,
}

impl<C: Catalog> InterviewEngine<C> {
    pub fn new(catalog: C) -> Self {
        Self::with_config(catalog, InterviewConfig::default())
    }

    pub fn with_config(catalog: C, config: InterviewConfig) -> Self {
        Self {
            catalog,
            stopping: StoppingPolicy::new(config.clone()),
            config,
            scorer: Box::new(WeightedRatioScorer),
            selector: Box::new(CandidatePoolSelector),
        }
    }

    /// Replace the scoring model and question selector.
    pub fn with_strategy(
        mut self,
        scorer: Box<dyn DiseaseScorer>,
        selector: Box<dyn QuestionSelector>,
    ) -> Self {
        self.scorer = scorer;
        self.selector = selector;
        self
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn config(&self) -> &InterviewConfig {
        &self.config
    }

    // ── Intake ───────────────────────────────────────────────

    /// Main complaints the owner can choose from.
    pub fn main_complaints(&self) -> Vec<Symptom> {
        followup::main_complaint_candidates(&self.catalog)
    }

    /// Open a session anchored on `main_complaint_id`.
    pub fn start(&self, main_complaint_id: SymptomId) -> Result<DiagnosticSession, InterviewError> {
        let complaint = self
            .catalog
            .find_symptom_by_id(main_complaint_id)?
            .ok_or(InterviewError::UnknownComplaint(main_complaint_id))?;

        let session = DiagnosticSession::with_main_complaint(&complaint);
        tracing::info!(
            session_id = %session.id(),
            main_complaint = %complaint.name,
            category = complaint.category.as_deref().unwrap_or("none"),
            "Interview started"
        );
        Ok(session)
    }

    /// The next follow-up question about the main complaint, `None` when all
    /// dimensions are answered.
    pub fn follow_up_question(
        &self,
        session: &DiagnosticSession,
    ) -> Result<Option<FollowUpQuestion>, InterviewError> {
        followup::next_question(&self.catalog, session, session.last_follow_up())
    }

    /// Store the owner's choices for one follow-up dimension.
    ///
    /// Dimensions are answered in `FollowUpDimension::ORDER`; an already
    /// answered one may be answered again. Accompanying signs that name
    /// catalog symptoms are also recorded as confirmed answers.
    pub fn record_follow_up(
        &self,
        session: &mut DiagnosticSession,
        dimension: FollowUpDimension,
        choices: Vec<String>,
    ) -> Result<(), InterviewError> {
        if session.main_complaint_id().is_none() {
            return Err(InterviewError::NoMainComplaint(dimension));
        }
        if session.follow_up(dimension).is_none() {
            let expected = session
                .last_follow_up()
                .map_or(Some(FollowUpDimension::Type), |last| last.next());
            if expected != Some(dimension) {
                return Err(InterviewError::FollowUpOutOfOrder {
                    dimension: dimension.as_str(),
                    expected: expected.map_or("none", |d| d.as_str()),
                });
            }
        }
        if !dimension.is_multi_select() && choices.len() > 1 {
            return Err(InterviewError::TooManyChoices {
                dimension: dimension.as_str(),
                count: choices.len(),
            });
        }

        if dimension == FollowUpDimension::Accompanying {
            for name in &choices {
                match symptom_named_or_none(&self.catalog, name) {
                    Some(symptom) => {
                        session.record_answer(symptom.id, SymptomAnswer::Yes);
                    }
                    None => tracing::warn!(
                        session_id = %session.id(),
                        name = %name,
                        "Accompanying sign is not a catalog symptom"
                    ),
                }
            }
        }

        if dimension == FollowUpDimension::RedFlag && !choices.is_empty() {
            tracing::info!(
                session_id = %session.id(),
                count = choices.len(),
                "Red flags reported"
            );
        }

        session.record_follow_up(dimension, choices);
        Ok(())
    }

    // ── Adaptive questioning ─────────────────────────────────

    pub fn record_answer(
        &self,
        session: &mut DiagnosticSession,
        symptom_id: SymptomId,
        answer: SymptomAnswer,
    ) {
        if !session.record_answer(symptom_id, answer) {
            tracing::debug!(
                session_id = %session.id(),
                symptom_id,
                answer = answer.as_str(),
                "Answer replaced"
            );
        }
    }

    /// Current ranking for `session`, highest probability first.
    pub fn score(&self, session: &DiagnosticSession) -> Vec<DiseaseResult> {
        let snapshot = CatalogSnapshot::load(&self.catalog);
        self.scorer.score_diseases(&snapshot, session)
    }

    /// Advance the interview by one step.
    pub fn next_step(&self, session: &mut DiagnosticSession) -> StepResult {
        let _span = tracing::info_span!(
            "interview_step",
            session_id = %session.id(),
            question_count = session.question_count()
        )
        .entered();

        let snapshot = CatalogSnapshot::load(&self.catalog);
        let ranked = self.scorer.score_diseases(&snapshot, session);
        tracing::debug!(
            diseases = ranked.len(),
            top_probability = ranked.first().map(|r| r.probability),
            "Scored diseases"
        );

        if let Some(reason) = self.stopping.evaluate(&ranked, session.question_count()) {
            tracing::info!(reason = reason.as_str(), "Interview finished");
            return self.report(session, &ranked);
        }

        let ctx = SelectionContext {
            catalog: &self.catalog,
            snapshot: &snapshot,
            config: &self.config,
        };
        let Some(selection) = self.selector.select_next(&ctx, session, &ranked) else {
            tracing::info!(reason = "no_question", "Interview finished");
            return self.report(session, &ranked);
        };

        session.remember_selection(selection.symptom_id);
        let name = selection
            .symptom
            .or_else(|| symptom_or_none(&self.catalog, selection.symptom_id))
            .map(|s| s.name);

        StepResult::Continue {
            next_symptom_id: selection.symptom_id,
            question_text: question_text(name.as_deref().unwrap_or(UNNAMED_SYMPTOM)),
        }
    }

    // ── Report ───────────────────────────────────────────────

    fn report(&self, session: &DiagnosticSession, ranked: &[DiseaseResult]) -> StepResult {
        let diseases = ranked
            .iter()
            .take(self.config.report_size)
            .map(|result| self.diagnosis_entry(result))
            .collect();

        StepResult::Finished {
            diseases,
            red_flags: session.red_flags().to_vec(),
        }
    }

    fn diagnosis_entry(&self, result: &DiseaseResult) -> DiagnosisEntry {
        let supporting_symptoms = result
            .supporting_symptoms
            .iter()
            .filter_map(|&id| symptom_or_none(&self.catalog, id))
            .map(|s| s.name)
            .collect();

        let description = result
            .disease
            .description
            .clone()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| NO_DESCRIPTION.to_string());

        let recommendation = result.recommendation.clone().unwrap_or_else(|| {
            Recommendation::for_probability(result.probability)
                .message()
                .to_string()
        });

        DiagnosisEntry {
            disease_id: result.disease_id(),
            disease_name: result.disease.name.clone(),
            probability: result.probability,
            supporting_symptoms,
            description,
            recommendation,
        }
    }
}
