use crate::config::InterviewConfig;

use super::types::DiseaseResult;

/// Why an interview ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Nothing left in the ranking.
    NoCandidates,
    /// The leader reached the threshold for the current question count.
    Confident,
    /// The leader is far enough ahead of the runner-up.
    ClearLeader,
    /// Question cap reached.
    QuestionLimit,
}

impl StopReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoCandidates => "no_candidates",
            Self::Confident => "confident",
            Self::ClearLeader => "clear_leader",
            Self::QuestionLimit => "question_limit",
        }
    }
}

/// Decides whether the adaptive questioning should end.
#[derive(Debug, Clone)]
pub struct StoppingPolicy {
    config: InterviewConfig,
}

impl Default for StoppingPolicy {
    fn default() -> Self {
        Self::new(InterviewConfig::default())
    }
}

impl StoppingPolicy {
    pub fn new(config: InterviewConfig) -> Self {
        Self { config }
    }

    /// `ranked` must be highest probability first.
    pub fn evaluate(&self, ranked: &[DiseaseResult], question_count: u32) -> Option<StopReason> {
        let Some(top) = ranked.first() else {
            return Some(StopReason::NoCandidates);
        };
        if question_count < self.config.min_questions {
            return None;
        }

        let top = top.probability;
        if top >= self.config.threshold_for(question_count) {
            return Some(StopReason::Confident);
        }

        if question_count >= self.config.margin_min_questions {
            if let Some(second) = ranked.get(1) {
                if top - second.probability > self.config.margin_gap
                    && top > self.config.margin_top_floor
                {
                    return Some(StopReason::ClearLeader);
                }
            }
        }

        if question_count >= self.config.max_questions {
            return Some(StopReason::QuestionLimit);
        }
        None
    }

    pub fn should_stop(&self, ranked: &[DiseaseResult], question_count: u32) -> bool {
        self.evaluate(ranked, question_count).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Disease;

    fn ranked(probabilities: &[f64]) -> Vec<DiseaseResult> {
        probabilities
            .iter()
            .enumerate()
            .map(|(i, &probability)| DiseaseResult {
                disease: Disease {
                    id: i as i64 + 1,
                    name: format!("Disease {i}"),
                    organ_system: String::new(),
                    description: None,
                },
                probability,
                supporting_symptoms: vec![],
                recommendation: None,
            })
            .collect()
    }

    #[test]
    fn empty_ranking_stops_immediately() {
        let policy = StoppingPolicy::default();
        assert_eq!(policy.evaluate(&[], 0), Some(StopReason::NoCandidates));
        assert!(policy.should_stop(&[], 20));
    }

    #[test]
    fn never_stops_before_minimum_questions() {
        let policy = StoppingPolicy::default();
        for count in 0..8 {
            assert!(!policy.should_stop(&ranked(&[0.95]), count));
            assert!(!policy.should_stop(&ranked(&[0.95, 0.01]), count));
        }
    }

    #[test]
    fn always_stops_at_question_cap() {
        let policy = StoppingPolicy::default();
        assert_eq!(
            policy.evaluate(&ranked(&[0.30, 0.29]), 30),
            Some(StopReason::QuestionLimit)
        );
        assert!(policy.should_stop(&ranked(&[0.05]), 45));
    }

    #[test]
    fn below_threshold_continues_in_band_9_to_12() {
        let policy = StoppingPolicy::default();
        // gap 0.4 is not > 0.4, and count 10 is below the margin rule anyway
        assert!(!policy.should_stop(&ranked(&[0.80, 0.40]), 10));
    }

    #[test]
    fn meets_threshold_in_band_13_to_16() {
        let policy = StoppingPolicy::default();
        assert_eq!(
            policy.evaluate(&ranked(&[0.78, 0.70]), 14),
            Some(StopReason::Confident)
        );
    }

    #[test]
    fn threshold_at_exactly_eight_questions() {
        let policy = StoppingPolicy::default();
        assert!(policy.should_stop(&ranked(&[0.90]), 8));
        assert!(!policy.should_stop(&ranked(&[0.89]), 8));
    }

    #[test]
    fn clear_leader_stops_from_twelve_questions() {
        let policy = StoppingPolicy::default();
        let ranking = ranked(&[0.65, 0.20]);
        assert!(!policy.should_stop(&ranking, 11));
        assert_eq!(policy.evaluate(&ranking, 12), Some(StopReason::ClearLeader));
    }

    #[test]
    fn gap_must_exceed_margin_strictly() {
        let policy = StoppingPolicy::default();
        assert_eq!(0.80 - 0.40, 0.40);
        assert_eq!(policy.evaluate(&ranked(&[0.80, 0.40]), 12), None);
        assert_eq!(
            policy.evaluate(&ranked(&[0.81, 0.40]), 12),
            Some(StopReason::ClearLeader)
        );
    }

    #[test]
    fn clear_leader_needs_runner_up_and_floor() {
        let policy = StoppingPolicy::default();
        // lone disease below threshold
        assert!(!policy.should_stop(&ranked(&[0.70]), 12));
        // gap large but leader under 0.60
        assert!(!policy.should_stop(&ranked(&[0.58, 0.10]), 13));
    }

    #[test]
    fn custom_config_changes_limits() {
        let config = InterviewConfig {
            min_questions: 2,
            max_questions: 5,
            ..InterviewConfig::default()
        };
        let policy = StoppingPolicy::new(config);
        assert!(!policy.should_stop(&ranked(&[0.3]), 4));
        assert!(policy.should_stop(&ranked(&[0.3]), 5));
    }

    #[test]
    fn reasons_have_stable_names() {
        assert_eq!(StopReason::ClearLeader.as_str(), "clear_leader");
        assert_eq!(StopReason::NoCandidates.as_str(), "no_candidates");
    }
}
