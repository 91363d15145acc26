//! Follow-up questions about the main complaint.
//!
//! Dimensions are walked in the fixed order of [`FollowUpDimension::ORDER`].
//! The next question depends only on which dimension was answered last,
//! never on the content of earlier answers.

use serde::{Deserialize, Serialize};

use crate::catalog::{symptom_named_or_none, Catalog};
use crate::models::enums::FollowUpDimension;
use crate::models::Symptom;

use super::session::DiagnosticSession;
use super::types::InterviewError;
use super::vocabulary::{profile_for, MAIN_COMPLAINTS};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowUpQuestion {
    pub dimension: FollowUpDimension,
    pub prompt: String,
    pub options: Vec<String>,
    pub multi_select: bool,
}

/// Curated main complaints that the catalog knows, in display order.
pub fn main_complaint_candidates(catalog: &dyn Catalog) -> Vec<Symptom> {
    MAIN_COMPLAINTS
        .iter()
        .filter_map(|name| symptom_named_or_none(catalog, name))
        .collect()
}

/// The question following `last`, or the first one when nothing was answered.
/// `Ok(None)` once RED_FLAG has been answered.
pub fn next_question(
    catalog: &dyn Catalog,
    session: &DiagnosticSession,
    last: Option<FollowUpDimension>,
) -> Result<Option<FollowUpQuestion>, InterviewError> {
    let next = match last {
        None => Some(FollowUpDimension::Type),
        Some(dimension) => dimension.next(),
    };
    next.map(|dimension| question_for(catalog, session, dimension))
        .transpose()
}

pub fn question_for(
    catalog: &dyn Catalog,
    session: &DiagnosticSession,
    dimension: FollowUpDimension,
) -> Result<FollowUpQuestion, InterviewError> {
    let complaint = session
        .main_complaint_name()
        .ok_or(InterviewError::NoMainComplaint(dimension))?;
    let profile = profile_for(complaint);

    let options = match dimension {
        FollowUpDimension::Accompanying => accompanying_options(catalog, session, profile.accompanying),
        _ => profile
            .options(dimension)
            .iter()
            .map(|o| o.to_string())
            .collect(),
    };

    Ok(FollowUpQuestion {
        dimension,
        prompt: prompt(dimension, &complaint.to_lowercase()),
        options,
        multi_select: dimension.is_multi_select(),
    })
}

/// Names the catalog knows and the owner has not already confirmed.
fn accompanying_options(
    catalog: &dyn Catalog,
    session: &DiagnosticSession,
    names: &[&str],
) -> Vec<String> {
    names
        .iter()
        .filter_map(|name| symptom_named_or_none(catalog, name))
        .filter(|symptom| !session.is_selected(symptom.id))
        .map(|symptom| symptom.name)
        .collect()
}

fn prompt(dimension: FollowUpDimension, complaint: &str) -> String {
    match dimension {
        FollowUpDimension::Type => format!("What kind of {complaint} are you seeing?"),
        FollowUpDimension::Duration => format!("How long has the {complaint} been going on?"),
        FollowUpDimension::Severity => format!("How severe is the {complaint}?"),
        FollowUpDimension::Trigger => format!("Does anything seem to bring on the {complaint}?"),
        FollowUpDimension::Accompanying => {
            "Which of these other signs have you noticed?".to_string()
        }
        FollowUpDimension::RedFlag => "Have you noticed any of these warning signs?".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_support::FailingCatalog;
    use crate::catalog::InMemoryCatalog;
    use crate::db::CatalogSeed;
    use crate::models::enums::SymptomAnswer;

    fn catalog() -> InMemoryCatalog {
        InMemoryCatalog::from(CatalogSeed::bundled().unwrap())
    }

    fn vomiting_session(catalog: &InMemoryCatalog) -> DiagnosticSession {
        let vomiting = catalog.find_symptom_by_name("Vomiting").unwrap().unwrap();
        DiagnosticSession::with_main_complaint(&vomiting)
    }

    #[test]
    fn candidates_are_curated_names_known_to_catalog() {
        let small = InMemoryCatalog::new()
            .with_symptom(1, "Coughing", Some("Respiratory"))
            .with_symptom(2, "Pale gums", None)
            .with_symptom(3, "vomiting", Some("Digestive"));
        let names: Vec<_> = main_complaint_candidates(&small)
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(names, vec![3, 1]);

        assert_eq!(main_complaint_candidates(&catalog()).len(), MAIN_COMPLAINTS.len());
    }

    #[test]
    fn traversal_is_strictly_sequential() {
        let catalog = catalog();
        let session = vomiting_session(&catalog);

        let mut last = None;
        let mut seen = Vec::new();
        while let Some(q) = next_question(&catalog, &session, last).unwrap() {
            seen.push(q.dimension);
            last = Some(q.dimension);
        }
        assert_eq!(seen, FollowUpDimension::ORDER.to_vec());
    }

    #[test]
    fn single_and_multi_select_dimensions() {
        let catalog = catalog();
        let session = vomiting_session(&catalog);
        for dimension in FollowUpDimension::ORDER {
            let q = question_for(&catalog, &session, dimension).unwrap();
            assert_eq!(
                q.multi_select,
                matches!(dimension, FollowUpDimension::Accompanying | FollowUpDimension::RedFlag)
            );
        }
    }

    #[test]
    fn prompt_names_the_complaint() {
        let catalog = catalog();
        let session = vomiting_session(&catalog);
        let q = question_for(&catalog, &session, FollowUpDimension::Duration).unwrap();
        assert_eq!(q.prompt, "How long has the vomiting been going on?");
        assert_eq!(q.options[0], "Less than 24 hours");
    }

    #[test]
    fn accompanying_skips_unknown_and_confirmed_symptoms() {
        let catalog = catalog();
        let mut session = vomiting_session(&catalog);
        let diarrhea = catalog.find_symptom_by_name("Diarrhea").unwrap().unwrap();
        session.record_answer(diarrhea.id, SymptomAnswer::Yes);

        let q = question_for(&catalog, &session, FollowUpDimension::Accompanying).unwrap();
        assert!(!q.options.contains(&"Diarrhea".to_string()));
        assert!(q.options.contains(&"Lethargy".to_string()));

        let tiny = InMemoryCatalog::new().with_symptom(1, "Vomiting", Some("Digestive"));
        let q = question_for(&tiny, &vomiting_session(&catalog), FollowUpDimension::Accompanying)
            .unwrap();
        assert!(q.options.is_empty());
    }

    #[test]
    fn unknown_complaint_uses_generic_options() {
        let catalog = catalog();
        let gums = catalog.find_symptom_by_name("Pale gums").unwrap().unwrap();
        let session = DiagnosticSession::with_main_complaint(&gums);
        let q = question_for(&catalog, &session, FollowUpDimension::Type).unwrap();
        assert_eq!(q.options, vec!["Sudden change", "Gradual change", "Comes and goes"]);
    }

    #[test]
    fn requires_main_complaint() {
        let err = question_for(&catalog(), &DiagnosticSession::new(), FollowUpDimension::Type)
            .unwrap_err();
        assert!(matches!(err, InterviewError::NoMainComplaint(FollowUpDimension::Type)));
    }

    #[test]
    fn failing_catalog_yields_no_accompanying_options() {
        let catalog = catalog();
        let session = vomiting_session(&catalog);
        let q = question_for(&FailingCatalog, &session, FollowUpDimension::Accompanying).unwrap();
        assert!(q.options.is_empty());
        assert!(main_complaint_candidates(&FailingCatalog).is_empty());
    }
}
