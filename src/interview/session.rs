//! Per-interview mutable state.
//!
//! Each symptom is either unasked (absent from the answer map) or carries
//! exactly one `SymptomAnswer`, so "confirmed", "uncertain" and "denied" can
//! never disagree with "asked".

use std::collections::{BTreeMap, HashSet, VecDeque};

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::enums::{FollowUpDimension, SymptomAnswer};
use crate::models::{Symptom, SymptomId};

/// How many recently selected symptoms are remembered for repeat avoidance.
pub const RECENTLY_ASKED_CAPACITY: usize = 3;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticSession {
    id: Uuid,
    started_at: NaiveDateTime,
    answers: BTreeMap<SymptomId, SymptomAnswer>,
    question_count: u32,
    main_complaint_id: Option<SymptomId>,
    main_complaint_name: Option<String>,
    main_complaint_category: Option<String>,
    recently_asked: VecDeque<SymptomId>,
    follow_ups: BTreeMap<FollowUpDimension, Vec<String>>,
    red_flags: Vec<String>,
}

impl Default for DiagnosticSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticSession {
    /// A session with no main complaint yet.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Local::now().naive_local(),
            answers: BTreeMap::new(),
            question_count: 0,
            main_complaint_id: None,
            main_complaint_name: None,
            main_complaint_category: None,
            recently_asked: VecDeque::with_capacity(RECENTLY_ASKED_CAPACITY + 1),
            follow_ups: BTreeMap::new(),
            red_flags: Vec::new(),
        }
    }

    /// A session anchored on `complaint`, which counts as confirmed but not
    /// as an answered question.
    pub fn with_main_complaint(complaint: &Symptom) -> Self {
        let mut session = Self::new();
        session.main_complaint_id = Some(complaint.id);
        session.main_complaint_name = Some(complaint.name.clone());
        session.main_complaint_category = complaint.category.clone();
        session.answers.insert(complaint.id, SymptomAnswer::Yes);
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> NaiveDateTime {
        self.started_at
    }

    pub fn question_count(&self) -> u32 {
        self.question_count
    }

    pub fn main_complaint_id(&self) -> Option<SymptomId> {
        self.main_complaint_id
    }

    pub fn main_complaint_name(&self) -> Option<&str> {
        self.main_complaint_name.as_deref()
    }

    pub fn main_complaint_category(&self) -> Option<&str> {
        self.main_complaint_category.as_deref()
    }

    // ── Answers ──────────────────────────────────────────────

    /// Record the owner's answer about one symptom.
    ///
    /// The first answer to a symptom counts as a question; answering the same
    /// symptom again replaces the stored answer without counting. Returns
    /// whether this was a new question.
    pub fn record_answer(&mut self, symptom_id: SymptomId, answer: SymptomAnswer) -> bool {
        let is_new = self.answers.insert(symptom_id, answer).is_none();
        if is_new {
            self.question_count += 1;
        }
        is_new
    }

    pub fn answer(&self, symptom_id: SymptomId) -> Option<SymptomAnswer> {
        self.answers.get(&symptom_id).copied()
    }

    pub fn is_asked(&self, symptom_id: SymptomId) -> bool {
        self.answers.contains_key(&symptom_id)
    }

    pub fn is_selected(&self, symptom_id: SymptomId) -> bool {
        self.answer(symptom_id) == Some(SymptomAnswer::Yes)
    }

    pub fn is_uncertain(&self, symptom_id: SymptomId) -> bool {
        self.answer(symptom_id) == Some(SymptomAnswer::Uncertain)
    }

    /// Asked and answered "no".
    pub fn is_denied(&self, symptom_id: SymptomId) -> bool {
        self.answer(symptom_id) == Some(SymptomAnswer::No)
    }

    /// Confirmed symptoms, in id order.
    pub fn selected_symptoms(&self) -> impl Iterator<Item = SymptomId> + '_ {
        self.answers
            .iter()
            .filter(|(_, a)| **a == SymptomAnswer::Yes)
            .map(|(id, _)| *id)
    }

    pub fn selected_count(&self) -> usize {
        self.selected_symptoms().count()
    }

    pub fn asked_symptoms(&self) -> HashSet<SymptomId> {
        self.answers.keys().copied().collect()
    }

    // ── Repeat avoidance ─────────────────────────────────────

    pub fn recently_asked(&self) -> &VecDeque<SymptomId> {
        &self.recently_asked
    }

    pub fn was_recently_asked(&self, symptom_id: SymptomId) -> bool {
        self.recently_asked.contains(&symptom_id)
    }

    /// Remember a selected symptom; the oldest entries are evicted past capacity.
    pub fn remember_selection(&mut self, symptom_id: SymptomId) {
        self.recently_asked.push_back(symptom_id);
        while self.recently_asked.len() > RECENTLY_ASKED_CAPACITY {
            self.recently_asked.pop_front();
        }
    }

    // ── Follow-up answers ────────────────────────────────────

    pub fn record_follow_up(&mut self, dimension: FollowUpDimension, choices: Vec<String>) {
        if dimension == FollowUpDimension::RedFlag {
            self.red_flags = choices.clone();
        }
        self.follow_ups.insert(dimension, choices);
    }

    pub fn follow_up(&self, dimension: FollowUpDimension) -> Option<&[String]> {
        self.follow_ups.get(&dimension).map(Vec::as_slice)
    }

    /// The furthest follow-up dimension answered so far.
    pub fn last_follow_up(&self) -> Option<FollowUpDimension> {
        self.follow_ups.keys().max().copied()
    }

    pub fn red_flags(&self) -> &[String] {
        &self.red_flags
    }
}
