//! Static follow-up vocabulary: the curated main complaints and the canned
//! option lists for each follow-up dimension.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::enums::FollowUpDimension;

/// Option lists for one main complaint.
#[derive(Debug, Clone, Copy)]
pub struct ComplaintProfile {
    pub types: &'static [&'static str],
    pub durations: &'static [&'static str],
    pub severities: &'static [&'static str],
    pub triggers: &'static [&'static str],
    /// Candidate symptom names, checked against the catalog before use.
    pub accompanying: &'static [&'static str],
    pub red_flags: &'static [&'static str],
}

impl ComplaintProfile {
    pub fn options(&self, dimension: FollowUpDimension) -> &'static [&'static str] {
        match dimension {
            FollowUpDimension::Type => self.types,
            FollowUpDimension::Duration => self.durations,
            FollowUpDimension::Severity => self.severities,
            FollowUpDimension::Trigger => self.triggers,
            FollowUpDimension::Accompanying => self.accompanying,
            FollowUpDimension::RedFlag => self.red_flags,
        }
    }
}

const ACUTE_DURATIONS: &[&str] = &[
    "Less than 24 hours",
    "1-3 days",
    "4-7 days",
    "More than a week",
];

const CHRONIC_DURATIONS: &[&str] = &[
    "Less than a week",
    "1-4 weeks",
    "1-6 months",
    "More than 6 months",
];

const SEVERITIES: &[&str] = &["Mild", "Moderate", "Severe"];

const FREQUENCY_SEVERITIES: &[&str] = &[
    "Once or twice",
    "Several times a day",
    "Constantly",
];

/// Main complaints offered at intake, in display order.
pub const MAIN_COMPLAINTS: &[&str] = &[
    "Vomiting",
    "Diarrhea",
    "Loss of appetite",
    "Coughing",
    "Sneezing",
    "Itching",
    "Limping",
    "Lethargy",
    "Excessive thirst",
    "Difficulty urinating",
    "Seizures",
    "Eye discharge",
    "Head shaking",
];

/// Used when a complaint has no entry of its own.
pub static GENERIC_PROFILE: ComplaintProfile = ComplaintProfile {
    types: &["Sudden change", "Gradual change", "Comes and goes"],
    durations: ACUTE_DURATIONS,
    severities: SEVERITIES,
    triggers: &[
        "After eating",
        "After exercise",
        "At night",
        "No obvious trigger",
    ],
    accompanying: &["Lethargy", "Loss of appetite", "Fever", "Vomiting"],
    red_flags: &[
        "Collapse or unable to stand",
        "Pale or blue gums",
        "Difficulty breathing",
        "Suspected poisoning",
    ],
};

/// Profiles keyed by lower-case complaint name.
static PROFILES: LazyLock<HashMap<&'static str, ComplaintProfile>> = LazyLock::new(|| {
    HashMap::from([
        (
            "vomiting",
            ComplaintProfile {
                types: &["Undigested food", "Yellow bile", "Foam", "Contains blood"],
                durations: ACUTE_DURATIONS,
                severities: FREQUENCY_SEVERITIES,
                triggers: &[
                    "Right after eating",
                    "Hours after eating",
                    "On an empty stomach",
                    "No obvious trigger",
                ],
                accompanying: &[
                    "Diarrhea",
                    "Loss of appetite",
                    "Lethargy",
                    "Abdominal pain",
                    "Dehydration",
                ],
                red_flags: &[
                    "Blood in vomit",
                    "Swollen, hard belly",
                    "Unproductive retching",
                    "Suspected foreign object",
                ],
            },
        ),
        (
            "diarrhea",
            ComplaintProfile {
                types: &["Soft", "Watery", "Mucus-covered", "Dark or tarry"],
                durations: ACUTE_DURATIONS,
                severities: FREQUENCY_SEVERITIES,
                triggers: &[
                    "After a diet change",
                    "After eating something unusual",
                    "After stress or travel",
                    "No obvious trigger",
                ],
                accompanying: &[
                    "Vomiting",
                    "Blood in stool",
                    "Loss of appetite",
                    "Dehydration",
                    "Fever",
                ],
                red_flags: &[
                    "Black or bloody stool",
                    "Unvaccinated puppy",
                    "Unable to keep water down",
                ],
            },
        ),
        (
            "loss of appetite",
            ComplaintProfile {
                types: &["Eats less than usual", "Refuses food", "Refuses food and water"],
                durations: ACUTE_DURATIONS,
                severities: SEVERITIES,
                triggers: &[
                    "After a diet change",
                    "After a stressful event",
                    "After medication",
                    "No obvious trigger",
                ],
                accompanying: &["Vomiting", "Lethargy", "Weight loss", "Fever"],
                red_flags: &[
                    "Not eating for more than 2 days",
                    "Not drinking",
                    "Yellow gums or eyes",
                ],
            },
        ),
        (
            "coughing",
            ComplaintProfile {
                types: &["Dry", "Wet or productive", "Honking", "Gagging"],
                durations: ACUTE_DURATIONS,
                severities: FREQUENCY_SEVERITIES,
                triggers: &[
                    "During exercise",
                    "Pulling on the leash",
                    "At night",
                    "After contact with other dogs",
                ],
                accompanying: &[
                    "Sneezing",
                    "Nasal discharge",
                    "Fever",
                    "Lethargy",
                    "Honking cough",
                ],
                red_flags: &[
                    "Coughing up blood",
                    "Blue or grey gums",
                    "Breathing with mouth open at rest",
                ],
            },
        ),
        (
            "sneezing",
            ComplaintProfile {
                types: &["Occasional", "In fits", "Reverse sneezing"],
                durations: ACUTE_DURATIONS,
                severities: FREQUENCY_SEVERITIES,
                triggers: &["Outdoors", "Around dust or smoke", "Seasonal", "No obvious trigger"],
                accompanying: &["Nasal discharge", "Eye discharge", "Coughing", "Fever"],
                red_flags: &["Nosebleed", "Swelling of the face"],
            },
        ),
        (
            "itching",
            ComplaintProfile {
                types: &["Scratching", "Licking or chewing", "Rubbing on surfaces"],
                durations: CHRONIC_DURATIONS,
                severities: SEVERITIES,
                triggers: &["Seasonal", "After a diet change", "After walks", "Year-round"],
                accompanying: &["Hair loss", "Red skin", "Scabs", "Flea dirt", "Ear odor"],
                red_flags: &["Open, weeping wounds", "Sudden facial swelling"],
            },
        ),
        (
            "limping",
            ComplaintProfile {
                types: &["Front leg", "Hind leg", "Shifting between legs"],
                durations: ACUTE_DURATIONS,
                severities: &[
                    "Still puts weight on the leg",
                    "Touches the toe down",
                    "Carries the leg",
                ],
                triggers: &["After exercise", "After rest", "After a fall or jump", "No obvious trigger"],
                accompanying: &["Joint swelling", "Stiffness after rest", "Lethargy"],
                red_flags: &[
                    "Leg at an abnormal angle",
                    "Cannot stand",
                    "Dragging the hind legs",
                ],
            },
        ),
        (
            "lethargy",
            ComplaintProfile {
                types: &["Sleeping more", "Reluctant to walk", "Unresponsive"],
                durations: ACUTE_DURATIONS,
                severities: SEVERITIES,
                triggers: &["After exercise", "After vaccination", "In hot weather", "No obvious trigger"],
                accompanying: &["Loss of appetite", "Fever", "Pale gums", "Weight loss"],
                red_flags: &["Collapse", "Pale or white gums", "Rapid breathing at rest"],
            },
        ),
        (
            "excessive thirst",
            ComplaintProfile {
                types: &["Drinking more", "Drinking and urinating more"],
                durations: CHRONIC_DURATIONS,
                severities: SEVERITIES,
                triggers: &["In hot weather", "After exercise", "After medication", "All the time"],
                accompanying: &["Frequent urination", "Weight loss", "Loss of appetite", "Vomiting"],
                red_flags: &["Sweet-smelling breath", "Vomiting with weakness"],
            },
        ),
        (
            "difficulty urinating",
            ComplaintProfile {
                types: &["Straining", "Small amounts", "No urine at all"],
                durations: ACUTE_DURATIONS,
                severities: SEVERITIES,
                triggers: &["Every attempt", "Some attempts", "No obvious trigger"],
                accompanying: &["Blood in urine", "Frequent urination", "Lethargy"],
                red_flags: &[
                    "No urine for 12 hours",
                    "Crying while urinating",
                    "Male cat straining in the litter box",
                ],
            },
        ),
        (
            "seizures",
            ComplaintProfile {
                types: &["Whole-body shaking", "Twitching of one part", "Staring spells"],
                durations: CHRONIC_DURATIONS,
                severities: &[
                    "Under 1 minute",
                    "1 to 5 minutes",
                    "Over 5 minutes",
                ],
                triggers: &["During sleep", "When excited", "After eating", "No obvious trigger"],
                accompanying: &["Disorientation", "Lethargy"],
                red_flags: &[
                    "Seizure lasting over 5 minutes",
                    "Several seizures in one day",
                    "Not waking up between seizures",
                ],
            },
        ),
        (
            "eye discharge",
            ComplaintProfile {
                types: &["Clear and watery", "Thick and yellow or green", "Crusty"],
                durations: ACUTE_DURATIONS,
                severities: SEVERITIES,
                triggers: &["Outdoors", "Seasonal", "After an injury", "No obvious trigger"],
                accompanying: &["Squinting", "Sneezing", "Nasal discharge"],
                red_flags: &["Cloudy eye", "Eye bulging or sunken", "Sudden blindness"],
            },
        ),
        (
            "head shaking",
            ComplaintProfile {
                types: &["Shaking", "Scratching at the ears", "Head tilt"],
                durations: ACUTE_DURATIONS,
                severities: FREQUENCY_SEVERITIES,
                triggers: &["After swimming", "After walks in grass", "No obvious trigger"],
                accompanying: &["Ear odor", "Itching", "Red skin"],
                red_flags: &["Loss of balance", "Swollen ear flap", "Rapid eye flicking"],
            },
        ),
    ])
});

/// The profile for `complaint`, matched case-insensitively, or the generic one.
pub fn profile_for(complaint: &str) -> &'static ComplaintProfile {
    PROFILES
        .get(complaint.trim().to_lowercase().as_str())
        .unwrap_or(&GENERIC_PROFILE)
}
