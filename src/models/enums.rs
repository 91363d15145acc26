use crate::db::DatabaseError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = DatabaseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(DatabaseError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(SymptomAnswer {
    Yes => "yes",
    No => "no",
    Uncertain => "uncertain",
});

str_enum!(FollowUpDimension {
    Type => "type",
    Duration => "duration",
    Severity => "severity",
    Trigger => "trigger",
    Accompanying => "accompanying",
    RedFlag => "red_flag",
});

impl FollowUpDimension {
    /// Fixed traversal order of the follow-up questions.
    pub const ORDER: [FollowUpDimension; 6] = [
        Self::Type,
        Self::Duration,
        Self::Severity,
        Self::Trigger,
        Self::Accompanying,
        Self::RedFlag,
    ];

    /// The dimension asked after this one, `None` after RED_FLAG.
    pub fn next(&self) -> Option<Self> {
        let pos = Self::ORDER.iter().position(|d| d == self)?;
        Self::ORDER.get(pos + 1).copied()
    }

    pub fn is_multi_select(&self) -> bool {
        matches!(self, Self::Accompanying | Self::RedFlag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn answer_round_trips_through_str() {
        for a in [SymptomAnswer::Yes, SymptomAnswer::No, SymptomAnswer::Uncertain] {
            assert_eq!(SymptomAnswer::from_str(a.as_str()).unwrap(), a);
        }
    }

    #[test]
    fn unknown_answer_is_invalid_enum() {
        let err = SymptomAnswer::from_str("maybe").unwrap_err();
        assert!(matches!(err, DatabaseError::InvalidEnum { .. }));
    }

    #[test]
    fn dimensions_advance_in_fixed_order() {
        assert_eq!(FollowUpDimension::Type.next(), Some(FollowUpDimension::Duration));
        assert_eq!(FollowUpDimension::Trigger.next(), Some(FollowUpDimension::Accompanying));
        assert_eq!(FollowUpDimension::Accompanying.next(), Some(FollowUpDimension::RedFlag));
        assert_eq!(FollowUpDimension::RedFlag.next(), None);
    }

    #[test]
    fn only_accompanying_and_red_flag_are_multi_select() {
        let multi: Vec<_> = FollowUpDimension::ORDER
            .iter()
            .filter(|d| d.is_multi_select())
            .collect();
        assert_eq!(multi, vec![&FollowUpDimension::Accompanying, &FollowUpDimension::RedFlag]);
    }
}
