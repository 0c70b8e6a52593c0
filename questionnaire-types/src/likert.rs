use std::fmt;

/// One point on the five-point Likert agreement scale.
///
/// Each option pairs an ordinal value (-2 to 2) with its canonical label. The ordinal
/// is reference data for scoring; a `Likert` question only ever stores the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LikertResponseOption {
    StronglyDisagree,
    Disagree,
    NeitherAgreeNorDisagree,
    Agree,
    StronglyAgree,
}

impl LikertResponseOption {
    /// All options, in ordinal order.
    pub const ALL: [Self; 5] = [
        Self::StronglyDisagree,
        Self::Disagree,
        Self::NeitherAgreeNorDisagree,
        Self::Agree,
        Self::StronglyAgree,
    ];

    /// The ordinal value of this option.
    pub fn value(self) -> i8 {
        match self {
            Self::StronglyDisagree => -2,
            Self::Disagree => -1,
            Self::NeitherAgreeNorDisagree => 0,
            Self::Agree => 1,
            Self::StronglyAgree => 2,
        }
    }

    /// The canonical label, e.g. `"Strongly Disagree"`.
    pub fn label(self) -> &'static str {
        match self {
            Self::StronglyDisagree => "Strongly Disagree",
            Self::Disagree => "Disagree",
            Self::NeitherAgreeNorDisagree => "Neither Agree Nor Disagree",
            Self::Agree => "Agree",
            Self::StronglyAgree => "Strongly Agree",
        }
    }

    /// Find the option whose label matches `label`, ignoring case.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|option| option.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for LikertResponseOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
