use std::fmt;

use thiserror::Error;

/// The four stem-derivation stages, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    ConstructSingular,
    GenitiveSingular,
    AbsolutePlural,
    ConstructPlural,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::ConstructSingular => "construct singular",
            Stage::GenitiveSingular => "genitive singular",
            Stage::AbsolutePlural => "absolute plural",
            Stage::ConstructPlural => "construct plural",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeclineError {
    #[error("{stage} rule {rule} does not match stem '{stem}'")]
    RuleMismatch {
        stage: Stage,
        rule: &'static str,
        stem: String,
    },

    #[error("'{0}' does not end in a known singular suffix")]
    UnknownSuffix(String),

    #[error("unknown paradigm '{0}'")]
    UnknownParadigm(String),

    /// The word is too short for its loanword recipe.
    #[error("'{word}' is too short for {paradigm}")]
    MalformedWord { paradigm: &'static str, word: String },

    /// The pattern engine gave up (backtracking limit) while applying a rule.
    #[error("pattern engine failed in rule {rule}: {message}")]
    Pattern { rule: &'static str, message: String },
}

impl DeclineError {
    pub fn is_rule_mismatch(&self) -> bool {
        matches!(self, DeclineError::RuleMismatch { .. })
    }
}
