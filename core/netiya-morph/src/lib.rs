//! Declension engine for Hebrew nouns.
//!
//! A noun is declined by its paradigm: native paradigms (`b_` prefix) thread
//! the stem through four rule-driven stages, loanword paradigms (`f_`
//! prefix) follow a fixed recipe each.
//!
//! ```no_run
//! use netiya_morph::decline;
//! use netiya_protocol::PluralSuffix;
//!
//! let d = decline("b_sus", "sus", false, PluralSuffix::Im).unwrap();
//! assert_eq!(d.abs_pl, "susi!m");
//! ```

pub mod error;
pub mod loanword;
pub mod paradigm;
pub mod phonology;
pub mod registry;
pub mod rules;

mod engine;
mod stages;

pub use error::{DeclineError, Stage};
pub use paradigm::{Attestation, ConPlSelector, Exemplar, GenPlSource, Paradigm, Selector};

use netiya_protocol::{
    Declension, DeclinedEntry, DeclinedLexicon, Lexicon, PluralSuffix, SingularSuffix,
};
use tracing::debug;

use engine::Split;
use loanword::Recipe;

/// Paradigm family, told apart by the identifier prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Native,
    Loanword,
}

impl Family {
    pub fn of(paradigm_id: &str) -> Option<Self> {
        if paradigm_id.starts_with("b_") {
            Some(Family::Native)
        } else if paradigm_id.starts_with("f_") {
            Some(Family::Loanword)
        } else {
            None
        }
    }
}

/// The singular suffix `word` ends with, first match in detection order.
pub fn detect_suffix(word: &str) -> Result<SingularSuffix, DeclineError> {
    SingularSuffix::DETECTION_ORDER
        .into_iter()
        .find(|s| word.ends_with(s.ending()))
        .ok_or_else(|| DeclineError::UnknownSuffix(word.to_string()))
}

/// Splits off the singular suffix. `-At` is an allomorph of `-Et`.
fn split(word: &str, has_suffix: bool) -> Result<Split<'_>, DeclineError> {
    if !has_suffix {
        return Ok(Split {
            word,
            stem: word,
            suffix: SingularSuffix::Bare,
        });
    }
    let detected = detect_suffix(word)?;
    let stem = &word[..word.len() - detected.ending().len()];
    let suffix = match detected {
        SingularSuffix::At => SingularSuffix::Et,
        other => other,
    };
    Ok(Split { word, stem, suffix })
}

/// Declines `word` by the registered paradigm `paradigm_id`.
///
/// Any stage whose rule does not fit the word fails the whole call with
/// [`DeclineError::RuleMismatch`].
pub fn decline(
    paradigm_id: &str,
    word: &str,
    has_suffix: bool,
    plural: PluralSuffix,
) -> Result<Declension, DeclineError> {
    match Family::of(paradigm_id) {
        Some(Family::Native) => {
            let entry = registry::lookup(paradigm_id)
                .ok_or_else(|| DeclineError::UnknownParadigm(paradigm_id.to_string()))?;
            let mut input = split(word, has_suffix)?;
            if has_suffix && entry.forces_feminine_construct() {
                input.suffix = SingularSuffix::FeminineEt;
            }
            debug!(paradigm = paradigm_id, word, suffix = %input.suffix, %plural, "declining");
            engine::derive(input, plural, &entry.paradigm)
        }
        Some(Family::Loanword) => {
            let recipe = Recipe::for_id(paradigm_id)
                .ok_or_else(|| DeclineError::UnknownParadigm(paradigm_id.to_string()))?;
            debug!(paradigm = paradigm_id, word, ?recipe, %plural, "declining loanword");
            recipe.apply(word, plural)
        }
        None => Err(DeclineError::UnknownParadigm(paradigm_id.to_string())),
    }
}

/// [`decline`] for inputs known to fit their paradigm.
///
/// # Panics
///
/// On [`DeclineError::RuleMismatch`]: the paradigm and the word disagree,
/// which is a data error rather than a bad query.
pub fn decline_strict(
    paradigm_id: &str,
    word: &str,
    has_suffix: bool,
    plural: PluralSuffix,
) -> Result<Declension, DeclineError> {
    match decline(paradigm_id, word, has_suffix, plural) {
        Err(e) if e.is_rule_mismatch() => {
            panic!("paradigm {paradigm_id} does not decline '{word}': {e}")
        }
        other => other,
    }
}

/// Declines `word` by a paradigm that need not be registered.
pub fn decline_with(
    paradigm: &Paradigm,
    word: &str,
    has_suffix: bool,
    plural: PluralSuffix,
) -> Result<Declension, DeclineError> {
    let input = split(word, has_suffix)?;
    engine::derive(input, plural, paradigm)
}

/// Outcome of declining one registry exemplar.
#[derive(Debug, Clone)]
pub struct ExemplarCheck {
    pub id: &'static str,
    pub attestation: Attestation,
    pub result: Result<Declension, DeclineError>,
}

/// Declines every registered exemplar.
pub fn check_registry() -> Vec<ExemplarCheck> {
    registry::entries()
        .iter()
        .filter_map(|entry| {
            let ex = entry.exemplar?;
            Some(ExemplarCheck {
                id: entry.id,
                attestation: entry.attestation,
                result: decline(entry.id, ex.word, ex.has_suffix, ex.plural),
            })
        })
        .collect()
}

/// Declines a whole lexicon. Entries that fail are left out of the result
/// and reported by index.
pub fn decline_lexicon(lexicon: &Lexicon) -> (DeclinedLexicon, Vec<(usize, DeclineError)>) {
    let mut entries = Vec::with_capacity(lexicon.entries.len());
    let mut failures = Vec::new();

    for (i, row) in lexicon.entries.iter().enumerate() {
        match decline(&row.paradigm, &row.word, row.has_suffix, row.plural) {
            Ok(declension) => entries.push(DeclinedEntry {
                paradigm: row.paradigm.clone(),
                declension,
            }),
            Err(e) => failures.push((i, e)),
        }
    }

    let declined = DeclinedLexicon {
        version: lexicon.version,
        entries,
    };
    (declined, failures)
}
