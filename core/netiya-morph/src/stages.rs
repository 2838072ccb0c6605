//! Stem resolvers, one per derivation stage.
//!
//! Each resolver turns a paradigm selector into a stem. A rule that does
//! not match fails the whole stage.

use netiya_protocol::SingularSuffix;
use tracing::{debug, trace};

use crate::error::{DeclineError, Stage};
use crate::paradigm::{ConPlSelector, Selector};
use crate::rules::{AbsPlRule, Catalogue, ConPlRule, ConSgRule, GenSgRule, RuleId};

/// Rule name reported when a first-match chain has no rules.
pub(crate) const EMPTY_CHAIN: &str = "(empty chain)";

fn apply<R: Catalogue>(rule: R, stem: &str) -> Result<String, DeclineError> {
    let id: RuleId = rule.into();
    match rule.apply(stem)? {
        Some(out) => {
            trace!(stage = %id.stage(), rule = id.id(), stem, out = %out, "rule applied");
            Ok(out)
        }
        None => {
            debug!(stage = %id.stage(), rule = id.id(), stem, "rule does not match");
            Err(DeclineError::RuleMismatch {
                stage: id.stage(),
                rule: id.id(),
                stem: stem.to_string(),
            })
        }
    }
}

/// Tries `rules` in order. When none matches, the error names the last one.
/// An empty chain matches nothing.
fn first_match<'s, R: Catalogue>(
    stage: Stage,
    rules: &[R],
    stem_for: impl Fn(R) -> &'s str,
) -> Result<String, DeclineError> {
    let mut last = None;
    for &rule in rules {
        match apply(rule, stem_for(rule)) {
            Ok(out) => return Ok(out),
            Err(e) if e.is_rule_mismatch() => last = Some(e),
            Err(e) => return Err(e),
        }
    }
    Err(last.unwrap_or_else(|| DeclineError::RuleMismatch {
        stage,
        rule: EMPTY_CHAIN,
        stem: String::new(),
    }))
}

fn resolve<'s, R: Catalogue>(
    stage: Stage,
    selector: Selector<R>,
    prior: impl FnOnce() -> String,
    stem_for: impl Fn(R) -> &'s str,
) -> Result<String, DeclineError> {
    match selector {
        Selector::CopyPrior => Ok(prior()),
        Selector::Literal(stem) => Ok(stem.to_string()),
        Selector::Rule(rule) => apply(rule, stem_for(rule)),
        Selector::FirstMatch(rules) => first_match(stage, rules, stem_for),
    }
}

pub(crate) fn construct_singular(
    absolute: &str,
    suffix: SingularSuffix,
    selector: Selector<ConSgRule>,
) -> Result<String, DeclineError> {
    let selector = match selector {
        Selector::Rule(ConSgRule::C3) if suffix.is_final_heh() => Selector::Rule(ConSgRule::C38),
        other => other,
    };
    resolve(Stage::ConstructSingular, selector, || absolute.to_string(), |_| absolute)
}

/// Stem a genitive-singular rule reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GenSource {
    Absolute,
    Construct,
    PlainConstruct,
}

fn gen_source(rule: GenSgRule) -> GenSource {
    match rule {
        GenSgRule::C2 | GenSgRule::C4 | GenSgRule::C9 | GenSgRule::C10 | GenSgRule::C19 => {
            GenSource::PlainConstruct
        }
        GenSgRule::C8 | GenSgRule::C16 => GenSource::Construct,
        _ => GenSource::Absolute,
    }
}

pub(crate) fn genitive_singular(
    absolute: &str,
    suffix: SingularSuffix,
    construct: &str,
    selector: Selector<GenSgRule>,
) -> Result<String, DeclineError> {
    let plain_owned = construct.replace(['Á', '!'], "");
    let plain = plain_owned.as_str();

    let selector = match selector {
        Selector::Rule(GenSgRule::C30) if suffix.is_feminine_construct() => {
            Selector::Rule(GenSgRule::C31)
        }
        other => other,
    };

    let prior = || match suffix {
        SingularSuffix::SegolEh => absolute.to_string(),
        _ => plain.to_string(),
    };

    resolve(Stage::GenitiveSingular, selector, prior, |rule| match gen_source(rule) {
        GenSource::Absolute => absolute,
        GenSource::Construct => construct,
        GenSource::PlainConstruct => plain,
    })
}

pub(crate) fn absolute_plural(
    absolute: &str,
    construct: &str,
    genitive: &str,
    selector: Selector<AbsPlRule>,
) -> Result<String, DeclineError> {
    resolve(Stage::AbsolutePlural, selector, || genitive.to_string(), |rule| match rule {
        AbsPlRule::C42 | AbsPlRule::C46 | AbsPlRule::C52 => absolute,
        AbsPlRule::C47 | AbsPlRule::C55 => construct,
        _ => genitive,
    })
}

pub(crate) fn construct_plural(
    absolute_plural: &str,
    genitive: &str,
    selector: ConPlSelector,
) -> Result<String, DeclineError> {
    match selector {
        ConPlSelector::AbsolutePlural => Ok(absolute_plural.to_string()),
        ConPlSelector::GenitiveSingular => Ok(genitive.to_string()),
        ConPlSelector::Literal(stem) => Ok(stem.to_string()),
        ConPlSelector::Rule(rule @ (ConPlRule::C66 | ConPlRule::C67)) => apply(rule, genitive),
        ConPlSelector::Rule(rule) => apply(rule, absolute_plural),
    }
}
