//! The rule catalogue.
//!
//! Every rule is an anchored pattern paired with a replacement. Rules are
//! grouped by the stage that uses them; [`RuleId`] tags a rule with its
//! stage so the whole catalogue lives in one compiled table.
//! All patterns are compiled once, on first use.

mod abs_pl;
mod con_pl;
mod con_sg;
mod gen_sg;

pub use abs_pl::AbsPlRule;
pub use con_pl::ConPlRule;
pub use con_sg::ConSgRule;
pub use gen_sg::GenSgRule;

use std::collections::HashMap;
use std::sync::LazyLock;

use fancy_regex::{Captures, Regex};

use crate::error::{DeclineError, Stage};

/// Right-hand side of a rule.
#[derive(Clone, Copy)]
pub enum Replacement {
    /// Literal text with `${n}` group references.
    Template(&'static str),
    /// Computed from the captured groups.
    With(fn(&Captures<'_>) -> String),
}

#[derive(Clone, Copy)]
pub struct RuleDef {
    pub pattern: &'static str,
    pub replacement: Replacement,
}

impl RuleDef {
    pub const fn template(pattern: &'static str, template: &'static str) -> Self {
        Self {
            pattern,
            replacement: Replacement::Template(template),
        }
    }

    pub const fn with(pattern: &'static str, f: fn(&Captures<'_>) -> String) -> Self {
        Self {
            pattern,
            replacement: Replacement::With(f),
        }
    }
}

/// A stage-scoped rule enumeration.
pub trait Catalogue: Copy + Into<RuleId> + 'static {
    const ALL: &'static [Self];

    /// Stable catalogue ID, e.g. `C3_A`.
    fn id(self) -> &'static str;

    fn def(self) -> RuleDef;

    /// Rewrites `word`, or returns `None` when the pattern does not occur.
    fn apply(self, word: &str) -> Result<Option<String>, DeclineError> {
        LIBRARY.apply(self.into(), word)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleId {
    ConSg(ConSgRule),
    GenSg(GenSgRule),
    AbsPl(AbsPlRule),
    ConPl(ConPlRule),
}

impl RuleId {
    pub fn stage(self) -> Stage {
        match self {
            RuleId::ConSg(_) => Stage::ConstructSingular,
            RuleId::GenSg(_) => Stage::GenitiveSingular,
            RuleId::AbsPl(_) => Stage::AbsolutePlural,
            RuleId::ConPl(_) => Stage::ConstructPlural,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            RuleId::ConSg(r) => r.id(),
            RuleId::GenSg(r) => r.id(),
            RuleId::AbsPl(r) => r.id(),
            RuleId::ConPl(r) => r.id(),
        }
    }

    fn def(self) -> RuleDef {
        match self {
            RuleId::ConSg(r) => r.def(),
            RuleId::GenSg(r) => r.def(),
            RuleId::AbsPl(r) => r.def(),
            RuleId::ConPl(r) => r.def(),
        }
    }

    /// Every rule of every stage.
    pub fn all() -> impl Iterator<Item = RuleId> {
        let con_sg = ConSgRule::ALL.iter().copied().map(RuleId::from);
        let gen_sg = GenSgRule::ALL.iter().copied().map(RuleId::from);
        let abs_pl = AbsPlRule::ALL.iter().copied().map(RuleId::from);
        let con_pl = ConPlRule::ALL.iter().copied().map(RuleId::from);
        con_sg.chain(gen_sg).chain(abs_pl).chain(con_pl)
    }
}

impl From<ConSgRule> for RuleId {
    fn from(r: ConSgRule) -> Self {
        RuleId::ConSg(r)
    }
}

impl From<GenSgRule> for RuleId {
    fn from(r: GenSgRule) -> Self {
        RuleId::GenSg(r)
    }
}

impl From<AbsPlRule> for RuleId {
    fn from(r: AbsPlRule) -> Self {
        RuleId::AbsPl(r)
    }
}

impl From<ConPlRule> for RuleId {
    fn from(r: ConPlRule) -> Self {
        RuleId::ConPl(r)
    }
}

struct CompiledRule {
    id: &'static str,
    regex: Regex,
    replacement: Replacement,
}

impl CompiledRule {
    fn apply(&self, word: &str) -> Result<Option<String>, DeclineError> {
        let engine_error = |e: fancy_regex::Error| DeclineError::Pattern {
            rule: self.id,
            message: e.to_string(),
        };

        if !self.regex.is_match(word).map_err(engine_error)? {
            return Ok(None);
        }

        let rewritten = match self.replacement {
            Replacement::Template(template) => self.regex.try_replacen(word, 0, template),
            Replacement::With(f) => self
                .regex
                .try_replacen(word, 0, |caps: &Captures<'_>| f(caps)),
        }
        .map_err(engine_error)?;

        Ok(Some(rewritten.into_owned()))
    }
}

struct Library {
    rules: HashMap<RuleId, CompiledRule>,
}

impl Library {
    fn apply(&self, rule: RuleId, word: &str) -> Result<Option<String>, DeclineError> {
        match self.rules.get(&rule) {
            Some(compiled) => compiled.apply(word),
            None => unreachable!("rule {} missing from the compiled library", rule.id()),
        }
    }
}

static LIBRARY: LazyLock<Library> = LazyLock::new(|| {
    let rules = RuleId::all()
        .map(|rule| {
            let def = rule.def();
            let regex = Regex::new(def.pattern).unwrap_or_else(|e| {
                panic!("Failed to compile rule {} '{}': {}", rule.id(), def.pattern, e)
            });
            let compiled = CompiledRule {
                id: rule.id(),
                regex,
                replacement: def.replacement,
            };
            (rule, compiled)
        })
        .collect();
    Library { rules }
});

/// Text of capture group `i`, empty if the group did not participate.
pub(crate) fn group<'t>(caps: &Captures<'t>, i: usize) -> &'t str {
    caps.get(i).map_or("", |m| m.as_str())
}

/// First letter of capture group `i`.
pub(crate) fn letter(caps: &Captures<'_>, i: usize) -> char {
    group(caps, i).chars().next().unwrap_or_default()
}
