//! Paradigm profiles: one selector per derivation stage.

use netiya_protocol::PluralSuffix;

use crate::rules::{AbsPlRule, ConPlRule, ConSgRule, GenSgRule};

/// How a stage obtains its stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<R: 'static> {
    /// Reuse the stem of the preceding stage.
    CopyPrior,
    /// Apply one rule to the stem the stage routes it.
    Rule(R),
    /// Try each rule in order; the first one that matches wins.
    FirstMatch(&'static [R]),
    /// Irregular stem, used as is.
    Literal(&'static str),
}

/// Source of the construct-plural stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConPlSelector {
    AbsolutePlural,
    GenitiveSingular,
    Rule(ConPlRule),
    Literal(&'static str),
}

/// Which final stem the genitive plural reuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenPlSource {
    AbsolutePlural,
    ConstructPlural,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paradigm {
    pub con_sg: Selector<ConSgRule>,
    pub gen_sg: Selector<GenSgRule>,
    pub abs_pl: Selector<AbsPlRule>,
    pub con_pl: ConPlSelector,
    pub gen_pl: GenPlSource,
}

impl Paradigm {
    pub const fn new(
        con_sg: Selector<ConSgRule>,
        gen_sg: Selector<GenSgRule>,
        abs_pl: Selector<AbsPlRule>,
        con_pl: ConPlSelector,
        gen_pl: GenPlSource,
    ) -> Self {
        Self {
            con_sg,
            gen_sg,
            abs_pl,
            con_pl,
            gen_pl,
        }
    }
}

/// Genitive fallback for segolates whose shape is not known in advance.
pub const SEGOLATE_CHAIN: &[GenSgRule] = &[
    GenSgRule::C36,
    GenSgRule::C33,
    GenSgRule::C34,
    GenSgRule::C3A,
];

/// Confidence in a registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attestation {
    Attested,
    /// Provisional: the forms it yields have not been checked against a
    /// reference grammar.
    Unverified,
}

/// A dictionary word the paradigm is known to decline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exemplar {
    pub word: &'static str,
    pub has_suffix: bool,
    pub plural: PluralSuffix,
}
