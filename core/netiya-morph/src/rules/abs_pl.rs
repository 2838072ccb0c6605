use super::{group, letter, Catalogue, RuleDef};
use crate::phonology::{insert_shwa, remove_dagesh, shwa};

/// Absolute-plural rules. Most read the genitive stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbsPlRule {
    /// Strips stress and furtive marks; matches every word.
    C42,
    C43,
    /// Segolate plural: `CVCC` → `C3CaC` with the last consonant softened.
    C44,
    C45,
    C46,
    C47,
    C48,
    C49,
    C50,
    C51,
    C52,
    C53,
    C55,
}

impl Catalogue for AbsPlRule {
    const ALL: &'static [Self] = &[
        AbsPlRule::C42,
        AbsPlRule::C43,
        AbsPlRule::C44,
        AbsPlRule::C45,
        AbsPlRule::C46,
        AbsPlRule::C47,
        AbsPlRule::C48,
        AbsPlRule::C49,
        AbsPlRule::C50,
        AbsPlRule::C51,
        AbsPlRule::C52,
        AbsPlRule::C53,
        AbsPlRule::C55,
    ];

    fn id(self) -> &'static str {
        match self {
            AbsPlRule::C42 => "C42",
            AbsPlRule::C43 => "C43",
            AbsPlRule::C44 => "C44",
            AbsPlRule::C45 => "C45",
            AbsPlRule::C46 => "C46",
            AbsPlRule::C47 => "C47",
            AbsPlRule::C48 => "C48",
            AbsPlRule::C49 => "C49",
            AbsPlRule::C50 => "C50",
            AbsPlRule::C51 => "C51",
            AbsPlRule::C52 => "C52",
            AbsPlRule::C53 => "C53",
            AbsPlRule::C55 => "C55",
        }
    }

    fn def(self) -> RuleDef {
        match self {
            AbsPlRule::C42 => RuleDef::template(r"[Á!]?", ""),
            AbsPlRule::C43 => RuleDef::template(r"[UO](?=.$)", "W"),
            AbsPlRule::C44 => RuleDef::with(r"(.)([AIUEO])(.)[áéó]?(.)$", |m| {
                let hataf = if group(m, 2) == "O" { 'ó' } else { 'á' };
                format!(
                    "{}{}a{}",
                    insert_shwa(letter(m, 1), hataf),
                    group(m, 3),
                    remove_dagesh(letter(m, 4))
                )
            }),
            AbsPlRule::C45 => RuleDef::with(r"(.)[Ae](?=.$)", |m| shwa(letter(m, 1))),
            AbsPlRule::C46 => RuleDef::with(r"(.)A!yI", |m| format!("{}ya", shwa(letter(m, 1)))),
            AbsPlRule::C47 => RuleDef::template(r"i!$", "aQ"),
            AbsPlRule::C48 => RuleDef::template(r"[uoW](?=.$)", "3wa"),
            AbsPlRule::C49 => RuleDef::template(r"A(?=.$)", "i"),
            AbsPlRule::C50 => RuleDef::template(r"_(.)A(?=.$)", "${1}"),
            AbsPlRule::C51 => RuleDef::template(r"i$", "I_y"),
            AbsPlRule::C52 => RuleDef::template(r"3(.)i!$", "e${1}"),
            AbsPlRule::C53 => RuleDef::template(r"[oiWOAI](?=Q?.$)", "a"),
            AbsPlRule::C55 => RuleDef::template(r"[Ee]!(?=.$)", "a"),
        }
    }
}
