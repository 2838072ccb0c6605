use super::{group, letter, Catalogue, RuleDef};
use crate::phonology::{hataf_after, is_guttural, remove_dagesh, shwa};

/// Construct-plural rules. `C66` and `C67` read the genitive stem, the rest
/// the absolute plural stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConPlRule {
    C63,
    C64,
    C65,
    C66,
    C67,
    C68,
    C69,
}

impl Catalogue for ConPlRule {
    const ALL: &'static [Self] = &[
        ConPlRule::C63,
        ConPlRule::C64,
        ConPlRule::C65,
        ConPlRule::C66,
        ConPlRule::C67,
        ConPlRule::C68,
        ConPlRule::C69,
    ];

    fn id(self) -> &'static str {
        match self {
            ConPlRule::C63 => "C63",
            ConPlRule::C64 => "C64",
            ConPlRule::C65 => "C65",
            ConPlRule::C66 => "C66",
            ConPlRule::C67 => "C67",
            ConPlRule::C68 => "C68",
            ConPlRule::C69 => "C69",
        }
    }

    fn def(self) -> RuleDef {
        match self {
            ConPlRule::C63 => RuleDef::with(r"(.)([eaA])(?=.$)", |m| shwa(letter(m, 1))),
            ConPlRule::C64 => RuleDef::with(r"([3áé])(.)[ae](?=.$)", |m| {
                let vowel = if group(m, 1) == "é" { 'E' } else { 'A' };
                let c = letter(m, 2);
                format!("{vowel}{c}{}", hataf_after(c))
            }),
            ConPlRule::C65 => RuleDef::with(r"[3á](.)[ae](.)(?=$)", |m| {
                let (first, last) = (letter(m, 1), letter(m, 2));
                // Identical radicals keep a shwa between them.
                let between = if is_guttural(first) {
                    "á"
                } else if first == last {
                    "3"
                } else {
                    ""
                };
                format!("I{first}{between}{last}")
            }),
            ConPlRule::C66 => RuleDef::template(r"I(?=.$)", "i"),
            ConPlRule::C67 => RuleDef::with(r"O(.)(.)", |m| {
                let c = letter(m, 1);
                let hataf = if is_guttural(c) { "ó" } else { "" };
                format!("O{c}{hataf}{}", remove_dagesh(letter(m, 2)))
            }),
            ConPlRule::C68 => RuleDef::template(r"_(.)a(?=.$)", "${1}"),
            ConPlRule::C69 => RuleDef::template(r"a(?=.$)", "3"),
        }
    }
}
