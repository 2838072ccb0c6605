use fancy_regex::Captures;

use super::{group, letter, Catalogue, RuleDef};
use crate::phonology::{add_dagesh, is_guttural, shwa};

/// Genitive-singular rules.
///
/// Which stem a rule reads (absolute, construct, or plain construct) is
/// decided by the genitive stage, not by the rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenSgRule {
    C2,
    /// Segolates: `CeCeC` → `CaCC` with the final consonant hardened.
    C3A,
    C3I,
    C3U,
    C3E,
    C3O,
    /// Geminating nouns: final vowel + consonant → `U_`/`A_` + dagesh.
    C4,
    C5,
    C6,
    C7,
    C8,
    C9,
    C10,
    C12,
    C13,
    C14,
    C15,
    C16,
    C17,
    C18,
    C19,
    /// Feminine `-Et` nouns: the stressed vowel opens.
    C30,
    /// `C30` for feminines in `a!H` that build their construct with `-Et`.
    C31,
    C33,
    C34,
    C35,
    C36,
}

/// Genitive of a segolate: the stressed vowel becomes `vowel`, the medial
/// segol drops and the last consonant takes a dagesh.
fn segolate(vowel: char, m: &Captures<'_>) -> String {
    format!("{vowel}{}{}", group(m, 1), add_dagesh(letter(m, 2)))
}

const SEGOLATE: &str = r"[oAEae]!(.)[AE](.)$";

impl Catalogue for GenSgRule {
    const ALL: &'static [Self] = &[
        GenSgRule::C2,
        GenSgRule::C3A,
        GenSgRule::C3I,
        GenSgRule::C3U,
        GenSgRule::C3E,
        GenSgRule::C3O,
        GenSgRule::C4,
        GenSgRule::C5,
        GenSgRule::C6,
        GenSgRule::C7,
        GenSgRule::C8,
        GenSgRule::C9,
        GenSgRule::C10,
        GenSgRule::C12,
        GenSgRule::C13,
        GenSgRule::C14,
        GenSgRule::C15,
        GenSgRule::C16,
        GenSgRule::C17,
        GenSgRule::C18,
        GenSgRule::C19,
        GenSgRule::C30,
        GenSgRule::C31,
        GenSgRule::C33,
        GenSgRule::C34,
        GenSgRule::C35,
        GenSgRule::C36,
    ];

    fn id(self) -> &'static str {
        match self {
            GenSgRule::C2 => "C2",
            GenSgRule::C3A => "C3_A",
            GenSgRule::C3I => "C3_I",
            GenSgRule::C3U => "C3_U",
            GenSgRule::C3E => "C3_E",
            GenSgRule::C3O => "C3_O",
            GenSgRule::C4 => "C4",
            GenSgRule::C5 => "C5",
            GenSgRule::C6 => "C6",
            GenSgRule::C7 => "C7",
            GenSgRule::C8 => "C8",
            GenSgRule::C9 => "C9",
            GenSgRule::C10 => "C10",
            GenSgRule::C12 => "C12",
            GenSgRule::C13 => "C13",
            GenSgRule::C14 => "C14",
            GenSgRule::C15 => "C15",
            GenSgRule::C16 => "C16",
            GenSgRule::C17 => "C17",
            GenSgRule::C18 => "C18",
            GenSgRule::C19 => "C19",
            GenSgRule::C30 => "C30",
            GenSgRule::C31 => "C31",
            GenSgRule::C33 => "C33",
            GenSgRule::C34 => "C34",
            GenSgRule::C35 => "C35",
            GenSgRule::C36 => "C36",
        }
    }

    fn def(self) -> RuleDef {
        match self {
            GenSgRule::C2 => RuleDef::template(r"A(?=.$)", "a"),
            GenSgRule::C3A => RuleDef::with(SEGOLATE, |m| segolate('A', m)),
            GenSgRule::C3I => RuleDef::with(SEGOLATE, |m| segolate('I', m)),
            GenSgRule::C3U => RuleDef::with(SEGOLATE, |m| segolate('U', m)),
            GenSgRule::C3E => RuleDef::with(SEGOLATE, |m| segolate('E', m)),
            GenSgRule::C3O => RuleDef::with(SEGOLATE, |m| segolate('O', m)),
            GenSgRule::C4 => RuleDef::with(r"([oOAa])(.)$", |m| {
                let geminate = match group(m, 1) {
                    "o" | "O" => "U_",
                    _ => "A_",
                };
                format!("{geminate}{}", add_dagesh(letter(m, 2)))
            }),
            GenSgRule::C5 => RuleDef::with(r"(.)[ea](.)([iuWeA])!(.)Á?$", |m| {
                let vowel = match group(m, 3) {
                    "A" => "a",
                    other => other,
                };
                format!("{}{}{vowel}{}", shwa(letter(m, 1)), group(m, 2), group(m, 4))
            }),
            GenSgRule::C6 => RuleDef::with(r"(.)a(..)!(?=.$)", |m| {
                format!("{}{}", shwa(letter(m, 1)), group(m, 2))
            }),
            GenSgRule::C7 => RuleDef::template(r"_(.)e!(.)Á?$", "${1}${2}"),
            GenSgRule::C8 => RuleDef::template(r"i!$", "I_y"),
            GenSgRule::C9 => RuleDef::with(r"(.)([AEae])(?=.$)", |m| shwa(letter(m, 1))),
            GenSgRule::C10 => RuleDef::with(r"[AEe](.)$", |m| {
                format!("I_{}", add_dagesh(letter(m, 1)))
            }),
            GenSgRule::C12 => RuleDef::template(r"!(.)$", "${1}i"),
            GenSgRule::C13 => RuleDef::with(r"(.)[3á](.)i!$", |m| {
                let (first, second) = (letter(m, 1), letter(m, 2));
                let vowel = if is_guttural(first) || is_guttural(second) { 'E' } else { 'I' };
                format!("{first}{vowel}{second}y")
            }),
            GenSgRule::C14 => RuleDef::with(r"(.)[ée](.)[eAE]!(.)$", |m| {
                format!(
                    "{}{}I_{}",
                    shwa(letter(m, 1)),
                    group(m, 2),
                    add_dagesh(letter(m, 3))
                )
            }),
            GenSgRule::C15 => RuleDef::template(r"á(.)e!(?=.Á?$)", "A${1}"),
            GenSgRule::C16 => RuleDef::with(r"([Eo])!(?=.$)", |m| match group(m, 1) {
                "E" => "I".to_string(),
                _ => "U".to_string(),
            }),
            GenSgRule::C17 => RuleDef::template(r"$", "ey"),
            GenSgRule::C18 => RuleDef::with(r"e(.)A!(.)$", |m| {
                format!("3{}A_{}", group(m, 1), add_dagesh(letter(m, 2)))
            }),
            GenSgRule::C19 => RuleDef::template(r"$", "Q"),
            GenSgRule::C30 => RuleDef::with(r"([oAE])!(?=.$)", |m| match group(m, 1) {
                "o" => "O".to_string(),
                _ => "A".to_string(),
            }),
            GenSgRule::C31 => RuleDef::template(r"([ae])(?=.$)", "A"),
            GenSgRule::C33 => RuleDef::template(r"o!(.)i$", "O${1}y"),
            GenSgRule::C34 => RuleDef::template(r"a!(.)u$", "A${1}w"),
            GenSgRule::C35 => RuleDef::template(r"o!(.)A(.)$", "O${1}ó${2}"),
            GenSgRule::C36 => RuleDef::template(r"(?<=A)!(.)A(.)$", "${1}á${2}"),
        }
    }
}
