use fancy_regex::Captures;

use super::{group, letter, Catalogue, RuleDef};
use crate::phonology::{hataf_after, insert_shwa, is_guttural, is_laryngeal, remove_dagesh, shwa};

/// Construct-singular rules. They read the absolute singular stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConSgRule {
    /// Final stressed qamats becomes patah.
    C2,
    /// Pretonic qamats/tsere reduces; a stressed qamats shortens.
    C3,
    C3A,
    /// Feminine stem: final `e`/`a` syllable turns segolate.
    C4,
    /// Propretonic qamats reduces.
    C5,
    C6,
    C7,
    C8,
    C9E,
    C9I,
    C9A,
    /// Diphthong `a!wE` is kept; only checks the shape.
    C10,
    /// Diphthong `A!yI` is kept; only checks the shape.
    C11,
    C12,
    C13,
    C14,
    C15,
    C16,
    /// Reduction used by `C3` nouns that carry a final-heh suffix.
    C38,
}

/// `C9*`: reduced first syllable gains a full vowel, closing the next.
fn close_reduced(vowel: char, m: &Captures<'_>) -> String {
    let c = letter(m, 1);
    format!("{vowel}{c}{}", hataf_after(c))
}

impl Catalogue for ConSgRule {
    const ALL: &'static [Self] = &[
        ConSgRule::C2,
        ConSgRule::C3,
        ConSgRule::C3A,
        ConSgRule::C4,
        ConSgRule::C5,
        ConSgRule::C6,
        ConSgRule::C7,
        ConSgRule::C8,
        ConSgRule::C9E,
        ConSgRule::C9I,
        ConSgRule::C9A,
        ConSgRule::C10,
        ConSgRule::C11,
        ConSgRule::C12,
        ConSgRule::C13,
        ConSgRule::C14,
        ConSgRule::C15,
        ConSgRule::C16,
        ConSgRule::C38,
    ];

    fn id(self) -> &'static str {
        match self {
            ConSgRule::C2 => "C2",
            ConSgRule::C3 => "C3",
            ConSgRule::C3A => "C3_A",
            ConSgRule::C4 => "C4",
            ConSgRule::C5 => "C5",
            ConSgRule::C6 => "C6",
            ConSgRule::C7 => "C7",
            ConSgRule::C8 => "C8",
            ConSgRule::C9E => "C9_E",
            ConSgRule::C9I => "C9_I",
            ConSgRule::C9A => "C9_A",
            ConSgRule::C10 => "C10",
            ConSgRule::C11 => "C11",
            ConSgRule::C12 => "C12",
            ConSgRule::C13 => "C13",
            ConSgRule::C14 => "C14",
            ConSgRule::C15 => "C15",
            ConSgRule::C16 => "C16",
            ConSgRule::C38 => "C38",
        }
    }

    fn def(self) -> RuleDef {
        match self {
            ConSgRule::C2 => RuleDef::template(r"a(?=!.Á?$)", "A"),
            ConSgRule::C3 => RuleDef::with(r"(.)[ea](.)(.)!(?=.Á?$)", |m| {
                let vowel = match group(m, 3) {
                    "a" => "A",
                    other => other,
                };
                format!("{}{}{vowel}!", shwa(letter(m, 1)), group(m, 2))
            }),
            ConSgRule::C3A => RuleDef::with(r"(.)a(.)e!(?=.Á?$)", |m| {
                format!("{}{}A!", shwa(letter(m, 1)), group(m, 2))
            }),
            ConSgRule::C4 => RuleDef::with(r"[ea](.)$", |m| {
                let c = letter(m, 1);
                let vowel = if is_laryngeal(c) { "A!" } else { "E!" };
                format!("{vowel}{c}")
            }),
            ConSgRule::C5 => RuleDef::with(r"(.)a(?=..!(.Á?)?$)", |m| shwa(letter(m, 1))),
            ConSgRule::C6 => RuleDef::template(r"e!(.)Á?$", "a!${1}"),
            ConSgRule::C7 => RuleDef::template(r"A!yI", "i!"),
            ConSgRule::C8 => RuleDef::template(r"o!(?=.Á?$)", "O!"),
            ConSgRule::C9E => RuleDef::with(r"[3á](.).(?=.$|..!.$)", |m| close_reduced('E', m)),
            ConSgRule::C9I => RuleDef::with(r"[3á](.).(?=.$|..!.$)", |m| close_reduced('I', m)),
            ConSgRule::C9A => RuleDef::with(r"[3á](.).(?=.$|..!.$)", |m| close_reduced('A', m)),
            ConSgRule::C10 => RuleDef::template(r"a!wE", "a!wE"),
            ConSgRule::C11 => RuleDef::template(r"A!yI", "A!yI"),
            ConSgRule::C12 => RuleDef::with(r"(.)o!(.)i$", |m| {
                format!("{}{}i!", insert_shwa(letter(m, 1), 'ó'), group(m, 2))
            }),
            ConSgRule::C13 => RuleDef::template(r"E!H$", "i!"),
            ConSgRule::C14 => RuleDef::with(r"(.)(I_|[e3])(.)a(?=.W!n$)", |m| {
                let c = letter(m, 1);
                let vowel = if group(m, 2) == "I_" && is_guttural(c) { 'E' } else { 'I' };
                format!("{c}{vowel}{}", remove_dagesh(letter(m, 3)))
            }),
            ConSgRule::C15 => RuleDef::template(r"a(.)e!(?=.$)", "E!${1}E"),
            ConSgRule::C16 => RuleDef::template(r"a!(.)$", "á${1}i!"),
            ConSgRule::C38 => RuleDef::with(r"(.)[ae](?=.$)", |m| shwa(letter(m, 1))),
        }
    }
}
