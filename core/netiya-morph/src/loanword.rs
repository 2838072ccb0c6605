//! Loanword (`f_`) paradigms.
//!
//! Each recipe builds the construct and plural forms straight from the
//! dictionary form. None of them produces genitive forms.

use std::sync::LazyLock;

use fancy_regex::Regex;
use netiya_protocol::{Declension, PluralSuffix};

use crate::error::DeclineError;

/// Last vowel of a word.
static LAST_VOWEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([aiueoAIUEOW])(?=[^aiueoAIUEOW]*$)")
        .unwrap_or_else(|e| panic!("Failed to compile last-vowel pattern: {}", e))
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recipe {
    /// `f_atom`, `f_banana`, `f_mango`, `f_stati`.
    Atom,
    Universita,
    Meter,
    Telefon,
    Geto,
}

impl Recipe {
    pub const IDS: [&'static str; 8] = [
        "f_atom",
        "f_banana",
        "f_mango",
        "f_stati",
        "f_universita",
        "f_meter",
        "f_telefon",
        "f_geto",
    ];

    pub fn for_id(id: &str) -> Option<Self> {
        match id {
            "f_atom" | "f_banana" | "f_mango" | "f_stati" => Some(Recipe::Atom),
            "f_universita" => Some(Recipe::Universita),
            "f_meter" => Some(Recipe::Meter),
            "f_telefon" => Some(Recipe::Telefon),
            "f_geto" => Some(Recipe::Geto),
            _ => None,
        }
    }

    pub fn apply(self, word: &str, plural: PluralSuffix) -> Result<Declension, DeclineError> {
        let (con_sg, abs_pl, con_pl) = match self {
            Recipe::Atom => atom(word, plural),
            Recipe::Universita => {
                let plural_form = format!("{}{}", unstress(word), plural.absolute());
                (
                    format!("{}At", without_last(word, 2)),
                    plural_form.clone(),
                    plural_form,
                )
            }
            Recipe::Meter => {
                let head = without_last(word, 2);
                let last = word.chars().last().ok_or_else(|| DeclineError::MalformedWord {
                    paradigm: "f_meter",
                    word: word.to_string(),
                })?;
                (
                    word.to_string(),
                    format!("{head}{last}im"),
                    format!("{}{last}e!Y", unstress(head)),
                )
            }
            Recipe::Telefon => {
                let bare = unstress(word);
                let restressed = LAST_VOWEL
                    .try_replacen(&bare, 0, "${1}!")
                    .map_err(|e| DeclineError::Pattern {
                        rule: "f_telefon",
                        message: e.to_string(),
                    })?;
                (
                    word.to_string(),
                    format!("{restressed}{}", plural.absolute()),
                    format!("{bare}e!Y"),
                )
            }
            Recipe::Geto => {
                let stem = unstress(without_last(word, 1));
                let construct = match plural {
                    PluralSuffix::Im => "e!Y",
                    other => other.absolute(),
                };
                (
                    word.to_string(),
                    format!("{stem}{}", plural.absolute()),
                    format!("{stem}{construct}"),
                )
            }
        };

        Ok(Declension {
            abs_sg: word.to_string(),
            con_sg,
            gen_sg: String::new(),
            abs_pl,
            con_pl,
            gen_pl: String::new(),
        })
    }
}

fn atom(word: &str, plural: PluralSuffix) -> (String, String, String) {
    let (con_sg, base) = if let Some(stem) = word.strip_suffix("aH") {
        (format!("{stem}At"), stem.to_string())
    } else if matches!(word, "W" | "W!" | "u" | "u!") {
        (word.to_string(), format!("{word}Q"))
    } else if word.ends_with('i') {
        let first: String = word.chars().take(1).collect();
        (word.to_string(), format!("{first}I_y"))
    } else {
        (word.to_string(), word.to_string())
    };

    let abs_pl = format!("{base}{}", plural.unstressed());
    let con_pl = match plural {
        PluralSuffix::Im => format!("{}e!Y", unstress(&base)),
        other => format!("{base}{}", other.absolute()),
    };
    (con_sg, abs_pl, con_pl)
}

fn unstress(word: &str) -> String {
    word.replace('!', "")
}

/// `word` without its last `n` letters.
fn without_last(word: &str, n: usize) -> &str {
    let keep = word.chars().count().saturating_sub(n);
    match word.char_indices().nth(keep) {
        Some((i, _)) => &word[..i],
        None => word,
    }
}
