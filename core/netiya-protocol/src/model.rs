use rkyv::{Archive, Deserialize, Serialize};
use crate::suffix::PluralSuffix;
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use bitflags::bitflags;

/// One of the six inflected forms of a noun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Form {
    AbsoluteSingular = 0,
    ConstructSingular = 1,
    GenitiveSingular = 2,
    AbsolutePlural = 3,
    ConstructPlural = 4,
    GenitivePlural = 5,
}

impl Form {
    pub const ALL: [Form; 6] = [
        Form::AbsoluteSingular,
        Form::ConstructSingular,
        Form::GenitiveSingular,
        Form::AbsolutePlural,
        Form::ConstructPlural,
        Form::GenitivePlural,
    ];

    pub const fn flag(self) -> Forms {
        match self {
            Form::AbsoluteSingular => Forms::ABS_SG,
            Form::ConstructSingular => Forms::CON_SG,
            Form::GenitiveSingular => Forms::GEN_SG,
            Form::AbsolutePlural => Forms::ABS_PL,
            Form::ConstructPlural => Forms::CON_PL,
            Form::GenitivePlural => Forms::GEN_PL,
        }
    }

    /// Short label used in tables and CLI output.
    pub const fn label(self) -> &'static str {
        match self {
            Form::AbsoluteSingular => "abs_sg",
            Form::ConstructSingular => "con_sg",
            Form::GenitiveSingular => "gen_sg",
            Form::AbsolutePlural => "abs_pl",
            Form::ConstructPlural => "con_pl",
            Form::GenitivePlural => "gen_pl",
        }
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    pub struct Forms: u8 {
        const ABS_SG = 1;
        const CON_SG = 2;
        const GEN_SG = 4;
        const ABS_PL = 8;
        const CON_PL = 16;
        const GEN_PL = 32;

        const SINGULAR = Self::ABS_SG.bits() | Self::CON_SG.bits() | Self::GEN_SG.bits();
        const PLURAL = Self::ABS_PL.bits() | Self::CON_PL.bits() | Self::GEN_PL.bits();
        const GENITIVE = Self::GEN_SG.bits() | Self::GEN_PL.bits();
    }
}

/// The six surface forms of one noun.
///
/// Loanword recipes leave both genitive forms empty.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Declension {
    pub abs_sg: String,
    pub con_sg: String,
    pub gen_sg: String,
    pub abs_pl: String,
    pub con_pl: String,
    pub gen_pl: String,
}

impl Declension {
    /// The form's text, or `None` when this declension does not produce it.
    pub fn get(&self, form: Form) -> Option<&str> {
        let text = match form {
            Form::AbsoluteSingular => &self.abs_sg,
            Form::ConstructSingular => &self.con_sg,
            Form::GenitiveSingular => &self.gen_sg,
            Form::AbsolutePlural => &self.abs_pl,
            Form::ConstructPlural => &self.con_pl,
            Form::GenitivePlural => &self.gen_pl,
        };
        (!text.is_empty()).then_some(text.as_str())
    }

    pub fn forms(&self) -> Forms {
        Form::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_some())
            .fold(Forms::empty(), |acc, f| acc | f.flag())
    }

    /// Produced forms, in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Form, &str)> + '_ {
        Form::ALL
            .into_iter()
            .filter_map(move |f| self.get(f).map(|text| (f, text)))
    }
}

/// A lexicon row as handed to the engine by a loader.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct LexiconEntry {
    pub paradigm: String,
    pub word: String,
    pub has_suffix: bool,
    pub plural: PluralSuffix,
}

#[derive(Debug, Clone, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Lexicon {
    pub version: u32,
    pub entries: Vec<LexiconEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct DeclinedEntry {
    pub paradigm: String,
    pub declension: Declension,
}

#[derive(Debug, Clone, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct DeclinedLexicon {
    pub version: u32,
    pub entries: Vec<DeclinedEntry>,
}
