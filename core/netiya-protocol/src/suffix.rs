use core::fmt;
use core::str::FromStr;

use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Singular suffix class of a noun.
///
/// The first nine classes are detected from the end of a dictionary form.
/// `FeminineEt`/`FeminineAt` are the compound classes of feminines in `a!H`
/// whose construct state is built with `-Et`/`-At`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum SingularSuffix {
    /// `-`: the word is the bare stem.
    #[cfg_attr(feature = "serde", serde(rename = "-"))]
    Bare = 0,
    /// `e!H`
    #[cfg_attr(feature = "serde", serde(rename = "e!H"))]
    StressedEh = 1,
    /// `E!H`
    #[cfg_attr(feature = "serde", serde(rename = "E!H"))]
    SegolEh = 2,
    /// `a!H`
    #[cfg_attr(feature = "serde", serde(rename = "a!H"))]
    StressedAh = 3,
    /// `Et`
    #[cfg_attr(feature = "serde", serde(rename = "Et"))]
    Et = 4,
    /// `At`
    #[cfg_attr(feature = "serde", serde(rename = "At"))]
    At = 5,
    /// `i!t`
    #[cfg_attr(feature = "serde", serde(rename = "i!t"))]
    It = 6,
    /// `u!t`
    #[cfg_attr(feature = "serde", serde(rename = "u!t"))]
    Ut = 7,
    /// `A!Qy`
    #[cfg_attr(feature = "serde", serde(rename = "A!Qy"))]
    Ay = 8,
    /// `aH`
    #[cfg_attr(feature = "serde", serde(rename = "aH"))]
    UnstressedAh = 9,
    /// `a!H_Et`
    #[cfg_attr(feature = "serde", serde(rename = "a!H_Et"))]
    FeminineEt = 10,
    /// `a!H_At`
    #[cfg_attr(feature = "serde", serde(rename = "a!H_At"))]
    FeminineAt = 11,
}

impl SingularSuffix {
    /// Endings recognised on a dictionary form, in detection order.
    /// The first ending the word terminates with wins.
    pub const DETECTION_ORDER: [SingularSuffix; 9] = [
        SingularSuffix::StressedEh,
        SingularSuffix::StressedAh,
        SingularSuffix::SegolEh,
        SingularSuffix::Et,
        SingularSuffix::At,
        SingularSuffix::It,
        SingularSuffix::Ut,
        SingularSuffix::Ay,
        SingularSuffix::UnstressedAh,
    ];

    /// Class code as written in paradigm tables.
    pub const fn code(self) -> &'static str {
        match self {
            SingularSuffix::Bare => "-",
            SingularSuffix::StressedEh => "e!H",
            SingularSuffix::SegolEh => "E!H",
            SingularSuffix::StressedAh => "a!H",
            SingularSuffix::Et => "Et",
            SingularSuffix::At => "At",
            SingularSuffix::It => "i!t",
            SingularSuffix::Ut => "u!t",
            SingularSuffix::Ay => "A!Qy",
            SingularSuffix::UnstressedAh => "aH",
            SingularSuffix::FeminineEt => "a!H_Et",
            SingularSuffix::FeminineAt => "a!H_At",
        }
    }

    /// Text carried by the absolute singular after the stem.
    pub const fn ending(self) -> &'static str {
        match self {
            SingularSuffix::Bare => "",
            SingularSuffix::FeminineEt | SingularSuffix::FeminineAt => "a!H",
            other => other.code(),
        }
    }

    /// Affix appended to the construct singular stem.
    pub const fn construct_affix(self) -> &'static str {
        match self {
            SingularSuffix::StressedEh | SingularSuffix::SegolEh => "e!H",
            SingularSuffix::StressedAh => "A!t",
            SingularSuffix::Bare => "",
            SingularSuffix::FeminineEt => "Et",
            SingularSuffix::FeminineAt => "At",
            other => other.code(),
        }
    }

    /// Affix appended to the genitive singular stem, before the final `i`.
    ///
    /// Unstressed `aH` shares the genitive of stressed `a!H`.
    pub const fn genitive_affix(self) -> &'static str {
        match self {
            SingularSuffix::Bare | SingularSuffix::StressedEh | SingularSuffix::SegolEh => "",
            SingularSuffix::StressedAh | SingularSuffix::UnstressedAh => "at",
            SingularSuffix::It => "it",
            SingularSuffix::Ut => "ut",
            SingularSuffix::Et
            | SingularSuffix::At
            | SingularSuffix::FeminineEt
            | SingularSuffix::FeminineAt => "T",
            SingularSuffix::Ay => "aQ",
        }
    }

    /// Infix placed between every plural stem and its plural affix.
    pub const fn plural_infix(self) -> &'static str {
        match self {
            SingularSuffix::Ay => "aQ",
            SingularSuffix::Ut => "U_y",
            SingularSuffix::It => "I_y",
            _ => "",
        }
    }

    /// True for the three classes whose construct singular takes the
    /// reduced `C38` pattern instead of `C3`.
    pub const fn is_final_heh(self) -> bool {
        matches!(
            self,
            SingularSuffix::SegolEh | SingularSuffix::StressedAh | SingularSuffix::StressedEh
        )
    }

    /// True for the two compound feminine-construct classes.
    pub const fn is_feminine_construct(self) -> bool {
        matches!(self, SingularSuffix::FeminineEt | SingularSuffix::FeminineAt)
    }
}

impl fmt::Display for SingularSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Plural suffix class of a noun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum PluralSuffix {
    /// `W!t`
    #[cfg_attr(feature = "serde", serde(rename = "W!t"))]
    Wt = 0,
    /// `i!m`
    #[cfg_attr(feature = "serde", serde(rename = "i!m"))]
    Im = 1,
    /// `A!yIm`
    #[cfg_attr(feature = "serde", serde(rename = "A!yIm"))]
    Ayim = 2,
    /// `aQW!t`
    #[cfg_attr(feature = "serde", serde(rename = "aQW!t"))]
    AqWt = 3,
}

impl PluralSuffix {
    pub const ALL: [PluralSuffix; 4] = [
        PluralSuffix::Wt,
        PluralSuffix::Im,
        PluralSuffix::Ayim,
        PluralSuffix::AqWt,
    ];

    /// Affix of the absolute plural, also the class code.
    pub const fn absolute(self) -> &'static str {
        match self {
            PluralSuffix::Wt => "W!t",
            PluralSuffix::Im => "i!m",
            PluralSuffix::Ayim => "A!yIm",
            PluralSuffix::AqWt => "aQW!t",
        }
    }

    /// The absolute affix without its stress marker.
    pub const fn unstressed(self) -> &'static str {
        match self {
            PluralSuffix::Wt => "Wt",
            PluralSuffix::Im => "im",
            PluralSuffix::Ayim => "AyIm",
            PluralSuffix::AqWt => "aQWt",
        }
    }

    pub const fn construct(self) -> &'static str {
        match self {
            PluralSuffix::Wt => "W!t",
            PluralSuffix::Im | PluralSuffix::Ayim => "e!Y",
            PluralSuffix::AqWt => "aQW!t",
        }
    }

    /// Part of the genitive plural affix contributed by the plural class.
    pub const fn genitive_infix(self) -> &'static str {
        match self {
            PluralSuffix::Wt => "Wt",
            _ => "",
        }
    }
}

impl fmt::Display for PluralSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.absolute())
    }
}

/// A suffix code that names no known class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSuffixCode(pub alloc::string::String);

impl fmt::Display for UnknownSuffixCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown suffix code '{}'", self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownSuffixCode {}

impl FromStr for PluralSuffix {
    type Err = UnknownSuffixCode;

    /// Accepts the stressed code (`i!m`) and the bare spelling (`im`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PluralSuffix::ALL
            .into_iter()
            .find(|p| p.absolute() == s || p.unstressed() == s)
            .ok_or_else(|| UnknownSuffixCode(s.into()))
    }
}

impl FromStr for SingularSuffix {
    type Err = UnknownSuffixCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SingularSuffix::DETECTION_ORDER
            .into_iter()
            .chain([
                SingularSuffix::Bare,
                SingularSuffix::FeminineEt,
                SingularSuffix::FeminineAt,
            ])
            .find(|c| c.code() == s)
            .ok_or_else(|| UnknownSuffixCode(s.into()))
    }
}
