//! The native paradigm registry.
//!
//! Each entry is keyed by the dictionary noun that typifies the class
//! (`b_derex` for segolates like `dE!rEx`). Identifiers with a `?` name
//! classes no canonical noun has been chosen for yet.

use std::collections::HashMap;
use std::sync::LazyLock;

use netiya_protocol::PluralSuffix::{Ayim, Im, Wt};
use netiya_protocol::PluralSuffix;

use crate::paradigm::ConPlSelector::{self, Literal as PlLiteral, Rule as PlRule};
use crate::paradigm::Selector::{CopyPrior, Literal, Rule};
use crate::paradigm::{Attestation, Exemplar, GenPlSource, Paradigm, Selector};
use crate::rules::{AbsPlRule as Ap, ConPlRule as Cp, ConSgRule as Cs, GenSgRule as Gs};

/// Paradigms whose `a!H` feminines build the construct with `-Et`.
pub const FEMININE_CONSTRUCT_PARADIGMS: [&str; 5] =
    ["b_shxena", "b_milcama", "b_atara", "b_ayala", "b_yoleda"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub id: &'static str,
    pub paradigm: Paradigm,
    pub attestation: Attestation,
    pub exemplar: Option<Exemplar>,
}

const fn native(
    id: &'static str,
    con_sg: Selector<Cs>,
    gen_sg: Selector<Gs>,
    abs_pl: Selector<Ap>,
    con_pl: ConPlSelector,
    gen_pl: GenPlSource,
) -> Entry {
    Entry {
        id,
        paradigm: Paradigm::new(con_sg, gen_sg, abs_pl, con_pl, gen_pl),
        attestation: Attestation::Attested,
        exemplar: None,
    }
}

impl Entry {
    const fn exemplar(self, word: &'static str, has_suffix: bool, plural: PluralSuffix) -> Self {
        Self {
            exemplar: Some(Exemplar {
                word,
                has_suffix,
                plural,
            }),
            ..self
        }
    }

    const fn unverified(self) -> Self {
        Self {
            attestation: Attestation::Unverified,
            ..self
        }
    }

    /// Whether `a!H` on this paradigm's nouns is the compound `-Et` class.
    pub fn forces_feminine_construct(&self) -> bool {
        FEMININE_CONSTRUCT_PARADIGMS.contains(&self.id)
    }
}

const FROM_ABS_PL: ConPlSelector = ConPlSelector::AbsolutePlural;
const FROM_GEN_SG: ConPlSelector = ConPlSelector::GenitiveSingular;
const GEN_FROM_ABS: GenPlSource = GenPlSource::AbsolutePlural;
const GEN_FROM_CON: GenPlSource = GenPlSource::ConstructPlural;

#[rustfmt::skip]
static ENTRIES: &[Entry] = &[
    native("b_sus",       CopyPrior,          CopyPrior,         CopyPrior,           FROM_ABS_PL,         GEN_FROM_ABS)
        .exemplar("sus", false, Im),
    native("b_ets",       CopyPrior,          CopyPrior,         CopyPrior,           PlRule(Cp::C63),     GEN_FROM_ABS)
        .exemplar("Re!Z", false, Im),
    native("b_simla",     CopyPrior,          CopyPrior,         Rule(Ap::C44),       FROM_GEN_SG,         GEN_FROM_CON)
        .exemplar("sImla!H", true, Wt),
    native("b_yalda",     CopyPrior,          CopyPrior,         Rule(Ap::C44),       PlRule(Cp::C64),     GEN_FROM_CON)
        .exemplar("yAlda!H", true, Wt),
    native("b_shuq",      CopyPrior,          CopyPrior,         Rule(Ap::C48),       FROM_GEN_SG,         GEN_FROM_ABS)
        .exemplar("cu!q", false, Im),
    native("b_shen",      CopyPrior,          Rule(Gs::C10),     CopyPrior,           FROM_ABS_PL,         GEN_FROM_ABS)
        .exemplar("ce!n", false, Im),
    native("b_baal",      CopyPrior,          Rule(Gs::C36),     Rule(Ap::C44),       FROM_GEN_SG,         GEN_FROM_ABS)
        .exemplar("bA!RAl", false, Im),
    native("b_yaar",      CopyPrior,          Rule(Gs::C36),     Rule(Ap::C44),       FROM_GEN_SG,         GEN_FROM_CON)
        .exemplar("yA!RAr", false, Im),
    native("b_acu",       CopyPrior,          Rule(Gs::C34),     Rule(Ap::C44),       PlRule(Cp::C64),     GEN_FROM_ABS)
        .exemplar("Qa!ju", false, Im),
    native("b_kli",       CopyPrior,          Rule(Gs::C13),     Rule(Ap::C52),       PlRule(Cp::C63),     GEN_FROM_ABS)
        .exemplar("k3li!", false, Im),
    native("b_gdi",       CopyPrior,          Rule(Gs::C13),     Rule(Ap::C44),       FROM_ABS_PL,         GEN_FROM_ABS)
        .exemplar("g3di!", false, Im),
    native("b_tsvi",      CopyPrior,          Rule(Gs::C13),     Rule(Ap::C47),       FROM_ABS_PL,         GEN_FROM_ABS)
        .exemplar("Z3vi!", false, Im),
    native("b_emet",      CopyPrior,          Rule(Gs::C14),     CopyPrior,           FROM_ABS_PL,         GEN_FROM_ABS)
        .exemplar("QémE!t", false, Wt),
    native("b_macave",    CopyPrior,          Rule(Gs::C15),     CopyPrior,           FROM_ABS_PL,         GEN_FROM_ABS)
        .exemplar("maQáme!Z", false, Im),
    native("b_gveret",    CopyPrior,          Rule(Gs::C16),     Rule(Ap::C53),       PlRule(Cp::C66),     GEN_FROM_CON)
        .exemplar("g3vE!rEt", true, Wt),
    native("b_maskoret",  CopyPrior,          Rule(Gs::C16),     Rule(Ap::C43),       FROM_ABS_PL,         GEN_FROM_ABS)
        .exemplar("mAsko!rEt", true, Wt),
    native("b_se",        CopyPrior,          Rule(Gs::C17),     CopyPrior,           PlRule(Cp::C63),     GEN_FROM_ABS)
        .exemplar("ce!H", true, Im),
    native("b_memad",     CopyPrior,          Rule(Gs::C18),     CopyPrior,           FROM_ABS_PL,         GEN_FROM_ABS)
        .exemplar("memA!d", false, Im),
    native("b_par",       CopyPrior,          Rule(Gs::C2),      CopyPrior,           FROM_ABS_PL,         GEN_FROM_ABS)
        .exemplar("pA!r", false, Im),
    native("b_emtsa",     CopyPrior,          Rule(Gs::C2),      CopyPrior,           PlRule(Cp::C63),     GEN_FROM_ABS)
        .exemplar("QEmZA!R", false, Im),
    native("b_qarqa",     CopyPrior,          Rule(Gs::C2),      CopyPrior,           PlRule(Cp::C63),     GEN_FROM_CON)
        .exemplar("qArqA!R", false, Wt),
    native("b_regel",     CopyPrior,          Rule(Gs::C3A),     CopyPrior,           FROM_ABS_PL,         GEN_FROM_ABS)
        .exemplar("rE!gEl", false, Ayim),
    native("b_yerac",     CopyPrior,          Rule(Gs::C3A),     Rule(Ap::C44),       FROM_GEN_SG,         GEN_FROM_ABS)
        .exemplar("yE!rAj", false, Im),
    native("b_erets",     CopyPrior,          Rule(Gs::C3A),     Rule(Ap::C44),       FROM_GEN_SG,         GEN_FROM_CON)
        .exemplar("QE!rEZ", false, Wt),
    native("b_derex",     CopyPrior,          Rule(Gs::C3A),     Rule(Ap::C44),       PlRule(Cp::C64),     GEN_FROM_ABS)
        .exemplar("dE!rEx", false, Im),
    native("b_delet",     CopyPrior,          Rule(Gs::C3A),     Rule(Ap::C44),       PlRule(Cp::C64),     GEN_FROM_CON)
        .exemplar("dE!lEt", false, Wt),
    native("b_nexed",     CopyPrior,          Rule(Gs::C3E),     Rule(Ap::C44),       FROM_ABS_PL,         GEN_FROM_ABS)
        .exemplar("nE!xEd", false, Im),
    native("b_celeq",     CopyPrior,          Rule(Gs::C3E),     Rule(Ap::C44),       FROM_GEN_SG,         GEN_FROM_ABS)
        .exemplar("jE!lEq", false, Im),
    native("b_berex",     CopyPrior,          Rule(Gs::C3I),     CopyPrior,           FROM_ABS_PL,         GEN_FROM_ABS)
        .exemplar("bE!rEx", false, Ayim),
    native("b_sefer",     CopyPrior,          Rule(Gs::C3I),     Rule(Ap::C44),       FROM_GEN_SG,         GEN_FROM_ABS)
        .exemplar("sE!fEr", false, Im),
    native("b_shemesh",   CopyPrior,          Rule(Gs::C3I),     Rule(Ap::C44),       FROM_GEN_SG,         GEN_FROM_CON)
        .exemplar("cE!mEc", false, Wt),
    native("b_kotel",     CopyPrior,          Rule(Gs::C3O),     Rule(Ap::C44),       FROM_GEN_SG,         GEN_FROM_ABS)
        .exemplar("ko!tEl", false, Im),
    native("b_orac",      CopyPrior,          Rule(Gs::C3O),     Rule(Ap::C44),       FROM_GEN_SG,         GEN_FROM_CON)
        .exemplar("Qo!rAj", false, Wt),
    native("b_rocav",     CopyPrior,          Rule(Gs::C3O),     Rule(Ap::C44),       PlRule(Cp::C67),     GEN_FROM_ABS)
        .exemplar("ro!jAv", false, Im),
    native("b_qomets",    CopyPrior,          Rule(Gs::C3U),     Rule(Ap::C44),       FROM_GEN_SG,         GEN_FROM_ABS)
        .exemplar("qo!mEZ", false, Im),
    native("b_tof",       CopyPrior,          Rule(Gs::C4),      CopyPrior,           FROM_ABS_PL,         GEN_FROM_ABS)
        .exemplar("to!f", false, Im),
    native("b_?1",        CopyPrior,          Rule(Gs::C4),      Literal("mAjámA_D"), FROM_ABS_PL,         GEN_FROM_ABS)
        .exemplar("mAjmA!d", false, Im)
        .unverified(),
    native("b_ezor",      CopyPrior,          Rule(Gs::C5),      CopyPrior,           FROM_ABS_PL,         GEN_FROM_ABS)
        .exemplar("QezW!r", false, Im),
    native("b_piqacat",   CopyPrior,          Rule(Gs::C30),     Rule(Ap::C50),       FROM_ABS_PL,         GEN_FROM_ABS)
        .exemplar("pI_qA!jAt", true, Wt),
    native("b_koteret",   CopyPrior,          Rule(Gs::C30),     Rule(Ap::C53),       PlRule(Cp::C63),     GEN_FROM_CON)
        .exemplar("kWtE!rEt", true, Wt),
    native("b_atseret",   CopyPrior,          Rule(Gs::C30),     Rule(Ap::C53),       PlRule(Cp::C64),     GEN_FROM_CON)
        .exemplar("RáZE!rEt", true, Wt),
    native("b_mishqolet", CopyPrior,          Rule(Gs::C30),     Rule(Ap::C43),       FROM_ABS_PL,         GEN_FROM_ABS)
        .exemplar("mIcqo!lEt", true, Wt),
    native("b_poelet",    CopyPrior,          Rule(Gs::C30),     Rule(Ap::C45),       FROM_ABS_PL,         GEN_FROM_ABS)
        .exemplar("poRE!lEt", true, Wt),
    native("b_mavreg",    CopyPrior,          CopyPrior,         Rule(Ap::C45),       FROM_ABS_PL,         GEN_FROM_ABS)
        .exemplar("mAvre!g", false, Im),
    native("b_maskelet",  CopyPrior,          Rule(Gs::C30),     Rule(Ap::C49),       FROM_ABS_PL,         GEN_FROM_ABS)
        .exemplar("mAskE!lEt", true, Wt),
    native("b_maqel",     CopyPrior,          Rule(Gs::C7),      CopyPrior,           FROM_ABS_PL,         GEN_FROM_ABS)
        .exemplar("ma_qe!l", false, Wt),
    native("b_i",         CopyPrior,          Rule(Gs::C8),      CopyPrior,           FROM_ABS_PL,         GEN_FROM_ABS)
        .exemplar("Qi!", false, Im),
    native("b_shomer",    CopyPrior,          Rule(Gs::C9),      CopyPrior,           FROM_ABS_PL,         GEN_FROM_ABS)
        .exemplar("cWme!r", false, Im),
    native("b_qodqod",    CopyPrior,          Literal("qOdqód"), CopyPrior,           FROM_ABS_PL,         GEN_FROM_ABS)
        .exemplar("qodqo!d", false, Im)
        .unverified(),
    native("b_mawet",     Rule(Cs::C10),      CopyPrior,         CopyPrior,           FROM_ABS_PL,         GEN_FROM_ABS)
        .exemplar("ma!wEt", false, Im),
    native("b_zayit",     Rule(Cs::C11),      CopyPrior,         CopyPrior,           FROM_ABS_PL,         GEN_FROM_ABS)
        .exemplar("zA!yIt", false, Im),
    native("b_tayish",    Rule(Cs::C11),      CopyPrior,         Rule(Ap::C46),       FROM_GEN_SG,         GEN_FROM_ABS)
        .exemplar("tA!yIc", false, Im),
    native("b_ayin",      Rule(Cs::C11),      CopyPrior,         Rule(Ap::C46),       FROM_GEN_SG,         GEN_FROM_CON)
        .exemplar("RA!yIn", false, Ayim),
    native("b_qoshi",     Rule(Cs::C12),      Rule(Gs::C33),     Rule(Ap::C44),       FROM_ABS_PL,         GEN_FROM_ABS)
        .exemplar("qo!ci", false, Im),
    native("b_?2",        Rule(Cs::C12),      Rule(Gs::C35),     Rule(Ap::C47),       FROM_ABS_PL,         GEN_FROM_ABS)
        .unverified(),
    native("b_pe",        Rule(Cs::C13),      CopyPrior,         Rule(Ap::C51),       FROM_ABS_PL,         GEN_FROM_ABS)
        .exemplar("pE!H", false, Wt),
    native("b_zikaron",   Rule(Cs::C14),      CopyPrior,         CopyPrior,           FROM_ABS_PL,         GEN_FROM_ABS)
        .exemplar("zI_karW!n", false, Wt),
    native("b_gader",     Rule(Cs::C15),      Rule(Gs::C5),      CopyPrior,           PlRule(Cp::C65),     GEN_FROM_ABS)
        .exemplar("gade!r", false, Im),
    native("b_av",        Rule(Cs::C16),      Rule(Gs::C12),     Rule(Ap::C42),       PlRule(Cp::C63),     GEN_FROM_CON)
        .exemplar("Qa!v", false, Wt),
    native("b_ac",        Rule(Cs::C16),      Rule(Gs::C12),     Literal("QAj"),      PlRule(Cp::C63),     GEN_FROM_ABS)
        .exemplar("Qa!j", false, Im)
        .unverified(),
    native("b_dat",       Rule(Cs::C2),       Rule(Gs::C2),      CopyPrior,           FROM_ABS_PL,         GEN_FROM_ABS)
        .exemplar("da!t", false, Wt),
    native("b_binyan",    Rule(Cs::C2),       Rule(Gs::C2),      CopyPrior,           PlRule(Cp::C63),     GEN_FROM_ABS)
        .exemplar("bInya!n", false, Im),
    native("b_kikar",     Rule(Cs::C2),       Rule(Gs::C2),      CopyPrior,           PlRule(Cp::C63),     GEN_FROM_CON)
        .exemplar("kIka!r", false, Wt),
    native("b_maacal",    Rule(Cs::C2),       Rule(Gs::C2),      CopyPrior,           PlRule(Cp::C64),     GEN_FROM_ABS)
        .exemplar("maQáxa!l", false, Im),
    native("b_masa",      Rule(Cs::C2),       Rule(Gs::C2),      CopyPrior,           PlRule(Cp::C68),     GEN_FROM_ABS)
        .exemplar("ma_Sa!Q", false, Wt),
    native("b_?3",        Rule(Cs::C2),       Rule(Gs::C2),      CopyPrior,           PlLiteral("maROmd"), GEN_FROM_ABS)
        .exemplar("maRAma!d", false, Im)
        .unverified(),
    native("b_aqrav",     Rule(Cs::C2),       Rule(Gs::C4),      CopyPrior,           FROM_ABS_PL,         GEN_FROM_ABS)
        .exemplar("QAqra!v", false, Im),
    native("b_paqid",     Rule(Cs::C3),       CopyPrior,         CopyPrior,           FROM_ABS_PL,         GEN_FROM_ABS)
        .exemplar("paqi!d", false, Im),
    native("b_avel",      Rule(Cs::C3),       CopyPrior,         CopyPrior,           FROM_ABS_PL,         GEN_FROM_ABS)
        .exemplar("Qave!l", false, Im),
    native("b_qane",      Rule(Cs::C3),       CopyPrior,         CopyPrior,           PlRule(Cp::C63),     GEN_FROM_ABS)
        .exemplar("qanE!H", true, Im),
    native("b_sade",      Rule(Cs::C3),       CopyPrior,         CopyPrior,           PlRule(Cp::C63),     GEN_FROM_CON)
        .exemplar("sadE!H", true, Wt),
    native("b_caver",     Rule(Cs::C3),       CopyPrior,         CopyPrior,           PlRule(Cp::C64),     GEN_FROM_ABS)
        .exemplar("jave!r", false, Im),
    native("b_aqev",      Rule(Cs::C3),       CopyPrior,         CopyPrior,           PlRule(Cp::C65),     GEN_FROM_ABS)
        .exemplar("Raqe!v", false, Im),
    native("b_shana",     Rule(Cs::C3),       CopyPrior,         Rule(Ap::C42),       FROM_GEN_SG,         GEN_FROM_CON)
        .exemplar("cana!H", true, Wt),
    native("b_saef",      Rule(Cs::C3),       Rule(Gs::C10),     CopyPrior,           FROM_ABS_PL,         GEN_FROM_ABS)
        .exemplar("saRe!f", false, Im),
    native("b_kanaf",     Rule(Cs::C3),       Rule(Gs::C2),      CopyPrior,           PlRule(Cp::C64),     GEN_FROM_ABS)
        .exemplar("kana!f", false, Im),
    native("b_zanav",     Rule(Cs::C3),       Rule(Gs::C2),      CopyPrior,           PlRule(Cp::C64),     GEN_FROM_CON)
        .exemplar("zana!v", false, Wt),
    native("b_davar",     Rule(Cs::C3),       Rule(Gs::C2),      CopyPrior,           PlRule(Cp::C65),     GEN_FROM_ABS)
        .exemplar("dava!r", false, Im),
    native("b_levav",     Rule(Cs::C3),       Rule(Gs::C2),      CopyPrior,           PlRule(Cp::C65),     GEN_FROM_CON)
        .exemplar("leva!v", false, Wt),
    native("b_adom",      Rule(Cs::C3),       Rule(Gs::C4),      CopyPrior,           FROM_ABS_PL,         GEN_FROM_ABS)
        .exemplar("Qado!m", false, Im),
    native("b_ulam",      CopyPrior,          Rule(Gs::C4),      CopyPrior,           FROM_ABS_PL,         GEN_FROM_ABS)
        .exemplar("Qula!m", false, Wt),
    native("b_catser",    Rule(Cs::C3A),      Rule(Gs::C5),      CopyPrior,           PlRule(Cp::C64),     GEN_FROM_CON)
        .exemplar("jaZe!r", false, Wt),
    native("b_zaqen",     Rule(Cs::C3A),      Rule(Gs::C6),      CopyPrior,           PlRule(Cp::C65),     GEN_FROM_ABS)
        .exemplar("zaqe!n", false, Im),
    native("b_shxena",    Rule(Cs::C4),       CopyPrior,         Rule(Ap::C42),       FROM_ABS_PL,         GEN_FROM_ABS)
        .exemplar("c3xena!H", true, Wt),
    native("b_milcama",   Rule(Cs::C4),       Rule(Gs::C30),     Rule(Ap::C42),       PlRule(Cp::C63),     GEN_FROM_CON)
        .exemplar("mIljama!H", true, Wt),
    native("b_atara",     Rule(Cs::C4),       Rule(Gs::C30),     Rule(Ap::C42),       PlRule(Cp::C64),     GEN_FROM_CON)
        .exemplar("Rá7ara!H", true, Wt),
    native("b_ayala",     Rule(Cs::C4),       Rule(Gs::C30),     Rule(Ap::C42),       PlRule(Cp::C68),     GEN_FROM_CON)
        .exemplar("QA_yala!H", true, Wt),
    native("b_yoleda",    Rule(Cs::C4),       Rule(Gs::C30),     Rule(Ap::C45),       FROM_ABS_PL,         GEN_FROM_ABS)
        .exemplar("yWleda!H", true, Wt),
    native("b_tsava",     Rule(Cs::C5),       CopyPrior,         CopyPrior,           PlRule(Cp::C65),     GEN_FROM_CON)
        .exemplar("Zava!Q", false, Wt),
    native("b_tsali",     Rule(Cs::C5),       Rule(Gs::C8),      CopyPrior,           FROM_ABS_PL,         GEN_FROM_ABS)
        .exemplar("Zali!", false, Im),
    native("b_mizbeac",   Rule(Cs::C6),       Rule(Gs::C9),      CopyPrior,           FROM_ABS_PL,         GEN_FROM_ABS)
        .exemplar("mIzbe!jÁ", false, Wt),
    native("b_ayir",      Rule(Cs::C7),       CopyPrior,         Rule(Ap::C46),       FROM_GEN_SG,         GEN_FROM_ABS)
        .exemplar("RA!yIr", false, Im),
    native("b_coq",       Rule(Cs::C8),       Rule(Gs::C4),      CopyPrior,           FROM_ABS_PL,         GEN_FROM_ABS)
        .exemplar("jo!q", false, Im),
    native("b_adama",     Rule(Cs::C9A),      CopyPrior,         Rule(Ap::C42),       FROM_GEN_SG,         GEN_FROM_CON)
        .exemplar("Qádama!H", true, Wt),
    native("b_arafel",    Rule(Cs::C9A),      Rule(Gs::C10),     CopyPrior,           FROM_ABS_PL,         GEN_FROM_ABS)
        .exemplar("Qárafe!l", false, Im),
    native("b_agala",     Rule(Cs::C9E),      CopyPrior,         Rule(Ap::C42),       FROM_GEN_SG,         GEN_FROM_CON)
        .exemplar("Rágala!H", true, Wt),
    native("b_nedava",    Rule(Cs::C9I),      CopyPrior,         Rule(Ap::C42),       FROM_GEN_SG,         GEN_FROM_CON)
        .exemplar("n3dava!H", true, Wt),
    native("b_tslatsal",  Rule(Cs::C9I),      Rule(Gs::C4),      CopyPrior,           FROM_ABS_PL,         GEN_FROM_ABS)
        .exemplar("Z3laZa!l", false, Im),
    native("b_?4",        Literal("SWne!Nt"), CopyPrior,         Literal("SWn3Q"),    FROM_ABS_PL,         GEN_FROM_ABS)
        .unverified(),
    native("b_yom",       CopyPrior,          CopyPrior,         Rule(Ap::C53),       PlRule(Cp::C69),     GEN_FROM_ABS)
        .exemplar("yW!m", false, Im),
    native("b_ir",        CopyPrior,          CopyPrior,         Rule(Ap::C53),       FROM_ABS_PL,         GEN_FROM_ABS)
        .exemplar("Ri!r", false, Im),
    native("b_ish",       CopyPrior,          CopyPrior,         Literal("Qánac"),    PlRule(Cp::C64),     GEN_FROM_ABS)
        .exemplar("Qi!c", false, Im),
    native("b_ot_neqeva", CopyPrior,          CopyPrior,         Literal("QWtI_y"),   FROM_ABS_PL,         GEN_FROM_ABS)
        .exemplar("QW!t", false, Wt),
    native("b_bat",       CopyPrior,          Rule(Gs::C10),     Literal("ban"),      PlRule(Cp::C69),     GEN_FROM_CON)
        .exemplar("bA!t", false, Wt),
    native("b_isha",      Literal("Qe!cEt"),  Literal("QIcT"),   Literal("nac"),      PlRule(Cp::C69),     GEN_FROM_ABS)
        .exemplar("Qica!H", false, Im),
    native("b_acot",      Rule(Cs::C3),       CopyPrior,         Literal("Qácay"),    PlLiteral("QAcy"),   GEN_FROM_CON)
        .exemplar("Qajo!t", false, Wt),
    native("b_bayit",     Rule(Cs::C11),      CopyPrior,         Literal("ba_T"),     FROM_ABS_PL,         GEN_FROM_ABS)
        .exemplar("bA!yIt", false, Im),
    native("b_ben",       Literal("bE!n"),    Rule(Gs::C9),      Rule(Ap::C55),       FROM_GEN_SG,         GEN_FROM_ABS)
        .exemplar("be!n", false, Im),
    native("b_shem",      CopyPrior,          Rule(Gs::C9),      Rule(Ap::C42),       FROM_GEN_SG,         GEN_FROM_CON)
        .exemplar("ce!m", false, Wt),
    native("b_dyo",       CopyPrior,          Rule(Gs::C19),     CopyPrior,           FROM_ABS_PL,         GEN_FROM_ABS)
        .exemplar("d3yW!", false, Im),
    native("b_tsel",      CopyPrior,          Rule(Gs::C10),     Literal("Z3lal"),    PlRule(Cp::C65),     GEN_FROM_ABS)
        .exemplar("Ze!l", false, Im),
    native("b_matoq",     Rule(Cs::C5),       Literal("m3tuq"),  CopyPrior,           FROM_ABS_PL,         GEN_FROM_ABS)
        .exemplar("mato!q", false, Im),
    native("b_tsipor",    CopyPrior,          CopyPrior,         Literal("ZI_pór"),   FROM_ABS_PL,         GEN_FROM_ABS)
        .exemplar("Zipo!r", false, Im),
    native("b_ama",       Rule(Cs::C3),       CopyPrior,         Literal("Qámah"),    PlRule(Cp::C64),     GEN_FROM_CON)
        .exemplar("Qama!H", true, Wt),
    native("b_em",        CopyPrior,          Rule(Gs::C10),     Literal("QI_mah"),   PlLiteral("QI_m3h"), GEN_FROM_CON)
        .exemplar("Qe!m", false, Wt),
    native("b_braxa",     Literal("bIrk"),    Literal("bIrx"),   Rule(Ap::C42),       FROM_GEN_SG,         GEN_FROM_CON)
        .exemplar("b3raxa!H", true, Wt),
    native("b_lavi",      Rule(Cs::C3),       CopyPrior,         Rule(Ap::C53),       FROM_ABS_PL,         GEN_FROM_ABS)
        .exemplar("lavi!Q", false, Im),
    native("b_tale",      Rule(Cs::C3),       CopyPrior,         Literal("73laQ"),    FROM_ABS_PL,         GEN_FROM_ABS)
        .exemplar("7ale!H", true, Im),

];

static INDEX: LazyLock<HashMap<&'static str, &'static Entry>> =
    LazyLock::new(|| ENTRIES.iter().map(|e| (e.id, e)).collect());

pub fn lookup(id: &str) -> Option<&'static Entry> {
    INDEX.get(id).copied()
}

/// All entries, in declaration order.
pub fn entries() -> &'static [Entry] {
    ENTRIES
}

pub fn ids() -> impl Iterator<Item = &'static str> {
    ENTRIES.iter().map(|e| e.id)
}

/// `(id, exemplar)` for every entry that has one.
pub fn exemplars() -> impl Iterator<Item = (&'static str, Exemplar)> {
    ENTRIES
        .iter()
        .filter_map(|e| e.exemplar.map(|x| (e.id, x)))
}
