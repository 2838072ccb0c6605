//! Runs the four stages in dependency order and attaches the affixes.

use netiya_protocol::{Declension, PluralSuffix, SingularSuffix};
use tracing::trace;

use crate::error::DeclineError;
use crate::paradigm::{GenPlSource, Paradigm};
use crate::phonology::is_laryngeal;
use crate::stages;

/// A dictionary form split into stem and singular suffix class.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Split<'a> {
    pub word: &'a str,
    pub stem: &'a str,
    pub suffix: SingularSuffix,
}

/// `-Et` after a laryngeal is written `-At`.
fn lower_after_laryngeal(stem: &str, suffix: SingularSuffix) -> SingularSuffix {
    if !stem.chars().last().is_some_and(is_laryngeal) {
        return suffix;
    }
    match suffix {
        SingularSuffix::Et => SingularSuffix::At,
        SingularSuffix::FeminineEt => SingularSuffix::FeminineAt,
        other => other,
    }
}

pub(crate) fn derive(
    input: Split<'_>,
    plural: PluralSuffix,
    paradigm: &Paradigm,
) -> Result<Declension, DeclineError> {
    let stem = input.stem;
    let suffix = lower_after_laryngeal(stem, input.suffix);

    let con_sg = stages::construct_singular(stem, suffix, paradigm.con_sg)?;
    let gen_sg = stages::genitive_singular(stem, suffix, &con_sg, paradigm.gen_sg)?;
    let abs_pl = stages::absolute_plural(stem, &con_sg, &gen_sg, paradigm.abs_pl)?;
    let con_pl = stages::construct_plural(&abs_pl, &gen_sg, paradigm.con_pl)?;

    trace!(%suffix, %con_sg, %gen_sg, %abs_pl, %con_pl, "stems derived");

    let infix = suffix.plural_infix();
    let gen_pl_stem = match paradigm.gen_pl {
        GenPlSource::AbsolutePlural => &abs_pl,
        GenPlSource::ConstructPlural => &con_pl,
    };
    let gen_vowel = if gen_sg.ends_with('i') { "" } else { "i" };

    Ok(Declension {
        abs_sg: input.word.to_string(),
        con_sg: format!("{con_sg}{}", suffix.construct_affix()),
        gen_sg: format!("{gen_sg}{}{gen_vowel}", suffix.genitive_affix()),
        gen_pl: format!("{gen_pl_stem}{infix}{}Ay", plural.genitive_infix()),
        abs_pl: format!("{abs_pl}{infix}{}", plural.absolute()),
        con_pl: format!("{con_pl}{infix}{}", plural.construct()),
    })
}
