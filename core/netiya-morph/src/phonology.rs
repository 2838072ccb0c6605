//! Consonant classes and the begadkefat alternation.

/// Guttural consonants: he, ayin, alef, het.
pub fn is_guttural(c: char) -> bool {
    matches!(c, 'h' | 'R' | 'Q' | 'j')
}

/// Gutturals that lengthen a preceding patah rather than reduce: he, het, ayin.
pub fn is_laryngeal(c: char) -> bool {
    matches!(c, 'h' | 'j' | 'R')
}

/// Hardened (dagesh) counterpart of a spirant; identity elsewhere.
pub fn add_dagesh(c: char) -> char {
    match c {
        't' => 'T',
        'd' => 'D',
        'g' => 'G',
        'v' => 'b',
        'f' => 'p',
        'x' => 'k',
        other => other,
    }
}

/// Spirant counterpart of a hardened stop; identity elsewhere.
pub fn remove_dagesh(c: char) -> char {
    match c {
        'T' => 't',
        'D' => 'd',
        'G' => 'g',
        'b' => 'v',
        'p' => 'f',
        'k' => 'x',
        other => other,
    }
}

/// `c` followed by a vocal shwa: `hataf` after a guttural, `3` otherwise.
pub fn insert_shwa(c: char, hataf: char) -> String {
    let mut out = String::with_capacity(4);
    out.push(c);
    out.push(if is_guttural(c) { hataf } else { '3' });
    out
}

/// [`insert_shwa`] with the default hataf patah.
pub fn shwa(c: char) -> String {
    insert_shwa(c, 'á')
}

/// The hataf that follows `c` when it is guttural, empty otherwise.
pub fn hataf_after(c: char) -> &'static str {
    if is_guttural(c) {
        "á"
    } else {
        ""
    }
}
