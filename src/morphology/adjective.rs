//! Flexión de adjetivos a partir del masculino singular (-ый, -ий, -ой)

use super::{push_with_endings, split_last_chars, too_short, PartOfSpeech};
use crate::error::GenerationError;

const FEMININE_HARD: [&str; 2] = ["ая", "ую"];
const FEMININE_SOFT: [&str; 2] = ["яя", "юю"];

const OBLIQUE_HARD: [&str; 5] = ["ое", "ого", "ому", "ом", "ой"];
const OBLIQUE_SOFT: [&str; 5] = ["ее", "его", "ему", "ем", "ей"];

const PLURAL_II: [&str; 4] = ["ие", "им", "их", "ими"];
const PLURAL_YI: [&str; 4] = ["ые", "ым", "ых", "ыми"];

/// Genera las formas de un adjetivo y, si `forms_adverb`, el adverbio en -о.
///
/// El adverbio de los adjetivos en -ний se forma igual (синий → сино), lo
/// que es una limitación conocida.
pub fn inflect(
    lemma: &str,
    forms_adverb: bool,
    part_of_speech: PartOfSpeech,
) -> Result<Vec<String>, GenerationError> {
    let (stem, suffix) =
        split_last_chars(lemma, 2).ok_or_else(|| too_short(lemma, part_of_speech, 2))?;
    let soft = split_last_chars(lemma, 3).is_some_and(|(_, tail)| tail == "ний");
    let sibilant = matches!(stem.chars().next_back(), Some('ш') | Some('ч'));

    let mut endings: Vec<&str> = vec![suffix];
    if forms_adverb {
        endings.push("о");
    }

    endings.extend(if soft { FEMININE_SOFT } else { FEMININE_HARD });

    if sibilant || soft {
        endings.extend(OBLIQUE_SOFT);
    } else {
        endings.extend(OBLIQUE_HARD);
    }

    if suffix == "ий" {
        endings.extend(PLURAL_II);
    } else {
        endings.extend(PLURAL_YI);
    }

    let mut forms = Vec::with_capacity(endings.len());
    push_with_endings(&mut forms, stem, &endings);
    Ok(forms)
}
