//! Conjugación de verbos en presente
//!
//! Cubre la primera conjugación con alternancia с→ш / з→ж, los verbos en
//! -ать y, por defecto, la segunda conjugación. Las formas que no pueden
//! derivarse mecánicamente se indican con una terminación explícita de
//! primera persona.

use super::{push_with_endings, split_last_chars, too_short, PartOfSpeech, VerbOptions};
use crate::error::GenerationError;

/// Longitud mínima: la ventana de cuatro caracteres que decide la alternancia
const MIN_VERB_LEN: usize = 4;

/// Presente con alternancia consonántica (писать → пишу)
pub const PRESENT_MUTATED: [&str; 6] = ["у", "ешь", "ет", "ем", "ете", "ут"];

/// Presente de los verbos en -ать (читать → читаю)
pub const PRESENT_AT: [&str; 6] = ["аю", "аешь", "ает", "аем", "аете", "ают"];

/// Presente de la segunda conjugación (говорить → говорю)
pub const PRESENT_SECOND: [&str; 6] = ["ю", "ишь", "ит", "им", "ите", "ят"];

/// Patrón de conjugación elegido para un verbo
#[derive(Debug, Clone, PartialEq, Eq)]
enum Pattern {
    /// Solo la primera persona explícita (куп + лю)
    FirstPerson(String),
    /// Raíz más una tabla de terminaciones
    Table {
        stem: String,
        endings: &'static [&'static str],
    },
}

impl Pattern {
    fn select(lemma: &str, options: &VerbOptions) -> Result<Self, GenerationError> {
        let rejected = || too_short(lemma, PartOfSpeech::Verb, MIN_VERB_LEN);
        let (pre_stem, window) = split_last_chars(lemma, MIN_VERB_LEN).ok_or_else(rejected)?;
        let (stem, suffix) = split_last_chars(lemma, 3).ok_or_else(rejected)?;

        if let Some(ending) = &options.first_person_singular_ending {
            return Ok(Pattern::FirstPerson(format!("{pre_stem}{ending}")));
        }

        let pattern = match window.chars().next() {
            Some('с') => Pattern::Table {
                stem: format!("{pre_stem}ш"),
                endings: &PRESENT_MUTATED,
            },
            Some('з') => Pattern::Table {
                stem: format!("{pre_stem}ж"),
                endings: &PRESENT_MUTATED,
            },
            _ if suffix == "ать" => Pattern::Table {
                stem: stem.to_string(),
                endings: &PRESENT_AT,
            },
            _ => Pattern::Table {
                stem: stem.to_string(),
                endings: &PRESENT_SECOND,
            },
        };
        Ok(pattern)
    }

    /// Añade el infinitivo y las formas personales, con un prefijo opcional
    fn emit(&self, forms: &mut Vec<String>, prefix: &str, lemma: &str) {
        forms.push(format!("{prefix}{lemma}"));
        match self {
            Pattern::FirstPerson(first) => forms.push(format!("{prefix}{first}")),
            Pattern::Table { stem, endings } => {
                push_with_endings(forms, &format!("{prefix}{stem}"), endings)
            }
        }
    }
}

/// Genera el infinitivo y las formas del presente de un verbo, y las
/// mismas formas para cada prefijo indicado en las opciones.
pub fn conjugate(lemma: &str, options: &VerbOptions) -> Result<Vec<String>, GenerationError> {
    let pattern = Pattern::select(lemma, options)?;

    let mut forms = Vec::with_capacity((options.prefixes.len() + 1) * 7);
    pattern.emit(&mut forms, "", lemma);
    for prefix in &options.prefixes {
        pattern.emit(&mut forms, prefix, lemma);
    }
    Ok(forms)
}
