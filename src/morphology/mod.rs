//! Generación de formas flexivas del ruso
//!
//! A partir de un lema y su categoría gramatical produce todas las formas
//! que el vocabulario debe aceptar. Las reglas aproximan la declinación y la
//! conjugación rusas; no cubren todas las excepciones.

pub mod adjective;
pub mod noun;
pub mod options;
pub mod verb;

use std::fmt;

use crate::error::GenerationError;

pub use options::{AdjectiveOptions, GenerationOptions, NounOptions, VerbOptions};

/// Categoría gramatical de una entrada del vocabulario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Noun,
    Adjective,
    AdjectiveWithAdverb,
    Verb,
    /// Palabra invariable: se inserta tal cual
    Literal,
}

impl PartOfSpeech {
    /// Interpreta el código del dataset. Cualquier código desconocido
    /// se trata como palabra literal.
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "n" => PartOfSpeech::Noun,
            "a" => PartOfSpeech::Adjective,
            "aa" => PartOfSpeech::AdjectiveWithAdverb,
            "v" => PartOfSpeech::Verb,
            _ => PartOfSpeech::Literal,
        }
    }

    pub fn is_adjective(self) -> bool {
        matches!(
            self,
            PartOfSpeech::Adjective | PartOfSpeech::AdjectiveWithAdverb
        )
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PartOfSpeech::Noun => "sustantivo",
            PartOfSpeech::Adjective => "adjetivo",
            PartOfSpeech::AdjectiveWithAdverb => "adjetivo con adverbio",
            PartOfSpeech::Verb => "verbo",
            PartOfSpeech::Literal => "literal",
        };
        f.write_str(name)
    }
}

/// Género gramatical
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
}

impl Gender {
    /// Acepta los códigos cortos del dataset y los nombres completos
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "m" | "masc" | "masculine" => Some(Gender::Masculine),
            "f" | "fem" | "feminine" => Some(Gender::Feminine),
            "n" | "neut" | "neuter" => Some(Gender::Neuter),
            _ => None,
        }
    }

    /// Deduce el género por la última letra del lema
    pub fn infer(last: char) -> Self {
        match last {
            'а' | 'я' => Gender::Feminine,
            'о' | 'е' => Gender::Neuter,
            _ => Gender::Masculine,
        }
    }
}

/// Genera todas las formas de un lema según su categoría.
///
/// El orden del resultado es determinista pero no tiene significado
/// gramatical. Puede contener repetidos; el trie los absorbe.
pub fn generate(
    lemma: &str,
    part_of_speech: PartOfSpeech,
    options: &GenerationOptions,
) -> Result<Vec<String>, GenerationError> {
    let mismatch = || GenerationError::OptionsMismatch {
        part_of_speech,
        found: options.kind(),
    };

    match part_of_speech {
        PartOfSpeech::Literal => {
            if lemma.is_empty() {
                Ok(Vec::new())
            } else {
                Ok(vec![lemma.to_string()])
            }
        }
        PartOfSpeech::Noun => match options {
            GenerationOptions::Noun(opts) => noun::decline(lemma, opts),
            GenerationOptions::Default => noun::decline(lemma, &NounOptions::default()),
            _ => Err(mismatch()),
        },
        PartOfSpeech::Verb => match options {
            GenerationOptions::Verb(opts) => verb::conjugate(lemma, opts),
            GenerationOptions::Default => verb::conjugate(lemma, &VerbOptions::default()),
            _ => Err(mismatch()),
        },
        PartOfSpeech::Adjective | PartOfSpeech::AdjectiveWithAdverb => {
            let opts = match options {
                GenerationOptions::Adjective(opts) => opts.clone(),
                GenerationOptions::Default => AdjectiveOptions::default(),
                _ => return Err(mismatch()),
            };
            let forms_adverb = opts.forms_adverb(part_of_speech);
            adjective::inflect(lemma, forms_adverb, part_of_speech)
        }
    }
}

/// Separa los últimos `n` caracteres de `word`.
/// Devuelve `None` si la palabra tiene menos de `n` caracteres.
pub(crate) fn split_last_chars(word: &str, n: usize) -> Option<(&str, &str)> {
    if n == 0 {
        return Some((word, ""));
    }
    let (idx, _) = word.char_indices().rev().nth(n - 1)?;
    Some(word.split_at(idx))
}

pub(crate) fn too_short(lemma: &str, part_of_speech: PartOfSpeech, min_len: usize) -> GenerationError {
    GenerationError::WordTooShort {
        lemma: lemma.to_string(),
        part_of_speech,
        min_len,
    }
}

/// Concatena la raíz con cada terminación
pub(crate) fn push_with_endings(forms: &mut Vec<String>, stem: &str, endings: &[&str]) {
    forms.extend(endings.iter().map(|ending| format!("{stem}{ending}")));
}
