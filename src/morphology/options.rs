//! Opciones de generación por categoría gramatical
//!
//! El dataset trae las opciones como JSON libre. Aquí se validan contra la
//! forma esperada para cada categoría; un campo desconocido o de tipo
//! incorrecto es un error, nunca se ignora en silencio.
//!
//! Formatos aceptados:
//! - objeto: `{"gender": "f", "stem": "ноч"}`, `{"firstPersonSingularEnding": "плю"}`
//! - lista posicional heredada: `["f", "ноч"]`, `["плю"]`

use serde::Deserialize;
use serde_json::Value;

use super::{Gender, PartOfSpeech};
use crate::error::OptionsError;

/// Opciones de un sustantivo
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NounOptions {
    /// Género explícito; si falta se deduce de la última letra
    pub gender: Option<Gender>,
    /// Raíz explícita para sustantivos con alternancia
    pub stem: Option<String>,
}

/// Opciones de un verbo
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerbOptions {
    /// Terminación irregular de la primera persona (p. ej. "плю" en "куплю")
    pub first_person_singular_ending: Option<String>,
    /// Prefijos que forman verbos derivados con la misma conjugación
    pub prefixes: Vec<String>,
}

/// Opciones de un adjetivo
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjectiveOptions {
    /// Si falta, lo decide el código de categoría (`a` / `aa`)
    pub adverb: Option<bool>,
}

impl AdjectiveOptions {
    pub fn forms_adverb(&self, part_of_speech: PartOfSpeech) -> bool {
        self.adverb
            .unwrap_or(part_of_speech == PartOfSpeech::AdjectiveWithAdverb)
    }
}

/// Opciones validadas de una entrada
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GenerationOptions {
    /// Sin opciones: valores por defecto de la categoría
    #[default]
    Default,
    Noun(NounOptions),
    Verb(VerbOptions),
    Adjective(AdjectiveOptions),
}

impl GenerationOptions {
    pub fn kind(&self) -> &'static str {
        match self {
            GenerationOptions::Default => "defecto",
            GenerationOptions::Noun(_) => "sustantivo",
            GenerationOptions::Verb(_) => "verbo",
            GenerationOptions::Adjective(_) => "adjetivo",
        }
    }

    /// Decodifica el payload JSON de una entrada según su categoría.
    ///
    /// Un payload vacío, `{}` o `[]` equivale a opciones por defecto.
    /// Las palabras literales no admiten opciones: cualquier otro payload
    /// se rechaza.
    pub fn decode(part_of_speech: PartOfSpeech, payload: &str) -> Result<Self, OptionsError> {
        let payload = payload.trim();
        if payload.is_empty() {
            return Ok(GenerationOptions::Default);
        }

        let value: Value = serde_json::from_str(payload)?;
        if is_empty_value(&value) {
            return Ok(GenerationOptions::Default);
        }

        match part_of_speech {
            PartOfSpeech::Noun => decode_noun(value).map(GenerationOptions::Noun),
            PartOfSpeech::Verb => decode_verb(value).map(GenerationOptions::Verb),
            pos if pos.is_adjective() => {
                decode_adjective(value).map(GenerationOptions::Adjective)
            }
            _ => Err(OptionsError::shape("las palabras literales no admiten opciones")),
        }
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawNounOptions {
    gender: Option<String>,
    stem: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawVerbOptions {
    #[serde(alias = "ending")]
    first_person_singular_ending: Option<String>,
    #[serde(default)]
    prefixes: Vec<String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawAdjectiveOptions {
    adverb: Option<bool>,
}

fn decode_noun(value: Value) -> Result<NounOptions, OptionsError> {
    let raw = match value {
        Value::Array(items) => {
            let mut fields = positional_strings(items, 2)?.into_iter();
            RawNounOptions {
                gender: fields.next().flatten(),
                stem: fields.next().flatten(),
            }
        }
        Value::Object(_) => serde_json::from_value(value)?,
        other => return Err(unexpected_value(&other)),
    };

    let gender = match raw.gender.as_deref() {
        None | Some("") => None,
        Some(code) => Some(
            Gender::from_code(code)
                .ok_or_else(|| OptionsError::shape(format!("género desconocido: '{code}'")))?,
        ),
    };
    let stem = non_empty("stem", raw.stem)?;

    Ok(NounOptions { gender, stem })
}

fn decode_verb(value: Value) -> Result<VerbOptions, OptionsError> {
    let raw = match value {
        Value::Array(items) => {
            let mut fields = positional_strings(items, 1)?.into_iter();
            RawVerbOptions {
                first_person_singular_ending: fields.next().flatten(),
                prefixes: Vec::new(),
            }
        }
        Value::Object(_) => serde_json::from_value(value)?,
        other => return Err(unexpected_value(&other)),
    };

    if raw.prefixes.iter().any(|p| p.trim().is_empty()) {
        return Err(OptionsError::shape("los prefijos no pueden estar vacíos"));
    }

    Ok(VerbOptions {
        first_person_singular_ending: non_empty(
            "firstPersonSingularEnding",
            raw.first_person_singular_ending,
        )?,
        prefixes: raw.prefixes,
    })
}

fn decode_adjective(value: Value) -> Result<AdjectiveOptions, OptionsError> {
    match value {
        Value::Object(_) => {
            let raw: RawAdjectiveOptions = serde_json::from_value(value)?;
            Ok(AdjectiveOptions { adverb: raw.adverb })
        }
        other => Err(unexpected_value(&other)),
    }
}

/// Lista posicional: cada posición es una cadena y "" significa "sin valor"
fn positional_strings(items: Vec<Value>, max: usize) -> Result<Vec<Option<String>>, OptionsError> {
    if items.len() > max {
        return Err(OptionsError::shape(format!(
            "se esperaban como mucho {max} opciones posicionales, hay {}",
            items.len()
        )));
    }

    items
        .into_iter()
        .map(|item| match item {
            Value::String(s) if s.is_empty() => Ok(None),
            Value::String(s) => Ok(Some(s)),
            other => Err(unexpected_value(&other)),
        })
        .collect()
}

/// Un campo presente pero vacío es un error de forma, no un "sin valor"
fn non_empty(field: &str, value: Option<String>) -> Result<Option<String>, OptionsError> {
    match value {
        Some(s) if s.trim().is_empty() => {
            Err(OptionsError::shape(format!("'{field}' no puede estar vacío")))
        }
        other => Ok(other),
    }
}

fn unexpected_value(value: &Value) -> OptionsError {
    let kind = match value {
        Value::Null => "null",
        Value::Bool(_) => "un booleano",
        Value::Number(_) => "un número",
        Value::String(_) => "una cadena",
        Value::Array(_) => "una lista",
        Value::Object(_) => "un objeto",
    };
    OptionsError::shape(format!("valor inesperado: {kind}"))
}
