//! Tipos de error del generador morfológico y del cargador de vocabulario

use std::io;

use thiserror::Error;

use crate::morphology::PartOfSpeech;

/// Errores al generar las formas de un lema
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// El lema no tiene caracteres suficientes para separar raíz y terminación
    #[error("'{lemma}' es demasiado corta para {part_of_speech}: se necesitan al menos {min_len} caracteres")]
    WordTooShort {
        lemma: String,
        part_of_speech: PartOfSpeech,
        min_len: usize,
    },

    /// Las opciones pertenecen a otra categoría gramatical
    #[error("opciones de {found} no aplicables a {part_of_speech}")]
    OptionsMismatch {
        part_of_speech: PartOfSpeech,
        found: &'static str,
    },
}

/// Errores al decodificar el JSON de opciones de una entrada
#[derive(Error, Debug)]
pub enum OptionsError {
    #[error("JSON inválido: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Shape(String),
}

impl OptionsError {
    pub fn shape<S: Into<String>>(msg: S) -> Self {
        OptionsError::Shape(msg.into())
    }
}

/// Errores del cargador de vocabulario.
/// Salvo `Io`, ninguno interrumpe la carga: la entrada se descarta y se sigue.
#[derive(Error, Debug)]
pub enum VocabularyError {
    #[error("línea {line}: opciones mal formadas para '{lemma}': {source}")]
    MalformedOptions {
        line: usize,
        lemma: String,
        #[source]
        source: OptionsError,
    },

    #[error("línea {line}: {source}")]
    Generation {
        line: usize,
        #[source]
        source: GenerationError,
    },

    #[error("No se pudo leer el vocabulario: {0}")]
    Io(#[from] io::Error),
}

impl VocabularyError {
    /// Línea del dataset que originó el error, si aplica
    pub fn line(&self) -> Option<usize> {
        match self {
            VocabularyError::MalformedOptions { line, .. }
            | VocabularyError::Generation { line, .. } => Some(*line),
            VocabularyError::Io(_) => None,
        }
    }
}
