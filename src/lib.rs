//! Slovar - Vocabulario ruso con generación de formas flexivas
//!
//! Genera las formas de sustantivos, verbos y adjetivos a partir de sus
//! lemas y responde si un token está en el vocabulario resultante.

pub mod config;
pub mod dictionary;
pub mod error;
pub mod morphology;

pub use config::Config;
pub use dictionary::{SharedVocabulary, Trie, TrieBuilder, VocabularyBuilder, VocabularyLoader};
pub use error::{GenerationError, OptionsError, VocabularyError};
pub use morphology::{generate, GenerationOptions, PartOfSpeech};
