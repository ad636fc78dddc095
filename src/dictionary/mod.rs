//! Módulo de diccionario
//!
//! Trie de formas aceptadas, cargador del dataset y publicación del
//! vocabulario para lectores concurrentes.

pub mod loader;
pub mod shared;
pub mod trie;

pub use loader::{LoadReport, Record, VocabularyBuilder, VocabularyLoader};
pub use shared::SharedVocabulary;
pub use trie::{Trie, TrieBuilder};
