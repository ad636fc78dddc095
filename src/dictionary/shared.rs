//! Vocabulario compartido entre lectores concurrentes
//!
//! Las consultas trabajan sobre una instantánea `Arc<Trie>`. Una recarga
//! construye un trie nuevo completo fuera del cerrojo y solo entonces
//! sustituye la referencia, de modo que ningún lector ve una carga a medias.

use std::path::Path;
use std::sync::Arc;

use log::info;
use parking_lot::RwLock;

use super::loader::{LoadReport, VocabularyLoader};
use super::trie::Trie;
use crate::error::VocabularyError;

#[derive(Debug, Default)]
pub struct SharedVocabulary {
    current: RwLock<Arc<Trie>>,
}

impl SharedVocabulary {
    pub fn new(trie: Trie) -> Self {
        Self {
            current: RwLock::new(Arc::new(trie)),
        }
    }

    /// Instantánea del vocabulario vigente. Sigue siendo válida aunque
    /// después se publique otro.
    pub fn snapshot(&self) -> Arc<Trie> {
        Arc::clone(&self.current.read())
    }

    /// Consulta sobre el vocabulario vigente
    pub fn contains(&self, word: &str) -> bool {
        self.current.read().contains(word)
    }

    /// Publica un vocabulario nuevo y devuelve el anterior
    pub fn replace(&self, trie: Trie) -> Arc<Trie> {
        let next = Arc::new(trie);
        std::mem::replace(&mut *self.current.write(), next)
    }

    /// Reconstruye el vocabulario desde el texto del dataset y lo publica
    pub fn reload_from_str(&self, text: &str) -> LoadReport {
        let (trie, report) = VocabularyLoader::load_from_str(text);
        let words = trie.len();
        self.replace(trie);
        info!("Vocabulario sustituido: {} formas", words);
        report
    }

    /// Igual que [`reload_from_str`](Self::reload_from_str) leyendo un archivo.
    /// Si la lectura falla, el vocabulario vigente no cambia.
    pub fn reload_from_file<P: AsRef<Path>>(&self, path: P) -> Result<LoadReport, VocabularyError> {
        let (trie, report) = VocabularyLoader::load_from_file(path)?;
        self.replace(trie);
        Ok(report)
    }
}

impl From<Trie> for SharedVocabulary {
    fn from(trie: Trie) -> Self {
        Self::new(trie)
    }
}
