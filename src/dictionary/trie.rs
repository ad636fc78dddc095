//! Estructura Trie para búsqueda eficiente de palabras
//!
//! El ciclo de vida tiene dos fases: un [`TrieBuilder`] mutable que acumula
//! palabras durante la carga y un [`Trie`] inmutable que solo admite consultas.
//! Como `Trie` no expone `insert`, una vez congelado puede compartirse entre
//! hilos sin sincronización.

use std::collections::HashMap;

/// Nodo del Trie. Cada nodo es dueño exclusivo de sus hijos.
#[derive(Debug, Default, Clone)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    is_word: bool,
}

/// Acumula palabras antes de congelarlas en un [`Trie`]
#[derive(Debug, Default)]
pub struct TrieBuilder {
    root: TrieNode,
    word_count: usize,
}

impl TrieBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continúa a partir de un trie ya congelado. El original no se modifica.
    pub fn from_trie(trie: &Trie) -> Self {
        Self {
            root: trie.root.clone(),
            word_count: trie.word_count,
        }
    }

    /// Inserta una palabra, un nodo por carácter Unicode.
    /// Insertar dos veces la misma palabra no cambia la estructura.
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;

        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
        }

        if !node.is_word {
            node.is_word = true;
            self.word_count += 1;
        }
    }

    /// Inserta todas las palabras de un iterador
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.insert(word.as_ref());
        }
    }

    /// Número de palabras distintas insertadas hasta ahora
    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Congela el contenido en un trie de solo lectura
    pub fn build(self) -> Trie {
        Trie {
            root: self.root,
            word_count: self.word_count,
        }
    }
}

/// Conjunto inmutable de palabras aceptadas
#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
    word_count: usize,
}

impl Trie {
    /// Trie vacío. Para poblarlo hay que pasar por [`TrieBuilder`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Verifica si una palabra existe exactamente en el Trie.
    /// Un prefijo de una palabra insertada no cuenta como coincidencia.
    pub fn contains(&self, word: &str) -> bool {
        let mut node = &self.root;

        for ch in word.chars() {
            match node.children.get(&ch) {
                Some(child) => node = child,
                None => return false,
            }
        }

        node.is_word
    }

    /// Obtiene todas las palabras del Trie, ordenadas
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.word_count);
        Self::collect_words(&self.root, &mut String::new(), &mut words);
        words.sort();
        words
    }

    fn collect_words(node: &TrieNode, prefix: &mut String, words: &mut Vec<String>) {
        if node.is_word {
            words.push(prefix.clone());
        }

        for (ch, child) in &node.children {
            prefix.push(*ch);
            Self::collect_words(child, prefix, words);
            prefix.pop();
        }
    }

    /// Número de palabras en el Trie
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Verifica si el Trie está vacío
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Vuelve a la fase de construcción a partir de una copia
    pub fn to_builder(&self) -> TrieBuilder {
        TrieBuilder::from_trie(self)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut builder = TrieBuilder::new();
        builder.extend(iter);
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_contains() {
        let mut builder = TrieBuilder::new();
        builder.insert("привет");
        builder.insert("мир");
        let trie = builder.build();

        assert!(trie.contains("привет"));
        assert!(trie.contains("мир"));
        assert!(!trie.contains("пока"));
    }

    #[test]
    fn test_no_prefix_match() {
        let trie: Trie = ["столами"].into_iter().collect();

        assert!(!trie.contains("стол"));
        assert!(!trie.contains("столам"));
        assert!(!trie.contains("столамии"));
        assert!(trie.contains("столами"));
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut builder = TrieBuilder::new();
        builder.insert("книга");
        builder.insert("книга");
        builder.insert("книга");
        assert_eq!(builder.len(), 1);

        let trie = builder.build();
        assert!(trie.contains("книга"));
        assert_eq!(trie.words(), vec!["книга".to_string()]);
    }

    #[test]
    fn test_case_is_not_folded() {
        let trie: Trie = ["москва"].into_iter().collect();

        assert!(trie.contains("москва"));
        assert!(!trie.contains("Москва"));
    }

    #[test]
    fn test_code_points_not_bytes() {
        // "ж" y "з" comparten el primer byte en UTF-8
        let trie: Trie = ["ж"].into_iter().collect();

        assert!(trie.contains("ж"));
        assert!(!trie.contains("з"));
        assert_eq!(trie.words(), vec!["ж".to_string()]);
    }

    #[test]
    fn test_empty_word() {
        let empty = Trie::new();
        assert!(!empty.contains(""));
        assert!(empty.is_empty());

        let trie: Trie = [""].into_iter().collect();
        assert!(trie.contains(""));
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_to_builder_leaves_original_untouched() {
        let trie: Trie = ["дом"].into_iter().collect();
        let mut builder = trie.to_builder();
        builder.insert("дома");
        let extended = builder.build();

        assert!(extended.contains("дом"));
        assert!(extended.contains("дома"));
        assert!(!trie.contains("дома"));
        assert_eq!(trie.len(), 1);
        assert_eq!(extended.len(), 2);
    }
}
