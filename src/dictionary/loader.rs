//! Cargador del vocabulario
//!
//! Formato esperado, una entrada por línea: `lema,código,opcionesJSON`
//! Ejemplo: `сценарий,n,` o `купить,v,{"firstPersonSingularEnding":"плю"}`
//!
//! Todo lo que sigue a la segunda coma es el JSON de opciones, aunque
//! contenga comas. Una línea incorrecta se descarta y la carga continúa.

use std::fs;
use std::path::Path;

use log::{debug, info, warn};

use super::trie::{Trie, TrieBuilder};
use crate::error::{GenerationError, VocabularyError};
use crate::morphology::{generate, GenerationOptions, PartOfSpeech};

/// Una línea del dataset separada en sus tres campos, sin interpretar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    pub lemma: &'a str,
    pub code: &'a str,
    pub options: &'a str,
}

impl<'a> Record<'a> {
    /// Separa una línea en lema, código y opciones.
    /// Devuelve `None` para líneas vacías, comentarios y lemas vacíos.
    pub fn parse(line: &'a str) -> Option<Self> {
        let line = line.trim();

        // Ignorar líneas vacías y comentarios
        if line.is_empty() || line.starts_with('#') {
            return None;
        }

        let mut parts = line.splitn(3, ',');
        let lemma = parts.next().unwrap_or("").trim();
        let code = parts.next().unwrap_or("").trim();
        let options = parts.next().unwrap_or("").trim();

        if lemma.is_empty() {
            return None;
        }

        Some(Self {
            lemma,
            code,
            options,
        })
    }

    pub fn part_of_speech(&self) -> PartOfSpeech {
        PartOfSpeech::from_code(self.code)
    }
}

/// Resumen de una carga
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Entradas aceptadas
    pub entries: usize,
    /// Líneas vacías, comentarios y lemas vacíos
    pub skipped: usize,
    /// Entradas descartadas, con su motivo
    pub errors: Vec<VocabularyError>,
}

impl LoadReport {
    pub fn rejected(&self) -> usize {
        self.errors.len()
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Construye el vocabulario entrada a entrada
#[derive(Debug, Default)]
pub struct VocabularyBuilder {
    trie: TrieBuilder,
    report: LoadReport,
    lines_seen: usize,
}

impl VocabularyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parte de un vocabulario ya construido; el original no cambia
    pub fn from_trie(trie: &Trie) -> Self {
        Self {
            trie: TrieBuilder::from_trie(trie),
            ..Self::default()
        }
    }

    /// Genera las formas de un lema y las inserta.
    /// Devuelve el número de formas generadas.
    pub fn add_entry(
        &mut self,
        lemma: &str,
        part_of_speech: PartOfSpeech,
        options: &GenerationOptions,
    ) -> Result<usize, GenerationError> {
        let forms = generate(lemma, part_of_speech, options)?;
        self.trie.extend(&forms);
        Ok(forms.len())
    }

    /// Procesa una línea del dataset. Los errores quedan registrados en el
    /// informe y en el log; nunca interrumpen la carga.
    pub fn add_line(&mut self, line: &str) {
        self.lines_seen += 1;
        let line_num = self.lines_seen;

        let Some(record) = Record::parse(line) else {
            self.report.skipped += 1;
            return;
        };

        match self.add_record(line_num, &record) {
            Ok(count) => {
                debug!("línea {}: '{}' → {} formas", line_num, record.lemma, count);
                self.report.entries += 1;
            }
            Err(e) => {
                warn!("Entrada descartada: {}", e);
                self.report.errors.push(e);
            }
        }
    }

    fn add_record(&mut self, line: usize, record: &Record<'_>) -> Result<usize, VocabularyError> {
        let lemma = record.lemma.to_lowercase();
        let part_of_speech = record.part_of_speech();

        let options = GenerationOptions::decode(part_of_speech, record.options).map_err(|source| {
            VocabularyError::MalformedOptions {
                line,
                lemma: lemma.clone(),
                source,
            }
        })?;

        self.add_entry(&lemma, part_of_speech, &options)
            .map_err(|source| VocabularyError::Generation { line, source })
    }

    /// Procesa todas las líneas de un texto
    pub fn add_text(&mut self, text: &str) {
        for line in text.lines() {
            self.add_line(line);
        }
    }

    /// Congela el vocabulario
    pub fn finish(self) -> (Trie, LoadReport) {
        let trie = self.trie.build();
        info!(
            "Vocabulario cargado: {} entradas, {} formas, {} descartadas, {} omitidas",
            self.report.entries,
            trie.len(),
            self.report.rejected(),
            self.report.skipped
        );
        (trie, self.report)
    }
}

pub struct VocabularyLoader;

impl VocabularyLoader {
    /// Construye el vocabulario a partir del contenido del dataset
    pub fn load_from_str(text: &str) -> (Trie, LoadReport) {
        let mut builder = VocabularyBuilder::new();
        builder.add_text(text);
        builder.finish()
    }

    /// Carga el dataset desde un archivo.
    /// Solo falla si el archivo no se puede leer.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<(Trie, LoadReport), VocabularyError> {
        let text = fs::read_to_string(path.as_ref())?;
        Ok(Self::load_from_str(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record_rejoins_options() {
        let record = Record::parse(r#"купить,v,{"ending":"плю","prefixes":["по","за"]}"#).unwrap();
        assert_eq!(record.lemma, "купить");
        assert_eq!(record.code, "v");
        assert_eq!(record.options, r#"{"ending":"плю","prefixes":["по","за"]}"#);
        assert_eq!(record.part_of_speech(), PartOfSpeech::Verb);
    }

    #[test]
    fn test_parse_record_skips() {
        assert_eq!(Record::parse(""), None);
        assert_eq!(Record::parse("   "), None);
        assert_eq!(Record::parse("# comentario"), None);
        assert_eq!(Record::parse(",n,"), None);
    }

    #[test]
    fn test_parse_record_without_options() {
        let record = Record::parse("и").unwrap();
        assert_eq!(record.lemma, "и");
        assert_eq!(record.code, "");
        assert_eq!(record.options, "");
        assert_eq!(record.part_of_speech(), PartOfSpeech::Literal);
    }

    #[test]
    fn test_load_mixed_dataset() {
        let text = "\
# vocabulario de prueba
стол,n,
новый,a,
хороший,aa,
читать,v,
и,x,

купить,v,[\"плю\"]
";
        let (trie, report) = VocabularyLoader::load_from_str(text);

        assert_eq!(report.entries, 6);
        assert_eq!(report.skipped, 2);
        assert!(report.is_clean());

        assert!(trie.contains("столами"));
        assert!(trie.contains("новыми"));
        assert!(trie.contains("хорошо"));
        assert!(!trie.contains("ново"));
        assert!(trie.contains("читают"));
        assert!(trie.contains("и"));
        assert!(trie.contains("куплю"));
    }

    #[test]
    fn test_malformed_options_do_not_stop_load() {
        let text = "стол,n,{\"gender\":\nокно,n,\nкнига,n,{\"gender\":\"z\"}\nлампа,n,";
        let (trie, report) = VocabularyLoader::load_from_str(text);

        assert_eq!(report.entries, 2);
        assert_eq!(report.rejected(), 2);
        assert!(matches!(
            report.errors[0],
            VocabularyError::MalformedOptions { line: 1, .. }
        ));
        assert_eq!(report.errors[1].line(), Some(3));

        assert!(!trie.contains("стол"));
        assert!(trie.contains("окном"));
        assert!(!trie.contains("книга"));
        assert!(trie.contains("лампой"));
    }

    #[test]
    fn test_literal_with_invalid_options_rejected() {
        let (trie, report) = VocabularyLoader::load_from_str("и,x,{not json\nстол,n,");

        assert_eq!(report.entries, 1);
        assert_eq!(report.rejected(), 1);
        assert!(matches!(
            report.errors[0],
            VocabularyError::MalformedOptions { line: 1, .. }
        ));
        assert!(!trie.contains("и"));
        assert!(trie.contains("столом"));
    }

    #[test]
    fn test_short_word_rejected() {
        let (trie, report) = VocabularyLoader::load_from_str("быт,v,\nдать,v,");

        assert_eq!(report.entries, 1);
        assert!(matches!(
            report.errors[0],
            VocabularyError::Generation {
                line: 1,
                source: GenerationError::WordTooShort { .. }
            }
        ));
        assert!(!trie.contains("быт"));
        assert!(trie.contains("даю"));
    }

    #[test]
    fn test_lemma_is_lowercased() {
        let (trie, _) = VocabularyLoader::load_from_str("Москва,n,");
        assert!(trie.contains("москва"));
        assert!(trie.contains("москвой"));
        assert!(!trie.contains("Москва"));
    }

    #[test]
    fn test_from_trie_extends_copy() {
        let (base, _) = VocabularyLoader::load_from_str("стол,n,");
        let mut builder = VocabularyBuilder::from_trie(&base);
        builder.add_line("окно,n,");
        let (extended, report) = builder.finish();

        assert_eq!(report.entries, 1);
        assert!(extended.contains("стол"));
        assert!(extended.contains("окно"));
        assert!(!base.contains("окно"));
    }
}
