//! Declinación de sustantivos
//!
//! Limitaciones conocidas: los sustantivos de raíz blanda terminados en -ь
//! y los genitivos plurales irregulares no se cubren.

use super::{push_with_endings, split_last_chars, too_short, Gender, NounOptions, PartOfSpeech};
use crate::error::GenerationError;

/// Terminaciones comunes a los sustantivos en -ий / -ие / -ия
const IRREGULAR_ENDINGS: [&str; 4] = ["ий", "ия", "ию", "ии"];

const IY_EXTRA: &[&str] = &["ием"];
const IE_EXTRA: &[&str] = &["ием", "ие"];
const IYA_EXTRA: &[&str] = &["ией"];

/// Instrumental singular según la terminación del lema (-ий, -ие, -ия)
fn irregular_extra_endings(suffix: &str) -> Option<&'static [&'static str]> {
    match suffix {
        "ий" => Some(IY_EXTRA),
        "ие" => Some(IE_EXTRA),
        "ия" => Some(IYA_EXTRA),
        _ => None,
    }
}

/// Genera las formas de un sustantivo.
///
/// Los lemas en -ий/-ие/-ия usan una tabla fija y no pasan por el resto
/// de reglas.
pub fn decline(lemma: &str, options: &NounOptions) -> Result<Vec<String>, GenerationError> {
    if let Some(forms) = decline_irregular(lemma) {
        return Ok(forms);
    }

    let (head, last) =
        split_last_chars(lemma, 1).ok_or_else(|| too_short(lemma, PartOfSpeech::Noun, 1))?;
    let last = last.chars().next().unwrap_or_default();

    let gender = options.gender.unwrap_or_else(|| Gender::infer(last));
    let stem = match options.stem.as_deref() {
        Some(stem) => stem,
        None if gender == Gender::Masculine => lemma,
        None => head,
    };
    let stem_last = stem.chars().next_back();

    let mut endings: Vec<&str> = vec!["е"];

    if last == 'е' {
        endings.extend(["ям", "ями", "ях"]);
    } else {
        endings.extend(["ам", "ами", "ах"]);
    }

    // Genitivo plural sin terminación (книга → книг, окно → окн)
    if last == 'а' || last == 'о' {
        endings.push("");
    }

    if gender == Gender::Masculine || last == 'о' {
        endings.extend(["а", "у", "ом"]);
    } else if last == 'е' {
        endings.extend(["я", "ю", "ей"]);
    } else if gender == Gender::Feminine && last == 'я' {
        endings.extend(["ю", "ей"]);
    } else if gender == Gender::Feminine && last == 'а' {
        endings.extend(["у", "ой"]);
    }

    if gender != Gender::Neuter {
        let palatal = last == 'я' || matches!(stem_last, Some('к') | Some('ч'));
        endings.push(if palatal { "и" } else { "ы" });
    }

    if gender == Gender::Masculine {
        endings.push("ов");
    }

    let mut forms = Vec::with_capacity(endings.len() + 1);
    forms.push(lemma.to_string());
    push_with_endings(&mut forms, stem, &endings);
    Ok(forms)
}

fn decline_irregular(lemma: &str) -> Option<Vec<String>> {
    let (stem, suffix) = split_last_chars(lemma, 2)?;
    let extra = irregular_extra_endings(suffix)?;

    let mut forms = Vec::with_capacity(IRREGULAR_ENDINGS.len() + extra.len());
    push_with_endings(&mut forms, stem, &IRREGULAR_ENDINGS);
    push_with_endings(&mut forms, stem, extra);
    Some(forms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn forms_of(lemma: &str, options: NounOptions) -> HashSet<String> {
        decline(lemma, &options).unwrap().into_iter().collect()
    }

    fn set(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_masculine_hard_stem() {
        assert_eq!(
            forms_of("стол", NounOptions::default()),
            set(&[
                "стол", "столе", "столам", "столами", "столах", "стола", "столу", "столом",
                "столы", "столов",
            ])
        );
    }

    #[test]
    fn test_irregular_ii() {
        assert_eq!(
            forms_of("сценарий", NounOptions::default()),
            set(&["сценарий", "сценарии", "сценария", "сценарию", "сценарием"])
        );
    }

    #[test]
    fn test_irregular_ie_and_iya() {
        assert_eq!(
            forms_of("здание", NounOptions::default()),
            set(&["здание", "зданий", "здания", "зданию", "здании", "зданием"])
        );
        assert_eq!(
            forms_of("линия", NounOptions::default()),
            set(&["линия", "линий", "линию", "линии", "линией"])
        );
    }

    #[test]
    fn test_irregular_class_ignores_options() {
        let options = NounOptions {
            gender: Some(Gender::Feminine),
            stem: Some("x".to_string()),
        };
        assert_eq!(
            forms_of("сценарий", options),
            forms_of("сценарий", NounOptions::default())
        );
    }

    #[test]
    fn test_feminine_a() {
        assert_eq!(
            forms_of("лампа", NounOptions::default()),
            set(&[
                "лампа", "лампе", "лампам", "лампами", "лампах", "ламп", "лампу", "лампой",
                "лампы",
            ])
        );
    }

    #[test]
    fn test_feminine_palatal_stem() {
        let forms = forms_of("книга", NounOptions::default());
        assert!(forms.contains("книгу"));
        // г no está en el conjunto palatal: se genera "книгы"
        assert!(forms.contains("книгы"));

        let forms = forms_of("рука", NounOptions::default());
        assert!(forms.contains("руки"));
        assert!(!forms.contains("рукы"));
    }

    #[test]
    fn test_feminine_ya() {
        // -ям/-ями/-ях solo se eligen para lemas en -е
        assert_eq!(
            forms_of("неделя", NounOptions::default()),
            set(&[
                "неделя", "неделе", "неделам", "неделами", "неделах", "неделю", "неделей",
                "недели",
            ])
        );
    }

    #[test]
    fn test_neuter_o() {
        assert_eq!(
            forms_of("окно", NounOptions::default()),
            set(&[
                "окно", "окне", "окнам", "окнами", "окнах", "окн", "окна", "окну", "окном",
            ])
        );
    }

    #[test]
    fn test_neuter_e() {
        assert_eq!(
            forms_of("поле", NounOptions::default()),
            set(&["поле", "поле", "полям", "полями", "полях", "поля", "полю", "полей"])
        );
    }

    #[test]
    fn test_explicit_gender_and_stem() {
        let forms = forms_of(
            "папа",
            NounOptions {
                gender: Some(Gender::Masculine),
                stem: Some("пап".to_string()),
            },
        );
        assert!(forms.contains("папу"));
        assert!(!forms.contains("папой"));
        assert!(forms.contains("папом"));
        assert!(forms.contains("папов"));
    }

    #[test]
    fn test_explicit_stem_for_fleeting_vowel() {
        let forms = forms_of(
            "отец",
            NounOptions {
                gender: None,
                stem: Some("отц".to_string()),
            },
        );
        assert!(forms.contains("отец"));
        assert!(forms.contains("отца"));
        assert!(forms.contains("отцом"));
        assert!(forms.contains("отцы"));
        assert!(!forms.contains("отеца"));
    }

    #[test]
    fn test_masculine_k_stem_palatalization() {
        let forms = forms_of("урок", NounOptions::default());
        assert!(forms.contains("уроки"));
        assert!(!forms.contains("урокы"));
    }

    #[test]
    fn test_empty_lemma_is_too_short() {
        let err = decline("", &NounOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            GenerationError::WordTooShort { min_len: 1, .. }
        ));
    }
}
