//! Configuración y argumentos CLI

use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

/// Comprueba palabras rusas contra un vocabulario generado a partir de lemas
#[derive(Parser, Debug, Clone)]
#[command(name = "slovar")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(after_help = r#"EJEMPLOS:
    slovar столами пишу хорошо
    slovar --vocabulary data/vocabulary.csv --input texto.txt
    slovar --forms купить --pos v --options '{"ending":"плю"}'"#)]
pub struct Config {
    /// Archivo del vocabulario (lema,código,opciones)
    #[arg(short = 'd', long, default_value = "data/vocabulary.csv")]
    pub vocabulary: PathBuf,

    /// Archivo de entrada con las palabras a comprobar
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Muestra las formas generadas para este lema y termina
    #[arg(long, value_name = "LEMA")]
    pub forms: Option<String>,

    /// Código de categoría para --forms: n, a, aa, v (default: n)
    #[arg(long, requires = "forms")]
    pub pos: Option<String>,

    /// Opciones JSON para --forms
    #[arg(long, requires = "forms")]
    pub options: Option<String>,

    /// Más detalle en el log (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Solo errores en el log (prevalece sobre -v)
    #[arg(short, long)]
    pub quiet: bool,

    /// Palabras a comprobar
    pub words: Vec<String>,
}

impl Config {
    /// Código de categoría efectivo para --forms
    pub fn pos_code(&self) -> &str {
        self.pos.as_deref().unwrap_or("n")
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["slovar", "стол"]).unwrap();
        assert_eq!(config.vocabulary, PathBuf::from("data/vocabulary.csv"));
        assert_eq!(config.words, vec!["стол".to_string()]);
        assert_eq!(config.pos_code(), "n");
        assert_eq!(config.log_level(), LevelFilter::Warn);
    }

    #[test]
    fn test_forms_mode() {
        let config = Config::try_parse_from([
            "slovar", "--forms", "купить", "--pos", "v", "--options", r#"["плю"]"#,
        ])
        .unwrap();
        assert_eq!(config.forms.as_deref(), Some("купить"));
        assert_eq!(config.pos_code(), "v");
        assert_eq!(config.options.as_deref(), Some(r#"["плю"]"#));
    }

    #[test]
    fn test_verbosity() {
        let config = Config::try_parse_from(["slovar", "-vv"]).unwrap();
        assert_eq!(config.log_level(), LevelFilter::Debug);

        let config = Config::try_parse_from(["slovar", "-q"]).unwrap();
        assert_eq!(config.log_level(), LevelFilter::Error);

        let config = Config::try_parse_from(["slovar", "-q", "-v"]).unwrap();
        assert_eq!(config.log_level(), LevelFilter::Error);
    }

    #[test]
    fn test_pos_requires_forms() {
        assert!(Config::try_parse_from(["slovar", "--pos", "v"]).is_err());
    }
}
