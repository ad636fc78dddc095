use std::fs;
use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::Builder;

use slovar::{generate, Config, GenerationOptions, PartOfSpeech, VocabularyLoader};

fn main() {
    let config = Config::parse();

    Builder::new()
        .filter_level(config.log_level())
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    // Modo diagnóstico: mostrar las formas de un lema
    if let Some(ref lemma) = config.forms {
        print_forms(lemma, &config);
        return;
    }

    // Obtener palabras a comprobar
    let text = if let Some(ref input_file) = config.input {
        match fs::read_to_string(input_file) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error leyendo archivo '{}': {}", input_file.display(), e);
                process::exit(1);
            }
        }
    } else if !config.words.is_empty() {
        config.words.join(" ")
    } else {
        eprintln!("Error: No se proporcionaron palabras para comprobar.");
        eprintln!("Usa --help para ver las opciones.");
        process::exit(1);
    };

    let (vocabulary, report) = match VocabularyLoader::load_from_file(&config.vocabulary) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error cargando '{}': {}", config.vocabulary.display(), e);
            process::exit(1);
        }
    };
    if !report.is_clean() {
        eprintln!(
            "Advertencia: {} entradas del vocabulario descartadas.",
            report.rejected()
        );
    }

    // Solo se separa por espacios; la tokenización real queda fuera
    let mut unknown = 0;
    for token in text.split_whitespace() {
        if !vocabulary.contains(&token.to_lowercase()) {
            println!("{}", token);
            unknown += 1;
        }
    }

    if unknown > 0 {
        process::exit(2);
    }
}

fn print_forms(lemma: &str, config: &Config) {
    let lemma = lemma.to_lowercase();
    let part_of_speech = PartOfSpeech::from_code(config.pos_code());

    let options =
        match GenerationOptions::decode(part_of_speech, config.options.as_deref().unwrap_or("")) {
            Ok(options) => options,
            Err(e) => {
                eprintln!("Error en --options: {}", e);
                process::exit(1);
            }
        };

    match generate(&lemma, part_of_speech, &options) {
        Ok(forms) => {
            for form in forms {
                println!("{}", form);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
