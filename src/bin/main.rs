use clap::Parser;
use crossterm::style::Stylize;
use std::fs;
use std::io::{stdin, stdout, Write};
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use xcv_core::persistence::{load_index, save_index};
use xcv_core::{Language, OtoIndex, Phonemizer, SameVowelExtension, ToneRange};

/// Realize dictionary phonemes as xCV aliases
#[derive(Parser)]
#[command(name = "xcv")]
#[command(version)]
struct Cli {
    /// Language descriptor (JSON). Defaults to the built-in French table
    #[arg(short, long)]
    language: Option<PathBuf>,

    /// oto.ini files of the voicebank
    #[arg(short, long)]
    oto: Vec<PathBuf>,

    /// Cached oto index; read when no oto.ini is given, written otherwise
    #[arg(short, long)]
    cache: Option<PathBuf>,

    /// Tone used for alias lookups
    #[arg(short, long, default_value_t = 60)]
    tone: i32,

    /// Words as space-separated dictionary phonemes, e.g. "ss tt aa"
    words: Vec<String>,
}

fn main() -> xcv_core::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let language = match &cli.language {
        Some(path) => Language::load(path)?,
        None => Language::french(),
    };
    let index = build_index(&cli)?;
    if index.is_empty() {
        warn!("no aliases loaded; every optional transition will be skipped");
    }
    let phonemizer = Phonemizer::new(language);

    if !cli.words.is_empty() {
        for word in &cli.words {
            print_word(&phonemizer, &index, word, cli.tone);
        }
        return Ok(());
    }

    println!("{} phonemizer. Type phonemes per word, 'exit' to quit.", phonemizer.language().name);
    loop {
        print!("> ");
        stdout().flush()?;
        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        match input.trim() {
            "exit" => break,
            "" => continue,
            word => print_word(&phonemizer, &index, word, cli.tone),
        }
    }
    Ok(())
}

fn build_index(cli: &Cli) -> xcv_core::Result<OtoIndex> {
    if cli.oto.is_empty() {
        return match &cli.cache {
            Some(path) => load_index(path),
            None => Ok(OtoIndex::new()),
        };
    }

    let mut index = OtoIndex::new();
    for path in &cli.oto {
        let text = fs::read_to_string(path)?;
        index.add_oto_ini(&text, ToneRange::ALL);
    }
    if let Some(path) = &cli.cache {
        save_index(&index, path)?;
    }
    Ok(index)
}

fn print_word(phonemizer: &Phonemizer, index: &OtoIndex, word: &str, tone: i32) {
    let phonemes: Vec<&str> = word.split_whitespace().collect();
    match phonemizer.realize_word(phonemes.as_slice(), &[tone], index, &SameVowelExtension) {
        Ok(realization) => {
            let mut parts = Vec::new();
            for syllable in &realization.syllables {
                if syllable.is_extend() {
                    parts.push("~".dark_grey().to_string());
                } else {
                    parts.extend(syllable.aliases().iter().map(|a| format!("[{}]", a).green().to_string()));
                }
            }
            parts.extend(realization.ending.iter().map(|a| format!("[{}]", a).cyan().to_string()));
            println!("{} => {}", word.bold(), parts.join(" "));
        }
        Err(e) => println!("{} => {}", word.bold(), e.to_string().red()),
    }
}
