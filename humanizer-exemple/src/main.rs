use std::path::{Path, PathBuf};

use clap::Parser;
use humanizer_core::io::{build_output_path, list_documents, normalize_folder, read_document, write_document};
use humanizer_core::{Humanizer, Probabilities, Tone};

const SAMPLE: &str = "We will utilize the new platform to facilitate communication. \
However, we cannot commence until the implementation is sufficient.\n\
It is important to obtain numerous opinions. Do you require assistance?";

/// Humanize a text file, every `.txt` file of a folder, or a built-in sample.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Input file or folder (uses a built-in sample when omitted)
    input: Option<String>,

    /// Tone: casual, formal or persuasive
    #[arg(short, long, default_value = "casual", value_parser = parse_tone)]
    tone: Tone,

    /// Seed for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of variants to print for each input
    #[arg(short, long, default_value_t = 1)]
    variants: usize,

    /// Disable every stochastic step (vocabulary and cleanup only)
    #[arg(long)]
    silent: bool,

    /// Write the first variant to a file; `<stem>.human.<ext>` next to the input when no path is given
    #[arg(short, long, num_args = 0..=1, default_missing_value = "")]
    output: Option<String>,
}

fn parse_tone(s: &str) -> Result<Tone, String> {
    s.parse()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let probabilities = if args.silent { Probabilities::silent() } else { Probabilities::default() };
    let mut humanizer = match args.seed {
        Some(seed) => Humanizer::seeded(seed),
        None => Humanizer::from_os_rng(),
    }
    .with_probabilities(probabilities)?;

    // Collect (source path, text) pairs
    let documents: Vec<(Option<PathBuf>, String)> = match &args.input {
        None => vec![(None, SAMPLE.to_owned())],
        Some(input) => {
            let path = normalize_folder(input);
            if path.is_dir() {
                let mut documents = Vec::new();
                for file in list_documents(&path, "txt")? {
                    let text = read_document(&file)?;
                    documents.push((Some(file), text));
                }
                documents
            } else {
                let text = read_document(&path)?;
                vec![(Some(path), text)]
            }
        }
    };
    log::info!("humanizing {} document(s) in {} tone", documents.len(), args.tone);

    for (source, text) in &documents {
        let variants = humanizer.variants(text, args.tone, args.variants.max(1));

        if let Some(path) = source {
            println!("== {}", path.display());
        }
        for (i, variant) in variants.iter().enumerate() {
            println!("--- Variant {} ---\n{}\n", i + 1, variant);
        }

        if let Some(output) = &args.output {
            let target = output_target(output, source.as_deref(), documents.len())?;
            write_document(&target, &variants[0])?;
            log::info!("wrote {}", target.display());
        }
    }

    Ok(())
}

/// Resolves where a document's output goes.
///
/// An explicit path is only accepted for a single document.
fn output_target(
    output: &str,
    source: Option<&Path>,
    nb_documents: usize,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if !output.is_empty() {
        if nb_documents > 1 {
            return Err("An explicit --output path needs a single input file".into());
        }
        return Ok(PathBuf::from(output));
    }
    match source {
        Some(path) => Ok(build_output_path(path)?),
        None => Err("--output without a path needs an input file".into()),
    }
}
