use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context};
use clap::{Parser, Subcommand};
use netiya_morph::{check_registry, decline, decline_lexicon, registry, Attestation};
use netiya_protocol::{Declension, Form, Lexicon, PluralSuffix};
use rkyv::ser::{serializers::AllocSerializer, Serializer};
use serde::Serialize;
use tracing::{info, warn};

#[derive(Parser)]
#[command(author, version, about = "Declines Hebrew nouns by paradigm")]
struct Cli {
    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the six forms of one noun
    Decline {
        /// Paradigm identifier, e.g. b_derex or f_telefon
        paradigm: String,

        /// Dictionary form
        word: String,

        /// The word ends in a singular suffix (a!H, Et, u!t, ...)
        #[arg(short, long)]
        suffixed: bool,

        /// Plural suffix class
        #[arg(short, long, default_value = "i!m")]
        plural: PluralSuffix,

        /// Forms to print, e.g. abs_sg,con_pl
        #[arg(short, long, value_delimiter = ',', value_parser = parse_form)]
        forms: Vec<Form>,

        #[arg(long)]
        json: bool,
    },

    /// Decline every registered exemplar
    Check {
        #[arg(long)]
        json: bool,
    },

    /// Decline a JSON lexicon into an rkyv archive
    Compile {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
}

fn parse_form(label: &str) -> Result<Form, String> {
    Form::ALL
        .into_iter()
        .find(|f| f.label() == label)
        .ok_or_else(|| format!("unknown form '{label}'"))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Decline {
            paradigm,
            word,
            suffixed,
            plural,
            forms,
            json,
        } => {
            let declension = decline(&paradigm, &word, suffixed, plural)?;
            print_declension(&declension, &forms, json)
        }
        Command::Check { json } => check(json),
        Command::Compile { input, output } => compile(input, output),
    }
}

fn print_declension(declension: &Declension, forms: &[Form], json: bool) -> anyhow::Result<()> {
    let selected = declension
        .iter()
        .filter(|(form, _)| forms.is_empty() || forms.contains(form));

    if json {
        let map: serde_json::Map<String, serde_json::Value> = selected
            .map(|(form, text)| (form.label().to_string(), text.into()))
            .collect();
        println!("{}", serde_json::to_string_pretty(&map)?);
    } else {
        for (form, text) in selected {
            println!("{}\t{}", form.label(), text);
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct CheckReport {
    checked: usize,
    unverified: Vec<&'static str>,
    failures: Vec<CheckFailure>,
}

#[derive(Serialize)]
struct CheckFailure {
    paradigm: &'static str,
    error: String,
}

/// Provisional paradigms, with or without an exemplar.
fn unverified_ids() -> Vec<&'static str> {
    registry::entries()
        .iter()
        .filter(|entry| entry.attestation == Attestation::Unverified)
        .map(|entry| entry.id)
        .collect()
}

fn check(json: bool) -> anyhow::Result<()> {
    let checks = check_registry();
    let mut report = CheckReport {
        checked: checks.len(),
        unverified: unverified_ids(),
        failures: Vec::new(),
    };

    for check in &checks {
        if let Err(e) = &check.result {
            warn!(paradigm = check.id, error = %e, "exemplar failed");
            report.failures.push(CheckFailure {
                paradigm: check.id,
                error: e.to_string(),
            });
        }
    }

    info!(
        checked = report.checked,
        unverified = report.unverified.len(),
        failed = report.failures.len(),
        "registry check finished"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{} exemplars, {} unverified, {} failed",
            report.checked,
            report.unverified.len(),
            report.failures.len()
        );
    }

    if !report.failures.is_empty() {
        bail!("{} of {} exemplars failed", report.failures.len(), report.checked);
    }
    Ok(())
}

fn compile(input: PathBuf, output: PathBuf) -> anyhow::Result<()> {
    info!(path = %input.display(), "reading lexicon");
    let input_data = fs::read_to_string(&input)
        .with_context(|| format!("reading {}", input.display()))?;
    let lexicon: Lexicon = serde_json::from_str(&input_data)?;

    info!(
        version = lexicon.version,
        entries = lexicon.entries.len(),
        "declining lexicon"
    );
    let (declined, failures) = decline_lexicon(&lexicon);
    for (i, e) in &failures {
        let row = &lexicon.entries[*i];
        warn!(paradigm = %row.paradigm, word = %row.word, error = %e, "entry skipped");
    }

    let mut serializer = AllocSerializer::<256>::default();
    serializer
        .serialize_value(&declined)
        .map_err(|e| anyhow!("rkyv serialization failed: {e:?}"))?;
    let bytes = serializer.into_serializer().into_inner();

    fs::write(&output, &bytes).with_context(|| format!("writing {}", output.display()))?;

    info!(
        path = %output.display(),
        declined = declined.entries.len(),
        skipped = failures.len(),
        "archive written"
    );
    Ok(())
}
