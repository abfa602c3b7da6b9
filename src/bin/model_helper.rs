//! model-helper: generate messages, KRUD annotations, constructor defaults and
//! setupParams bodies for a Java model class.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::debug;
use model_helper::config::{ContentLineRule, GeneratorConfig};
use model_helper::{ArtifactKind, GeneratedArtifacts, Generator, ModelHelperError, TreeInfo};
use strum::IntoEnumIterator;

#[derive(Parser)]
#[command(name = "model-helper")]
#[command(about = "Generate boilerplate snippets from a Java model class")]
struct Cli {
    /// Java source file to process.
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Artifact to print: messages, metadata, reset or params. Repeatable; defaults to all.
    #[arg(short, long = "show", value_name = "ARTIFACT")]
    show: Vec<ArtifactKind>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Supertype that adds the style/config entries.
    #[arg(long, value_name = "NAME")]
    configurable_parent: Option<String>,

    /// Supertype treated as content-bearing. Repeatable; replaces the defaults.
    #[arg(long = "content-parent", value_name = "NAME")]
    content_parents: Vec<String>,

    /// Only emit the `models.content` message line for recognised content supertypes.
    #[arg(long)]
    strict_content_line: bool,

    /// More log output (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    fn generator_config(&self) -> GeneratorConfig {
        let defaults = GeneratorConfig::default();
        GeneratorConfig::builder()
            .configurable_parent(
                self.configurable_parent
                    .clone()
                    .unwrap_or(defaults.configurable_parent),
            )
            .content_parents(if self.content_parents.is_empty() {
                defaults.content_parents
            } else {
                self.content_parents.clone()
            })
            .content_line(if self.strict_content_line {
                ContentLineRule::RecognizedParents
            } else {
                ContentLineRule::Always
            })
            .build()
    }

    fn selected(&self) -> Vec<ArtifactKind> {
        if self.show.is_empty() {
            ArtifactKind::iter().collect()
        } else {
            self.show.clone()
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn render_text(artifacts: &GeneratedArtifacts, kinds: &[ArtifactKind]) -> String {
    kinds
        .iter()
        .map(|kind| format!("==== {} ====\n{}", kind.title(), artifacts.get(*kind)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_json(info: &TreeInfo, artifacts: &GeneratedArtifacts, kinds: &[ArtifactKind]) -> anyhow::Result<String> {
    let selected: serde_json::Map<String, serde_json::Value> = kinds
        .iter()
        .map(|kind| (kind.to_string(), serde_json::Value::from(artifacts.get(*kind))))
        .collect();
    let document = serde_json::json!({
        "tree": info,
        "artifacts": selected,
    });
    serde_json::to_string_pretty(&document).context("serialising output")
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let path = cli.file.clone().unwrap_or_default();
    let generator = Generator::new(cli.generator_config());
    debug!("generator configuration: {:?}", generator.config());

    let (info, artifacts) = model_helper::process_file(&path, &generator)?;
    let kinds = cli.selected();
    let output = match cli.format {
        OutputFormat::Text => render_text(&artifacts, &kinds),
        OutputFormat::Json => render_json(&info, &artifacts, &kinds)?,
    };
    println!("{output}");
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<ModelHelperError>() {
                Some(known) => eprintln!("error[{}]: {known}", known.key()),
                None => eprintln!("error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}
