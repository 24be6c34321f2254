use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;

use pyclassgram::core::{FileScanner, ProjectAnalyzer};
use pyclassgram::export::{write_diagram, PlantUmlTool, DEFAULT_PLANTUML_BIN};
use pyclassgram::formatters::{JsonFormatter, PlantUmlFormatter, Rendered};
use pyclassgram::logging::{init_logging, LogFormat};
use pyclassgram::Extraction;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "pyclassgram",
    version,
    author = "pyclassgram developers",
    about = "Extract a PlantUML class diagram from Python source"
)]
struct Cli {
    /// Python file or directory to analyze
    #[arg(short, long, value_name = "PATH")]
    input: PathBuf,

    /// Output file path
    #[arg(short, long, value_name = "FILE", default_value = "class_diagram.puml")]
    output: PathBuf,

    /// Output format: plantuml, json
    #[arg(short, long, value_name = "FORMAT", value_enum, default_value_t = OutputFormat::Plantuml)]
    format: OutputFormat,

    /// Print the result to stdout instead of writing a file
    #[arg(long, conflicts_with = "render")]
    stdout: bool,

    /// Run PlantUML on the written file to produce an image
    #[arg(long)]
    render: bool,

    /// PlantUML executable used by --render
    #[arg(long, value_name = "BIN", env = "PYCLASSGRAM_PLANTUML", default_value = DEFAULT_PLANTUML_BIN)]
    plantuml: PathBuf,

    /// Follow symbolic links when scanning a directory
    #[arg(long)]
    follow_links: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Log output format: compact, pretty, json
    #[arg(long, value_name = "FORMAT", default_value = "compact")]
    log_format: LogFormat,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
#[value(rename_all = "kebab-case")]
enum OutputFormat {
    Plantuml,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_format)?;
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        input,
        output,
        format,
        stdout,
        render,
        plantuml,
        follow_links,
        ..
    } = cli;

    if render && format != OutputFormat::Plantuml {
        bail!("--render requires the plantuml output format");
    }

    let start_time = Instant::now();

    let analyzer =
        ProjectAnalyzer::with_scanner(FileScanner::new().with_follow_links(follow_links));
    let model = match analyzer.analyze(&input)? {
        Extraction::Classes(model) => model,
        Extraction::Empty => {
            println!("No classes found in {}.", input.display());
            return Ok(());
        }
    };

    let rendered = match format {
        OutputFormat::Plantuml => PlantUmlFormatter::new().render(&model),
        OutputFormat::Json => JsonFormatter::new().with_pretty(true).render(&model)?,
    };
    let text = match rendered {
        Rendered::Diagram(text) => text,
        Rendered::Empty => {
            println!("No classes found in {}.", input.display());
            return Ok(());
        }
    };

    if stdout {
        print!("{text}");
        if !text.ends_with('\n') {
            println!();
        }
        return Ok(());
    }

    let output = match format {
        OutputFormat::Plantuml => output,
        OutputFormat::Json => output.with_extension("json"),
    };
    write_diagram(&output, &text)?;
    println!(
        "Wrote {} classes to {} in {:.2}s",
        model.len(),
        output.display(),
        start_time.elapsed().as_secs_f64()
    );

    if render {
        match PlantUmlTool::new(plantuml).render(&output)? {
            Some(image) => println!("Rendered {}", image.display()),
            None => println!(
                "Warning: no image was generated for {}",
                output.display()
            ),
        }
    }

    Ok(())
}
