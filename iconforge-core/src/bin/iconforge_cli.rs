//! IconForge CLI
//!
//! Commands: generate, render
//! Prints the generation report as JSON to stdout, diagnostics to stderr.
//! Returns 1 on synthesis/setup failure, 2 when a text file could not be written.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use iconforge_core::{
    write_outputs, CommandSynthesizer, FontPipeline, GenerateRequest, GenerationReport,
    ResultDescriptor,
};

#[derive(Parser)]
#[command(name = "iconforge-cli")]
#[command(about = "IconForge CLI - Icon Font Compiler")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Synthesize fonts from icons, then write stylesheet and demo page
    Generate {
        /// Font family name
        #[arg(short, long, default_value = "apricons")]
        font_name: String,

        /// Glob selecting the source icons
        #[arg(short, long, default_value = "icons/*.svg")]
        pattern: String,

        /// Directory the synthesizer writes binary fonts to
        #[arg(short, long, default_value = "dist")]
        output_dir: PathBuf,

        /// Directory for the stylesheet and demo page
        #[arg(short, long, default_value = "dist")]
        dist_dir: PathBuf,

        /// Synthesizer options as JSON, passed through untouched
        #[arg(long, default_value = "{}")]
        options: String,

        /// JSON file holding a full request; overrides the flags above
        #[arg(short, long)]
        request: Option<PathBuf>,

        /// External font generator program (see `CommandSynthesizer` for its calling convention)
        #[arg(short, long)]
        synthesizer: PathBuf,

        /// Extra argument for the generator (repeatable)
        #[arg(long = "synthesizer-arg", allow_hyphen_values = true)]
        synthesizer_args: Vec<String>,
    },

    /// Write stylesheet and demo page from an existing result descriptor
    Render {
        /// Result descriptor JSON file
        descriptor: PathBuf,

        /// Directory for the stylesheet and demo page
        #[arg(short, long, default_value = "dist")]
        dist_dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            font_name,
            pattern,
            output_dir,
            dist_dir,
            options,
            request,
            synthesizer,
            synthesizer_args,
        } => {
            let request = match request {
                Some(path) => match load_request(&path) {
                    Ok(r) => r,
                    Err(e) => return fail(&format!("Invalid request file {}: {}", path.display(), e)),
                },
                None => {
                    let options = match serde_json::from_str(&options) {
                        Ok(o) => o,
                        Err(e) => return fail(&format!("Invalid options: {}", e)),
                    };
                    GenerateRequest::new(font_name, pattern, output_dir)
                        .dist_dir(dist_dir)
                        .options(options)
                }
            };

            let pipeline =
                FontPipeline::new(CommandSynthesizer::new(synthesizer).args(synthesizer_args));

            match pipeline.run(&request).await {
                Ok(report) => finish(&report),
                Err(e) => fail(&e.to_string()),
            }
        }

        Commands::Render { descriptor, dist_dir } => {
            let result: ResultDescriptor = match std::fs::read_to_string(&descriptor)
                .map_err(|e| e.to_string())
                .and_then(|s| serde_json::from_str(&s).map_err(|e| e.to_string()))
            {
                Ok(r) => r,
                Err(e) => return fail(&format!("Invalid descriptor {}: {}", descriptor.display(), e)),
            };

            match write_outputs(&dist_dir, &result).await {
                Ok(report) => finish(&report),
                Err(e) => fail(&e.to_string()),
            }
        }
    }
}

fn load_request(path: &Path) -> Result<GenerateRequest, String> {
    let content = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    serde_json::from_str(&content).map_err(|e| e.to_string())
}

fn finish(report: &GenerationReport) -> ExitCode {
    match serde_json::to_string_pretty(report) {
        Ok(json) => println!("{}", json),
        Err(e) => return fail(&e.to_string()),
    }
    if report.all_written() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2) // A text file write failed
    }
}

fn fail(message: &str) -> ExitCode {
    let output = serde_json::json!({
        "success": false,
        "error": message,
    });
    println!("{}", output);
    ExitCode::FAILURE
}
