use anyhow::{Context, Result};
use bigolens::cli::{Cli, Commands};
use bigolens::config::load_config;
use bigolens::core::language_for_path;
use bigolens::engine::SUPPORTED_LANGUAGES;
use bigolens::io::{print_summary, render_export, write_export, ExportFormat};
use bigolens::pipeline::AnalysisPipeline;
use bigolens::report;
use clap::Parser;
use std::path::PathBuf;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            path,
            language,
            format,
            output,
            interactive,
            config,
            max_size,
        } => {
            handle_analyze(path, language, format, output, interactive, config, max_size).await
        }
        Commands::Languages => {
            for language in SUPPORTED_LANGUAGES {
                println!("{language}");
            }
            Ok(())
        }
    }
}

#[allow(clippy::too_many_arguments)]
async fn handle_analyze(
    path: PathBuf,
    language: Option<String>,
    format: Option<ExportFormat>,
    output: Option<PathBuf>,
    interactive: bool,
    config_path: Option<PathBuf>,
    max_size: Option<usize>,
) -> Result<()> {
    let mut config = load_config(config_path.as_deref())?;
    if let Some(max_size) = max_size {
        config.engine.max_source_size = max_size;
    }
    let theme = config.display.theme;

    let code = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read source file {}", path.display()))?;
    let language = match language {
        Some(language) => language,
        None => language_for_path(&path)
            .map(str::to_string)
            .unwrap_or_else(|| "generic".to_string()),
    };
    let source_name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string());

    let mut pipeline = AnalysisPipeline::new(config);
    pipeline
        .analyze(&code, &language, source_name.as_deref())
        .await;

    // The pipeline absorbs every engine failure; from here on the
    // session always holds a renderable result.
    if let Some(result) = pipeline.session().current() {
        match (format, output) {
            (Some(format), Some(output)) => {
                write_export(result, format, theme, &output).await?;
                println!("wrote {format} export to {}", output.display());
            }
            (Some(format), None) => {
                print!("{}", render_export(result, format, theme)?);
            }
            (None, _) => print_summary(result),
        }
    }

    if interactive {
        report::app::run(pipeline.session())?;
    }

    Ok(())
}
