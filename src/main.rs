use std::fs::File;
use std::io::BufWriter;
use std::process::ExitCode;

use anyhow::{Context, Result};
use vesta_vec::utils::{logger, report};
use vesta_vec::{annotate, ArrowStyle, Config, Rgb, SpinAxis, VectorSource};

mod cli;

use cli::Cli;

fn main() -> ExitCode {
    let cli = cli::parse();
    let _ = logger::init(logger::level_for(cli.quiet, cli.verbose));

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:#}", e);
            if let Some(err) = e.downcast_ref::<vesta_vec::Error>() {
                if err.is_format() {
                    log::error!("Check that --natoms matches the structure and every MAGMOM token is a number or N*value");
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let sqa = cli.sqa.map(|i| SpinAxis::from_index(i as usize)).transpose()?;

    // Settled before any file is touched, settings included
    let source = VectorSource::select(
        cli.magmom.clone(),
        cli.vector_file.clone(),
        cli.natoms,
        sqa.unwrap_or_default(),
    )?;

    let config = load_config(&cli)?;
    let source = source.with_axis(sqa.unwrap_or(config.spin_axis));

    let style = effective_style(&cli, &config);
    let length_scale = cli.scale.unwrap_or(config.length_scale);
    let output = cli.output.clone().unwrap_or_else(|| config.output.clone());

    let vectors = source
        .load()
        .context("failed to build the vector array")?
        .scaled(length_scale);
    log::info!("{}", report::moment_summary(&vectors));

    if let Some(path) = &cli.dump_moments {
        let file = File::create(path)
            .with_context(|| format!("cannot create {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &vectors.to_mapping())
            .with_context(|| format!("cannot write moments to {}", path.display()))?;
        log::info!("Moments written to {}", path.display());
    }

    annotate(&cli.input_vesta_file, &vectors, &style, &output).with_context(|| {
        format!(
            "failed to add vectors from {} to {}",
            cli.input_vesta_file.display(),
            output.display()
        )
    })?;

    if cli.save_config {
        log::info!("{}", with_saved_style(config, style).save());
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load settings from {}", path.display())),
        None => {
            let (config, msg) = Config::load();
            log::debug!("{}", msg);
            Ok(config)
        }
    }
}

fn effective_style(cli: &Cli, config: &Config) -> ArrowStyle {
    let mut style = config.style.clone();
    if let Some(rgb) = &cli.rgb {
        // clap guarantees exactly three values
        style.color = Rgb::new(rgb[0], rgb[1], rgb[2]);
    }
    if let Some(width) = cli.width {
        style.width_scale = width;
    }
    if let Some(anchor) = cli.arrow_mode {
        style.anchor = anchor;
    }
    style
}

/// Only the arrow style is persisted; one-off flags such as -o or -l are not.
fn with_saved_style(config: Config, style: ArrowStyle) -> Config {
    Config { style, ..config }
}
