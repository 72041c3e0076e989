use anyhow::Result;
use clap::Parser;
use pt_braille::DotMatrixDisplay;
use pt_core::config::{DisplayConfig, DotOptions, SampleOptions, load_config};

pub mod cli;
pub mod wave;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Charger la config
    let mut config = resolve_config(&cli)?;

    // 4. Appliquer les overrides CLI
    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(height) = cli.height {
        config.height = height;
    }
    if let Some(ref wave) = cli.wave {
        config.wave.clone_from(wave);
    }
    if let Some(ref fill) = cli.fill {
        config.sample = match fill.as_str() {
            "none" => SampleOptions::default(),
            "below" => SampleOptions {
                fill_below: true,
                fill_above: false,
            },
            "above" => SampleOptions {
                fill_below: false,
                fill_above: true,
            },
            other => {
                log::warn!("Remplissage inconnu '{other}', aucun remplissage.");
                SampleOptions::default()
            }
        };
    }
    config.clamp_all();

    // 5. Construire le display
    let mut display = DotMatrixDisplay::new(config.width, config.height)?;
    log::debug!(
        "display {}×{} points, panneau {}×{} glyphes",
        display.width(),
        display.height(),
        display.panel_width(),
        display.panel_height()
    );

    // 6. Allumer les points
    if cli.all {
        display.enable_all_dots();
    } else {
        let f = select_wave(&config, &display);
        display.set_dots_by_callback(f, config.sample, DotOptions::default());
    }

    // 7. Imprimer le panneau
    println!("{}", display.render());

    Ok(())
}

/// Resolve config: file if present, built-in defaults otherwise.
fn resolve_config(cli: &cli::Cli) -> Result<DisplayConfig> {
    if cli.config.exists() {
        load_config(&cli.config)
    } else {
        log::warn!(
            "Config introuvable : {}. Utilisation des défauts.",
            cli.config.display()
        );
        Ok(DisplayConfig::default())
    }
}

/// Pick the demo waveform named by the config, falling back to sine.
fn select_wave(config: &DisplayConfig, display: &DotMatrixDisplay) -> Box<dyn Fn(u32) -> f64> {
    let (w, h) = (display.width(), display.height());
    match config.wave.as_str() {
        "sine" => wave::sine(w, h),
        "ramp" => wave::ramp(w, h),
        "pulse" => wave::pulse(w, h),
        other => {
            log::warn!("Forme d'onde inconnue '{other}', utilisation de sine.");
            wave::sine(w, h)
        }
    }
}
