use std::path::PathBuf;

use clap::Parser;

/// pointillé — Braille dot-matrix graphing for the terminal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Largeur du display en points (arrondie au multiple de 2).
    #[arg(long)]
    pub width: Option<u32>,

    /// Hauteur du display en points (arrondie au multiple de 4).
    #[arg(long)]
    pub height: Option<u32>,

    /// Forme d'onde de démonstration : "sine", "ramp", "pulse".
    #[arg(long)]
    pub wave: Option<String>,

    /// Politique de remplissage : "none", "below", "above".
    #[arg(long)]
    pub fill: Option<String>,

    /// Allumer tous les points (ignore --wave).
    #[arg(long, default_value_t = false)]
    pub all: bool,

    /// Fichier de configuration TOML. Défaut : config/default.toml.
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
