use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Options de mutation pour les opérations sur les points.
///
/// # Example
/// ```
/// use pt_core::config::DotOptions;
/// let opts = DotOptions::default();
/// assert!(opts.enable);
/// assert!(!opts.skip_rebuild);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DotOptions {
    /// Allumer (`true`) ou éteindre (`false`) les points visés.
    pub enable: bool,
    /// Laisser le panneau en l'état ; l'appelant devra `rebuild_panel`.
    pub skip_rebuild: bool,
}

impl Default for DotOptions {
    fn default() -> Self {
        Self {
            enable: true,
            skip_rebuild: false,
        }
    }
}

/// Politique de remplissage pour l'échantillonnage de courbes.
///
/// `fill_below` and `fill_above` are mutually exclusive in intent; when
/// both are set, `fill_below` wins (first-match order).
///
/// # Example
/// ```
/// use pt_core::config::SampleOptions;
/// let opts = SampleOptions::default();
/// assert!(!opts.fill_below && !opts.fill_above);
/// ```
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SampleOptions {
    /// Remplir depuis la ligne de base jusqu'à l'échantillon inclus.
    pub fill_below: bool,
    /// Remplir depuis l'échantillon jusqu'au bord haut inclus.
    pub fill_above: bool,
}

/// Configuration du rendu de démonstration, sérialisable en TOML.
///
/// Chaque champ a une valeur par défaut saine.
///
/// # Example
/// ```
/// use pt_core::config::DisplayConfig;
/// let config = DisplayConfig::default();
/// assert_eq!(config.width, 64);
/// assert_eq!(config.wave, "sine");
/// ```
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Largeur demandée, en points (arrondie au bloc de 2 par le display).
    pub width: u32,
    /// Hauteur demandée, en points (arrondie au bloc de 4 par le display).
    pub height: u32,
    /// Forme d'onde de démonstration : "sine", "ramp", "pulse".
    pub wave: String,
    /// Politique de remplissage de l'échantillonnage.
    pub sample: SampleOptions,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 32,
            wave: "sine".to_string(),
            sample: SampleOptions::default(),
        }
    }
}

impl DisplayConfig {
    /// Clamp numeric fields to their valid ranges.
    /// Called after TOML deserialization to prevent out-of-range values.
    pub fn clamp_all(&mut self) {
        self.width = self.width.clamp(1, 8192);
        self.height = self.height.clamp(1, 8192);
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    display: Option<DisplaySection>,
    sample: Option<SampleSection>,
}

/// Display section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
struct DisplaySection {
    width: Option<u32>,
    height: Option<u32>,
    wave: Option<String>,
}

/// Sample section of the TOML config, all fields optional.
#[derive(Deserialize)]
struct SampleSection {
    fill_below: Option<bool>,
    fill_above: Option<bool>,
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use pt_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<DisplayConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;

    let file: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Erreur de parsing TOML dans {}", path.display()))?;

    let mut config = DisplayConfig::default();

    if let Some(d) = file.display {
        if let Some(v) = d.width {
            config.width = v;
        }
        if let Some(v) = d.height {
            config.height = v;
        }
        if let Some(v) = d.wave {
            config.wave = v;
        }
    }

    if let Some(s) = file.sample {
        if let Some(v) = s.fill_below {
            config.sample.fill_below = v;
        }
        if let Some(v) = s.fill_above {
            config.sample.fill_above = v;
        }
    }

    config.clamp_all();
    log::debug!("Config chargée depuis {}", path.display());
    Ok(config)
}
