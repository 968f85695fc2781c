//! Réglages de la calculatrice (binaire)
//!
//! Sources, de la plus forte à la plus faible :
//! 1. options de la ligne de commande (appliquées par main.rs)
//! 2. fichier JSON : `--config PATH` ou variable `CALCULATRICE_CONFIG`
//! 3. valeurs par défaut
//!
//! Le noyau n’en dépend pas : ε, 10 décimales et puissance max restent fixes.

use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use log::{debug, LevelFilter};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::noyau::Mode;

/// Variable d’environnement désignant le fichier de réglages.
pub const VAR_CONFIG: &str = "CALCULATRICE_CONFIG";

#[derive(Debug, Error)]
pub enum ErreurReglages {
    #[error("lecture de {chemin}: {source}")]
    Lecture {
        chemin: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON invalide dans {chemin}: {source}")]
    Json {
        chemin: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NiveauLog {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<NiveauLog> for LevelFilter {
    fn from(niveau: NiveauLog) -> Self {
        match niveau {
            NiveauLog::Off => LevelFilter::Off,
            NiveauLog::Error => LevelFilter::Error,
            NiveauLog::Warn => LevelFilter::Warn,
            NiveauLog::Info => LevelFilter::Info,
            NiveauLog::Debug => LevelFilter::Debug,
            NiveauLog::Trace => LevelFilter::Trace,
        }
    }
}

/// Mode d’analyse : détection automatique ou pipeline imposé.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ModeForce {
    #[default]
    Auto,
    Arithmetique,
    Algebre,
}

impl ModeForce {
    /// None => chaîne d’analyse automatique.
    pub fn mode(self) -> Option<Mode> {
        match self {
            ModeForce::Auto => None,
            ModeForce::Arithmetique => Some(Mode::Arithmetique),
            ModeForce::Algebre => Some(Mode::Algebre),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reglages {
    pub niveau_log: NiveauLog,
    pub mode: ModeForce,
    /// Afficher la démarche avant la réponse.
    pub demarche: bool,
    /// Sortie JSON (un objet par entrée).
    pub json: bool,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            niveau_log: NiveauLog::default(),
            mode: ModeForce::default(),
            demarche: true,
            json: false,
        }
    }
}

impl Reglages {
    /// Charge les réglages : chemin explicite, sinon `CALCULATRICE_CONFIG`, sinon défauts.
    /// Un fichier désigné mais absent est une erreur.
    pub fn charger(chemin: Option<&Path>) -> Result<Self, ErreurReglages> {
        let depuis_env = std::env::var_os(VAR_CONFIG).map(PathBuf::from);
        match chemin.map(Path::to_path_buf).or(depuis_env) {
            Some(p) => Self::depuis_fichier(&p),
            None => Ok(Self::default()),
        }
    }

    pub fn depuis_fichier(chemin: &Path) -> Result<Self, ErreurReglages> {
        let txt = fs::read_to_string(chemin).map_err(|source| ErreurReglages::Lecture {
            chemin: chemin.to_path_buf(),
            source,
        })?;
        let r = Self::depuis_json(&txt).map_err(|source| ErreurReglages::Json {
            chemin: chemin.to_path_buf(),
            source,
        })?;
        debug!("réglages chargés depuis {}", chemin.display());
        Ok(r)
    }

    pub fn depuis_json(txt: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(txt)
    }
}
