// src/main.rs
//
// Calculatrice texte — point d’entrée ligne de commande
// -----------------------------------------------------
// - ENTREE en arguments : une seule analyse (les mots sont recollés avec des espaces)
// - sans argument       : une analyse par ligne lue sur stdin
// - --json              : un objet {mode, demarche, reponse} par entrée
//
// Code de sortie : 1 si au moins une entrée n’a pas pu être traitée.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use log::{debug, LevelFilter};

use calculatrice_texte::noyau::{analyser, analyser_en_mode, ErreurCalcul, Reponse};
use calculatrice_texte::reglages::{ModeForce, NiveauLog, Reglages, VAR_CONFIG};

#[derive(Parser, Debug)]
#[command(
    name = "calculatrice",
    version,
    about = "Calculs et équations (degré 1 ou 2) écrits en texte libre"
)]
struct Cli {
    /// Expression ou équation (ex: "125 plus 10 percent", "x^2 - 5x + 6 = 0")
    entree: Vec<String>,

    /// Mode d’analyse (auto = équation si x et un seul '=', sinon calcul)
    #[arg(long, value_enum)]
    mode: Option<ModeForce>,

    /// Sortie JSON
    #[arg(long)]
    json: bool,

    /// N’affiche que la réponse finale
    #[arg(long)]
    sans_demarche: bool,

    /// Niveau de journalisation
    #[arg(long, value_enum, env = "CALCULATRICE_LOG")]
    log_level: Option<NiveauLog>,

    /// Fichier de réglages JSON
    #[arg(long, value_name = "PATH", env = VAR_CONFIG)]
    config: Option<PathBuf>,
}

impl Cli {
    /// Ligne de commande > fichier > défauts.
    fn reglages(&self) -> Result<Reglages, Box<dyn std::error::Error>> {
        let mut r = Reglages::charger(self.config.as_deref())?;
        if let Some(mode) = self.mode {
            r.mode = mode;
        }
        if let Some(niveau) = self.log_level {
            r.niveau_log = niveau;
        }
        if self.json {
            r.json = true;
        }
        if self.sans_demarche {
            r.demarche = false;
        }
        Ok(r)
    }
}

fn init_logger(niveau: NiveauLog) {
    use env_logger::Builder;
    use std::sync::Once;

    static INIT: Once = Once::new();

    INIT.call_once(|| {
        Builder::from_default_env()
            .filter_level(LevelFilter::from(niveau))
            .try_init()
            .ok();
    });
}

fn traiter(texte: &str, reglages: &Reglages) -> Result<Reponse, ErreurCalcul> {
    match reglages.mode.mode() {
        Some(mode) => analyser_en_mode(texte, mode),
        None => analyser(texte),
    }
}

fn afficher(
    sortie: &mut impl Write,
    reponse: &Reponse,
    reglages: &Reglages,
) -> Result<(), Box<dyn std::error::Error>> {
    if reglages.json {
        writeln!(sortie, "{}", serde_json::to_string(reponse)?)?;
        return Ok(());
    }
    if reglages.demarche {
        for ligne in &reponse.demarche {
            writeln!(sortie, "{ligne}")?;
        }
    } else {
        writeln!(sortie, "{}", reponse.reponse)?;
    }
    Ok(())
}

fn main_impl() -> Result<bool, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let reglages = cli.reglages()?;
    init_logger(reglages.niveau_log);
    debug!("réglages : {reglages:?}");

    let entrees: Vec<String> = if cli.entree.is_empty() {
        io::stdin().lock().lines().collect::<Result<_, _>>()?
    } else {
        vec![cli.entree.join(" ")]
    };

    let stdout = io::stdout();
    let mut sortie = stdout.lock();
    let mut tout_ok = true;

    for texte in entrees.iter().filter(|t| !t.trim().is_empty()) {
        match traiter(texte, &reglages) {
            Ok(reponse) => afficher(&mut sortie, &reponse, &reglages)?,
            Err(e) => {
                tout_ok = false;
                eprintln!("erreur: {e}");
            }
        }
    }
    sortie.flush()?;

    Ok(tout_ok)
}

fn main() {
    match main_impl() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("erreur: {e}");
            std::process::exit(2);
        }
    }
}
