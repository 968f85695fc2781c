// src/noyau/equation.rs
//
// Résolution d’équations en x (degré 1 ou 2) à partir de "gauche=droite".
//
// Étapes :
// 1. exactement un '=' ; chaque côté -> Polynome::extraire
// 2. P = gauche - droite (élagué à EPSILON)
// 3. selon le degré de P :
//    - 0 sans aucun x dans l’énoncé : non résoluble
//    - 0 avec x annulés, ou 1       : a·x + b = 0
//    - 2                            : discriminant
//    - >= 3                         : non résoluble (hors périmètre)
//
// La démarche (forme standard, Δ, réponse) accompagne toujours le résultat.

use log::debug;
use serde::Serialize;

use super::erreurs::ErreurCalcul;
use super::format::format_number;
use super::polynome::{Polynome, EPSILON};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", content = "valeur", rename_all = "snake_case")]
pub enum Solution {
    /// Identité : tout x convient.
    Infinie,
    /// Contradiction : aucun x ne convient.
    Aucune,
    Lineaire(f64),
    /// Δ ≈ 0
    Double(f64),
    /// Δ > 0 ; la racine en +√Δ d’abord.
    Reelles(f64, f64),
    /// Δ < 0 : reel ± i·imag
    Complexes { reel: f64, imag: f64 },
}

impl Solution {
    /// Ligne de réponse finale, prête à afficher.
    pub fn reponse(&self) -> String {
        match self {
            Solution::Infinie => "infinité de solutions (identité)".to_string(),
            Solution::Aucune => "aucune solution".to_string(),
            Solution::Lineaire(x) => format!("x = {}", format_number(*x)),
            Solution::Double(x) => format!("x = {} (racine double)", format_number(*x)),
            Solution::Reelles(x1, x2) => {
                format!("x = {} ou x = {}", format_number(*x1), format_number(*x2))
            }
            Solution::Complexes { reel, imag } => {
                let r = format_number(*reel);
                let i = format_number(imag.abs());
                format!("x = {r} + {i}i ou x = {r} - {i}i")
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Resolution {
    pub solution: Solution,
    /// Forme standard "… = 0" (aussi présente dans la démarche).
    pub forme_standard: String,
    /// Δ, seulement au degré 2.
    pub discriminant: Option<f64>,
    pub demarche: Vec<String>,
}

/// Résout une équation déjà normalisée (voir texte::normaliser_algebre).
pub fn resoudre(equation: &str) -> Result<Resolution, ErreurCalcul> {
    let (gauche_txt, droite_txt) = match equation.split('=').collect::<Vec<_>>()[..] {
        [g, d] => (g, d),
        _ => return Err(ErreurCalcul::non_resoluble("il faut exactement un '='")),
    };

    let gauche = Polynome::extraire(gauche_txt).ok_or_else(|| {
        ErreurCalcul::non_resoluble(format!("membre gauche illisible: {gauche_txt:?}"))
    })?;
    let droite = Polynome::extraire(droite_txt).ok_or_else(|| {
        ErreurCalcul::non_resoluble(format!("membre droit illisible: {droite_txt:?}"))
    })?;

    let p = gauche.moins(&droite);
    let degre_enonce = gauche.degre().max(droite.degre());
    let degre = p.degre();
    debug!("équation {equation:?} -> {p} = 0 (degré {degre}, énoncé {degre_enonce})");

    let forme_standard = p.forme_standard();
    let mut demarche = vec![
        format!("Équation : {gauche_txt} = {droite_txt}"),
        format!("Forme standard : {forme_standard}"),
    ];

    let (solution, discriminant) = match degre {
        0 if degre_enonce == 0 => {
            return Err(ErreurCalcul::non_resoluble("aucun x dans l’équation"));
        }
        0 | 1 => (lineaire(p.coeff(1), p.coeff(0), &mut demarche), None),
        2 => {
            let (s, delta) = quadratique(p.coeff(2), p.coeff(1), p.coeff(0), &mut demarche);
            (s, Some(delta))
        }
        d => {
            return Err(ErreurCalcul::non_resoluble(format!("degré {d} non supporté")));
        }
    };

    demarche.push(format!("Réponse : {}", solution.reponse()));

    Ok(Resolution {
        solution,
        forme_standard,
        discriminant,
        demarche,
    })
}

/// a·x + b = 0
fn lineaire(a: f64, b: f64, demarche: &mut Vec<String>) -> Solution {
    if a.abs() < EPSILON {
        if b.abs() < EPSILON {
            demarche.push("Les termes en x s’annulent : 0 = 0".to_string());
            return Solution::Infinie;
        }
        demarche.push(format!("Les termes en x s’annulent : {} = 0", format_number(b)));
        return Solution::Aucune;
    }

    demarche.push(format!("x = -({}) / {}", format_number(b), format_number(a)));
    Solution::Lineaire(-b / a)
}

/// a·x² + b·x + c = 0, a ≠ 0
fn quadratique(a: f64, b: f64, c: f64, demarche: &mut Vec<String>) -> (Solution, f64) {
    let delta = b * b - 4.0 * a * c;

    demarche.push(format!(
        "a = {}, b = {}, c = {}",
        format_number(a),
        format_number(b),
        format_number(c)
    ));
    demarche.push(format!("Discriminant : Δ = b² - 4ac = {}", format_number(delta)));

    let deux_a = 2.0 * a;
    let solution = if delta.abs() < EPSILON {
        demarche.push("Δ = 0 : une racine double".to_string());
        Solution::Double(-b / deux_a)
    } else if delta > 0.0 {
        demarche.push("Δ > 0 : deux racines réelles".to_string());
        let r = delta.sqrt();
        Solution::Reelles((-b + r) / deux_a, (-b - r) / deux_a)
    } else {
        demarche.push("Δ < 0 : deux racines complexes conjuguées".to_string());
        Solution::Complexes {
            reel: -b / deux_a,
            imag: (-delta).sqrt() / deux_a,
        }
    };

    (solution, delta)
}
