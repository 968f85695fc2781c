//! Noyau — pipelines complets + chaîne d’analyse
//!
//! arithmétique : texte -> normaliser_arithmetique -> jetons -> shunting-yard -> format_number
//! algèbre      : texte -> normaliser_algebre -> split '=' -> 2 polynômes -> P = 0 -> racines
//!
//! `analyser` essaie des tentatives dans un ordre fixe (algèbre puis arithmétique) :
//! chacune = un prédicat pur + un traitement ; la première qui accepte l’entrée décide.

use log::debug;
use serde::Serialize;

use super::equation::resoudre;
use super::erreurs::ErreurCalcul;
use super::format::format_number;
use super::jetons::{format_tokens, tokenize};
use super::rpn::evaluate;
use super::texte::{normaliser_algebre, normaliser_arithmetique};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Arithmetique,
    Algebre,
}

/// Résultat structuré pour l’appelant : mode + démarche + réponse finale.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Reponse {
    pub mode: Mode,
    pub demarche: Vec<String>,
    pub reponse: String,
}

/// Évalue une expression arithmétique déjà canonique (pas de normalisation).
pub fn evaluer(expr: &str) -> Result<f64, ErreurCalcul> {
    evaluate(&tokenize(expr)?)
}

/// Texte libre -> nombre formaté.
pub fn calculer_texte(texte: &str) -> Result<Reponse, ErreurCalcul> {
    let expr = normaliser_arithmetique(texte);
    debug!("arithmétique : {texte:?} -> {expr:?}");

    let jetons = tokenize(&expr)?;
    let jetons_txt = format_tokens(&jetons);
    debug!("jetons : {jetons_txt}");

    let valeur = evaluate(&jetons)?;
    let reponse = format_number(valeur);

    Ok(Reponse {
        mode: Mode::Arithmetique,
        demarche: vec![
            format!("Expression : {expr}"),
            format!("Jetons : {jetons_txt}"),
            format!("Résultat : {reponse}"),
        ],
        reponse,
    })
}

/// Texte libre -> équation résolue.
pub fn resoudre_texte(texte: &str) -> Result<Reponse, ErreurCalcul> {
    let equation = normaliser_algebre(texte);
    debug!("algèbre : {texte:?} -> {equation:?}");

    let r = resoudre(&equation)?;
    Ok(Reponse {
        mode: Mode::Algebre,
        reponse: r.solution.reponse(),
        demarche: r.demarche,
    })
}

/* ------------------------ Chaîne d’analyse ------------------------ */

struct Tentative {
    mode: Mode,
    accepte: fn(&str) -> bool,
    traite: fn(&str) -> Result<Reponse, ErreurCalcul>,
}

fn ressemble_equation(texte: &str) -> bool {
    let eq = normaliser_algebre(texte);
    eq.contains('x') && eq.matches('=').count() == 1
}

fn ressemble_calcul(texte: &str) -> bool {
    normaliser_arithmetique(texte)
        .chars()
        .any(|c| c.is_ascii_digit())
}

const TENTATIVES: &[Tentative] = &[
    Tentative {
        mode: Mode::Algebre,
        accepte: ressemble_equation,
        traite: resoudre_texte,
    },
    Tentative {
        mode: Mode::Arithmetique,
        accepte: ressemble_calcul,
        traite: calculer_texte,
    },
];

/// Détection automatique : première tentative qui accepte le texte.
pub fn analyser(texte: &str) -> Result<Reponse, ErreurCalcul> {
    for t in TENTATIVES {
        if (t.accepte)(texte) {
            debug!("tentative {:?} retenue pour {texte:?}", t.mode);
            return (t.traite)(texte);
        }
    }
    Err(ErreurCalcul::NonReconnue)
}

/// Mode imposé par l’appelant (pas de détection).
pub fn analyser_en_mode(texte: &str, mode: Mode) -> Result<Reponse, ErreurCalcul> {
    match mode {
        Mode::Arithmetique => calculer_texte(texte),
        Mode::Algebre => resoudre_texte(texte),
    }
}
