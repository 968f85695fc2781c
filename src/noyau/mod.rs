//! Noyau de calcul en texte libre
//!
//! Organisation interne :
//! - texte.rs    : normalisation (phrases, nombres en lettres, symboles)
//! - jetons.rs   : tokenisation + moins unaire
//! - rpn.rs      : shunting-yard à deux piles + règle du %
//! - format.rs   : affichage des nombres (entier sans point, ≤ 10 décimales)
//! - polynome.rs : côté d’équation -> puissance => coefficient
//! - equation.rs : degré 1 / degré 2 + démarche
//! - erreurs.rs  : taxonomie des erreurs
//! - eval.rs     : pipelines complets + chaîne d’analyse
//!
//! Tout est pur : pas d’état partagé mutable, pas d’E/S.

pub mod equation;
pub mod erreurs;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod polynome;
pub mod rpn;
pub mod texte;


#[cfg(test)]
mod tests_langage;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use equation::{resoudre, Resolution, Solution};
pub use erreurs::ErreurCalcul;
pub use eval::{analyser, analyser_en_mode, calculer_texte, evaluer, resoudre_texte, Mode, Reponse};
pub use format::format_number;
