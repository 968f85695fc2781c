//! Calculatrice en texte libre : noyau pur (calculs + équations) et réglages du binaire.

pub mod noyau;
pub mod reglages;

// API publique minimale
pub use noyau::{analyser, analyser_en_mode, evaluer, resoudre, ErreurCalcul, Mode, Reponse};
