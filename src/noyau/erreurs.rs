// src/noyau/erreurs.rs
//
// Erreurs du noyau : une seule taxonomie pour tout le pipeline
// (normalisation -> jetons -> évaluation / extraction -> résolution).
//
// Les messages restent courts et en minuscules : l’appelant les affiche tels quels
// ou les teste avec `contains`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    /// Aucun jeton après normalisation.
    #[error("expression vide")]
    ExpressionVide,

    /// Littéral numérique mal formé (ex: "1.2.3").
    #[error("jeton invalide : {0:?}")]
    JetonInvalide(String),

    /// Caractère ou suite de jetons hors grammaire (moins unaire orphelin compris).
    #[error("expression invalide : {0}")]
    ExpressionInvalide(String),

    #[error("parenthèses non appariées")]
    ParenthesesNonAppariees,

    /// `%` sans opérande à sa gauche.
    #[error("pourcentage sans opérande")]
    PourcentageInvalide,

    /// Diviseur exactement égal à 0.
    #[error("division par zéro")]
    DivisionParZero,

    /// Degré 0 (pas de x), degré >= 3, ou terme polynomial non reconnu.
    #[error("équation non résoluble : {0}")]
    EquationNonResoluble(String),

    /// Aucune tentative de la chaîne d’analyse n’accepte l’entrée.
    #[error("entrée non reconnue")]
    NonReconnue,
}

impl ErreurCalcul {
    pub(crate) fn invalide(msg: impl Into<String>) -> Self {
        ErreurCalcul::ExpressionInvalide(msg.into())
    }

    pub(crate) fn non_resoluble(msg: impl Into<String>) -> Self {
        ErreurCalcul::EquationNonResoluble(msg.into())
    }
}
