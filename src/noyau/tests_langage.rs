//! Tests langage : normalisation du texte libre + pipelines complets + chaîne d’analyse.

use super::texte::{normaliser_algebre, normaliser_arithmetique};
use super::{analyser, analyser_en_mode, calculer_texte, resoudre_texte, ErreurCalcul, Mode};

fn reponse(texte: &str) -> String {
    analyser(texte)
        .unwrap_or_else(|e| panic!("texte={texte:?} err={e}"))
        .reponse
}

/* ------------------------ Normalisation ------------------------ */

#[test]
fn lang_phrases_arithmetiques() {
    assert_eq!(normaliser_arithmetique("12 divided by 4"), "12 / 4");
    assert_eq!(normaliser_arithmetique("3 Multiplied  By 2"), "3 * 2");
    assert_eq!(normaliser_arithmetique("7 times 6 plus 1"), "7 * 6 + 1");
    assert_eq!(normaliser_arithmetique("9 minus 4"), "9 - 4");
    assert_eq!(normaliser_arithmetique("10 over 4"), "10 / 4");
    assert_eq!(
        normaliser_arithmetique("open bracket 1 plus 2 close bracket times 3"),
        "( 1 + 2 ) * 3"
    );
}

#[test]
fn lang_pourcentages() {
    assert_eq!(normaliser_arithmetique("10 percent of 50"), "10 % * 50");
    assert_eq!(normaliser_arithmetique("10 percentage of 50"), "10 % * 50");
    assert_eq!(normaliser_arithmetique("10% of 50"), "10% * 50");
    assert_eq!(normaliser_arithmetique("125 plus 10 percent"), "125 + 10 %");
}

#[test]
fn lang_nombres_en_lettres() {
    assert_eq!(normaliser_arithmetique("two plus three"), "2 + 3");
    assert_eq!(normaliser_arithmetique("ate times for"), "8 * 4");
    assert_eq!(normaliser_arithmetique("nineteen minus sixteen"), "19 - 16");
    // mot entier seulement : "someone" et "tone" ne deviennent pas des chiffres
    assert_eq!(normaliser_arithmetique("someone 5 tone"), "5");
}

#[test]
fn lang_symboles() {
    assert_eq!(normaliser_arithmetique("6 × 7 ÷ 2"), "6 * 7 / 2");
    assert_eq!(normaliser_arithmetique("6 x 7"), "6 * 7");
    assert_eq!(normaliser_arithmetique("6x7"), "6*7");
    assert_eq!(normaliser_arithmetique("1,000,000 − 1"), "1000000 - 1");
    assert_eq!(normaliser_arithmetique("what is 2 + 2 ?"), "2 + 2");
}

#[test]
fn lang_algebre() {
    assert_eq!(normaliser_algebre("Solve 2x + 5 = 19"), "2x+5=19");
    assert_eq!(normaliser_algebre("x² − 5x + 6 = 0"), "x^2-5x+6=0");
    assert_eq!(normaliser_algebre("x squared equals nine"), "x^2=9");
    assert_eq!(normaliser_algebre("two x plus one is equal to seven"), "2x+1=7");
    // "exactly" ne laisse pas de x parasite
    assert_eq!(normaliser_algebre("exactly 3x = 6"), "3x=6");
}

#[test]
fn lang_jamais_de_panique() {
    for s in ["", "   ", "¿¡", "percent", "x", "=", "((((", "日本語 2"] {
        let _ = normaliser_arithmetique(s);
        let _ = normaliser_algebre(s);
        let _ = analyser(s);
    }
}

/* ------------------------ Pipelines ------------------------ */

#[test]
fn lang_calculs_complets() {
    assert_eq!(reponse("125 plus 10 percent"), "137.5");
    assert_eq!(reponse("10 percent of 50"), "5");
    assert_eq!(reponse("one divided by three"), "0.3333333333");
    assert_eq!(reponse("negative open bracket 3 plus 4 close bracket"), "-7");
}

#[test]
fn lang_equations_completes() {
    assert_eq!(reponse("solve 2x + 5 = 19"), "x = 7");
    assert_eq!(reponse("x² - 5x + 6 = 0"), "x = 3 ou x = 2");
    assert_eq!(reponse("x^2 + 4x + 8 = 0"), "x = -2 + 2i ou x = -2 - 2i");
}

#[test]
fn lang_demarche() {
    let r = calculer_texte("2 plus 3 times 4").unwrap();
    assert_eq!(r.mode, Mode::Arithmetique);
    assert_eq!(
        r.demarche,
        vec![
            "Expression : 2 + 3 * 4".to_string(),
            "Jetons : 2 + 3 * 4".to_string(),
            "Résultat : 14".to_string(),
        ]
    );

    let r = resoudre_texte("x^2 - 4x + 4 = 0").unwrap();
    assert_eq!(r.mode, Mode::Algebre);
    assert_eq!(r.demarche[1], "Forme standard : x^2 - 4x + 4 = 0");
    assert_eq!(r.reponse, "x = 2 (racine double)");
}

/* ------------------------ Chaîne d’analyse ------------------------ */

#[test]
fn lang_priorite_algebre_puis_calcul() {
    assert_eq!(analyser("2x+5=19").map(|r| r.mode), Ok(Mode::Algebre));
    assert_eq!(analyser("2*5").map(|r| r.mode), Ok(Mode::Arithmetique));
    // "x" sans '=' : ce n’est pas une équation, "6 x 7" est un produit
    assert_eq!(reponse("6 x 7"), "42");
}

#[test]
fn lang_non_reconnu() {
    assert_eq!(analyser("hello there"), Err(ErreurCalcul::NonReconnue));
    assert_eq!(analyser(""), Err(ErreurCalcul::NonReconnue));
}

#[test]
fn lang_erreurs_propagees() {
    assert_eq!(analyser("10 divided by 0"), Err(ErreurCalcul::DivisionParZero));
    assert!(matches!(
        analyser("x^3 = 8"),
        Err(ErreurCalcul::EquationNonResoluble(_))
    ));
}

#[test]
fn lang_mode_impose() {
    // en mode algèbre forcé, un calcul n’a pas de '=' : non résoluble
    assert!(matches!(
        analyser_en_mode("2+2", Mode::Algebre),
        Err(ErreurCalcul::EquationNonResoluble(_))
    ));
    assert_eq!(
        analyser_en_mode("2+2", Mode::Arithmetique).map(|r| r.reponse),
        Ok("4".to_string())
    );
}
