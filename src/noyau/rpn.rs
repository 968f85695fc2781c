// src/noyau/rpn.rs
//
// Shunting-yard à deux piles (valeurs + opérateurs), évaluation directe.
// Pas d’AST intermédiaire : chaque opérateur dépilé est appliqué tout de suite.
//
// Règles:
// - précédence : + - = 1, * / = 2, associativité à gauche (égalité => on dépile)
// - ')' : applique jusqu’à '(' ; pas de '(' => parenthèses non appariées
// - '%' (postfixe, dépend du contexte) :
//     - on retire l’opérande `num` au sommet
//     - si l’opérateur au sommet est + ou -, la base est la valeur restée au sommet
//       (ou `num` lui-même si la pile est vide) : "125 + 10%" => 125 + 12.5
//     - sinon la base vaut 1 : "50 * 10%" => 50 * 0.1
//
// NOTE:
// - Le moins unaire est déjà résolu par jetons.rs (littéral signé ou 0 synthétique).

use log::trace;

use super::erreurs::ErreurCalcul;
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        _ => 0,
    }
}

/// Évalue une suite de jetons. Le résultat est toujours fini.
pub fn evaluate(tokens: &[Tok]) -> Result<f64, ErreurCalcul> {
    if tokens.is_empty() {
        return Err(ErreurCalcul::ExpressionVide);
    }

    let mut valeurs: Vec<f64> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    for tok in tokens.iter().copied() {
        match tok {
            Tok::Num(n) => valeurs.push(n),

            Tok::LPar => ops.push(tok),

            Tok::RPar => {
                // dépile jusqu’à '('
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(op) => appliquer(op, &mut valeurs)?,
                        None => return Err(ErreurCalcul::ParenthesesNonAppariees),
                    }
                }
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                while let Some(top) = ops.last().copied() {
                    if matches!(top, Tok::LPar) || precedence(&top) < precedence(&tok) {
                        break;
                    }
                    ops.pop();
                    appliquer(top, &mut valeurs)?;
                }
                ops.push(tok);
            }

            Tok::Percent => {
                let num = valeurs.pop().ok_or(ErreurCalcul::PourcentageInvalide)?;
                let base = match ops.last() {
                    Some(Tok::Plus) | Some(Tok::Minus) => valeurs.last().copied().unwrap_or(num),
                    _ => 1.0,
                };
                let v = num * base / 100.0;
                trace!("{num}% (base {base}) -> {v}");
                valeurs.push(v);
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar | Tok::RPar) {
            return Err(ErreurCalcul::ParenthesesNonAppariees);
        }
        appliquer(op, &mut valeurs)?;
    }

    if valeurs.len() != 1 {
        return Err(ErreurCalcul::invalide(format!(
            "{} valeurs restantes au lieu d’une",
            valeurs.len()
        )));
    }

    match valeurs.pop() {
        Some(v) if v.is_finite() => Ok(v),
        Some(v) => Err(ErreurCalcul::invalide(format!("résultat non fini ({v})"))),
        None => Err(ErreurCalcul::ExpressionVide),
    }
}

/// Applique un opérateur binaire aux deux valeurs du sommet (a op b).
fn appliquer(op: Tok, valeurs: &mut Vec<f64>) -> Result<(), ErreurCalcul> {
    let b = valeurs
        .pop()
        .ok_or_else(|| ErreurCalcul::invalide("opérande manquante"))?;
    let a = valeurs
        .pop()
        .ok_or_else(|| ErreurCalcul::invalide("opérande manquante"))?;

    let r = match op {
        Tok::Plus => a + b,
        Tok::Minus => a - b,
        Tok::Star => a * b,
        Tok::Slash => {
            if b == 0.0 {
                return Err(ErreurCalcul::DivisionParZero);
            }
            a / b
        }
        _ => return Err(ErreurCalcul::invalide("opérateur inattendu")),
    };

    trace!("{a} {op:?} {b} -> {r}");
    valeurs.push(r);
    Ok(())
}
