// src/noyau/jetons.rs

use super::erreurs::ErreurCalcul;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    Plus,
    Minus,
    Star,
    Slash,
    Percent, // % (postfixe, voir rpn.rs)

    LPar,
    RPar,
}

impl Tok {
    /// Opérateur binaire (+ - * /) : après lui, un '-' est un signe.
    fn est_binaire(&self) -> bool {
        matches!(self, Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash)
    }
}

/// Tokenize une expression arithmétique déjà normalisée.
/// Supporte:
/// - littéraux décimaux (ex: 12, 3.5, .25), sans exposant ni séparateur de milliers
/// - opérateurs + - * / %
/// - parenthèses ( )
/// - moins unaire : en tête, après un opérateur binaire ou après '('
///     - "-(...)" devient "0 - (...)"
///     - "-12"    devient le littéral signé Num(-12)
///
/// Les espaces sont retirés avant le balayage.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurCalcul> {
    let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
    if chars.is_empty() {
        return Err(ErreurCalcul::ExpressionVide);
    }

    let mut out: Vec<Tok> = Vec::new();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        // Nombre
        if c.is_ascii_digit() || c == '.' {
            let (n, suite) = lire_nombre(&chars, i)?;
            out.push(Tok::Num(n));
            i = suite;
            continue;
        }

        match c {
            '-' if est_position_unaire(out.last()) => {
                // "-(" : 0 synthétique puis soustraction
                if chars.get(i + 1) == Some(&'(') {
                    out.push(Tok::Num(0.0));
                    out.push(Tok::Minus);
                    i += 1;
                    continue;
                }

                let debut = i + 1;
                let chiffre_suit = chars
                    .get(debut)
                    .is_some_and(|c| c.is_ascii_digit() || *c == '.');
                if !chiffre_suit {
                    return Err(ErreurCalcul::invalide("moins unaire sans chiffres"));
                }
                let (n, suite) = lire_nombre(&chars, debut)?;
                out.push(Tok::Num(-n));
                i = suite;
            }
            '+' => {
                out.push(Tok::Plus);
                i += 1;
            }
            '-' => {
                out.push(Tok::Minus);
                i += 1;
            }
            '*' => {
                out.push(Tok::Star);
                i += 1;
            }
            '/' => {
                out.push(Tok::Slash);
                i += 1;
            }
            '%' => {
                out.push(Tok::Percent);
                i += 1;
            }
            '(' => {
                out.push(Tok::LPar);
                i += 1;
            }
            ')' => {
                out.push(Tok::RPar);
                i += 1;
            }
            _ => return Err(ErreurCalcul::invalide(format!("caractère inattendu: '{c}'"))),
        }
    }

    Ok(out)
}

fn est_position_unaire(precedent: Option<&Tok>) -> bool {
    match precedent {
        None => true,
        Some(Tok::LPar) => true,
        Some(t) => t.est_binaire(),
    }
}

/// Consomme le plus long littéral [0-9.]* à partir de `debut`.
/// Renvoie la valeur et l’indice du premier caractère non consommé.
fn lire_nombre(chars: &[char], debut: usize) -> Result<(f64, usize), ErreurCalcul> {
    let mut i = debut;
    while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
        i += 1;
    }
    let txt: String = chars[debut..i].iter().collect();
    let n = txt
        .parse::<f64>()
        .map_err(|_| ErreurCalcul::JetonInvalide(txt.clone()))?;
    Ok((n, i))
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Num(n) => super::format::format_number(*n),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Percent => "%".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
