// src/noyau/polynome.rs
//
// Polynôme creux en x : puissance (0..=6) -> coefficient réel.
//
// Extraction d’UN côté d’équation déjà normalisé :
// - refuse '(' ')' '/' (termes groupés ou rationnels non supportés)
// - "3*x" est accepté (le '*' collé à x disparaît), tout autre '*' est refusé
// - termes découpés avec leur signe : [+-]?[^+-]+
// - terme avec x : coeff? x (^n)?   ; sinon constante (puissance 0)
// - termes semblables cumulés : "2x+3x" => 5x
//
// Tout terme mal formé => None pour tout le côté (jamais de panique).

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use super::format::format_number;

/// Tolérance “presque zéro” (coefficients, discriminant, racines).
pub const EPSILON: f64 = 1e-9;

/// Puissance maximale acceptée pour un terme.
pub const PUISSANCE_MAX: u32 = 6;

fn termes() -> &'static Regex {
    static CACHE: OnceLock<Regex> = OnceLock::new();
    CACHE.get_or_init(|| Regex::new(r"[+-]?[^+-]+").expect("motif des termes"))
}

fn terme_x() -> &'static Regex {
    static CACHE: OnceLock<Regex> = OnceLock::new();
    CACHE.get_or_init(|| {
        Regex::new(r"^(?P<coeff>[+-]?(?:\d+\.?\d*|\.\d+)?)x(?:\^(?P<puis>[0-9.]+))?$")
            .expect("motif du terme en x")
    })
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polynome {
    coeffs: BTreeMap<u32, f64>,
}

impl Polynome {
    /// Extrait un côté d’équation (sans '=').
    pub fn extraire(cote: &str) -> Option<Polynome> {
        let s: String = cote.chars().filter(|c| !c.is_whitespace()).collect();
        if s.is_empty() || s.contains(['(', ')', '/']) {
            return None;
        }

        // multiplication implicite : "3*x" == "3x" ; un autre '*' n’a pas de sens ici
        let s = s.replace("*x", "x");
        if s.contains('*') {
            return None;
        }

        let mut p = Polynome::default();
        let mut lu = 0usize;
        for m in termes().find_iter(&s) {
            if m.start() != lu {
                return None;
            }
            lu = m.end();

            let (puissance, coeff) = lire_terme(m.as_str())?;
            *p.coeffs.entry(puissance).or_insert(0.0) += coeff;
        }

        // un signe orphelin en fin ("2x+") n’est couvert par aucun terme
        if lu != s.len() {
            return None;
        }
        Some(p)
    }

    pub fn coeff(&self, puissance: u32) -> f64 {
        self.coeffs.get(&puissance).copied().unwrap_or(0.0)
    }

    /// Plus grande puissance présente (0 si vide). Termes nuls compris.
    pub fn degre(&self) -> u32 {
        self.coeffs.keys().next_back().copied().unwrap_or(0)
    }

    pub fn est_vide(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// self - autre, puis élagage des |c| < EPSILON.
    pub fn moins(&self, autre: &Polynome) -> Polynome {
        let mut coeffs = self.coeffs.clone();
        for (&puissance, &c) in &autre.coeffs {
            *coeffs.entry(puissance).or_insert(0.0) -= c;
        }
        coeffs.retain(|_, c| c.abs() >= EPSILON);
        Polynome { coeffs }
    }

    /// "x^2 - 5x + 6 = 0"
    pub fn forme_standard(&self) -> String {
        format!("{self} = 0")
    }
}

/// Un terme signé -> (puissance, coefficient).
fn lire_terme(terme: &str) -> Option<(u32, f64)> {
    if !terme.contains('x') {
        let c = terme.parse::<f64>().ok()?;
        return c.is_finite().then_some((0, c));
    }

    let caps = terme_x().captures(terme)?;

    let coeff = match caps.name("coeff").map_or("", |m| m.as_str()) {
        "" | "+" => 1.0,
        "-" => -1.0,
        txt => txt.parse::<f64>().ok()?,
    };
    if !coeff.is_finite() {
        return None;
    }

    let puissance = match caps.name("puis") {
        None => 1,
        Some(m) => m.as_str().parse::<u32>().ok()?,
    };
    if puissance > PUISSANCE_MAX {
        return None;
    }

    Some((puissance, coeff))
}

impl fmt::Display for Polynome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.coeffs.is_empty() {
            return write!(f, "0");
        }

        for (i, (&puissance, &c)) in self.coeffs.iter().rev().enumerate() {
            let signe = if c < 0.0 { "-" } else { "+" };
            let abs = c.abs();

            match (i, signe) {
                (0, "-") => write!(f, "-")?,
                (0, _) => {}
                _ => write!(f, " {signe} ")?,
            }

            let coeff_txt = format_number(abs);
            match puissance {
                0 => write!(f, "{coeff_txt}")?,
                _ => {
                    if coeff_txt != "1" {
                        write!(f, "{coeff_txt}")?;
                    }
                    if puissance == 1 {
                        write!(f, "x")?;
                    } else {
                        write!(f, "x^{puissance}")?;
                    }
                }
            }
        }
        Ok(())
    }
}
