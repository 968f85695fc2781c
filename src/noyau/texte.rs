// src/noyau/texte.rs
//
// Normalisation du texte libre (clavier, OCR, dictée) vers la grammaire canonique.
//
// Deux sorties, un seul jeu de règles :
// - arithmétique : [0-9+\-*/().% ]
// - algèbre      : [0-9x+\-*/^().=]
//
// Ordre des passes (insensible à la casse) :
// 1. minuscules + alias de symboles (× ÷ −, et ² ³ côté algèbre)
// 2. séparateurs de milliers : "1,000" -> "1000"
// 3. phrases, la plus longue d’abord ("divided by" avant "by"...)
// 4. nombres en toutes lettres 0..19 (homophones compris), mot entier seulement
// 5. filtre final de la grammaire + espaces compactés
//
// Fonctions pures : jamais d’erreur, au pire une chaîne vide que la suite rejette.

use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Phrases communes aux deux chemins. Triées : plus longues d’abord.
const PHRASES: &[(&str, &str)] = &[
    ("percentage of", " % * "),
    ("multiplied by", " * "),
    ("close bracket", " ) "),
    ("open bracket", " ( "),
    ("divided by", " / "),
    ("percent of", " % * "),
    ("negative", " - "),
    ("percent", " % "),
    ("minus", " - "),
    ("times", " * "),
    ("plus", " + "),
    ("over", " / "),
    ("into", " * "),
];

/// Phrases propres aux équations (passent AVANT les phrases communes).
const PHRASES_ALGEBRE: &[(&str, &str)] = &[
    ("is equal to", " = "),
    ("equal to", " = "),
    ("squared", "^2"),
    ("equals", " = "),
    ("cubed", "^3"),
];

/// Nombres en toutes lettres (0..19), homophones de la dictée compris.
const NOMBRES: &[(&str, &str)] = &[
    ("zero", "0"),
    ("one", "1"),
    ("won", "1"),
    ("two", "2"),
    ("too", "2"),
    ("to", "2"),
    ("three", "3"),
    ("four", "4"),
    ("for", "4"),
    ("five", "5"),
    ("six", "6"),
    ("seven", "7"),
    ("eight", "8"),
    ("ate", "8"),
    ("nine", "9"),
    ("ten", "10"),
    ("eleven", "11"),
    ("twelve", "12"),
    ("thirteen", "13"),
    ("fourteen", "14"),
    ("fifteen", "15"),
    ("sixteen", "16"),
    ("seventeen", "17"),
    ("eighteen", "18"),
    ("nineteen", "19"),
];

/// Compile une table de phrases en regex "mot entier", espaces souples entre les mots.
fn compiler(table: &[(&'static str, &'static str)]) -> Vec<(Regex, &'static str)> {
    table
        .iter()
        .map(|(phrase, rempl)| {
            let motif = phrase
                .split_whitespace()
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(r"\s+");
            let re = Regex::new(&format!(r"\b{motif}\b")).expect("motif de phrase");
            (re, *rempl)
        })
        .collect()
}

fn phrases() -> &'static [(Regex, &'static str)] {
    static CACHE: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    CACHE.get_or_init(|| compiler(PHRASES))
}

fn phrases_algebre() -> &'static [(Regex, &'static str)] {
    static CACHE: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    CACHE.get_or_init(|| compiler(PHRASES_ALGEBRE))
}

/// Une seule alternance : évite qu’un remplacement soit repris par un mot suivant.
fn nombres() -> &'static Regex {
    static CACHE: OnceLock<Regex> = OnceLock::new();
    CACHE.get_or_init(|| {
        let alt = NOMBRES
            .iter()
            .map(|(mot, _)| *mot)
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!(r"\b(?:{alt})\b")).expect("motif des nombres")
    })
}

fn milliers() -> &'static Regex {
    static CACHE: OnceLock<Regex> = OnceLock::new();
    CACHE.get_or_init(|| Regex::new(r"(\d),(\d{3})\b").expect("motif des milliers"))
}

fn pourcent_de() -> &'static Regex {
    static CACHE: OnceLock<Regex> = OnceLock::new();
    CACHE.get_or_init(|| Regex::new(r"%\s*of\b").expect("motif % of"))
}

fn mots() -> &'static Regex {
    static CACHE: OnceLock<Regex> = OnceLock::new();
    CACHE.get_or_init(|| Regex::new(r"[a-z]+").expect("motif des mots"))
}

/* ------------------------ Passes communes ------------------------ */

fn alias_symboles(s: &str) -> String {
    s.to_lowercase()
        .replace('×', "*")
        .replace('÷', "/")
        .replace('−', "-")
}

fn sans_milliers(s: &str) -> String {
    // "1,000,000" : les groupes se chevauchent, on répète jusqu’à stabilité
    let mut out = s.to_string();
    loop {
        let suivant = milliers().replace_all(&out, "$1$2").into_owned();
        if suivant == out {
            return out;
        }
        out = suivant;
    }
}

fn appliquer_phrases(s: &str, table: &[(Regex, &'static str)]) -> String {
    let mut out = pourcent_de().replace_all(s, "% *").into_owned();
    for (re, rempl) in table {
        out = re.replace_all(&out, *rempl).into_owned();
    }
    out
}

fn appliquer_nombres(s: &str) -> String {
    nombres()
        .replace_all(s, |c: &Captures| {
            let mot = &c[0];
            NOMBRES
                .iter()
                .find(|(m, _)| *m == mot)
                .map(|(_, chiffres)| format!(" {chiffres} "))
                .unwrap_or_default()
        })
        .into_owned()
}

/// Filtre final + espaces compactés.
fn filtrer(s: &str, garde: impl Fn(char) -> bool) -> String {
    let brut: String = s.chars().filter(|&c| garde(c) || c.is_whitespace()).collect();
    brut.split_whitespace().collect::<Vec<_>>().join(" ")
}

/* ------------------------ Arithmétique ------------------------ */

/// 'x' isolé entre deux termes (pas collé à une lettre) : multiplication.
fn x_multiplication(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let voisin_lettre = |c: Option<&char>| c.is_some_and(|c| c.is_alphabetic());

    let mut out = String::with_capacity(s.len());
    for (i, &c) in chars.iter().enumerate() {
        if c == 'x' {
            let avant = chars[..i].iter().rev().find(|c| !c.is_whitespace());
            let apres = chars[i + 1..].iter().find(|c| !c.is_whitespace());
            let colle_avant = i > 0 && chars[i - 1].is_alphabetic();
            let colle_apres = voisin_lettre(chars.get(i + 1));
            if !colle_avant && !colle_apres && avant.is_some() && apres.is_some() {
                out.push('*');
                continue;
            }
        }
        out.push(c);
    }
    out
}

fn garde_arithmetique(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '*' | '/' | '(' | ')' | '.' | '%')
}

/// Texte libre -> expression arithmétique canonique (espaces simples conservés).
pub fn normaliser_arithmetique(texte: &str) -> String {
    let s = alias_symboles(texte);
    let s = sans_milliers(&s);
    let s = appliquer_phrases(&s, phrases());
    let s = appliquer_nombres(&s);
    let s = x_multiplication(&s);
    filtrer(&s, garde_arithmetique)
}

/* ------------------------ Algèbre ------------------------ */

fn garde_algebre(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, 'x' | '+' | '-' | '*' | '/' | '^' | '(' | ')' | '.' | '=')
}

/// Texte libre -> équation canonique, sans aucun espace.
pub fn normaliser_algebre(texte: &str) -> String {
    let s = alias_symboles(texte).replace('²', "^2").replace('³', "^3");
    let s = sans_milliers(&s);
    let s = appliquer_phrases(&s, phrases_algebre());
    let s = appliquer_phrases(&s, phrases());
    let s = appliquer_nombres(&s);

    // mots restants : seul un "x" isolé survit ("solve", "exactly" disparaissent en entier)
    let s = mots().replace_all(&s, |c: &Captures| {
        if &c[0] == "x" {
            "x".to_string()
        } else {
            " ".to_string()
        }
    });

    filtrer(&s, garde_algebre).replace(' ', "")
}
