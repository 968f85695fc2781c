// src/noyau/format.rs
//
// Affichage des nombres (résultat arithmétique + démarche des équations).
//
// Règle :
// - entier => pas de point décimal ("14", "-7")
// - sinon  => au plus 10 décimales, zéros de fin retirés ("137.5", "0.3333333333")
//
// Le f64 est d’abord converti en rationnel EXACT, puis arrondi à 10^-10 :
// aucune notation scientifique, même pour 1e20.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

/// Nombre de décimales affichées au maximum.
pub const DECIMALES_MAX: usize = 10;

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// r -> entier “scalé” = round(r * 10^digits), demi-unité loin de zéro.
fn rational_scaled_round(r: &BigRational, digits: usize) -> BigInt {
    (r * BigRational::from_integer(pow10(digits))).round().to_integer()
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal, zéros de fin retirés.
fn scaled_to_decimal(mut scaled: BigInt, digits: usize) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    let signe = if neg { "-" } else { "" };

    if frac_part.is_zero() {
        return format!("{signe}{int_part}");
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }
    let frac = frac.trim_end_matches('0');

    format!("{signe}{int_part}.{frac}")
}

/// Formate un f64 selon la règle d’affichage commune.
/// Non fini (NaN, ±inf) : repli sur l’affichage standard.
pub fn format_number(x: f64) -> String {
    let Some(r) = BigRational::from_float(x) else {
        return x.to_string();
    };
    scaled_to_decimal(rational_scaled_round(&r, DECIMALES_MAX), DECIMALES_MAX)
}
