//! Tests fuzz safe : aller-retour + robustesse + déterminisme.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - tailles bornées
//! - budget temps global
//! - invariant clé : evaluer(rendu(expr)) == valeur de référence (à 1e-9 près, relatif)

use std::time::{Duration, Instant};

use super::{analyser, evaluer, format_number, resoudre, ErreurCalcul, Solution};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

#[derive(Clone, Copy)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

fn gen_entier(rng: &mut Rng, non_nul: bool) -> i64 {
    loop {
        let n = rng.pick(41) as i64 - 20;
        if !(non_nul && n == 0) {
            return n;
        }
    }
}

/// Suite plate : n0 op1 n1 op2 n2 ... (diviseurs jamais nuls).
fn gen_suite(rng: &mut Rng) -> (Vec<i64>, Vec<Op>) {
    let len = 1 + rng.pick(7) as usize;
    let mut nombres = vec![gen_entier(rng, false)];
    let mut ops = Vec::with_capacity(len);
    for _ in 0..len {
        let op = match rng.pick(4) {
            0 => Op::Add,
            1 => Op::Sub,
            2 => Op::Mul,
            _ => Op::Div,
        };
        nombres.push(gen_entier(rng, matches!(op, Op::Div)));
        ops.push(op);
    }
    (nombres, ops)
}

fn rendu(nombres: &[i64], ops: &[Op]) -> String {
    let mut s = nombres[0].to_string();
    for (op, n) in ops.iter().zip(&nombres[1..]) {
        s.push(match op {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
            Op::Div => '/',
        });
        s.push_str(&n.to_string());
    }
    s
}

/// Référence indépendante : d’abord * et / (gauche à droite), puis + et -.
fn reference(nombres: &[i64], ops: &[Op]) -> f64 {
    let mut termes: Vec<f64> = vec![nombres[0] as f64];
    let mut signes: Vec<f64> = vec![1.0];
    for (op, &n) in ops.iter().zip(&nombres[1..]) {
        let n = n as f64;
        match op {
            Op::Add => {
                termes.push(n);
                signes.push(1.0);
            }
            Op::Sub => {
                termes.push(n);
                signes.push(-1.0);
            }
            Op::Mul => {
                if let Some(t) = termes.last_mut() {
                    *t *= n;
                }
            }
            Op::Div => {
                if let Some(t) = termes.last_mut() {
                    *t /= n;
                }
            }
        }
    }
    termes.iter().zip(&signes).map(|(t, s)| t * s).sum()
}

fn is_erreur_attendue(e: &ErreurCalcul) -> bool {
    // Liste blanche : toutes les erreurs typées sont *normales* sur du bruit.
    matches!(
        e,
        ErreurCalcul::ExpressionVide
            | ErreurCalcul::JetonInvalide(_)
            | ErreurCalcul::ExpressionInvalide(_)
            | ErreurCalcul::ParenthesesNonAppariees
            | ErreurCalcul::PourcentageInvalide
            | ErreurCalcul::DivisionParZero
            | ErreurCalcul::EquationNonResoluble(_)
            | ErreurCalcul::NonReconnue
    )
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_aller_retour_entiers() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(0xC0FFEE);

    for _ in 0..2000 {
        budget(start, max);

        let (nombres, ops) = gen_suite(&mut rng);
        let s = rendu(&nombres, &ops);
        let attendu = reference(&nombres, &ops);
        let obtenu = evaluer(&s).unwrap_or_else(|e| panic!("expr={s:?} err={e}"));

        let tol = 1e-9 * attendu.abs().max(1.0);
        assert!(
            (obtenu - attendu).abs() <= tol,
            "expr={s:?} obtenu={obtenu} attendu={attendu}"
        );
    }
}

#[test]
fn fuzz_bruit_sans_panique() {
    const ALPHABET: &[u8] = b"0123456789+-*/%(). x=^";

    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(42);

    for _ in 0..3000 {
        budget(start, max);

        let len = rng.pick(16) as usize;
        let s: String = (0..len)
            .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize] as char)
            .collect();

        if let Err(e) = evaluer(&s) {
            assert!(is_erreur_attendue(&e), "s={s:?} err={e:?}");
        }
        match analyser(&s) {
            Ok(r) => assert!(!r.reponse.is_empty(), "s={s:?}"),
            Err(e) => assert!(is_erreur_attendue(&e), "s={s:?} err={e:?}"),
        }
    }
}

#[test]
fn fuzz_deterministe() {
    let mut a = Rng::new(7);
    let mut b = Rng::new(7);
    for _ in 0..200 {
        let (na, oa) = gen_suite(&mut a);
        let (nb, ob) = gen_suite(&mut b);
        let (sa, sb) = (rendu(&na, &oa), rendu(&nb, &ob));
        assert_eq!(sa, sb);
        assert_eq!(evaluer(&sa), evaluer(&sb));
    }
}

#[test]
fn fuzz_quadratiques_racines_entieres() {
    // (x - r1)(x - r2) = x^2 - (r1 + r2)x + r1·r2 : on retrouve r1, r2
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(2024);

    for _ in 0..500 {
        budget(start, max);

        let r1 = gen_entier(&mut rng, false);
        let r2 = gen_entier(&mut rng, false);
        let somme = r1 + r2;
        let produit = r1 * r2;

        let mut eq = String::from("x^2");
        if somme != 0 {
            eq.push_str(&format!("{:+}x", -somme));
        }
        if produit != 0 || rng.coin() {
            eq.push_str(&format!("{:+}", produit));
        }
        eq.push_str("=0");

        let sol = resoudre(&eq)
            .unwrap_or_else(|e| panic!("eq={eq:?} err={e}"))
            .solution;
        let (grand, petit) = (r1.max(r2) as f64, r1.min(r2) as f64);
        match sol {
            Solution::Double(x) => {
                assert_eq!(r1, r2, "eq={eq:?}");
                assert!((x - grand).abs() < 1e-9, "eq={eq:?} x={x}");
            }
            Solution::Reelles(x1, x2) => {
                assert!((x1 - grand).abs() < 1e-9, "eq={eq:?} x1={x1}");
                assert!((x2 - petit).abs() < 1e-9, "eq={eq:?} x2={x2}");
            }
            autre => panic!("eq={eq:?} solution inattendue {autre:?}"),
        }
    }
}

#[test]
fn fuzz_format_stable() {
    let mut rng = Rng::new(99);
    for _ in 0..1000 {
        let n = gen_entier(&mut rng, false) as f64;
        let d = gen_entier(&mut rng, true) as f64;
        let s = format_number(n / d);
        assert!(!s.ends_with('.'), "{s}");
        if s.contains('.') {
            assert!(!s.ends_with('0'), "{s}");
        }
        if (n / d).fract() == 0.0 {
            assert!(!s.contains('.'), "{s}");
        }
    }
}
