//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - les expressions générées sont bien formées : seules les erreurs de
//!   *valeur* (division par zéro, domaine, non fini) sont admises
//! - invariant clé : tout Ok est fini, et son affichage ré-injecté redonne
//!   la même valeur bit à bit

use std::time::{Duration, Instant};

use super::{calcule, ErreurCalc};

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

/* ------------------------ Helpers fuzz ------------------------ */

fn est_erreur_attendue(e: &ErreurCalc) -> bool {
    // Les expressions générées sont grammaticalement correctes : seules les
    // erreurs de valeur sont normales ici.
    matches!(
        e,
        ErreurCalc::DivisionParZero | ErreurCalc::Domaine { .. } | ErreurCalc::NonFini
    )
}

/* ------------------------ Génération d'expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    let n = rng.pick(10);
    if rng.coin() {
        format!("{n}")
    } else {
        format!("{n}.{}", rng.pick(100))
    }
}

fn gen_atome(rng: &mut Rng) -> String {
    match rng.pick(4) {
        0 | 1 => gen_nombre(rng),
        2 => format!("({})", gen_nombre(rng)),
        _ => format!("-{}", gen_nombre(rng)),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atome(rng);
    }

    match rng.pick(10) {
        0 => gen_atome(rng),
        1 => format!("({}+{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        2 => format!("({}-{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        3 => format!("({}*{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        4 => format!("({}/{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        // exposant borné : on cherche des dépassements francs, pas des gels
        5 => format!("({})^{}", gen_expr(rng, depth - 1), rng.pick(4)),
        6 => format!("sin({})", gen_expr(rng, depth - 1)),
        7 => format!("cos({})", gen_expr(rng, depth - 1)),
        8 => format!("tan({})", gen_expr(rng, depth - 1)),
        _ => {
            if rng.coin() {
                format!("sqrt({})", gen_expr(rng, depth - 1))
            } else {
                format!("log({})", gen_expr(rng, depth - 1))
            }
        }
    }
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_determinisme_et_reinjection() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // Même seed => mêmes expressions => mêmes sorties (déterminisme)
    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..200 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);

        match (calcule(&expr), calcule(&expr)) {
            (Ok(a), Ok(b)) => {
                assert!(a.valeur.is_finite(), "Ok non fini: expr={expr:?}");
                assert_eq!(a.valeur.to_bits(), b.valeur.to_bits(), "expr={expr:?}");

                // ré-injection de l'affichage
                let c = calcule(&a.affichage)
                    .unwrap_or_else(|e| panic!("ré-injection {:?} err={e}", a.affichage));
                assert_eq!(
                    a.valeur.to_bits(),
                    c.valeur.to_bits(),
                    "expr={expr:?} affichage={:?}",
                    a.affichage
                );

                seen_ok += 1;
            }
            (Err(a), Err(b)) => {
                assert!(
                    est_erreur_attendue(&a),
                    "erreur non attendue: expr={expr:?} err={a}"
                );
                assert_eq!(a, b, "erreur non déterministe: expr={expr:?}");
                seen_err += 1;
            }
            (a, b) => panic!("non déterministe: expr={expr:?} a={a:?} b={b:?}"),
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 20, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_entrees_hostiles() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    // Tout octet hors alphabet doit ressortir en erreur typée, jamais en panique.
    let hostiles = [
        "2++2", "*3", "()", ")(", "sin", "sin(", "sqrt(2", "1.2.3", "..", "2 3",
        "pi", "log()", "^2", "2^", "×", "÷", "2e10", "0x10", "\u{0}",
        "sin(cos(tan(", "--", "-", "(((((", ")))))",
    ];

    for s in hostiles {
        budget(t0, max);
        match calcule(s) {
            Ok(c) => panic!("aurait dû échouer: {s:?} -> {}", c.valeur),
            Err(
                ErreurCalc::CaractereInvalide { .. }
                | ErreurCalc::Syntaxe { .. },
            ) => {}
            Err(e) => panic!("mauvais genre d'erreur pour {s:?}: {e:?}"),
        }
    }
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let expr = somme_balancee("0.5", 800);
    budget(t0, max);

    let c = calcule(&expr).unwrap_or_else(|e| panic!("err: {e}"));

    // 800*(0.5) = 400
    assert_eq!(c.valeur, 400.0);
    assert_eq!(c.affichage, "400");
}
