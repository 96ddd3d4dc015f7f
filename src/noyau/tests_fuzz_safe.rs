//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - chaque expression générée porte sa valeur attendue (calculée pendant la génération)
//! - seule erreur acceptée : division par zéro

use std::time::{Duration, Instant};

use super::{evaluer, ErreurCalcul};

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

/// Expression + valeur attendue (None = une division par zéro quelque part).
struct Gen {
    texte: String,
    valeur: Option<f64>,
}

fn gen_atom(rng: &mut Rng) -> Gen {
    // entiers simples, zéro inclus (pour provoquer des divisions par zéro)
    let n = match rng.pick(8) {
        0 => 0,
        1 => 1,
        2 => 2,
        3 => 3,
        4 => 7,
        5 => 12,
        6 => 100,
        _ => 4096,
    };
    Gen {
        texte: format!("{n}"),
        valeur: Some(n as f64),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> Gen {
    if depth == 0 {
        return gen_atom(rng);
    }

    let op = match rng.pick(6) {
        0 => return gen_atom(rng),
        1 => {
            // signe unaire : seulement après '(' (sinon ce serait un binaire)
            let x = gen_expr(rng, depth - 1);
            let (signe, v) = if rng.coin() {
                ("-", x.valeur.map(|v| -v))
            } else {
                ("+", x.valeur)
            };
            return Gen {
                texte: format!("({signe}{})", x.texte),
                valeur: v,
            };
        }
        2 => '+',
        3 => '-',
        4 => '*',
        _ => '/',
    };

    let a = gen_expr(rng, depth - 1);
    let b = gen_expr(rng, depth - 1);

    let valeur = match (a.valeur, b.valeur) {
        (Some(x), Some(y)) => match op {
            '+' => Some(x + y),
            '-' => Some(x - y),
            '*' => Some(x * y),
            _ if y == 0.0 => None,
            _ => Some(x / y),
        },
        _ => None,
    };

    Gen {
        texte: format!("({}{op}{})", a.texte, b.texte),
        valeur,
    }
}

/// Insère des blancs entre les caractères (ne doit rien changer au résultat).
fn aere(texte: &str, rng: &mut Rng) -> String {
    let mut out = String::new();
    for c in texte.chars() {
        out.push(c);
        match rng.pick(4) {
            0 => out.push(' '),
            1 => out.push('\t'),
            _ => {}
        }
    }
    out
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
fn fuzz_safe_valeurs_attendues() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    // Même seed => mêmes expressions => mêmes sorties (déterminisme)
    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..200 {
        budget(t0, max);

        let g = gen_expr(&mut rng, 5);

        match (evaluer(&g.texte), g.valeur) {
            (Ok(v), Some(attendu)) => {
                assert!(v.is_finite(), "expr={:?} v={v}", g.texte);
                assert_eq!(v, attendu, "expr={:?}", g.texte);
                seen_ok += 1;
            }
            (Err(ErreurCalcul::DivisionParZero), None) => seen_err += 1,
            (res, attendu) => {
                panic!("expr={:?} obtenu={res:?} attendu={attendu:?}", g.texte)
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_idempotence_et_blancs() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..100 {
        budget(t0, max);

        let g = gen_expr(&mut rng, 4);
        let premier = evaluer(&g.texte);
        let second = evaluer(&g.texte);
        assert_eq!(premier, second, "expr={:?}", g.texte);

        let aeree = aere(&g.texte, &mut rng);
        assert_eq!(evaluer(&aeree), premier, "expr={aeree:?}");
    }
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let expr = somme_balancee("1", 800);
    let v = evaluer(&expr).unwrap_or_else(|e| panic!("err: {e}"));
    budget(t0, max);

    assert_eq!(v, 800.0);
}

#[test]
fn fuzz_safe_longue_chaine_plate() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    // 1-1+1-1... : la pile d’opérateurs reste courte (associativité gauche)
    let mut expr = String::from("1");
    for i in 0..10_000 {
        expr.push(if i % 2 == 0 { '-' } else { '+' });
        expr.push('1');
    }
    let v = evaluer(&expr).unwrap_or_else(|e| panic!("err: {e}"));
    budget(t0, max);

    assert_eq!(v, 1.0);
}
