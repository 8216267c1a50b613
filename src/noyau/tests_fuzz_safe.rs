//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - expressions générées bien formées (profondeur bornée)
//! - entrées arbitraires : jamais de panique, seulement Ok / Err
//! - invariant clé : compile Ok => evaluate(x) Ok pour tout x

use std::time::{Duration, Instant};

use proptest::prelude::*;

use super::eval::{compile, evaluate_once};

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_atome() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..100).prop_map(|n| n.to_string()),
        (0u32..100, 1u32..100).prop_map(|(e, f)| format!("{e}.{f}")),
        Just("x".to_string()),
    ]
}

/// Chaque appel de fonction est parenthésé : "a^(sqrt(b))" plutôt que "a^sqrt(b)",
/// que le départage par priorité rejette.
fn gen_expr() -> impl Strategy<Value = String> {
    gen_atome().prop_recursive(4, 48, 2, |inner| {
        prop_oneof![
            (
                inner.clone(),
                prop::sample::select(vec!["+", "-", "*", "/", "^"]),
                inner.clone()
            )
                .prop_map(|(a, op, b)| format!("({a}{op}{b})")),
            (
                prop::sample::select(vec!["sin", "cos", "tg", "ctg", "sqrt"]),
                inner.clone()
            )
                .prop_map(|(f, a)| format!("({f}({a}))")),
            (prop::sample::select(vec!["log", "rt"]), inner.clone(), inner)
                .prop_map(|(f, a, b)| format!("({f}({a}, {b}))")),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn fuzz_bien_forme_compile_et_evalue(expr in gen_expr(), x in -100.0f64..100.0) {
        let e = compile(&expr).map_err(|err| TestCaseError::fail(format!("expr={expr:?} err={err}")))?;
        prop_assert!(e.evaluate(x).is_ok());
    }

    #[test]
    fn fuzz_determinisme(expr in gen_expr(), x in -100.0f64..100.0) {
        let a = compile(&expr).and_then(|e| Ok(e.evaluate(x)?));
        let b = compile(&expr).and_then(|e| Ok(e.evaluate(x)?));
        match (a, b) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a.to_bits(), b.to_bits()),
            (a, b) => prop_assert_eq!(a.is_ok(), b.is_ok()),
        }
    }

    #[test]
    fn fuzz_parentheses_neutres(expr in gen_expr()) {
        let nu = evaluate_once(&expr);
        let entoure = evaluate_once(&format!("({expr})"));
        match (nu, entoure) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a.to_bits(), b.to_bits()),
            (a, b) => prop_assert!(false, "expr={expr:?} : {a:?} / {b:?}"),
        }
    }

    #[test]
    fn fuzz_entree_quelconque_sans_panique(s in "[0-9x+*/^().,a-z @-]{0,30}", x in any::<f64>()) {
        // Ok ou Err, jamais de panique ; et une expression compilée s’évalue toujours.
        if let Ok(e) = compile(&s) {
            prop_assert!(e.evaluate(x).is_ok(), "s={s:?}");
        }
    }

    #[test]
    fn fuzz_unicode_sans_panique(s in "\\PC{0,24}") {
        let _ = compile(&s);
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

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let expr = somme_balancee("0.5", 800);
    let v = evaluate_once(&expr).unwrap_or_else(|e| panic!("err: {e}"));
    budget(t0, max);

    // 800*(1/2) = 400
    assert_eq!(v, 400.0);
}

#[test]
fn fuzz_safe_longue_chaine_gauche() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // 1-1-1-…-1 (10 000 termes) : pile RPN plate, pas de récursion
    let expr = vec!["1"; 10_000].join("-");
    let v = evaluate_once(&expr).unwrap_or_else(|e| panic!("err: {e}"));
    budget(t0, max);

    assert_eq!(v, 1.0 - 9_999.0);
}

#[test]
fn fuzz_safe_echantillonnage_dense() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let e = compile("sin(x)*x^2 - ctg(x)").unwrap();
    let pts = e.sample(-10.0, 10.0, 0.0025);
    budget(t0, max);

    assert_eq!(pts.len(), 8_001);
}
