//! Tests de propriétés (campagne) : priorités, associativité, arité, erreurs.
//!
//! Notes importantes (aligné avec l’état actuel du noyau) :
//! - '^' est associatif à GAUCHE (départage par priorité seule) : 2^3^2 = 64.
//! - '-' unaire seulement en tête ou juste après '(' ; "2*-3" est rejeté (EvalError).
//! - "2+*3" est rejeté à la compilation par le contrôle de forme (EvalError).

use approx::assert_abs_diff_eq;

use super::erreur::{Error, EvalError, LexError, ParseError};
use super::eval::{compile, evaluate, evaluate_once};
use super::jetons::{OpKind, Token};

fn eval_ok(expr: &str) -> f64 {
    evaluate_once(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_proche(expr: &str, attendu: f64) {
    assert_abs_diff_eq!(eval_ok(expr), attendu, epsilon = 1e-12);
}

/* ------------------------ Priorités + parenthèses ------------------------ */

#[test]
fn prop_priorites() {
    assert_eq!(eval_ok("2+3*4"), 14.0);
    assert_eq!(eval_ok("(2+3)*4"), 20.0);
    assert_eq!(eval_ok("2*3^2"), 18.0);
    assert_eq!(eval_ok("(2*3)^2"), 36.0);
    assert_eq!(eval_ok("10-4/2"), 8.0);
}

#[test]
fn prop_associativite_gauche() {
    assert_eq!(eval_ok("2-3-4"), -5.0);
    assert_eq!(eval_ok("64/4/2"), 8.0);
    assert_eq!(eval_ok("2-3+4"), 3.0);
}

#[test]
fn prop_puissance_gauche_a_droite() {
    // (2^3)^2, pas 2^(3^2) = 512
    assert_eq!(eval_ok("2^3^2"), 64.0);
    assert_eq!(eval_ok("2^(3^2)"), 512.0);
}

/* ------------------------ Fonctions (arité fixe) ------------------------ */

#[test]
fn prop_fonctions() {
    assert_eq!(eval_ok("sin(0)"), 0.0);
    assert_proche("log(2,8)", 3.0);
    assert_eq!(eval_ok("sqrt(16)"), 4.0);
    assert_proche("rt(2,9)", 3.0);
}

#[test]
fn prop_fonctions_composees() {
    assert_proche("sin(0)+cos(0)*2", 2.0);
    assert_proche("sqrt(sqrt(16))", 2.0);
    assert_proche("log(2, rt(2, 16))", 2.0);
    assert_proche("2*sqrt(9)+1", 7.0);
}

#[test]
fn prop_fonction_apres_puissance_rejetee() {
    // départage par priorité seule : '^' sort avant l’argument de sqrt
    assert!(matches!(
        compile("2^sqrt(4)"),
        Err(Error::Eval(EvalError::OperandesManquantes { op: "^", .. }))
    ));
    // avec parenthèses, c’est correct
    assert_proche("2^(sqrt(4))", 4.0);
}

/* ------------------------ Variable ------------------------ */

#[test]
fn prop_substitution_variable() {
    let e = compile("x^2+1").unwrap();
    assert_eq!(e.evaluate(3.0), Ok(10.0));
    assert_eq!(e.evaluate(0.0), Ok(1.0));

    let e = compile("sin(x)").unwrap();
    assert_abs_diff_eq!(
        e.evaluate(std::f64::consts::FRAC_PI_2).unwrap(),
        1.0,
        epsilon = 1e-12
    );
}

#[test]
fn prop_evaluation_repetable() {
    let e = compile("x*x-2*x+1").unwrap();
    for i in -5..=5 {
        let x = i as f64;
        assert_eq!(e.evaluate(x), Ok((x - 1.0) * (x - 1.0)));
        // même entrée => même sortie
        assert_eq!(e.evaluate(x), e.evaluate(x));
    }
}

/* ------------------------ Moins unaire ------------------------ */

#[test]
fn prop_moins_unaire() {
    assert_eq!(eval_ok("-5+3"), -2.0);
    assert_eq!(eval_ok("-2^2"), -4.0);
    assert_eq!(eval_ok("(-2)^2"), 4.0);
    assert_eq!(eval_ok("3*(-2)"), -6.0);
    assert_eq!(compile("-x").unwrap().evaluate(7.0), Ok(-7.0));
}

#[test]
fn prop_moins_apres_operateur_rejete() {
    assert!(matches!(
        compile("2*-3"),
        Err(Error::Eval(EvalError::OperandesManquantes { .. }))
    ));
}

/* ------------------------ Erreurs (bonne famille) ------------------------ */

#[test]
fn prop_familles_erreurs() {
    assert!(matches!(compile("(2+3"), Err(Error::Parse(_))));
    assert!(matches!(compile("2+*3"), Err(Error::Eval(_))));
    assert!(matches!(compile("2+@3"), Err(Error::Lex(_))));
}

#[test]
fn prop_erreurs_detaillees() {
    assert_eq!(
        compile("(2+3"),
        Err(Error::Parse(ParseError::ParentheseNonFermee))
    );
    assert_eq!(
        compile(")1+2("),
        Err(Error::Parse(ParseError::ParentheseFermanteOrpheline))
    );
    assert_eq!(
        compile("2+@3"),
        Err(Error::Lex(LexError::CaractereInattendu { car: '@', pos: 2 }))
    );
    assert_eq!(
        evaluate_once("1..5"),
        Err(Error::Lex(LexError::NombreInvalide {
            texte: "1..5".into(),
            pos: 0
        }))
    );
}

#[test]
fn prop_sous_depassement_rpn_manuelle() {
    // opérateur binaire précédé d’une seule opérande
    let rpn = [Token::Num(3.0), Token::Op(OpKind::Star)];
    assert!(matches!(
        evaluate(&rpn, 0.0),
        Err(EvalError::OperandesManquantes { attendu: 2, dispo: 1, .. })
    ));
}

#[test]
fn prop_messages_lisibles() {
    let e = compile("(1").unwrap_err();
    assert_eq!(e.to_string(), "parenthèses non fermées");

    let e = compile("1+#").unwrap_err();
    assert_eq!(e.to_string(), "caractère inattendu: '#' (position 2)");
}
