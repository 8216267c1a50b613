//! Noyau d’évaluation (réels f64, une variable `x`)
//!
//! Organisation interne :
//! - jetons.rs   : modèle de jetons (type somme fermé) + table des opérateurs
//! - lexeur.rs   : tokenisation
//! - rpn.rs      : shunting-yard (infixe -> postfix)
//! - eval.rs     : évaluation par pile + expression compilée
//! - erreur.rs   : LexError / ParseError / EvalError

pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod lexeur;
pub mod rpn;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::{Error, EvalError, LexError, ParseError, Result};
pub use eval::{compile, evaluate, evaluate_once, CompiledExpression, Demarche, ECHANTILLONS_MAX};
pub use jetons::{OpKind, Token};
pub use lexeur::tokenize;
pub use rpn::to_postfix;
