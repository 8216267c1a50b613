//! Traceur RPN — noyau d’expressions infixes pour tracer des courbes.
//!
//! Deux points d’entrée pour l’appelant (UI, tests) :
//! - `evaluate_once("2+3*4")`           -> nombre
//! - `compile("x^2+1")?.evaluate(3.0)` -> fonction d’une variable réelle
//!
//! ```
//! use traceur_rpn::{compile, evaluate_once};
//!
//! assert_eq!(evaluate_once("(2+3)*4").unwrap(), 20.0);
//!
//! let parabole = compile("x^2+1").unwrap();
//! assert_eq!(parabole.evaluate(3.0).unwrap(), 10.0);
//! ```

pub mod noyau;

pub use noyau::{
    compile, evaluate, evaluate_once, tokenize, to_postfix, CompiledExpression, Demarche, Error,
    EvalError, LexError, OpKind, ParseError, Result, Token, ECHANTILLONS_MAX,
};
