// src/noyau/erreur.rs
//
// Taxonomie d’erreurs du noyau : une famille par étape du pipeline.
// - LexError   : jetons (caractère inconnu, nombre mal formé)
// - ParseError : parenthèses (shunting-yard)
// - EvalError  : forme de la pile RPN (arité, résidu)
//
// Les valeurs spéciales IEEE-754 (inf, NaN) ne sont PAS des erreurs.

use thiserror::Error;

/// Erreur de tokenisation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("caractère inattendu: '{car}' (position {pos})")]
    CaractereInattendu { car: char, pos: usize },

    #[error("nombre invalide: \"{texte}\" (position {pos})")]
    NombreInvalide { texte: String, pos: usize },
}

/// Erreur de conversion infixe -> RPN.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// `)` (ou `,`) sans `(` correspondante sur la pile.
    #[error("parenthèse fermante sans ouvrante")]
    ParentheseFermanteOrpheline,

    #[error("parenthèses non fermées")]
    ParentheseNonFermee,
}

/// Erreur d’évaluation de la RPN.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("opérandes manquantes pour '{op}': {attendu} attendue(s), {dispo} disponible(s)")]
    OperandesManquantes {
        op: &'static str,
        attendu: usize,
        dispo: usize,
    },

    /// La pile doit contenir exactement une valeur à la fin.
    #[error("expression invalide: {restant} valeur(s) sur la pile au lieu d’une")]
    PileInvalide { restant: usize },

    #[error("parenthèse inattendue en RPN")]
    ParentheseEnRpn,
}

/// Erreur d’ensemble (compile / evaluate_once).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}

pub type Result<T> = std::result::Result<T, Error>;
