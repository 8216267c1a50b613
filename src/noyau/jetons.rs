// src/noyau/jetons.rs
//
// Modèle de jetons : un seul type somme fermé.
// - Num(f64)  : littéral décimal
// - Var       : la variable libre `x` (sans charge utile)
// - Op(OpKind): opérateur ou fonction nommée (table fixe ci-dessous)
// - LPar/RPar : marqueurs de groupement, jamais émis en RPN
//
// Priorités (shunting-yard) :
//   parenthèses = 0, + - = 1, * / = 2, ^ et fonctions = 3

use std::fmt;

/// Priorité des parenthèses (la plus faible).
pub const PRIORITE_PARENTHESE: u8 = 0;

/// Symbole de l’unique variable libre.
pub const SYMBOLE_VARIABLE: char = 'x';

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token {
    Num(f64),
    Var,
    Op(OpKind),
    LPar,
    RPar,
}

impl Token {
    pub fn priority(&self) -> u8 {
        match self {
            Token::Op(op) => op.priority(),
            _ => PRIORITE_PARENTHESE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpKind {
    Plus,
    Minus,
    Star,
    Slash,
    Caret,

    Sin,
    Cos,
    Tg,
    Ctg,
    Sqrt,
    Log,
    Rt,
}

/// Règle d’évaluation d’un opérateur, selon son arité.
///
/// Pour `Binaire(f)`, on calcule `f(a, b)` où `a` est le premier opérande
/// dans l’ordre source (donc le second dépilé).
#[derive(Clone, Copy)]
pub enum Application {
    Unaire(fn(f64) -> f64),
    Binaire(fn(f64, f64) -> f64),
}

/// Fonctions nommées reconnues par le lexeur.
/// Ordre = plus long d’abord, et `ctg` avant `tg`.
pub const FONCTIONS: [(&str, OpKind); 7] = [
    ("sqrt", OpKind::Sqrt),
    ("sin", OpKind::Sin),
    ("cos", OpKind::Cos),
    ("log", OpKind::Log),
    ("ctg", OpKind::Ctg),
    ("tg", OpKind::Tg),
    ("rt", OpKind::Rt),
];

impl OpKind {
    /// Opérateur à un caractère (`+ - * / ^`).
    pub fn from_symbol(c: char) -> Option<OpKind> {
        match c {
            '+' => Some(OpKind::Plus),
            '-' => Some(OpKind::Minus),
            '*' => Some(OpKind::Star),
            '/' => Some(OpKind::Slash),
            '^' => Some(OpKind::Caret),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            OpKind::Plus => "+",
            OpKind::Minus => "-",
            OpKind::Star => "*",
            OpKind::Slash => "/",
            OpKind::Caret => "^",
            OpKind::Sin => "sin",
            OpKind::Cos => "cos",
            OpKind::Tg => "tg",
            OpKind::Ctg => "ctg",
            OpKind::Sqrt => "sqrt",
            OpKind::Log => "log",
            OpKind::Rt => "rt",
        }
    }

    pub fn priority(self) -> u8 {
        match self {
            OpKind::Plus | OpKind::Minus => 1,
            OpKind::Star | OpKind::Slash => 2,
            _ => 3,
        }
    }

    pub fn is_function(self) -> bool {
        !matches!(
            self,
            OpKind::Plus | OpKind::Minus | OpKind::Star | OpKind::Slash | OpKind::Caret
        )
    }

    /// Nombre d’opérandes consommées sur la pile d’évaluation.
    pub fn arity(self) -> usize {
        match self.application() {
            Application::Unaire(_) => 1,
            Application::Binaire(_) => 2,
        }
    }

    pub fn application(self) -> Application {
        use Application::{Binaire, Unaire};

        match self {
            OpKind::Plus => Binaire(|a, b| a + b),
            OpKind::Minus => Binaire(|a, b| a - b),
            OpKind::Star => Binaire(|a, b| a * b),
            OpKind::Slash => Binaire(|a, b| a / b),
            OpKind::Caret => Binaire(f64::powf),
            // log base a de b
            OpKind::Log => Binaire(|a, b| b.log(a)),
            // racine a-ième de b
            OpKind::Rt => Binaire(|a, b| b.powf(1.0 / a)),

            OpKind::Sin => Unaire(f64::sin),
            OpKind::Cos => Unaire(f64::cos),
            OpKind::Tg => Unaire(f64::tan),
            OpKind::Ctg => Unaire(|v| 1.0 / v.tan()),
            OpKind::Sqrt => Unaire(f64::sqrt),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Num(v) => write!(f, "{v}"),
            Token::Var => write!(f, "{SYMBOLE_VARIABLE}"),
            Token::Op(op) => f.write_str(op.name()),
            Token::LPar => f.write_str("("),
            Token::RPar => f.write_str(")"),
        }
    }
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
