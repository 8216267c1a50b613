//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN -> contrôle de forme (une seule fois, à la compilation)
//!          -> évaluation par pile (autant de fois qu’on veut, pour x = v)
//!
//! Remarque : les valeurs IEEE-754 spéciales (inf, NaN) circulent telles quelles.
//! `sqrt(-1)` donne NaN, `1/0` donne inf : ce ne sont pas des erreurs.

use tracing::debug;

use super::erreur::{EvalError, Result};
use super::jetons::{format_tokens, Application, OpKind, Token};
use super::lexeur::tokenize;
use super::rpn::to_postfix;

/// Garde-fou : nombre maximal d’échantillons rendus par `sample`.
pub const ECHANTILLONS_MAX: usize = 10_000;

/// Démarche (panneau d’explication) : jetons infixe + RPN, en texte.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

/// Expression compilée : possède sa RPN, immuable après construction.
///
/// Aucune donnée partagée : on peut évaluer depuis plusieurs threads à la fois,
/// chaque appel a sa propre pile.
#[derive(Clone, Debug, PartialEq)]
pub struct CompiledExpression {
    source: String,
    infixe: Vec<Token>,
    postfix: Vec<Token>,
}

/// Compile une expression : jetons -> RPN -> contrôle de forme.
///
/// Les erreurs structurelles sortent ici :
/// - `LexError`   : caractère inconnu, nombre mal formé
/// - `ParseError` : parenthèses
/// - `EvalError`  : opérandes manquantes / pile finale invalide ("2+*3", "")
pub fn compile(source: &str) -> Result<CompiledExpression> {
    let infixe = tokenize(source)?;
    let postfix = to_postfix(&infixe)?;
    verifier_forme(&postfix)?;

    debug!(
        source,
        jetons = infixe.len(),
        rpn = %format_tokens(&postfix),
        "expression compilée"
    );

    Ok(CompiledExpression {
        source: source.to_string(),
        infixe,
        postfix,
    })
}

/// Compile + évalue avec x = 0 (expressions sans variable).
pub fn evaluate_once(source: &str) -> Result<f64> {
    Ok(compile(source)?.evaluate(0.0)?)
}

impl CompiledExpression {
    /// Évalue la RPN avec la variable liée à `x`.
    pub fn evaluate(&self, x: f64) -> std::result::Result<f64, EvalError> {
        evaluate(&self.postfix, x)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Vrai si l’expression référence `x` (=> tracer plutôt qu’afficher un nombre).
    pub fn uses_variable(&self) -> bool {
        self.postfix.iter().any(|t| matches!(t, Token::Var))
    }

    pub fn demarche(&self) -> Demarche {
        Demarche {
            jetons: format_tokens(&self.infixe),
            rpn: format_tokens(&self.postfix),
        }
    }

    /// Fonction d’une variable réelle, prête à échantillonner.
    pub fn as_fn(&self) -> impl Fn(f64) -> f64 + '_ {
        move |x| self.valeur_en(x)
    }

    /// Échantillonne sur `x = debut, debut + pas, …` tant que `x <= fin`.
    ///
    /// Pas nul, négatif ou non fini => aucun échantillon.
    /// Plus de `ECHANTILLONS_MAX` échantillons demandés => aucun échantillon.
    pub fn sample(&self, debut: f64, fin: f64, pas: f64) -> Vec<(f64, f64)> {
        let largeur = fin - debut;
        if !(pas.is_finite() && pas > 0.0 && largeur.is_finite()) || largeur < 0.0 {
            return Vec::new();
        }

        let dernier = (largeur / pas + 1e-9).floor();
        if dernier >= ECHANTILLONS_MAX as f64 {
            return Vec::new();
        }

        // x = debut + i*pas (pas d’accumulation d’erreur d’arrondi)
        (0..=dernier as usize)
            .map(|i| {
                let x = debut + i as f64 * pas;
                (x, self.valeur_en(x))
            })
            .collect()
    }

    /// La forme est vérifiée à la compilation : l’évaluation ne peut plus échouer.
    fn valeur_en(&self, x: f64) -> f64 {
        self.evaluate(x).unwrap_or(f64::NAN)
    }
}

/// Évaluation d’une RPN par pile.
///
/// Binaire : le premier dépilé est le SECOND opérande source (`b`),
/// le second dépilé est le premier (`a`) ; résultat = f(a, b).
pub fn evaluate(postfix: &[Token], x: f64) -> std::result::Result<f64, EvalError> {
    let mut pile: Vec<f64> = Vec::with_capacity(postfix.len());

    for tok in postfix {
        let v = match *tok {
            Token::Num(v) => v,
            Token::Var => x,
            Token::Op(op) => match op.application() {
                Application::Unaire(f) => match pile.pop() {
                    Some(v) => f(v),
                    None => return Err(manquantes(op, 0)),
                },
                Application::Binaire(f) => match (pile.pop(), pile.pop()) {
                    (Some(b), Some(a)) => f(a, b),
                    (b, _) => return Err(manquantes(op, usize::from(b.is_some()))),
                },
            },
            Token::LPar | Token::RPar => return Err(EvalError::ParentheseEnRpn),
        };
        pile.push(v);
    }

    match pile.as_slice() {
        [v] => Ok(*v),
        _ => Err(EvalError::PileInvalide {
            restant: pile.len(),
        }),
    }
}

/// Contrôle de forme de la RPN (profondeur seulement, aucun calcul).
///
/// Mêmes erreurs que `evaluate`, mais détectées une fois pour toutes.
pub fn verifier_forme(postfix: &[Token]) -> std::result::Result<(), EvalError> {
    let mut profondeur = 0usize;

    for tok in postfix {
        match tok {
            Token::Num(_) | Token::Var => profondeur += 1,
            Token::Op(op) => {
                let k = op.arity();
                if profondeur < k {
                    return Err(manquantes(*op, profondeur));
                }
                profondeur = profondeur - k + 1;
            }
            Token::LPar | Token::RPar => return Err(EvalError::ParentheseEnRpn),
        }
    }

    if profondeur != 1 {
        return Err(EvalError::PileInvalide {
            restant: profondeur,
        });
    }
    Ok(())
}

fn manquantes(op: OpKind, dispo: usize) -> EvalError {
    EvalError::OperandesManquantes {
        op: op.name(),
        attendu: op.arity(),
        dispo,
    }
}
