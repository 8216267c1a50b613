// src/noyau/rpn.rs
//
// Shunting-yard : suite de jetons infixe -> RPN (postfix)
//
// Règles:
// - Num / Var : sortie directe
// - LPar      : empilée
// - RPar      : dépile vers la sortie jusqu’à LPar (jetée) ; pile vide => ParseError
// - Op t      : dépile tant que le sommet est un Op de priorité >= priorité(t), puis empile t
//               (fonctions et opérateurs traités pareil, par priorité seule)
// - fin       : dépile tout ; une LPar restante => ParseError
//
// Associativité : à priorité égale on dépile toujours, donc gauche -> droite,
// y compris pour '^' : "2^3^2" = (2^3)^2 = 64.
//
// Moins unaire:
// - un '-' en position préfixe (début d’expression ou juste après '(') reçoit un 0 :
//   "-5+3" => "0 5 - 3 +"
// - ailleurs ("2*-3") il reste binaire et la pile manquera d’opérandes (EvalError).

use super::erreur::ParseError;
use super::jetons::{OpKind, Token};

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Op(Sin), LPar, Var, RPar, Op(Star), Num(2)]
///   rpn:    [Var, Op(Sin), Num(2), Op(Star)]
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>, ParseError> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Token> = Vec::new();

    // Sert à détecter le moins unaire.
    let mut prefixe = true;

    for &tok in tokens {
        match tok {
            Token::Num(_) | Token::Var => {
                out.push(tok);
                prefixe = false;
            }

            Token::LPar => {
                ops.push(tok);
                prefixe = true;
            }

            Token::RPar => {
                loop {
                    match ops.pop() {
                        Some(Token::LPar) => break,
                        Some(top) => out.push(top),
                        None => return Err(ParseError::ParentheseFermanteOrpheline),
                    }
                }
                prefixe = false;
            }

            Token::Op(op) => {
                if prefixe && op == OpKind::Minus {
                    out.push(Token::Num(0.0));
                }

                // LPar (priorité 0) arrête toujours le dépilement
                while let Some(&top) = ops.last() {
                    if top.priority() < op.priority() {
                        break;
                    }
                    ops.pop();
                    out.push(top);
                }

                ops.push(tok);
                prefixe = false;
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Token::LPar) {
            return Err(ParseError::ParentheseNonFermee);
        }
        out.push(op);
    }

    Ok(out)
}
