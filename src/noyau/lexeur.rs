// src/noyau/lexeur.rs
//
// Lexeur : chaîne -> suite de jetons (ordre source).
//
// Règles :
// - chiffres et '.' s’accumulent dans un tampon “nombre en attente”,
//   vidé (parse f64, point décimal invariant) dès qu’autre chose arrive
// - opérateurs + - * / ^ et parenthèses ( )
// - ',' sépare les arguments d’une fonction binaire : émis comme ") ("
// - fonctions sqrt sin cos log ctg tg rt (insensible à la casse),
//   testées AVANT la variable x au même caractère
// - espaces ignorés

use super::erreur::LexError;
use super::jetons::{OpKind, Token, FONCTIONS, SYMBOLE_VARIABLE};

/// Tokenize une expression infixe.
pub fn tokenize(s: &str) -> Result<Vec<Token>, LexError> {
    let chars: Vec<char> = s.chars().collect();
    let mut out = Vec::new();

    // tampon nombre + position de son premier caractère
    let mut nombre = String::new();
    let mut debut_nombre = 0usize;

    let mut i = 0usize;
    while i < chars.len() {
        let c = chars[i];

        if c.is_ascii_digit() || c == '.' {
            if nombre.is_empty() {
                debut_nombre = i;
            }
            nombre.push(c);
            i += 1;
            continue;
        }

        vider_nombre(&mut nombre, debut_nombre, &mut out)?;

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        match c {
            '(' => {
                out.push(Token::LPar);
                i += 1;
                continue;
            }
            ')' => {
                out.push(Token::RPar);
                i += 1;
                continue;
            }
            ',' => {
                // ferme l’argument courant, ouvre le suivant
                out.push(Token::RPar);
                out.push(Token::LPar);
                i += 1;
                continue;
            }
            _ => {}
        }

        if let Some(op) = OpKind::from_symbol(c) {
            out.push(Token::Op(op));
            i += 1;
            continue;
        }

        if let Some((nom, op)) = fonction_en(&chars, i) {
            out.push(Token::Op(op));
            i += nom.len();
            continue;
        }

        if c.to_ascii_lowercase() == SYMBOLE_VARIABLE {
            out.push(Token::Var);
            i += 1;
            continue;
        }

        return Err(LexError::CaractereInattendu { car: c, pos: i });
    }

    vider_nombre(&mut nombre, debut_nombre, &mut out)?;

    Ok(out)
}

/// Fonction nommée commençant à la position `i` (insensible à la casse).
fn fonction_en(chars: &[char], i: usize) -> Option<(&'static str, OpKind)> {
    FONCTIONS.iter().copied().find(|(nom, _)| {
        chars.get(i..i + nom.len()).is_some_and(|morceau| {
            morceau
                .iter()
                .zip(nom.chars())
                .all(|(a, b)| a.to_ascii_lowercase() == b)
        })
    })
}

fn vider_nombre(nombre: &mut String, pos: usize, out: &mut Vec<Token>) -> Result<(), LexError> {
    if nombre.is_empty() {
        return Ok(());
    }

    let v = nombre
        .parse::<f64>()
        .map_err(|_| LexError::NombreInvalide {
            texte: nombre.clone(),
            pos,
        })?;

    out.push(Token::Num(v));
    nombre.clear();
    Ok(())
}
