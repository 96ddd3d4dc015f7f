// src/noyau/normalisation.rs
//
// Pré-traitement : retire les blancs et vérifie l’équilibre des parenthèses.
// NOTE: ")(" passe ce contrôle (compte nul) ; c’est rpn.rs qui le rejette.

use super::erreur::{ErreurCalcul, ResultatCalcul};

pub fn normaliser(texte: &str) -> ResultatCalcul<String> {
    if texte.is_empty() {
        return Err(ErreurCalcul::EntreeVide);
    }

    let mut out = String::with_capacity(texte.len());
    let mut equilibre: i64 = 0;

    for c in texte.chars() {
        match c {
            '(' => equilibre += 1,
            ')' => equilibre -= 1,
            _ => {}
        }
        if !c.is_whitespace() {
            out.push(c);
        }
    }

    if equilibre != 0 {
        return Err(ErreurCalcul::ParenthesesDesequilibrees);
    }
    if out.is_empty() {
        // que des blancs
        return Err(ErreurCalcul::EntreeVide);
    }

    Ok(out)
}
