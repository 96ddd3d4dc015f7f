// src/noyau/lexeur.rs
//
// Lexeur infixe : texte normalisé -> jetons, un par appel à `next()`.
//
// - + / - : unaire si en tête ou juste après '(' ; binaire sinon
// - * / ( ) : opérateur direct
// - chiffres : suite maximale => Nombre (entiers seulement)
// - autre : JetonInconnu, puis l’itérateur est épuisé
//
// Pas de reprise au milieu : pour relire, construire un nouveau lexeur.

use super::erreur::{ErreurCalcul, ResultatCalcul};
use super::jetons::{Jeton, Op};

pub struct LexeurInfixe {
    chars: Vec<char>,
    pos: usize,
    fini: bool,
}

impl LexeurInfixe {
    pub fn new(texte: &str) -> Self {
        Self {
            chars: texte.chars().collect(),
            pos: 0,
            fini: false,
        }
    }

    fn signe(&self, binaire: Op, unaire: Op) -> Op {
        let est_unaire = self.pos == 0 || self.chars[self.pos - 1] == '(';
        if est_unaire {
            unaire
        } else {
            binaire
        }
    }

    fn jeton_suivant(&mut self) -> ResultatCalcul<Jeton> {
        let c = self.chars[self.pos];

        let op = match c {
            '+' => Some(self.signe(Op::Plus, Op::PlusUnaire)),
            '-' => Some(self.signe(Op::Moins, Op::MoinsUnaire)),
            '*' => Some(Op::Fois),
            '/' => Some(Op::Divise),
            '(' => Some(Op::ParGauche),
            ')' => Some(Op::ParDroite),
            _ => None,
        };
        if let Some(op) = op {
            self.pos += 1;
            return Ok(Jeton::Operateur(op));
        }

        if c.is_ascii_digit() {
            let start = self.pos;
            while self.pos < self.chars.len() && self.chars[self.pos].is_ascii_digit() {
                self.pos += 1;
            }
            let chiffres: String = self.chars[start..self.pos].iter().collect();
            return Ok(Jeton::Nombre(chiffres));
        }

        Err(ErreurCalcul::JetonInconnu {
            caractere: c,
            position: self.pos,
        })
    }
}

impl Iterator for LexeurInfixe {
    type Item = ResultatCalcul<Jeton>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.fini || self.pos >= self.chars.len() {
            return None;
        }
        let res = self.jeton_suivant();
        if res.is_err() {
            self.fini = true;
        }
        Some(res)
    }
}
