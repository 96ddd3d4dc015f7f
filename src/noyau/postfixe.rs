// src/noyau/postfixe.rs
//
// Lexeur postfixe : re-découpe la sortie de rpn.rs.
// Un jeton = un marqueur + tout ce qui suit jusqu’au prochain marqueur (ou la fin).

use super::erreur::{ErreurCalcul, ResultatCalcul};
use super::jetons::{
    est_marqueur, Jeton, Op, MARQUEUR_FONCTION, MARQUEUR_NOMBRE, MARQUEUR_OPERATEUR,
};

pub struct LexeurPostfixe<'a> {
    texte: &'a str,
    pos: usize,
    fini: bool,
}

impl<'a> LexeurPostfixe<'a> {
    pub fn new(texte: &'a str) -> Self {
        Self {
            texte,
            pos: 0,
            fini: false,
        }
    }

    fn jeton_suivant(&mut self) -> Option<ResultatCalcul<Jeton>> {
        let reste = &self.texte[self.pos..];
        let mut it = reste.char_indices();
        let (_, marqueur) = it.next()?;

        let fin = it
            .find(|(_, c)| est_marqueur(*c))
            .map(|(i, _)| i)
            .unwrap_or(reste.len());
        let charge = &reste[marqueur.len_utf8()..fin];
        let position = self.pos;
        self.pos += fin;

        let res = match marqueur {
            MARQUEUR_NOMBRE => Ok(Jeton::Nombre(charge.to_string())),
            MARQUEUR_OPERATEUR => Op::depuis_code(charge)
                .map(Jeton::Operateur)
                .ok_or_else(|| ErreurCalcul::OperateurInconnu(charge.to_string())),
            MARQUEUR_FONCTION => Ok(Jeton::Fonction(charge.to_string())),
            autre => Err(ErreurCalcul::JetonInconnu {
                caractere: autre,
                position,
            }),
        };
        Some(res)
    }
}

impl Iterator for LexeurPostfixe<'_> {
    type Item = ResultatCalcul<Jeton>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.fini {
            return None;
        }
        let res = self.jeton_suivant()?;
        if res.is_err() {
            self.fini = true;
        }
        Some(res)
    }
}
