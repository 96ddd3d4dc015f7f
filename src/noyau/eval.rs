//! Noyau — évaluation (pipeline réel)
//!
//! texte -> normaliser -> LexeurInfixe ⇄ vers_postfixe -> postfixe
//!       -> LexeurPostfixe ⇄ pile d’opérandes -> f64
//!
//! Chaque appel crée ses propres piles ; rien ne survit entre deux appels.

use num_traits::{Num, Zero};

use super::erreur::{ErreurCalcul, ResultatCalcul};
use super::jetons::{format_jetons, Jeton, Op};
use super::lexeur::LexeurInfixe;
use super::normalisation::normaliser;
use super::postfixe::LexeurPostfixe;
use super::rpn::vers_postfixe;

#[derive(Default, Clone, Debug)]
pub struct Demarche {
    pub normalise: String,
    pub jetons: String,
    pub postfixe: String,
}

/// API publique : évalue une expression infixe.
pub fn evaluer(expression: &str) -> ResultatCalcul<f64> {
    let normalise = normaliser(expression)?;
    log::debug!("normalisé: {normalise:?}");

    let postfixe = vers_postfixe(LexeurInfixe::new(&normalise))?;
    log::debug!("postfixe: {postfixe:?}");

    let valeur = evaluer_postfixe(&postfixe)?;
    log::debug!("résultat: {valeur}");
    Ok(valeur)
}

/// Même pipeline que `evaluer`, en gardant les étapes intermédiaires (affichage).
pub fn evaluer_avec_demarche(expression: &str) -> ResultatCalcul<(f64, Demarche)> {
    let normalise = normaliser(expression)?;

    // on garde une copie des jetons au passage, sans casser le flux lexeur -> rpn
    let mut vus: Vec<Jeton> = Vec::new();
    let flux = LexeurInfixe::new(&normalise).inspect(|j| {
        if let Ok(j) = j {
            vus.push(j.clone());
        }
    });
    let postfixe = vers_postfixe(flux)?;

    let valeur = evaluer_postfixe(&postfixe)?;
    log::debug!("{normalise:?} -> {postfixe:?} -> {valeur}");

    let d = Demarche {
        normalise,
        jetons: format_jetons(&vus),
        postfixe,
    };
    Ok((valeur, d))
}

/// Machine à pile sur la forme postfixe produite par `vers_postfixe`.
pub fn evaluer_postfixe(postfixe: &str) -> ResultatCalcul<f64> {
    let mut pile: Vec<f64> = Vec::new();

    for jeton in LexeurPostfixe::new(postfixe) {
        match jeton? {
            Jeton::Nombre(chiffres) => pile.push(lire_nombre(&chiffres)?),
            Jeton::Operateur(op) => applique(op, &mut pile)?,
            // aucune table de fonctions pour l’instant
            Jeton::Fonction(nom) => return Err(ErreurCalcul::OperateurInconnu(nom)),
        }
    }

    if pile.len() > 1 {
        return Err(ErreurCalcul::OperandeExcedentaire);
    }
    pile.pop().ok_or(ErreurCalcul::OperandeManquant)
}

/// Lecture en base 10 fixe : chiffres ASCII uniquement, indépendante de la locale.
fn lire_nombre(chiffres: &str) -> ResultatCalcul<f64> {
    if chiffres.is_empty() || !chiffres.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ErreurCalcul::NombreInvalide(chiffres.to_string()));
    }
    <f64 as Num>::from_str_radix(chiffres, 10)
        .map_err(|_| ErreurCalcul::NombreInvalide(chiffres.to_string()))
}

fn depile(pile: &mut Vec<f64>) -> ResultatCalcul<f64> {
    pile.pop().ok_or(ErreurCalcul::OperandeManquant)
}

fn applique(op: Op, pile: &mut Vec<f64>) -> ResultatCalcul<()> {
    let inconnu = || ErreurCalcul::OperateurInconnu(op.code().to_string());

    let res = match op.arite() {
        1 => {
            let a = depile(pile)?;
            match op {
                Op::PlusUnaire => a,
                Op::MoinsUnaire => -a,
                _ => return Err(inconnu()),
            }
        }
        2 => {
            // le second opérande est au sommet
            let arg2 = depile(pile)?;
            let arg1 = depile(pile)?;
            match op {
                Op::Plus => arg1 + arg2,
                Op::Moins => arg1 - arg2,
                Op::Fois => arg1 * arg2,
                Op::Divise => {
                    if arg2.is_zero() {
                        return Err(ErreurCalcul::DivisionParZero);
                    }
                    arg1 / arg2
                }
                _ => return Err(inconnu()),
            }
        }
        _ => return Err(inconnu()),
    };

    pile.push(res);
    Ok(())
}
