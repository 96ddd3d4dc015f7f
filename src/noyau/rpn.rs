// src/noyau/rpn.rs
//
// Shunting-yard : jetons infixes -> forme postfixe sérialisée (voir jetons.rs).
//
// Règles:
// - Nombre : sortie directe
// - Fonction, '(' : empilés
// - ')' : dépile jusqu’à '(' (jetée) ; si une fonction est alors au sommet,
//   elle sort aussi (elle reste collée à son argument)
// - autre opérateur : dépile tant que le sommet l’exige (priorité + associativité
//   de l’opérateur entrant), puis empile
// - fin : tout ce qui reste sort ; une fonction orpheline est une erreur

use super::erreur::{ErreurCalcul, ResultatCalcul};
use super::jetons::{Associativite, Jeton, Op};

/// Vrai si `sommet` doit sortir avant d’empiler `entrant`.
///
/// Entrant associatif à gauche : sommet >= entrant.
/// Entrant associatif à droite : sommet > entrant.
fn doit_depiler(sommet: Op, entrant: Op) -> bool {
    if sommet == Op::ParGauche {
        return false;
    }
    let (Some(p_sommet), Some(p_entrant)) = (sommet.priorite(), entrant.priorite()) else {
        return false;
    };
    match entrant.associativite() {
        Associativite::Gauche => p_sommet >= p_entrant,
        Associativite::Droite => p_sommet > p_entrant,
    }
}

/// Consomme un flux de jetons (typiquement un `LexeurInfixe`) et produit la
/// forme postfixe. Une erreur du flux interrompt la conversion telle quelle.
pub fn vers_postfixe<I>(jetons: I) -> ResultatCalcul<String>
where
    I: IntoIterator<Item = ResultatCalcul<Jeton>>,
{
    let mut out = String::new();
    let mut ops: Vec<Jeton> = Vec::new();

    for jeton in jetons {
        let jeton = jeton?;
        log::trace!("rpn: jeton {jeton:?}, pile {ops:?}");

        match jeton {
            Jeton::Nombre(_) => jeton.ecrire_postfixe(&mut out),

            Jeton::Fonction(_) | Jeton::Operateur(Op::ParGauche) => ops.push(jeton),

            Jeton::Operateur(Op::ParDroite) => {
                // dépile jusqu’à '('
                loop {
                    match ops.pop() {
                        Some(Jeton::Operateur(Op::ParGauche)) => break,
                        Some(sommet) => sommet.ecrire_postfixe(&mut out),
                        None => return Err(ErreurCalcul::ParenthesesMalAppariees),
                    }
                }

                // appel de fonction : la fonction sort juste après son argument
                if let Some(Jeton::Fonction(_)) = ops.last() {
                    if let Some(f) = ops.pop() {
                        f.ecrire_postfixe(&mut out);
                    }
                }
            }

            Jeton::Operateur(entrant) => {
                while let Some(Jeton::Operateur(sommet)) = ops.last() {
                    let sommet = *sommet;
                    if !doit_depiler(sommet, entrant) {
                        break;
                    }
                    ops.pop();
                    Jeton::Operateur(sommet).ecrire_postfixe(&mut out);
                }
                ops.push(jeton);
            }
        }
    }

    // vide la pile ops
    while let Some(reste) = ops.pop() {
        match reste {
            Jeton::Fonction(_) => return Err(ErreurCalcul::FonctionSansParenthese),
            Jeton::Operateur(Op::ParGauche) => return Err(ErreurCalcul::ParenthesesMalAppariees),
            _ => reste.ecrire_postfixe(&mut out),
        }
    }

    Ok(out)
}
