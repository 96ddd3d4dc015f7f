//! Noyau RPN
//!
//! Organisation interne :
//! - erreur.rs        : erreurs typées du pipeline
//! - jetons.rs        : jetons + table des opérateurs (priorité, associativité, arité)
//! - normalisation.rs : blancs retirés + équilibre des parenthèses
//! - lexeur.rs        : lexeur infixe (itérateur de jetons)
//! - rpn.rs           : shunting-yard -> forme postfixe
//! - postfixe.rs      : relecture de la forme postfixe
//! - eval.rs          : machine à pile + pipeline complet
//! - format.rs        : affichage du résultat

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod lexeur;
pub mod normalisation;
pub mod postfixe;
pub mod rpn;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::{ErreurCalcul, ResultatCalcul};
pub use eval::{evaluer, evaluer_avec_demarche, Demarche};
pub use format::format_resultat;
