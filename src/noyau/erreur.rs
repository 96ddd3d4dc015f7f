// src/noyau/erreur.rs
//
// Erreurs du noyau : une variante par condition détectée.
// Chaque erreur remonte telle quelle jusqu’à l’appelant de `evaluer` (pas de reprise).

use thiserror::Error;

pub type ResultatCalcul<T> = Result<T, ErreurCalcul>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    #[error("Entrée vide")]
    EntreeVide,

    #[error("nombre de parenthèses ouvrantes et fermantes différent")]
    ParenthesesDesequilibrees,

    #[error("caractère inattendu: '{caractere}' (position {position})")]
    JetonInconnu { caractere: char, position: usize },

    /// `)` sans `(` correspondante sur la pile d’opérateurs (ex: ")(").
    #[error("parenthèse fermante sans parenthèse ouvrante")]
    ParenthesesMalAppariees,

    #[error("fonction sans parenthèse")]
    FonctionSansParenthese,

    #[error("opérateur inconnu: {0}")]
    OperateurInconnu(String),

    #[error("division par zéro")]
    DivisionParZero,

    #[error("opérande en trop")]
    OperandeExcedentaire,

    #[error("opérande manquant")]
    OperandeManquant,

    #[error("nombre invalide: {0:?}")]
    NombreInvalide(String),
}
