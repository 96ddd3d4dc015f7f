//! Propriétés attendues du pipeline complet (entrée texte -> f64 ou erreur).

use super::{evaluer, ErreurCalcul};

fn eval_ok(expr: &str) -> f64 {
    evaluer(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_erreur(expr: &str, attendue: ErreurCalcul) {
    assert_eq!(evaluer(expr), Err(attendue), "expr={expr:?}");
}

/* ------------------------ Valeurs ------------------------ */

#[test]
fn prop_priorite() {
    assert_eq!(eval_ok("3+4*2"), 11.0);
}

#[test]
fn prop_groupement_meme_priorite() {
    assert_eq!(eval_ok("10/2-3"), 2.0);
}

#[test]
fn prop_parentheses_prioritaires() {
    assert_eq!(eval_ok("(3+4)*2"), 14.0);
}

#[test]
fn prop_signe_unaire() {
    assert_eq!(eval_ok("-5+3"), -2.0);
    assert_eq!(eval_ok("(-2+3)*4"), 4.0);
}

#[test]
fn prop_nombres_multi_chiffres() {
    assert_eq!(eval_ok("12+8"), 20.0);
    assert_eq!(eval_ok("1000000*1000000"), 1e12);
}

#[test]
fn prop_blancs_ignores() {
    assert_eq!(eval_ok("  ( 3 +\t4 )\n* 2 "), 14.0);
    // des blancs au milieu d’un nombre le coupent avant le lexeur : "1 2" == "12"
    assert_eq!(eval_ok("1 2+8"), 20.0);
}

#[test]
fn prop_idempotence() {
    for expr in ["3+4*2", "(1+2)/(3+4)", "-(7)", "1/3"] {
        assert_eq!(evaluer(expr), evaluer(expr), "expr={expr:?}");
    }
}

#[test]
fn prop_resultat_fini() {
    for expr in ["1/3", "(((1)))", "99999999*99999999", "-(2-(3-(4-5)))"] {
        assert!(eval_ok(expr).is_finite(), "expr={expr:?}");
    }
}

/* ------------------------ Erreurs ------------------------ */

#[test]
fn prop_division_par_zero() {
    assert_erreur("1/0", ErreurCalcul::DivisionParZero);
}

#[test]
fn prop_parentheses_desequilibrees() {
    assert_erreur("(1+2", ErreurCalcul::ParenthesesDesequilibrees);
}

#[test]
fn prop_entree_vide() {
    assert_erreur("", ErreurCalcul::EntreeVide);
    assert_erreur(" \t ", ErreurCalcul::EntreeVide);
}

#[test]
fn prop_caractere_inconnu() {
    assert_erreur(
        "2^3",
        ErreurCalcul::JetonInconnu {
            caractere: '^',
            position: 1,
        },
    );
    // la position est celle du texte normalisé
    assert_erreur(
        "1 + x",
        ErreurCalcul::JetonInconnu {
            caractere: 'x',
            position: 2,
        },
    );
}

#[test]
fn prop_parenthese_fermante_en_tete() {
    assert_erreur(")1(", ErreurCalcul::ParenthesesMalAppariees);
}

#[test]
fn prop_operande_en_trop() {
    assert_erreur("(1)(2)", ErreurCalcul::OperandeExcedentaire);
}

#[test]
fn prop_operande_manquant() {
    assert_erreur("1+", ErreurCalcul::OperandeManquant);
    assert_erreur("*2", ErreurCalcul::OperandeManquant);
}

#[test]
fn prop_messages_lisibles() {
    assert_eq!(ErreurCalcul::DivisionParZero.to_string(), "division par zéro");
    assert_eq!(ErreurCalcul::EntreeVide.to_string(), "Entrée vide");
}
