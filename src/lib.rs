//! Calculatrice RPN : évaluation d’expressions arithmétiques (+ - * / unaires, parenthèses)
//! par conversion infixe -> postfixe (shunting-yard) puis machine à pile.
//!
//! ```
//! assert_eq!(calculatrice_rpn::evaluer("(3+4)*2"), Ok(14.0));
//! ```

pub mod noyau;

pub use noyau::{evaluer, ErreurCalcul, ResultatCalcul};
