//! Noyau de calcul
//!
//! Organisation interne :
//! - jetons.rs   : tokenisation (nombres, opérateurs, parenthèses)
//! - rpn.rs      : shunting-yard + évaluation de la RPN
//! - eval.rs     : pipeline complet
//! - format.rs   : lignes de diagnostic + affichage du résultat
//! - erreur.rs   : erreurs fatales d’une expression

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;


#[cfg(test)]
mod tests_fuzz_safe;

pub use erreur::ErreurCalcul;
pub use eval::{eval_expression, Calcul};
