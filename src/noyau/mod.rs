//! Noyau entier Z-pur
//!
//! Organisation interne :
//! - erreur.rs   : taxonomie d'erreurs du noyau
//! - balayage.rs : nettoyage + balayage unique (pile de termes, curseur explicite)
//! - eval.rs     : pipeline complet + démarche

pub mod balayage;
pub mod erreur;
pub mod eval;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use erreur::ErreurEval;
pub use eval::{eval_expression, evaluer, DemarcheNoyau};
