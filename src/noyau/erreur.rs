// src/noyau/erreur.rs
//
// Erreurs du noyau Z-pur.
// - EntreeVide         : refusée au niveau pipeline (eval_expression),
//                        jamais par evaluer() — contrat : la couche appelante
//                        garantit une entrée non vide
// - CaractereInvalide  : abandon immédiat du balayage, aucun résultat partiel
// - DivisionParZero    : choix explicite (pas de panique i64)
// - TropProfond        : borne d'imbrication des parenthèses

use thiserror::Error;

use super::balayage::PROFONDEUR_MAX;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurEval {
    #[error("Entrée vide")]
    EntreeVide,

    #[error("caractère inattendu: '{0}'")]
    CaractereInvalide(char),

    #[error("division par zéro")]
    DivisionParZero,

    #[error("parenthèses trop profondes (max {})", PROFONDEUR_MAX)]
    TropProfond,
}
