//! Noyau — évaluation (pipeline réel)
//!
//! nettoyage -> balayage unique (pile de termes, curseur explicite) -> Σ
//!
//! Remarque : evaluer() ne refuse pas le vide lui-même (contrat : la couche
//! appelante garantit une entrée non vide) ; le refus "Entrée vide" vit dans
//! eval_expression, côté pipeline.

use super::balayage::{balayer, nettoyer};
use super::erreur::ErreurEval;

#[derive(Default, Clone, Debug)]
pub struct DemarcheNoyau {
    pub nettoye: String,
    pub termes: String,
    pub note: String,
}

/// API publique : évalue une expression entière.
///
/// - priorités complètes (× ÷ avant + -), associativité gauche, parenthèses
/// - blancs ignorés partout
/// - division entière tronquée vers zéro
/// - pur et sans état entre appels : réutilisable, sûr en concurrence
pub fn evaluer(expression: &str) -> Result<i64, ErreurEval> {
    let chars = nettoyer(expression);
    let (termes, _reprise) = balayer(&chars, 0, 0)?;
    Ok(termes.iter().sum())
}

/// Pipeline complet : refus du vide + évaluation + démarche.
///
/// Retourne le résultat et la démarche (entrée nettoyée, termes additifs du
/// niveau racine, note de pipeline) pour le panneau d'explication.
pub fn eval_expression(expression: &str) -> Result<(i64, DemarcheNoyau), ErreurEval> {
    let s = expression.trim();
    if s.is_empty() {
        return Err(ErreurEval::EntreeVide);
    }

    let chars = nettoyer(s);
    let (termes, _reprise) = balayer(&chars, 0, 0)?;
    let somme: i64 = termes.iter().sum();

    let d = DemarcheNoyau {
        nettoye: chars.iter().collect(),
        termes: format_termes(&termes),
        note: "Pipeline: nettoyage → balayage unique (termes additifs empilés, × et ÷ résolus au vol) → Σ.".into(),
    };

    Ok((somme, d))
}

/// Format utilitaire (démarche) : termes additifs signés, ex: "+1 +6 -4".
pub fn format_termes(termes: &[i64]) -> String {
    if termes.is_empty() {
        return "(aucun)".to_string();
    }

    let mut out = Vec::new();
    for t in termes {
        if *t < 0 {
            out.push(format!("{t}"));
        } else {
            out.push(format!("+{t}"));
        }
    }
    out.join(" ")
}
