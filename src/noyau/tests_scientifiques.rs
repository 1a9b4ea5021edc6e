//! Tests scientifiques (campagne) : invariants + robustesse + limites contrôlées.
//!
//! But : trouver les limites sans faire chauffer la machine.
//! - budget temps global
//! - tailles bornées (profondeur, longueur, grilles)
//!
//! Notes importantes (aligné avec l'état actuel du noyau) :
//! - Pas de moins unaire : les opérandes négatives se fabriquent via "(0-n)".
//! - Division entière tronquée VERS ZÉRO (sémantique i64), pas un floor.
//! - Le comportement permissif (parenthèses déséquilibrées, opérande absente)
//!   est un contrat assumé, testé dans eval.rs; ici on reste sur des
//!   expressions bien formées.

use std::time::{Duration, Instant};

use super::erreur::ErreurEval;
use super::evaluer;

fn eval_ok(expr: &str) -> i64 {
    evaluer(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

/// Budget global anti-gel (scientifique + safe).
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Grille binaire vs arithmétique native ------------------------ */

#[test]
fn sci_binaires_vs_natif() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // a op b sur une petite grille : doit coller à l'arithmétique i64 native
    for a in 0i64..=12 {
        for b in 0i64..=12 {
            budget(t0, max);

            assert_eq!(eval_ok(&format!("{a}+{b}")), a + b);
            assert_eq!(eval_ok(&format!("{a}-{b}")), a - b);
            assert_eq!(eval_ok(&format!("{a}*{b}")), a * b);

            if b != 0 {
                assert_eq!(eval_ok(&format!("{a}/{b}")), a / b);
            } else {
                assert_eq!(
                    evaluer(&format!("{a}/{b}")),
                    Err(ErreurEval::DivisionParZero),
                    "a={a}"
                );
            }
        }
    }
}

#[test]
fn sci_troncature_vers_zero_operandes_negatives() {
    // négatifs via (0-n) : la troncature doit rester "vers zéro"
    assert_eq!(eval_ok("(0-7)/2"), -3);
    assert_eq!(eval_ok("7/(0-2)"), -3);
    assert_eq!(eval_ok("(0-7)/(0-2)"), 3);
}

/* ------------------------ Cohérence algébrique ------------------------ */

#[test]
fn sci_distributivite() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    for a in 0i64..=6 {
        for b in 0i64..=6 {
            for c in 0i64..=6 {
                budget(t0, max);

                let gauche = eval_ok(&format!("{a}*({b}+{c})"));
                let droite = eval_ok(&format!("{a}*{b}+{a}*{c}"));
                assert_eq!(gauche, droite, "a={a} b={b} c={c}");
            }
        }
    }
}

#[test]
fn sci_parentheses_redondantes() {
    assert_eq!(eval_ok("(((1+2)))*((3))"), 9);
    assert_eq!(eval_ok("(5)"), 5);
    assert_eq!(eval_ok("((((0))))"), 0);
}

#[test]
fn sci_blancs_partout() {
    // injecter un blanc entre chaque caractère ne change rien
    let cas = ["2+3*4", "(2+3)*4", "100/7-2", "((1+2)*(3+4))"];
    for expr in cas {
        let espace: String = expr
            .chars()
            .flat_map(|c| [c, ' '])
            .collect();
        assert_eq!(eval_ok(&espace), eval_ok(expr), "expr={expr:?}");
    }
}

/* ------------------------ Réutilisation + concurrence ------------------------ */

#[test]
fn sci_idempotence_sur_campagne() {
    let cas = ["2+3*4", "8/3/2", "(2+3)*4", "12+3", "((1+2)*(3+4))"];
    for expr in cas {
        let premier = evaluer(expr);
        let second = evaluer(expr);
        assert_eq!(premier, second, "expr={expr:?}");
    }
}

#[test]
fn sci_concurrence_coherente_avec_sequentiel() {
    // chaque appel porte son propre état : des fils indépendants doivent
    // retrouver exactement les résultats séquentiels
    let cas: Vec<String> = (0..64)
        .map(|k| format!("({k}+3)*{}-{k}/7", k % 9 + 1))
        .collect();

    let sequentiel: Vec<Result<i64, ErreurEval>> =
        cas.iter().map(|e| evaluer(e)).collect();

    let mut fils = Vec::new();
    for _ in 0..4 {
        let cas = cas.clone();
        fils.push(std::thread::spawn(move || {
            cas.iter().map(|e| evaluer(e)).collect::<Vec<_>>()
        }));
    }

    for fil in fils {
        let obtenu = fil.join().expect("fil de test");
        assert_eq!(obtenu, sequentiel);
    }
}

/* ------------------------ Stress contrôlé (sans brûler) ------------------------ */

#[test]
fn sci_stress_chaine_longue_plate() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    // 1+1+...+1 (2000 termes) : profondeur 0, longueur seule
    let expr = vec!["1"; 2000].join("+");
    budget(t0, max);
    assert_eq!(eval_ok(&expr), 2000);
}

#[test]
fn sci_profondeur_sous_et_sur_la_borne() {
    use super::balayage::PROFONDEUR_MAX;

    let sous = format!(
        "{}7{}",
        "(".repeat(PROFONDEUR_MAX),
        ")".repeat(PROFONDEUR_MAX)
    );
    assert_eq!(eval_ok(&sous), 7);

    let sur = format!(
        "{}7{}",
        "(".repeat(PROFONDEUR_MAX + 1),
        ")".repeat(PROFONDEUR_MAX + 1)
    );
    assert_eq!(evaluer(&sur), Err(ErreurEval::TropProfond));
}
