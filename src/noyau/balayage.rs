// src/noyau/balayage.rs
//
// Balayage unique (sans AST)
// --------------------------
// Objectif:
// - Une seule passe gauche→droite sur l'entrée nettoyée (sans blancs)
// - Priorités complètes sans arbre : les termes additifs s'empilent,
//   × et ÷ se résolvent immédiatement contre le sommet de la pile
// - Récursion sur '(' seulement (profondeur = imbrication)
//
// Règles:
// - chiffre       : num = num*10 + chiffre (opérande multi-chiffres)
// - '('           : sous-balayage récursif; la somme de ses termes devient
//                   num; le curseur reprend après la ')' consommée
// - fin ou +-*/)  : résolution de num selon l'opérateur en attente
//                   (+ empile num ; - empile -num ; × et ÷ réduisent le sommet)
// - ')'           : fin du niveau courant
//
// Curseur explicite (pas d'état partagé) :
// - balayer() reçoit la position de départ et retourne
//   (termes du niveau, position de reprise). Le parent reprend exactement
//   où le sous-balayage s'est arrêté.
//
// Comportement permissif assumé (parité avec la référence) :
// - '(' non fermée   => le sous-balayage va jusqu'à la fin de la chaîne
// - ')' en trop      => le niveau se termine; la suite est ignorée
// - opérande absente => vaut 0 (ex: "2++3" == 5, "2+" == 2)

use super::erreur::ErreurEval;

/// Garde-fou : borne d'imbrication des parenthèses (anti-débordement de pile).
pub const PROFONDEUR_MAX: usize = 64;

/// Retire tous les blancs. Le curseur n'avance ensuite que sur ce tampon.
pub fn nettoyer(expression: &str) -> Vec<char> {
    expression.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Balaye un niveau à partir de `depart`.
///
/// Retourne (termes additifs du niveau, position de reprise).
/// La position de reprise est juste après la ')' consommée, ou la fin du
/// tampon si le niveau court jusqu'au bout.
pub fn balayer(
    chars: &[char],
    depart: usize,
    profondeur: usize,
) -> Result<(Vec<i64>, usize), ErreurEval> {
    if profondeur > PROFONDEUR_MAX {
        return Err(ErreurEval::TropProfond);
    }

    let mut pile: Vec<i64> = Vec::new();
    let mut operateur = '+';
    let mut num: i64 = 0;
    let mut i = depart;

    while i < chars.len() {
        let c = chars[i];
        i += 1;

        if !c.is_ascii_digit() && !"+-*/()".contains(c) {
            return Err(ErreurEval::CaractereInvalide(c));
        }

        if let Some(d) = c.to_digit(10) {
            num = num * 10 + i64::from(d);
        }

        if c == '(' {
            let (termes, reprise) = balayer(chars, i, profondeur + 1)?;
            num = termes.iter().sum();
            i = reprise;
        }

        // Fin du tampon ou frontière (+ - * / ')') : on résout num.
        if i == chars.len() || "+-*/)".contains(c) {
            resoudre(&mut pile, operateur, num)?;
            num = 0;

            // ')' : fin du niveau courant
            if c == ')' {
                break;
            }

            // +-*/ : nouvel opérateur en attente
            if "+-*/".contains(c) {
                operateur = c;
            }
        }
    }

    Ok((pile, i))
}

/// Résout l'opérande `num` contre la pile selon l'opérateur en attente.
///
/// Invariant : × et ÷ n'arrivent qu'après une résolution qui a empilé,
/// donc la pile n'est jamais vide à ce moment-là (repli sur 0 sinon).
fn resoudre(pile: &mut Vec<i64>, operateur: char, num: i64) -> Result<(), ErreurEval> {
    match operateur {
        '+' => pile.push(num),
        '-' => pile.push(-num),
        '*' => {
            let haut = pile.pop().unwrap_or(0);
            pile.push(haut * num);
        }
        '/' => {
            if num == 0 {
                return Err(ErreurEval::DivisionParZero);
            }
            let haut = pile.pop().unwrap_or(0);
            // division entière tronquée vers zéro (sémantique i64 native)
            pile.push(haut / num);
        }
        _ => unreachable!("opérateur hors alphabet"),
    }
    Ok(())
}
