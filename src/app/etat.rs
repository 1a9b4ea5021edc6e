//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l'état de la calculatrice (entrée, résultat, erreur,
//! démarche, historique) et offrir des opérations simples (C/CLR/AC)
//! sans logique d'affichage.
//!
//! Contrats (version UI) :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - Défense en profondeur : borne sur la taille de l'historique.

/// Garde-fou : taille maximale de l'historique en session.
const HISTORIQUE_MAX: usize = 100;

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub nettoye: String,
    pub termes: String,
    pub note: String,
}

/// Un calcul abouti : expression soumise + résultat, tels quels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enregistrement {
    pub expression: String,
    pub resultat: i64,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String,    // affichage du résultat entier
    pub erreur: String,      // message d'erreur (si l'évaluation échoue)
    pub resultat_dispo: bool, // false tant qu'aucun calcul n'a abouti

    // --- démarche (panneau d'explication) ---
    pub demarche: Demarche,

    // --- historique de session (plus récent en tête) ---
    pub historique: Vec<Enregistrement>,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l'entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            resultat_dispo: false, // au démarrage : rien à lire
            demarche: Demarche::default(),
            historique: Vec::new(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + historique).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.clear_historique();
        self.focus_entree = true;
    }

    /// C : effacer seulement l'entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    fn clear_demarche(&mut self) {
        self.demarche = Demarche::default();
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l'entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.resultat_dispo = false; // clair : il n'y a rien à lire
        self.clear_demarche();
        self.focus_entree = true;
    }

    /// Vide l'historique de session.
    pub fn clear_historique(&mut self) {
        self.historique.clear();
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// Choix UX :
    /// - On CONSERVE `resultat` (dernier calcul abouti) pour ne pas
    ///   “effacer l'écran” sur une faute.
    /// - On coupe la démarche (non fiable si l'évaluation échoue).
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();

        // démarche invalide => on l'efface
        self.clear_demarche();

        self.focus_entree = true;
    }

    /// Utilitaire : déposer un calcul abouti (résultat + démarche) et
    /// l'enregistrer en tête d'historique (expression + valeur, tels quels).
    pub fn set_resultat(&mut self, expression: impl Into<String>, valeur: i64, demarche: Demarche) {
        self.erreur.clear();
        self.resultat = valeur.to_string();
        self.resultat_dispo = true;
        self.demarche = demarche;

        self.historique.insert(
            0,
            Enregistrement {
                expression: expression.into(),
                resultat: valeur,
            },
        );
        self.historique.truncate(HISTORIQUE_MAX);

        self.focus_entree = true;
    }

    /// Reprend une expression de l'historique dans l'entrée.
    pub fn rappeler(&mut self, index: usize) {
        if let Some(enr) = self.historique.get(index) {
            self.entree = enr.expression.clone();
            self.focus_entree = true;
        }
    }
}
