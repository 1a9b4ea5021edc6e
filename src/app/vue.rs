// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand le champ est focus); Backspace reste au
//   TextEdit, le bouton DEL passe par backspace_entree()
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - Historique de session : rappel d'une expression d'un clic
//
// Note :
// - PAS de Key::NumEnter (n'existe pas dans egui 0.33.x)
// - Enter suffit (clavier PC + “Enter” virtuel mobile selon navigateur)

use eframe::egui;

use super::etat::{AppCalc, Demarche};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice Z-pur");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultats(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);

                ui.add_space(8.0);

                self.ui_historique(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée :");

        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: (2+3)*4, 100/7-2, 12+3*4")
                .id_source("entree_edit")
                .code_editor(),
        );

        // Si on a cliqué un bouton (pavé / DEL / C / etc.), on redonne le focus
        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Enter évalue (seulement si le champ est focus) ---
        // On évite les déclenchements “globaux” quand l'utilisateur clique ailleurs.
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.eval_via_noyau();
            self.focus_entree = true;
        }

        ui.add_space(6.0);

        // Actions
        ui.horizontal(|ui| {
            // Contrat: C = entrée seulement ; CLR = résultats seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement l'entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultat + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);
        });

        ui.add_space(8.0);

        // Touches rapides + "="
        ui.horizontal_wrapped(|ui| {
            self.bouton_insert(ui, "(", "(", InsertKind::OpenParen);
            self.bouton_insert(ui, ")", ")", InsertKind::CloseParen);

            self.bouton_insert(ui, "+", "+", InsertKind::Op);
            self.bouton_insert(ui, "-", "-", InsertKind::Op);
            self.bouton_insert(ui, "*", "*", InsertKind::Op);
            self.bouton_insert(ui, "/", "/", InsertKind::Op);

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.eval_via_noyau();
                self.focus_entree = true;
            }
        });

        ui.add_space(8.0);

        // Pavé numérique
        self.ui_pave_numerique(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique_zpur")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_insert(ui, "7", "7", InsertKind::Digit);
                self.bouton_insert(ui, "8", "8", InsertKind::Digit);
                self.bouton_insert(ui, "9", "9", InsertKind::Digit);
                self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::Backspace);
                ui.end_row();

                self.bouton_insert(ui, "4", "4", InsertKind::Digit);
                self.bouton_insert(ui, "5", "5", InsertKind::Digit);
                self.bouton_insert(ui, "6", "6", InsertKind::Digit);
                self.bouton_insert(ui, "*", "*", InsertKind::Op);
                ui.end_row();

                self.bouton_insert(ui, "1", "1", InsertKind::Digit);
                self.bouton_insert(ui, "2", "2", InsertKind::Digit);
                self.bouton_insert(ui, "3", "3", InsertKind::Digit);
                self.bouton_insert(ui, "/", "/", InsertKind::Op);
                ui.end_row();

                self.bouton_insert(ui, "0", "0", InsertKind::Digit);
                ui.label("");
                ui.label("");
                ui.label("");
                ui.end_row();
            });
    }

    /// Backspace : retire le dernier symbole (et les blancs qui traînent).
    fn backspace_entree(&mut self) {
        if self.entree.is_empty() {
            return;
        }

        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
        self.entree.pop();
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
    }

    fn ui_resultats(&mut self, ui: &mut egui::Ui) {
        ui.label("Résultat :");
        if self.resultat_dispo {
            Self::champ_monospace(ui, "resultat_out", &self.resultat, 2);
        } else {
            ui.monospace("indisponible");
        }
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Nettoyé", "demarche_nettoye", &self.demarche.nettoye);
                Self::champ_demarche(ui, "Termes", "demarche_termes", &self.demarche.termes);
                Self::champ_demarche(ui, "Note", "demarche_note", &self.demarche.note);
            });
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Historique")
            .default_open(false)
            .show(ui, |ui| {
                if self.historique.is_empty() {
                    ui.monospace("(vide)");
                    return;
                }

                // plus récent en tête; un clic reprend l'expression dans l'entrée
                let mut rappel: Option<usize> = None;
                for (idx, enr) in self.historique.iter().enumerate() {
                    ui.horizontal(|ui| {
                        let resp = ui
                            .small_button("↺")
                            .on_hover_text("Reprendre cette expression");
                        if resp.clicked() {
                            rappel = Some(idx);
                        }
                        ui.monospace(format!("{} = {}", enr.expression, enr.resultat));
                    });
                }
                if let Some(idx) = rappel {
                    self.rappeler(idx);
                }

                ui.add_space(4.0);
                self.bouton_action(ui, "Vider", "Efface l'historique", Action::ClearHistorique);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 2);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        // On garde un cadre visuel via Frame + Label monospace.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ClearHistorique => self.clear_historique(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => self.backspace_entree(),
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, to_insert: &str, kind: InsertKind) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(label));
        if !resp.clicked() || to_insert.is_empty() {
            return;
        }

        match kind {
            InsertKind::CloseParen => {
                while self.entree.ends_with(' ') {
                    self.entree.pop();
                }
                self.entree.push_str(to_insert);
            }
            InsertKind::OpenParen => {
                if !self.entree.is_empty() {
                    let last = self.entree.chars().rev().find(|c| !c.is_whitespace());
                    if let Some(c) = last {
                        if c.is_ascii_digit() || c == ')' {
                            self.entree.push(' ');
                        }
                    }
                }
                self.entree.push_str(to_insert);
            }
            InsertKind::Op => {
                while self.entree.ends_with(' ') {
                    self.entree.pop();
                }
                if !self.entree.is_empty() {
                    self.entree.push(' ');
                }
                self.entree.push_str(to_insert);
                self.entree.push(' ');
            }
            InsertKind::Digit => {
                // chiffres: pas d'espaces auto
                self.entree.push_str(to_insert);
            }
        }

        self.focus_entree = true;
    }

    /// Évalue l'expression via le noyau, puis dépose résultat/démarche dans
    /// l'état UI (et l'enregistrement en tête d'historique).
    fn eval_via_noyau(&mut self) {
        let s = self.entree.trim();
        if s.is_empty() {
            // refus au niveau appelant : le noyau suppose une entrée non vide
            self.set_erreur("Entrée vide");
            self.focus_entree = true;
            return;
        }

        let expression = s.to_string();

        match crate::noyau::eval_expression(&expression) {
            Ok((valeur, d_noyau)) => {
                log::debug!("évaluation réussie: {expression:?} = {valeur}");
                let d_ui = Demarche {
                    nettoye: d_noyau.nettoye,
                    termes: d_noyau.termes,
                    note: d_noyau.note,
                };
                self.set_resultat(expression, valeur, d_ui);
                self.focus_entree = true;
            }
            Err(e) => {
                log::warn!("évaluation refusée: {expression:?} ({e})");
                self.set_erreur(e.to_string());
                self.focus_entree = true;
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ClearHistorique,
    ResetTotal,
    Backspace,
}

#[derive(Clone, Copy, Debug)]
enum InsertKind {
    Digit,
    Op,
    OpenParen,
    CloseParen,
}
