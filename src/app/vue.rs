// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand le champ est focus), Échap = AC (app.rs)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - Les boutons × et ÷ insèrent le glyphe ; la normalisation vers * et /
//   se fait dans etat.rs au moment du "="
//
// Note :
// - Backspace “caractère” reste au TextEdit ; le bouton DEL fait l'effacement
//   par motif ("sin(", "sqrt(", etc.)
// - Le collage passe par le TextEdit tel quel : c'est le noyau qui rejette
//   les caractères hors alphabet au moment du "="

use eframe::egui;

use super::etat::AppCalc;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.ui_entete(ui);
                ui.add_space(6.0);

                self.ui_affichage(ui);
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_historique(ui);
            });
    }

    fn ui_entete(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Calculatrice scientifique");

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let libelle = match self.theme {
                    super::etat::Theme::Clair => "Sombre",
                    super::etat::Theme::Sombre => "Clair",
                };
                if ui
                    .button(libelle)
                    .on_hover_text("Bascule le thème clair/sombre")
                    .clicked()
                {
                    self.bascule_theme();
                }

                if ui
                    .button("Copier")
                    .on_hover_text("Copie l'expression dans le presse-papiers")
                    .clicked()
                {
                    ui.ctx().copy_text(self.entree.clone());
                }
            });
        });
    }

    /// Zone de résultat : dernier affichage réussi, ou le placeholder "Erreur".
    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        let contenu = if self.erreur_active() {
            "Erreur"
        } else if self.resultat.is_empty() {
            "0"
        } else {
            self.resultat.as_str()
        };
        Self::champ_monospace(ui, "affichage_resultat", contenu, 1);

        if self.erreur_active() {
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 3+sin(4)*2, sqrt(9+7), 2^10")
                .id_source("entree_edit")
                .code_editor(),
        );

        // Si on a cliqué un bouton (pavé / fonctions / DEL / AC), on redonne le focus
        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Enter évalue (seulement si le champ est focus) ---
        // On évite les déclenchements “globaux” quand l'utilisateur clique ailleurs.
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            let maintenant = ui.input(|i| i.time);
            self.evalue(maintenant);
        }

        ui.add_space(6.0);

        // Actions + opérateurs + fonctions
        ui.horizontal_wrapped(|ui| {
            self.bouton_action(ui, "AC", "Remise à zéro totale (historique compris)", |app| {
                app.reset_total()
            });
            self.bouton_action(ui, "DEL", "Efface le dernier symbole", |app| {
                app.backspace_entree()
            });

            ui.separator();

            self.bouton_insert(ui, "+", "+");
            self.bouton_insert(ui, "-", "-");
            self.bouton_insert(ui, "×", "×");
            self.bouton_insert(ui, "÷", "÷");
            self.bouton_insert(ui, "^", "^");

            ui.separator();

            self.bouton_insert(ui, "sin", "sin(");
            self.bouton_insert(ui, "cos", "cos(");
            self.bouton_insert(ui, "tan", "tan(");
            self.bouton_insert(ui, "log", "log(");
            self.bouton_insert(ui, "sqrt", "sqrt(");

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                let maintenant = ui.input(|i| i.time);
                self.evalue(maintenant);
            }
        });

        ui.add_space(8.0);

        // Pavé numérique
        self.ui_pave_numerique(ui);
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique_sci")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_insert(ui, "7", "7");
                self.bouton_insert(ui, "8", "8");
                self.bouton_insert(ui, "9", "9");
                self.bouton_insert(ui, "(", "(");
                ui.end_row();

                self.bouton_insert(ui, "4", "4");
                self.bouton_insert(ui, "5", "5");
                self.bouton_insert(ui, "6", "6");
                self.bouton_insert(ui, ")", ")");
                ui.end_row();

                self.bouton_insert(ui, "1", "1");
                self.bouton_insert(ui, "2", "2");
                self.bouton_insert(ui, "3", "3");
                self.bouton_insert(ui, ".", ".");
                ui.end_row();

                self.bouton_insert(ui, "0", "0");
                ui.label("");
                ui.label("");
                ui.label("");
                ui.end_row();
            });
    }

    /// Historique cliquable (5 lignes max, plus récent en tête).
    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Historique")
            .default_open(true)
            .show(ui, |ui| {
                if self.historique.is_empty() {
                    ui.weak("(vide)");
                    return;
                }

                let mut a_recharger = None;
                for (i, entree) in self.historique.iter().enumerate() {
                    let ligne = format!("{} = {}", entree.expression, entree.affichage);
                    if ui
                        .link(ligne)
                        .on_hover_text("Recharge cette expression")
                        .clicked()
                    {
                        a_recharger = Some(i);
                    }
                }
                if let Some(i) = a_recharger {
                    self.charge_historique(i);
                }
            });
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
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

    fn bouton_action(
        &mut self,
        ui: &mut egui::Ui,
        label: &str,
        tip: &str,
        action: fn(&mut AppCalc),
    ) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            action(self);
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, a_inserer: &str) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(label));
        if resp.clicked() {
            self.ajoute(a_inserer);
        }
    }
}
