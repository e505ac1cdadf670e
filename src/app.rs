// src/app.rs
//
// Calculatrice scientifique — module App (racine)
// -----------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l'impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - La gestion Enter est faite dans vue.rs (au bon endroit: quand le champ a le focus).
// - Ici: Échap global, minuterie du placeholder "Erreur", thème, persistance.

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use etat::Theme;

impl AppCalc {
    /// Recharge l'état persistant (thème + historique) s'il existe.
    pub fn nouveau(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app: AppCalc = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        app.focus_entree = true;
        app
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Raccourci clavier global minimal (safe natif + web) :
        // ÉCHAP = remise à zéro totale (comme le bouton "AC").
        //
        // On NE gère PAS Enter ici:
        // - sur web/mobile, clavier incertain
        // - risque de double déclenchement
        // - la vue le fait déjà avec resp.has_focus()
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.reset_total();
        }

        // Minuterie du placeholder "Erreur" : l'horloge monotone d'egui
        // marche en natif comme en wasm.
        let maintenant = ctx.input(|i| i.time);
        if let Some(reste) = self.tic(maintenant) {
            ctx.request_repaint_after(std::time::Duration::from_secs_f64(reste));
        }

        // Thème : on ne réécrit les visuals que sur bascule réelle.
        let sombre = self.theme == Theme::Sombre;
        if ctx.style().visuals.dark_mode != sombre {
            ctx.set_visuals(if sombre {
                egui::Visuals::dark()
            } else {
                egui::Visuals::light()
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }

    /// Persistance eframe : thème + historique (l'équivalent du
    /// localStorage de la version navigateur).
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}
