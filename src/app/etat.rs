//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau dans les types).
//!
//! Rôle : contenir l'état de la calculatrice (entrée, résultat, erreur,
//! historique, thème) et offrir des opérations simples (AC/DEL/=/thème)
//! sans logique d'affichage.
//!
//! Contrats :
//! - Aucune évaluation ici à part l'appel au noyau dans `evalue`.
//! - Aucune dépendance egui : l'horloge est passée par la vue (secondes
//!   monotones), ce qui marche en natif comme en wasm.
//! - Le placeholder "Erreur" expire tout seul (minuterie côté UI, pas noyau).

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::noyau;

/// Taille maximale de l'historique (plus récent en tête, éviction en queue).
const HISTORIQUE_MAX: usize = 5;

/// Durée d'affichage du placeholder "Erreur" avant retour automatique.
const ERREUR_DUREE_SECS: f64 = 1.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Clair,
    Sombre,
}

impl Theme {
    pub fn bascule(self) -> Theme {
        match self {
            Theme::Clair => Theme::Sombre,
            Theme::Sombre => Theme::Clair,
        }
    }
}

/// Une ligne d'historique : l'expression saisie et l'affichage du résultat.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EntreeHistorique {
    pub expression: String,
    pub affichage: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String, // dernier affichage réussi
    #[serde(skip)]
    pub erreur: String, // message typé (vide = pas d'erreur)
    #[serde(skip)]
    pub erreur_expire: Option<f64>, // échéance (secondes monotones)

    // --- historique (persistant) ---
    pub historique: VecDeque<EntreeHistorique>,

    // --- thème (persistant) ---
    pub theme: Theme,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l'entrée après un clic sur un bouton.
    #[serde(skip)]
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            erreur_expire: None,
            historique: VecDeque::new(),
            theme: Theme::Clair,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

/// Glyphes localisés -> opérateurs ASCII attendus par le noyau.
/// (Les boutons × et ÷ insèrent le glyphe, le noyau ne lit que * et /.)
pub fn normalise_glyphes(s: &str) -> String {
    s.replace('×', "*").replace('÷', "/")
}

impl AppCalc {
    /* ------------------------ Actions “boutons” ------------------------ */

    /// AC : remise à zéro totale (entrée + résultat + erreur + historique).
    pub fn reset_total(&mut self) {
        log::debug!("AC");
        self.entree.clear();
        self.resultat.clear();
        self.clear_erreur();
        self.historique.clear();
        self.focus_entree = true;
    }

    /// Insertion d'un bouton/touche. Taper pendant le placeholder "Erreur"
    /// le congédie d'abord.
    pub fn ajoute(&mut self, txt: &str) {
        if !self.erreur.is_empty() {
            self.clear_erreur();
        }
        self.entree.push_str(txt);
        self.focus_entree = true;
    }

    /// DEL “intelligent” : retire d'un coup les motifs de fonction ("sin(", etc.).
    pub fn backspace_entree(&mut self) {
        if self.entree.is_empty() {
            return;
        }

        // Retire espaces finaux
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }

        // Retire tokens connus
        for pat in ["sqrt(", "sin(", "cos(", "tan(", "log("] {
            if self.entree.ends_with(pat) {
                for _ in 0..pat.chars().count() {
                    self.entree.pop();
                }
                while self.entree.ends_with(' ') {
                    self.entree.pop();
                }
                self.focus_entree = true;
                return;
            }
        }

        // Sinon : un caractère
        self.entree.pop();
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
        self.focus_entree = true;
    }

    /// "=" : normalise les glyphes, appelle le noyau, enregistre.
    ///
    /// Succès : l'entrée est remplacée par l'affichage du résultat (on peut
    /// enchaîner), et la paire (expression, affichage) part dans l'historique.
    /// Échec : placeholder "Erreur" + message typé, entrée conservée,
    /// retour automatique après [`ERREUR_DUREE_SECS`].
    pub fn evalue(&mut self, maintenant: f64) {
        let expression = self.entree.trim().to_string();
        if expression.is_empty() {
            return;
        }

        match noyau::calcule(&normalise_glyphes(&expression)) {
            Ok(calcul) => {
                log::debug!("calcul ok: {expression:?} = {}", calcul.affichage);
                self.clear_erreur();
                self.resultat = calcul.affichage.clone();
                self.pousse_historique(expression, calcul.affichage.clone());
                self.entree = calcul.affichage;
            }
            Err(e) => {
                log::debug!("calcul refusé: {expression:?} ({e})");
                self.set_erreur(e.to_string(), maintenant);
            }
        }

        self.focus_entree = true;
    }

    /// Recharge une expression depuis l'historique (clic sur une ligne).
    pub fn charge_historique(&mut self, index: usize) {
        if let Some(entree) = self.historique.get(index) {
            self.entree = entree.expression.clone();
            self.clear_erreur();
            self.focus_entree = true;
        }
    }

    pub fn bascule_theme(&mut self) {
        self.theme = self.theme.bascule();
        log::debug!("thème: {:?}", self.theme);
    }

    /* ------------------------ Erreur + minuterie ------------------------ */

    /// Vrai tant que le placeholder "Erreur" est affiché.
    pub fn erreur_active(&self) -> bool {
        !self.erreur.is_empty()
    }

    /// À appeler chaque frame : congédie l'erreur expirée.
    /// Retourne le délai restant s'il faut repeindre plus tard.
    pub fn tic(&mut self, maintenant: f64) -> Option<f64> {
        let echeance = self.erreur_expire?;
        if maintenant >= echeance {
            self.clear_erreur();
            None
        } else {
            Some(echeance - maintenant)
        }
    }

    fn set_erreur(&mut self, msg: impl Into<String>, maintenant: f64) {
        self.erreur = msg.into();
        self.erreur_expire = Some(maintenant + ERREUR_DUREE_SECS);
    }

    fn clear_erreur(&mut self) {
        self.erreur.clear();
        self.erreur_expire = None;
    }

    /* ------------------------ Historique ------------------------ */

    fn pousse_historique(&mut self, expression: String, affichage: String) {
        self.historique.push_front(EntreeHistorique {
            expression,
            affichage,
        });
        self.historique.truncate(HISTORIQUE_MAX);
    }
}
