// src/app.rs
//
// Traceur RPN — module App (racine)
// ---------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + repere.rs + vue.rs)
// - Ré-exporter AppTraceur (pour main.rs: use crate::app::AppTraceur;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - La gestion Enter est faite dans vue.rs (quand le champ a le focus).

pub mod etat;
pub mod repere;
pub mod vue;

pub use etat::AppTraceur;

use eframe::egui;

impl eframe::App for AppTraceur {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ESC = effacer seulement l’entrée (comme bouton "C").
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.clear_entree();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
