// src/app.rs
//
// Calculatrice RPN — module App (racine)
// -------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Raccourcis clavier : événements egui -> Touche -> action sur AppCalc

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

/// Action clavier reconnue.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Touche {
    Chiffre(char), // 0-9 ou '.'
    Entrer,        // Enter = ⏎
    Reset,         // Escape = AC
}

/// Traduit les événements d’une frame en touches, dans l’ordre de frappe.
///
/// Seuls les appuis comptent (pas les relâchements).
pub fn touches(events: &[egui::Event]) -> Vec<Touche> {
    let mut out = Vec::new();
    for e in events {
        match e {
            egui::Event::Text(t) => out.extend(
                t.chars()
                    .filter(|c| c.is_ascii_digit() || *c == '.')
                    .map(Touche::Chiffre),
            ),
            egui::Event::Key {
                key, pressed: true, ..
            } => match key {
                egui::Key::Enter => out.push(Touche::Entrer),
                egui::Key::Escape => out.push(Touche::Reset),
                _ => {}
            },
            _ => {}
        }
    }
    out
}

impl AppCalc {
    pub fn appliquer(&mut self, touche: Touche) {
        match touche {
            Touche::Chiffre(c) => self.ajouter_chiffre(c),
            Touche::Entrer => self.entrer(),
            Touche::Reset => self.reset_total(),
        }
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Raccourcis clavier globaux (safe natif + web) : pas de champ texte à focaliser.
        for t in ctx.input(|i| touches(&i.events)) {
            self.appliquer(t);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
