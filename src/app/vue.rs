// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Écran : affichage + pile courante (démarche)
// - Pavé : chiffres, '.', ⏎, DEL, AC
// - Opérateurs : un bouton par symbole connu du cerveau
//
// Note :
// - Le clavier (Enter / Escape) est géré dans app.rs, globalement :
//   ici il n’y a pas de champ texte à focaliser.

use eframe::egui;

use super::etat::AppCalc;

/// Taille des touches (tactile-friendly).
const TOUCHE: [f32; 2] = [56.0, 40.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice RPN");
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        ui.horizontal_top(|ui| {
            self.ui_pave_numerique(ui);
            ui.separator();
            self.ui_operateurs(ui);
        });
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(&self.affichage)
                            .monospace()
                            .size(28.0),
                    );
                });
            });

        ui.add_space(4.0);
        ui.horizontal_wrapped(|ui| {
            if self.cerveau.is_empty() {
                ui.label("Pile : (vide)");
            } else {
                ui.label(format!("Pile ({}) :", self.cerveau.len()));
                ui.monospace(self.cerveau.description());
            }
        });

        if !self.erreur.is_empty() {
            ui.add_space(4.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique_rpn")
            .num_columns(3)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in [['7', '8', '9'], ['4', '5', '6'], ['1', '2', '3']] {
                    for c in ligne {
                        self.bouton_chiffre(ui, c);
                    }
                    ui.end_row();
                }

                self.bouton_chiffre(ui, '0');
                self.bouton_chiffre(ui, '.');
                self.bouton_action(ui, "⏎", "Empile la valeur affichée", Action::Entrer);
                ui.end_row();

                self.bouton_action(ui, "DEL", "Efface le dernier chiffre", Action::RetourArriere);
                self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);
                ui.label("");
                ui.end_row();
            });
    }

    fn ui_operateurs(&mut self, ui: &mut egui::Ui) {
        ui.vertical(|ui| {
            for symbole in self.cerveau.symboles() {
                let resp = ui.add_sized(TOUCHE, egui::Button::new(symbole));
                if resp.clicked() {
                    self.operer(symbole);
                }
            }
        });
    }

    fn bouton_chiffre(&mut self, ui: &mut egui::Ui, c: char) {
        let resp = ui.add_sized(TOUCHE, egui::Button::new(c.to_string()));
        if resp.clicked() {
            self.ajouter_chiffre(c);
        }
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized(TOUCHE, egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::Entrer => self.entrer(),
                Action::RetourArriere => self.retour_arriere(),
                Action::ResetTotal => self.reset_total(),
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    Entrer,
    RetourArriere,
    ResetTotal,
}
