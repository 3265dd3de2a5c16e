//! src/app/etat.rs
//!
//! État UI (sans vue) : l’affichage, la saisie en cours, et le cerveau.
//!
//! Rôle : appelant “externe” du noyau.
//! - convertit le texte de l’affichage en f64 (et retour)
//! - traduit les boutons en symboles d’opérations
//! - affiche 0 quand le cerveau ne rend rien (pas encore assez de saisie)
//!
//! Contrats :
//! - Aucune arithmétique ici : tout passe par le Cerveau.
//! - AC = nouveau Cerveau (le noyau n’a pas de reset).

use crate::noyau::format::format_resultat;
use crate::noyau::lecture::{lire_valeur, ErreurLecture};
use crate::noyau::Cerveau;

/// Affichage au démarrage / après AC.
const AFFICHAGE_ZERO: &str = "0";

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- écran ---
    pub affichage: String,
    pub erreur: String, // lecture impossible de l’affichage

    // --- saisie ---
    pub saisie_en_cours: bool, // l’utilisateur tape un nombre

    // --- noyau ---
    pub cerveau: Cerveau,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            affichage: AFFICHAGE_ZERO.to_string(),
            erreur: String::new(),
            saisie_en_cours: false,
            cerveau: Cerveau::new(),
        }
    }
}

impl AppCalc {
    /* ------------------------ Saisie ------------------------ */

    /// Chiffre (ou '.') tapé : on complète le nombre en cours, sinon on en commence un.
    pub fn ajouter_chiffre(&mut self, c: char) {
        if c == '.' && self.saisie_en_cours && self.affichage.contains('.') {
            return;
        }

        if self.saisie_en_cours {
            self.affichage.push(c);
        } else {
            self.affichage = if c == '.' {
                "0.".to_string()
            } else {
                c.to_string()
            };
            self.saisie_en_cours = true;
        }
    }

    /// DEL : retire le dernier caractère du nombre en cours.
    pub fn retour_arriere(&mut self) {
        if !self.saisie_en_cours {
            return;
        }
        self.affichage.pop();
        if self.affichage.is_empty() {
            self.affichage = AFFICHAGE_ZERO.to_string();
            self.saisie_en_cours = false;
        }
    }

    /* ------------------------ Vers le cerveau ------------------------ */

    /// ⏎ : pousse la valeur affichée comme opérande.
    pub fn entrer(&mut self) {
        self.saisie_en_cours = false;
        match self.empiler_affichage() {
            Ok(r) => self.set_resultat(r),
            Err(e) => {
                log::warn!("lecture de l’affichage impossible: {e}");
                self.erreur = e.to_string();
            }
        }
    }

    fn empiler_affichage(&mut self) -> Result<Option<f64>, ErreurLecture> {
        let v = lire_valeur(&self.affichage)?;
        Ok(self.cerveau.empiler_operande(v))
    }

    /// Bouton opérateur : termine la saisie en cours puis applique `symbole`.
    pub fn operer(&mut self, symbole: &str) {
        if self.saisie_en_cours {
            self.entrer();
            // opérande illisible : l’opérateur n’est pas appliqué, l’erreur reste affichée
            if !self.erreur.is_empty() {
                return;
            }
        }
        let r = self.cerveau.effectuer_operation(symbole);
        self.set_resultat(r);
    }

    /// AC : remise à zéro totale (nouveau cerveau).
    pub fn reset_total(&mut self) {
        *self = Self::default();
    }

    /// Utilitaire : déposer un résultat (None => 0).
    fn set_resultat(&mut self, r: Option<f64>) {
        self.erreur.clear();
        self.affichage = format_resultat(r);
        self.saisie_en_cours = false;
    }
}
