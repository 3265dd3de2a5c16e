// src/noyau/lecture.rs
//
// Lecture de l’affichage -> f64.
// Seule étape faillible de la calculatrice : le cerveau, lui, ne fait jamais d’erreur.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurLecture {
    #[error("affichage vide")]
    Vide,

    #[error("nombre invalide: {texte:?}")]
    Invalide { texte: String },
}

/// Lit le texte de l’affichage.
///
/// - espaces ignorés autour
/// - moins typographique `−` accepté comme `-`
/// - "inf" / "NaN" acceptés (l’affichage peut les produire après ÷ 0)
pub fn lire_valeur(texte: &str) -> Result<f64, ErreurLecture> {
    let s = texte.trim();
    if s.is_empty() {
        return Err(ErreurLecture::Vide);
    }

    let normalise = s.replace('−', "-");
    normalise
        .parse::<f64>()
        .map_err(|_| ErreurLecture::Invalide {
            texte: s.to_string(),
        })
}
