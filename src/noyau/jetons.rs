// src/noyau/jetons.rs

use std::fmt;

use super::format::format_valeur;

/// Fonction d’un opérateur unaire (ex: °F -> °C).
pub type FnUnaire = fn(f64) -> f64;

/// Fonction d’un opérateur binaire.
///
/// ATTENTION à l’ordre : `f(recent, ancien)`.
/// `recent` = opérande le plus proche du sommet de pile (empilé en dernier).
pub type FnBinaire = fn(f64, f64) -> f64;

/// Un jeton de la pile : opérande ou opérateur (avec sa fonction).
///
/// Immuable une fois créé. Pour un opérateur, le symbole sert de clé
/// dans la table des opérations du cerveau.
#[derive(Clone, Copy, Debug)]
pub enum Jeton {
    Operande(f64),
    Unaire(&'static str, FnUnaire),
    Binaire(&'static str, FnBinaire),
}

impl Jeton {
    /// Symbole de l’opérateur (None pour une opérande).
    pub fn symbole(&self) -> Option<&'static str> {
        match self {
            Jeton::Operande(_) => None,
            Jeton::Unaire(s, _) | Jeton::Binaire(s, _) => Some(*s),
        }
    }
}

impl fmt::Display for Jeton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Jeton::Operande(v) => f.write_str(&format_valeur(*v)),
            Jeton::Unaire(s, _) | Jeton::Binaire(s, _) => f.write_str(s),
        }
    }
}
