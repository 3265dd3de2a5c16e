//! Noyau RPN
//!
//! Organisation interne :
//! - jetons.rs  : Jeton (opérande / opérateur unaire / binaire)
//! - cerveau.rs : pile + table des opérations + réduction récursive
//! - format.rs  : affichage des valeurs et de la pile
//! - lecture.rs : texte de l’affichage -> f64

pub mod cerveau;
pub mod format;
pub mod jetons;
pub mod lecture;

#[cfg(test)]
mod tests_pile;


// API publique minimale
pub use cerveau::Cerveau;
