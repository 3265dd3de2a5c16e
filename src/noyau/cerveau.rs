//! Noyau — le “cerveau” de la calculatrice.
//!
//! Pile de jetons (opérandes + opérateurs) réduite en notation polonaise inversée :
//! on consomme la pile par la FIN, chaque opérateur va chercher ses opérandes
//! dans ce qui reste (itératif : pas de récursion, pas de limite de profondeur).
//!
//! Contrats :
//! - La pile ne fait que grandir (pas de reset ici : c’est l’appelant qui recrée un cerveau).
//! - L’évaluation lit une tranche empruntée : elle ne modifie jamais la pile.
//! - Pas d’erreur : opérandes manquantes => None (“pas encore assez de saisie”).
//! - Symbole inconnu => aucune mutation.

use std::collections::HashMap;

use super::format::format_jetons;
use super::jetons::{FnBinaire, FnUnaire, Jeton};

/// Symboles reconnus (les boutons de la vue utilisent les mêmes).
pub const FOIS: &str = "×";
pub const MOINS: &str = "−";
pub const PLUS: &str = "+";
pub const DIVISE: &str = "÷";
pub const CELSIUS: &str = "°C";

#[derive(Clone, Debug)]
pub struct Cerveau {
    pile: Vec<Jeton>,
    operations: HashMap<&'static str, Jeton>,
}

impl Default for Cerveau {
    fn default() -> Self {
        Self::new()
    }
}

impl Cerveau {
    pub fn new() -> Self {
        let mut c = Self {
            pile: Vec::new(),
            operations: HashMap::new(),
        };

        // f(recent, ancien) : − et ÷ inversent l’ordre (ancien − recent, ancien ÷ recent)
        c.apprendre_operation(Jeton::Binaire(FOIS, |r, a| r * a));
        c.apprendre_operation(Jeton::Binaire(MOINS, |r, a| a - r));
        c.apprendre_operation(Jeton::Binaire(PLUS, |r, a| r + a));
        c.apprendre_operation(Jeton::Binaire(DIVISE, |r, a| a / r));
        c.apprendre_operation(Jeton::Unaire(CELSIUS, fahrenheit_vers_celsius));

        c
    }

    /// Table des opérations : construction seulement.
    fn apprendre_operation(&mut self, op: Jeton) {
        if let Some(s) = op.symbole() {
            self.operations.insert(s, op);
        }
    }

    /// Empile une opérande puis évalue toute la pile.
    pub fn empiler_operande(&mut self, valeur: f64) -> Option<f64> {
        self.pile.push(Jeton::Operande(valeur));
        self.evaluer()
    }

    /// Empile l’opération `symbole` (si connue) puis évalue toute la pile.
    ///
    /// Symbole inconnu : la pile reste telle quelle, on évalue quand même.
    pub fn effectuer_operation(&mut self, symbole: &str) -> Option<f64> {
        match self.operations.get(symbole) {
            Some(op) => self.pile.push(*op),
            None => log::debug!("opération inconnue ignorée: {symbole:?}"),
        }
        self.evaluer()
    }

    /// Évalue la pile entière. Le reste non consommé est seulement journalisé.
    pub fn evaluer(&self) -> Option<f64> {
        let (resultat, reste) = reduire(&self.pile);
        log::debug!(
            "{} = {:?} avec {} restant",
            format_jetons(&self.pile),
            resultat,
            format_jetons(reste)
        );
        resultat
    }

    /// Pile en texte : "[4.0, 5.0, 6.0, +, ×]".
    pub fn description(&self) -> String {
        format_jetons(&self.pile)
    }

    pub fn len(&self) -> usize {
        self.pile.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pile.is_empty()
    }

    /// Symboles connus, triés (ordre stable pour la vue).
    pub fn symboles(&self) -> Vec<&'static str> {
        let mut v: Vec<&'static str> = self.operations.keys().copied().collect();
        v.sort_unstable();
        v
    }
}

/// Opérateur en attente d’opérande(s) pendant la réduction.
#[derive(Clone, Copy)]
enum Attente {
    Unaire(FnUnaire),
    /// binaire : attend l’opérande RÉCENTE (la première trouvée en remontant)
    Recent(FnBinaire),
    /// binaire : récente connue, attend l’opérande ANCIENNE
    Ancien(FnBinaire, f64),
}

/// Réduction postfixée : retire le DERNIER jeton, puis va chercher ses opérandes
/// dans ce qui reste.
///
/// Boucle avec curseur `i` (reste = `jetons[..i]`) et pile explicite des opérateurs
/// en attente : pas de récursion, la pile d’appels ne grandit pas avec la session.
///
/// Retourne (résultat, reste non consommé). Si une opérande manque, le résultat
/// est None et le reste est celui atteint au moment de l’échec.
fn reduire(jetons: &[Jeton]) -> (Option<f64>, &[Jeton]) {
    let mut i = jetons.len();
    let mut attente: Vec<Attente> = Vec::new();

    loop {
        // Descente : jusqu’à la prochaine opérande (ou le fond de la pile)
        let mut valeur = loop {
            let Some(j) = i.checked_sub(1) else {
                return (None, &jetons[..i]);
            };
            i = j;
            match jetons[i] {
                Jeton::Operande(v) => break v,
                Jeton::Unaire(_, f) => attente.push(Attente::Unaire(f)),
                Jeton::Binaire(_, f) => attente.push(Attente::Recent(f)),
            }
        };

        // Remontée : applique les opérateurs complets
        loop {
            match attente.pop() {
                None => return (Some(valeur), &jetons[..i]),
                Some(Attente::Unaire(f)) => valeur = f(valeur),
                Some(Attente::Recent(f)) => {
                    attente.push(Attente::Ancien(f, valeur));
                    break;
                }
                Some(Attente::Ancien(f, recent)) => valeur = f(recent, valeur),
            }
        }
    }
}

/// °F -> °C
fn fahrenheit_vers_celsius(f: f64) -> f64 {
    (f - 32.0) / 9.0 * 5.0
}
