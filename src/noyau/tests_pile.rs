//! Tests de la pile (scénarios) : ce qu’un utilisateur tape, ce que le cerveau rend.
//!
//! Rappel de l’ordre : f(recent, ancien), recent = sommet de pile.
//! Donc [10, 3, −] = 10 − 3 et [100, 10, ÷] = 100 ÷ 10.

use super::cerveau::{CELSIUS, DIVISE, FOIS, MOINS, PLUS};
use super::Cerveau;

/// Pousse une suite “postfixée” : nombre => opérande, sinon => symbole.
fn pousser(c: &mut Cerveau, entrees: &[&str]) -> Option<f64> {
    let mut r = None;
    for e in entrees {
        r = match e.parse::<f64>() {
            Ok(v) => c.empiler_operande(v),
            Err(_) => c.effectuer_operation(e),
        };
    }
    r
}

fn eval_seq(entrees: &[&str]) -> Option<f64> {
    let mut c = Cerveau::new();
    pousser(&mut c, entrees)
}

/* ------------------------ Opérande seule ------------------------ */

#[test]
fn pile_operande_seule_rendue_telle_quelle() {
    for v in [0.0, -0.0, 1.5, -273.15, 1e300, f64::MAX, f64::MIN_POSITIVE] {
        let mut c = Cerveau::new();
        assert_eq!(c.empiler_operande(v), Some(v), "v={v}");
    }

    let mut c = Cerveau::new();
    assert_eq!(c.empiler_operande(f64::INFINITY), Some(f64::INFINITY));

    let mut c = Cerveau::new();
    assert!(c.empiler_operande(f64::NAN).is_some_and(f64::is_nan));
}

#[test]
fn pile_vide_pas_de_resultat() {
    let c = Cerveau::new();
    assert_eq!(c.evaluer(), None);
    assert_eq!(c.description(), "[]");
}

/* ------------------------ Exemples de référence ------------------------ */

#[test]
fn pile_quatre_fois_cinq_plus_six() {
    // 4 × (5 + 6)
    assert_eq!(eval_seq(&["4", "5", "6", PLUS, FOIS]), Some(44.0));
}

#[test]
fn pile_soustraction_ancien_moins_recent() {
    assert_eq!(eval_seq(&["10", "3", MOINS]), Some(7.0));
}

#[test]
fn pile_division_ancien_sur_recent() {
    assert_eq!(eval_seq(&["100", "10", DIVISE]), Some(10.0));
}

#[test]
fn pile_celsius() {
    assert_eq!(eval_seq(&["32", CELSIUS]), Some(0.0));
    assert_eq!(eval_seq(&["212", CELSIUS]), Some(100.0));
}

#[test]
fn pile_resultats_intermediaires() {
    let mut c = Cerveau::new();
    assert_eq!(c.empiler_operande(4.0), Some(4.0));
    assert_eq!(c.empiler_operande(5.0), Some(5.0));
    assert_eq!(c.empiler_operande(6.0), Some(6.0));
    assert_eq!(c.effectuer_operation(PLUS), Some(11.0));
    assert_eq!(c.effectuer_operation(FOIS), Some(44.0));
    assert_eq!(c.description(), "[4.0, 5.0, 6.0, +, ×]");
}

#[test]
fn pile_expression_composee() {
    // (10 − 4) ÷ (1 + 2) = 2
    assert_eq!(
        eval_seq(&["10", "4", MOINS, "1", "2", PLUS, DIVISE]),
        Some(2.0)
    );
    // °C de (50 + 54) = 40
    assert_eq!(eval_seq(&["50", "54", PLUS, CELSIUS]), Some(40.0));
}

#[test]
fn pile_seul_le_sommet_compte() {
    // Le reste non consommé ([1]) n’empêche pas le résultat.
    assert_eq!(eval_seq(&["1", "2", "3", PLUS]), Some(5.0));
    assert_eq!(eval_seq(&["1", "2"]), Some(2.0));
}

/* ------------------------ Opérandes manquantes ------------------------ */

#[test]
fn pile_binaire_sans_assez_d_operandes() {
    assert_eq!(eval_seq(&[PLUS]), None);
    assert_eq!(eval_seq(&["3", FOIS]), None);
    assert_eq!(eval_seq(&["3", MOINS, MOINS]), None);
    assert_eq!(eval_seq(&[CELSIUS]), None);
}

#[test]
fn pile_reprend_apres_operateur_orphelin() {
    // Un opérande poussé après un opérateur orphelin redevient le sommet.
    let mut c = Cerveau::new();
    assert_eq!(c.effectuer_operation(PLUS), None);
    assert_eq!(c.empiler_operande(8.0), Some(8.0));
    assert_eq!(c.len(), 2);
}

/* ------------------------ Symboles inconnus ------------------------ */

#[test]
fn pile_symbole_inconnu_sans_mutation() {
    let mut c = Cerveau::new();
    pousser(&mut c, &["10", "3"]);
    let avant = c.evaluer();
    let desc = c.description();

    for s in ["%", "", "*", "-", "sqrt", "°F"] {
        assert_eq!(c.effectuer_operation(s), avant, "s={s:?}");
        assert_eq!(c.description(), desc);
        assert_eq!(c.len(), 2);
    }

    assert_eq!(c.effectuer_operation(MOINS), Some(7.0));
}

#[test]
fn pile_symbole_inconnu_sur_pile_vide() {
    let mut c = Cerveau::new();
    assert_eq!(c.effectuer_operation("^"), None);
    assert!(c.is_empty());
}

/* ------------------------ IEEE ------------------------ */

#[test]
fn pile_division_par_zero_ieee() {
    assert_eq!(eval_seq(&["1", "0", DIVISE]), Some(f64::INFINITY));
    assert_eq!(eval_seq(&["-1", "0", DIVISE]), Some(f64::NEG_INFINITY));
    assert!(eval_seq(&["0", "0", DIVISE]).is_some_and(f64::is_nan));
}

/* ------------------------ Idempotence ------------------------ */

#[test]
fn pile_evaluer_idempotent() {
    let mut c = Cerveau::new();
    pousser(&mut c, &["4", "5", "6", PLUS, FOIS]);
    let len = c.len();
    for _ in 0..5 {
        assert_eq!(c.evaluer(), Some(44.0));
    }
    assert_eq!(c.len(), len);

    let c = Cerveau::new();
    assert_eq!(c.evaluer(), c.evaluer());
}

/* ------------------------ Sessions longues ------------------------ */

#[test]
fn pile_total_cumule_session_longue() {
    // 1 ⏎ 1 + 1 + ... : le total reste lisible à chaque +
    let mut c = Cerveau::new();
    c.empiler_operande(1.0);
    let mut r = None;
    for _ in 0..6_000 {
        c.empiler_operande(1.0);
        r = c.effectuer_operation(PLUS);
    }
    assert_eq!(r, Some(6_001.0));
    assert_eq!(c.len(), 12_001);
}
