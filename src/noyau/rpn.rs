// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// - to_rpn   : jetons infixes => postfixe (pile d’opérateurs)
// - evaluer  : postfixe => f64 (pile de valeurs)
//
// Règles:
// - Précédence égale : on dépile aussi (>=), donc regroupement de gauche à droite
//   pour TOUS les opérateurs, ^ compris : 2^3^2 = (2^3)^2 = 64.
// - ')' sans '(' : ignorée. '(' sans ')' : ressort telle quelle en RPN,
//   et l’évaluation la saute.

use log::{debug, trace};

use super::erreur::{ErreurCalcul, Result};
use super::jetons::Tok;

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
/// Totale : n’échoue jamais, les parenthèses mal appariées se dégradent.
///
/// Exemple:
///   tokens: [3, +, 4, *, 2]
///   rpn:    [3, 4, 2, *, +]
pub fn to_rpn(tokens: &[Tok]) -> Vec<Tok> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    for tok in tokens {
        match tok {
            Tok::Num { .. } => out.push(tok.clone()),

            Tok::Op(op) => {
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) || top.precedence() < op.precedence() {
                        break;
                    }
                    if let Some(top) = ops.pop() {
                        out.push(top);
                    }
                }
                ops.push(tok.clone());
            }

            Tok::LPar => ops.push(Tok::LPar),

            Tok::RPar => {
                // dépile jusqu’à '(' (jetée) ; pile vide => ')' orpheline, rien à faire
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        break;
                    }
                    out.push(top);
                }
            }
        }
    }

    // vide la pile ops ('(' non fermées comprises)
    while let Some(op) = ops.pop() {
        out.push(op);
    }

    out
}

/// Évalue une RPN avec une pile de valeurs.
///
/// Curseur avant sur la suite : chaque jeton est lu une fois, rien n’est consommé.
pub fn evaluer(rpn: &[Tok]) -> Result<f64> {
    let mut pile: Vec<f64> = Vec::new();

    for (position, tok) in rpn.iter().enumerate() {
        match tok {
            Tok::Num { valeur, .. } => pile.push(*valeur),

            Tok::Op(op) => {
                let insuffisante = || ErreurCalcul::PileInsuffisante {
                    operateur: *op,
                    position,
                };
                let droite = pile.pop().ok_or_else(insuffisante)?;
                let gauche = pile.pop().ok_or_else(insuffisante)?;
                let r = op.appliquer(gauche, droite);
                trace!("{gauche} {} {droite} = {r}", op.symbole());
                pile.push(r);
            }

            Tok::LPar | Tok::RPar => {
                debug!("parenthèse orpheline ignorée en position {position}");
            }
        }
    }

    match pile.as_slice() {
        [v] => Ok(*v),
        _ => Err(ErreurCalcul::ExpressionMalformee {
            restants: pile.len(),
        }),
    }
}
