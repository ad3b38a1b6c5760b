//! Noyau — évaluation (pipeline complet)
//!
//! tokenize -> RPN -> valeur
//!
//! Les symboles inconnus ne bloquent rien : ils voyagent dans `Calcul::inconnus`,
//! même quand le lexage échoue ensuite.
//! Un nombre mal formé vide les jetons et la RPN ; une RPN bancale laisse les
//! jetons affichables. Dans les deux cas l’échec est dans `Calcul::resultat`.

use log::debug;

use super::erreur::Result;
use super::jetons::{format_tokens, tokenize, EchecLexage, SymboleInconnu, Tok};
use super::rpn::{evaluer, to_rpn};

#[derive(Clone, Debug, PartialEq)]
pub struct Calcul {
    pub jetons: Vec<Tok>,
    pub rpn: Vec<Tok>,
    pub inconnus: Vec<SymboleInconnu>,
    pub resultat: Result<f64>,
}

/// API publique : évalue une expression et retourne la démarche
/// (jetons, rpn, inconnus) + le résultat, lui-même faillible.
pub fn eval_expression(expr_str: &str) -> Calcul {
    // 1) Jetons
    let (jetons, inconnus) = match tokenize(expr_str) {
        Ok(lexage) => (lexage.jetons, lexage.inconnus),
        Err(EchecLexage { erreur, inconnus }) => {
            return Calcul {
                jetons: Vec::new(),
                rpn: Vec::new(),
                inconnus,
                resultat: Err(erreur),
            }
        }
    };
    debug!("jetons: {}", format_tokens(&jetons));

    // 2) RPN
    let rpn = to_rpn(&jetons);

    // 3) Valeur
    let resultat = evaluer(&rpn);

    Calcul {
        jetons,
        rpn,
        inconnus,
        resultat,
    }
}
