// src/app.rs
//
// Calculatrice RPN — module App (racine)
// --------------------------------------
// Rôle:
// - Déclarer les sous-modules (options.rs)
// - Boucle sur les expressions : diagnostics, jetons, résultat
//
// Contrat de sortie (par expression, dans l’ordre) :
// - stderr : `Unknown symbol <c>` pour chaque caractère ignoré (même si un
//   nombre invalide fait ensuite échouer le lexage)
// - stdout : une ligne `Token <...> (...)` par jeton, puis le résultat
// - stderr : `error: failed to evaluate "<expr>": <cause>` si l’expression échoue
// Un échec n’arrête jamais les expressions suivantes.

pub mod options;

pub use options::Options;

use std::io::Write;

use anyhow::Result;
use log::{debug, info};

use crate::noyau::format::{format_resultat, ligne_jeton};
use crate::noyau::jetons::format_tokens;
use crate::noyau::{eval_expression, Calcul, ErreurCalcul};

/// Traite toutes les expressions. Retourne le nombre d’expressions en échec.
///
/// Seules les erreurs d’écriture (stdout/stderr) remontent en `Err`.
pub fn executer(
    expressions: &[String],
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<usize> {
    let mut echecs = 0;

    for expr in expressions {
        info!("expression {expr:?}");

        let calcul = eval_expression(expr);

        afficher_demarche(&calcul, out, err)?;

        match calcul.resultat {
            Ok(v) => writeln!(out, "{}", format_resultat(v))?,
            Err(cause) => {
                signaler(err, expr, cause)?;
                echecs += 1;
            }
        }
    }

    Ok(echecs)
}

fn afficher_demarche(calcul: &Calcul, out: &mut impl Write, err: &mut impl Write) -> Result<()> {
    for inconnu in &calcul.inconnus {
        debug!("symbole inconnu ignoré en position {}", inconnu.position);
        writeln!(err, "Unknown symbol {}", inconnu.symbole)?;
    }
    for tok in &calcul.jetons {
        writeln!(out, "{}", ligne_jeton(tok))?;
    }
    debug!("rpn: {}", format_tokens(&calcul.rpn));
    Ok(())
}

fn signaler(err: &mut impl Write, expr: &str, cause: ErreurCalcul) -> Result<()> {
    let e = anyhow::Error::new(cause).context(format!("failed to evaluate {expr:?}"));
    writeln!(err, "error: {e:#}")?;
    Ok(())
}
