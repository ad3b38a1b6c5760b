//! src/app/options.rs
//!
//! Arguments de la ligne de commande.
//!
//! Pas de fichier de configuration : tout passe par les arguments
//! (et `RUST_LOG`, qui garde la priorité sur `-v`).

use structopt::clap::AppSettings;
use structopt::StructOpt;

// AllowLeadingHyphen : "-2 * 3" est une expression, pas un drapeau inconnu.
// Seuls les drapeaux connus (-v, -h, -V) restent interprétés.
#[derive(StructOpt, Debug)]
#[structopt(
    name = "calculatrice_rpn",
    about = "Evaluates arithmetic expressions (+ - * / ^, parentheses).",
    setting = AppSettings::AllowLeadingHyphen
)]
pub struct Options {
    /// Expressions to evaluate, one per argument (e.g. "3 + 4 * 2").
    #[structopt(allow_hyphen_values = true)]
    pub expressions: Vec<String>,

    /// Log verbosity: -v info, -vv debug, -vvv trace.
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    pub verbosity: u8,
}

impl Options {
    /// Filtre env_logger par défaut, d’après le nombre de `-v`.
    pub fn filtre_log(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
