// src/main.rs
//
// Calculatrice RPN — point d’entrée CLI
// -------------------------------------
// Une expression par argument : jetons (diagnostic) puis résultat.
// Code de sortie 0 même si une expression échoue (elle est signalée sur stderr).

#![forbid(unsafe_code)]

use anyhow::Result;
use log::info;
use structopt::StructOpt;

mod app;
mod noyau;

use app::Options;

fn main() -> Result<()> {
    let options = Options::from_args();

    let env = env_logger::Env::default().default_filter_or(options.filtre_log());
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .init();

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let echecs = app::executer(&options.expressions, &mut stdout.lock(), &mut stderr.lock())?;

    info!(
        "{} expression(s), {echecs} en échec",
        options.expressions.len()
    );
    Ok(())
}
