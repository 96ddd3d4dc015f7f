// src/cli.rs
//
// Mode ligne de commande : calculatrice_rpn [options] <expression>
// Sans argument, main.rs ouvre la fenêtre à la place.

use calculatrice_rpn::noyau::evaluer_avec_demarche;
use calculatrice_rpn::noyau::format::{format_resultat, DECIMALES_DEFAUT, DECIMALES_MAX};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, PartialEq)]
pub enum Commande {
    Aide,
    Version,
    Evaluer(OptionsCli),
}

#[derive(Debug, PartialEq)]
pub struct OptionsCli {
    pub expression: String,
    pub decimales: usize,
    pub demarche: bool,
}

pub fn print_usage() {
    println!("calculatrice_rpn v{VERSION}");
    println!("Usage: calculatrice_rpn [options] <expression>");
    println!();
    println!("Options:");
    println!("  --decimales N         décimales affichées (défaut: {DECIMALES_DEFAUT}, max: {DECIMALES_MAX})");
    println!("  --demarche            affiche aussi le texte normalisé, les jetons et la forme postfixe");
    println!("  --                    tout ce qui suit fait partie de l’expression");
    println!("  --version, -v         affiche la version");
    println!("  --help, -h            affiche cette aide");
    println!();
    println!("Examples:");
    println!("  calculatrice_rpn \"(3+4)*2\"");
    println!("  calculatrice_rpn --decimales 3 1/3");
    println!("  calculatrice_rpn -5+3");
}

/// `args[0]` est le nom du programme. Les morceaux d’expression sont recollés
/// avec un espace (les blancs sont ignorés par le noyau).
pub fn parse_args(args: &[String]) -> Result<Commande, String> {
    let mut decimales = DECIMALES_DEFAUT;
    let mut demarche = false;
    let mut morceaux: Vec<&str> = Vec::new();
    let mut i = 1;

    while i < args.len() {
        let arg = args[i].as_str();

        match arg {
            "--version" | "-v" => return Ok(Commande::Version),
            "--help" | "-h" => return Ok(Commande::Aide),
            "--demarche" => demarche = true,
            "--decimales" => {
                i += 1;
                let n = args
                    .get(i)
                    .ok_or("--decimales attend un nombre")?
                    .parse::<usize>()
                    .map_err(|e| format!("--decimales: {e}"))?;
                decimales = n.min(DECIMALES_MAX);
            }
            "--" => {
                morceaux.extend(args[i + 1..].iter().map(String::as_str));
                break;
            }
            // "-5+3" est une expression, pas une option
            _ if arg.starts_with("--") => return Err(format!("option inconnue: {arg}")),
            _ => morceaux.push(arg),
        }
        i += 1;
    }

    if morceaux.is_empty() {
        return Err("expression manquante".to_string());
    }

    Ok(Commande::Evaluer(OptionsCli {
        expression: morceaux.join(" "),
        decimales,
        demarche,
    }))
}

/// Exécute la ligne de commande ; retourne le code de sortie.
pub fn executer(args: &[String]) -> i32 {
    let options = match parse_args(args) {
        Ok(Commande::Aide) => {
            print_usage();
            return 0;
        }
        Ok(Commande::Version) => {
            println!("calculatrice_rpn v{VERSION}");
            return 0;
        }
        Ok(Commande::Evaluer(options)) => options,
        Err(e) => {
            eprintln!("erreur: {e}");
            print_usage();
            return 2;
        }
    };

    match evaluer_avec_demarche(&options.expression) {
        Ok((valeur, d)) => {
            if options.demarche {
                println!("normalisé : {}", d.normalise);
                println!("jetons    : {}", d.jetons);
                println!("postfixe  : {}", d.postfixe);
            }
            println!("{}", format_resultat(valeur, options.decimales));
            0
        }
        Err(e) => {
            eprintln!("erreur: {e}");
            1
        }
    }
}
