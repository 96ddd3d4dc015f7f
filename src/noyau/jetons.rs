// src/noyau/jetons.rs
//
// Modèle des jetons + table des opérateurs (constante, jamais modifiée).
//
// Forme postfixe sérialisée : chaque jeton = 1 marqueur + sa charge utile.
//   #12   nombre
//   $un-  opérateur (code)
//   @sin  fonction
// Les marqueurs délimitent les jetons : "#12#3$+" se relit sans ambiguïté.

pub const MARQUEUR_NOMBRE: char = '#';
pub const MARQUEUR_OPERATEUR: char = '$';
pub const MARQUEUR_FONCTION: char = '@';

pub fn est_marqueur(c: char) -> bool {
    matches!(c, MARQUEUR_NOMBRE | MARQUEUR_OPERATEUR | MARQUEUR_FONCTION)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Moins,
    PlusUnaire,
    MoinsUnaire,
    Fois,
    Divise,
    ParGauche,
    ParDroite,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativite {
    Gauche,
    Droite,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Jeton {
    /// Chiffres ASCII seulement (pas de séparateur, pas de point décimal).
    Nombre(String),
    Operateur(Op),
    /// Point d’extension : aucun lexeur ne le produit aujourd’hui.
    ///
    /// Contrat : une fonction est unaire, reste collée à son argument
    /// (elle sort de la pile juste après la `)` qui le ferme), et doit être
    /// résolue par nom au moment de l’évaluation.
    Fonction(String),
}

impl Op {
    /// Table complète (ordre stable, sert aux recherches par code).
    pub const TOUS: [Op; 8] = [
        Op::Plus,
        Op::Moins,
        Op::PlusUnaire,
        Op::MoinsUnaire,
        Op::Fois,
        Op::Divise,
        Op::ParGauche,
        Op::ParDroite,
    ];

    /// Code écrit dans la forme postfixe (après `$`).
    pub fn code(self) -> &'static str {
        match self {
            Op::Plus => "+",
            Op::Moins => "-",
            Op::PlusUnaire => "un+",
            Op::MoinsUnaire => "un-",
            Op::Fois => "*",
            Op::Divise => "/",
            Op::ParGauche => "(",
            Op::ParDroite => ")",
        }
    }

    /// Symbole tel que tapé par l’utilisateur.
    pub fn symbole(self) -> &'static str {
        match self {
            Op::Plus | Op::PlusUnaire => "+",
            Op::Moins | Op::MoinsUnaire => "-",
            Op::Fois => "*",
            Op::Divise => "/",
            Op::ParGauche => "(",
            Op::ParDroite => ")",
        }
    }

    /// `)` n’a pas de priorité : elle est traitée structurellement.
    pub fn priorite(self) -> Option<u8> {
        match self {
            Op::ParGauche => Some(0),
            Op::Plus | Op::Moins => Some(2),
            Op::Fois | Op::Divise => Some(4),
            Op::PlusUnaire | Op::MoinsUnaire => Some(5),
            Op::ParDroite => None,
        }
    }

    /// Nombre d’opérandes consommés à l’évaluation (0 pour les parenthèses).
    pub fn arite(self) -> usize {
        match self {
            Op::PlusUnaire | Op::MoinsUnaire => 1,
            Op::Plus | Op::Moins | Op::Fois | Op::Divise => 2,
            Op::ParGauche | Op::ParDroite => 0,
        }
    }

    pub fn associativite(self) -> Associativite {
        match self {
            Op::PlusUnaire | Op::MoinsUnaire => Associativite::Droite,
            _ => Associativite::Gauche,
        }
    }

    pub fn depuis_code(code: &str) -> Option<Op> {
        Op::TOUS.into_iter().find(|op| op.code() == code)
    }
}

impl Jeton {
    /// Ajoute le jeton (marqueur + charge) à une sortie postfixe.
    pub fn ecrire_postfixe(&self, out: &mut String) {
        match self {
            Jeton::Nombre(chiffres) => {
                out.push(MARQUEUR_NOMBRE);
                out.push_str(chiffres);
            }
            Jeton::Operateur(op) => {
                out.push(MARQUEUR_OPERATEUR);
                out.push_str(op.code());
            }
            Jeton::Fonction(nom) => {
                out.push(MARQUEUR_FONCTION);
                out.push_str(nom);
            }
        }
    }
}

/// Format utilitaire (“démarche”) : liste de jetons en texte lisible.
/// Les signes unaires sont notés `u-` / `u+` pour les distinguer.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    let mut out = Vec::with_capacity(jetons.len());
    for j in jetons {
        let s = match j {
            Jeton::Nombre(chiffres) => chiffres.clone(),
            Jeton::Operateur(Op::PlusUnaire) => "u+".to_string(),
            Jeton::Operateur(Op::MoinsUnaire) => "u-".to_string(),
            Jeton::Operateur(op) => op.symbole().to_string(),
            Jeton::Fonction(nom) => nom.clone(),
        };
        out.push(s);
    }
    out.join(" ")
}
