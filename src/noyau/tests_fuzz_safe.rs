//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : le noyau donne EXACTEMENT la valeur d’un évaluateur
//!   de référence indépendant (descente récursive, gauche à droite)

use std::time::{Duration, Instant};

use super::erreur::ErreurCalcul;
use super::eval_expression;
use super::jetons::Operateur;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Évaluateur de référence ------------------------ */

// Descente récursive classique sur les octets, sans passer par les jetons.
// Niveaux 0 (+ -), 1 (* /), 2 (^), tous associatifs à gauche.
struct Reference<'a> {
    src: &'a [u8],
    i: usize,
}

impl Reference<'_> {
    fn evaluer(s: &str) -> f64 {
        let mut r = Reference {
            src: s.as_bytes(),
            i: 0,
        };
        r.niveau(0)
    }

    fn courant(&mut self) -> Option<u8> {
        while self.i < self.src.len() && self.src[self.i] == b' ' {
            self.i += 1;
        }
        self.src.get(self.i).copied()
    }

    fn niveau(&mut self, p: u8) -> f64 {
        if p > 2 {
            return self.atome();
        }
        let mut v = self.niveau(p + 1);
        while let Some(op) = self.courant().and_then(|c| Operateur::depuis_char(c as char)) {
            if op.precedence() != p {
                break;
            }
            self.i += 1;
            let d = self.niveau(p + 1);
            v = op.appliquer(v, d);
        }
        v
    }

    fn atome(&mut self) -> f64 {
        if self.courant() == Some(b'(') {
            self.i += 1;
            let v = self.niveau(0);
            assert_eq!(self.courant(), Some(b')'), "référence: ')' attendue");
            self.i += 1;
            return v;
        }
        let debut = self.i;
        while self.i < self.src.len()
            && (self.src[self.i].is_ascii_digit() || self.src[self.i] == b'.')
        {
            self.i += 1;
        }
        let txt = std::str::from_utf8(&self.src[debut..self.i]).unwrap();
        txt.parse()
            .unwrap_or_else(|_| panic!("référence: nombre {txt:?}"))
    }
}

fn meme_valeur(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    match rng.pick(8) {
        0 => "0".to_string(),
        1 => "0.5".to_string(),
        2 => "2.5".to_string(),
        3 => "10".to_string(),
        _ => format!("{}", rng.pick(9) + 1),
    }
}

fn gen_op(rng: &mut Rng) -> &'static str {
    match rng.pick(9) {
        0 | 1 => "+",
        2 | 3 => "-",
        4 | 5 => "*",
        6 | 7 => "/",
        // ^ plus rare : évite des valeurs énormes partout
        _ => "^",
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    let sep = if rng.coin() { " " } else { "" };
    let termes = 1 + rng.pick(4) as usize;

    let mut out = String::new();
    for k in 0..termes {
        if k > 0 {
            out.push_str(sep);
            out.push_str(gen_op(rng));
            out.push_str(sep);
        }
        if depth > 0 && rng.pick(3) == 0 {
            out.push('(');
            out.push_str(&gen_expr(rng, depth - 1));
            out.push(')');
        } else {
            out.push_str(&gen_nombre(rng));
        }
    }
    out
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_conforme_a_la_reference() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    for _ in 0..400 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        let attendu = Reference::evaluer(&expr);

        let c = eval_expression(&expr);
        assert!(c.inconnus.is_empty(), "expr={expr:?}");

        let v = c
            .resultat
            .unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
        assert!(
            meme_valeur(v, attendu),
            "expr={expr:?} noyau={v} reference={attendu}"
        );
    }
}

#[test]
fn fuzz_safe_determinisme() {
    let generer = |seed| {
        let mut rng = Rng::new(seed);
        (0..50)
            .map(|_| gen_expr(&mut rng, 3))
            .collect::<Vec<_>>()
    };
    let a = generer(0xBADC0DE_u64);
    assert_eq!(a, generer(0xBADC0DE_u64));

    for expr in &a {
        let x = eval_expression(expr);
        let y = eval_expression(expr);
        match (x.resultat, y.resultat) {
            (Ok(p), Ok(q)) => assert!(meme_valeur(p, q)),
            (p, q) => assert_eq!(p, q),
        }
    }
}

#[test]
fn fuzz_safe_bruit_sans_panique() {
    // alphabet volontairement hostile : parenthèses en vrac, points, inconnus
    const ALPHABET: &[u8] = b"0123456789..++-*/^^(()) @x";

    let t0 = Instant::now();
    let max = Duration::from_millis(300);
    let mut rng = Rng::new(0x5EED_u64);

    let mut vus_ok = 0usize;
    let mut vus_err = 0usize;

    for _ in 0..500 {
        budget(t0, max);

        let n = rng.pick(16) as usize;
        let expr: String = (0..n)
            .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize] as char)
            .collect();
        let attendus = expr.chars().filter(|c| *c == '@' || *c == 'x').count();

        let c = eval_expression(&expr);
        match c.resultat {
            Ok(_) => {
                assert_eq!(c.inconnus.len(), attendus, "expr={expr:?}");
                vus_ok += 1;
            }
            Err(ErreurCalcul::PileInsuffisante { .. } | ErreurCalcul::ExpressionMalformee { .. }) => {
                assert_eq!(c.inconnus.len(), attendus, "expr={expr:?}");
                vus_err += 1;
            }
            Err(ErreurCalcul::NombreInvalide { texte, position }) => {
                assert!(
                    texte == "." || texte.matches('.').count() > 1,
                    "expr={expr:?} texte={texte:?}"
                );
                // seuls les inconnus avant le nombre fautif sont connus
                let avant = expr[..position]
                    .chars()
                    .filter(|c| *c == '@' || *c == 'x')
                    .count();
                assert_eq!(c.inconnus.len(), avant, "expr={expr:?}");
                assert!(c.jetons.is_empty());
                vus_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(vus_ok > 0, "aucun succès vu");
    assert!(vus_err > 0, "aucune erreur vue");
}

#[test]
fn fuzz_safe_longue_chaine_et_imbrication() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    // 2000 termes : pile d’opérateurs bornée (gauche à droite)
    let somme = vec!["1"; 2000].join(" + ");
    assert_eq!(eval_expression(&somme).resultat, Ok(2000.0));

    // imbrication profonde : tout est itératif, pas de récursion
    let profond = format!("{}2{}", "(".repeat(5000), ")".repeat(5000));
    assert_eq!(eval_expression(&profond).resultat, Ok(2.0));

    budget(t0, max);
}
