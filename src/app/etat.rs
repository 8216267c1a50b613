//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état du traceur (entrée, valeur de x, résultat, erreur,
//! démarche, courbe échantillonnée, réglages du repère) et offrir des opérations
//! simples (C/CLR/AC, réglages bornés) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing d’expression).
//! - Actions déterministes, sans effet de bord caché.
//! - Garde-fous : bornes sur le pas, l’échelle et le nombre d’échantillons.

use traceur_rpn::{Demarche, ECHANTILLONS_MAX};

/// Domaine tracé par défaut : x ∈ [-10, 10].
pub const DEBUT_DEFAUT: f64 = -10.0;
pub const FIN_DEFAUT: f64 = 10.0;

/// Pas d’échantillonnage par défaut et bornes.
pub const PAS_DEFAUT: f64 = 0.1;
pub const PAS_MIN: f64 = 0.001;
pub const PAS_MAX: f64 = 10.0;

/// Échelle (pixels par unité) par défaut et bornes.
pub const ECHELLE_DEFAUT: f64 = 20.0;
pub const ECHELLE_MIN: f64 = 1.0;
pub const ECHELLE_MAX: f64 = 400.0;

/// Garde-fou : |début|, |fin| bornés.
pub const DOMAINE_MAX: f64 = 1.0e6;

#[derive(Clone, Debug)]
pub struct AppTraceur {
    // --- entrées utilisateur ---
    pub entree: String,
    pub entree_x: String,

    // --- sorties ---
    pub resultat: String, // valeur numérique (peut être "NaN" / "inf")
    pub erreur: String,   // message d’erreur (si compilation/éval échoue)

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- courbe ---
    pub courbe: Vec<(f64, f64)>,
    pub courbe_source: String,

    // --- réglages du repère ---
    pub debut: f64,
    pub fin: f64,
    pub pas: f64,
    pub echelle: f64,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppTraceur {
    fn default() -> Self {
        Self {
            entree: String::new(),
            entree_x: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
            courbe: Vec::new(),
            courbe_source: String::new(),
            debut: DEBUT_DEFAUT,
            fin: FIN_DEFAUT,
            pas: PAS_DEFAUT,
            echelle: ECHELLE_DEFAUT,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppTraceur {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrées + résultats + courbe + réglages par défaut).
    pub fn reset_total(&mut self) {
        *self = Self::default();
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + démarche + courbe (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.courbe.clear();
        self.courbe_source.clear();
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// Choix UX :
    /// - On CONSERVE la courbe (dernier tracé) pour ne pas “effacer l’écran” sur une faute.
    /// - On coupe résultat + démarche (non fiables si la compilation échoue).
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.resultat.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat numérique + sa démarche.
    pub fn set_resultat(&mut self, valeur: f64, demarche: Demarche) {
        self.erreur.clear();
        self.resultat = format_valeur(valeur);
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// Utilitaire : déposer une courbe échantillonnée + sa démarche.
    pub fn set_courbe(&mut self, source: &str, points: Vec<(f64, f64)>, demarche: Demarche) {
        self.erreur.clear();
        self.courbe = points;
        self.courbe_source = source.to_string();
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /* ------------------------ Réglages (bornés) ------------------------ */

    pub fn set_pas(&mut self, pas: f64) {
        if pas.is_finite() {
            self.pas = pas.clamp(PAS_MIN, PAS_MAX);
        }
    }

    pub fn set_echelle(&mut self, echelle: f64) {
        if echelle.is_finite() {
            self.echelle = echelle.clamp(ECHELLE_MIN, ECHELLE_MAX);
        }
    }

    /// Domaine [début, fin] : bornes remises dans l’ordre si inversées.
    pub fn set_domaine(&mut self, debut: f64, fin: f64) {
        if !(debut.is_finite() && fin.is_finite()) {
            return;
        }
        let (a, b) = if debut <= fin { (debut, fin) } else { (fin, debut) };
        self.debut = a.clamp(-DOMAINE_MAX, DOMAINE_MAX);
        self.fin = b.clamp(-DOMAINE_MAX, DOMAINE_MAX);
    }

    /// Pas effectif pour le tracé : élargi si le domaine demanderait plus de
    /// `ECHANTILLONS_MAX` échantillons (que le noyau refuserait).
    pub fn pas_effectif(&self) -> f64 {
        let largeur = self.fin - self.debut;
        let pas_min = largeur / (ECHANTILLONS_MAX - 1) as f64;
        self.pas.max(pas_min)
    }
}

/// Affichage d’une valeur : IEEE-754 tel quel (NaN, inf).
pub fn format_valeur(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v == f64::INFINITY {
        "+∞".to_string()
    } else if v == f64::NEG_INFINITY {
        "-∞".to_string()
    } else {
        format!("{v}")
    }
}

/// Lecture de la valeur de x saisie : vide => 0.
pub fn lire_x(s: &str) -> Result<f64, String> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(0.0);
    }
    s.parse::<f64>()
        .map_err(|_| format!("valeur de x invalide: \"{s}\""))
}
