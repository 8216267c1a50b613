// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppTraceur (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand le champ est focus)
// - "=" : évalue une fois pour la valeur de x saisie (vide => 0)
// - "Tracer" : compile une fois, échantillonne sur [début, fin]
// - Zone de tracé : axes + flèches + graduations + points + ligne brisée,
//   coordonnées écran/math au survol
//
// Le noyau n’est appelé qu’ici, via compile / evaluate.

use eframe::egui;
use tracing::{debug, info};

use traceur_rpn::compile;

use super::etat::{lire_x, AppTraceur, ECHELLE_MAX, ECHELLE_MIN, PAS_MAX, PAS_MIN};
use super::repere::Repere;

/// Hauteur de la zone de tracé (pixels).
const HAUTEUR_TRACE: f32 = 420.0;

/// Longueur des graduations et des pointes de flèche (pixels).
const DEMI_GRADUATION: f32 = 5.0;
const LONGUEUR_FLECHE: f32 = 10.0;

/// Rayon des points échantillonnés (pixels).
const RAYON_POINT: f32 = 2.0;

impl AppTraceur {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Traceur RPN");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_reglages(ui);

                ui.add_space(8.0);
                self.ui_trace(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("f(x) :");

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: x^2+1, sin(x)*x, log(2,x), rt(3,x)")
                .id_salt("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Enter trace (ou évalue si pas de variable) ---
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.tracer_via_noyau();
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            ui.label("x =");
            ui.add(
                egui::TextEdit::singleline(&mut self.entree_x)
                    .desired_width(90.0)
                    .hint_text("0")
                    .id_salt("entree_x_edit"),
            );

            let eq = ui.add_sized([48.0, 28.0], egui::Button::new("="));
            if eq.clicked() {
                self.eval_via_noyau();
            }

            let trace = ui.add_sized([72.0, 28.0], egui::Button::new("Tracer"));
            if trace.clicked() {
                self.tracer_via_noyau();
            }

            ui.separator();

            // Contrat: C = entrée seulement ; CLR = résultats + courbe ; AC = tout
            if bouton(ui, "C", "Efface seulement l’entrée") {
                self.clear_entree();
            }
            if bouton(ui, "CLR", "Efface résultat + erreur + démarche + courbe") {
                self.clear_resultats();
            }
            if bouton(ui, "AC", "Remise à zéro totale") {
                self.reset_total();
            }
        });

        if !self.resultat.is_empty() {
            ui.add_space(4.0);
            ui.monospace(format!("= {}", self.resultat));
        }

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_reglages(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            let (mut debut, mut fin) = (self.debut, self.fin);
            ui.label("de");
            let r1 = ui.add(egui::DragValue::new(&mut debut).speed(0.5));
            ui.label("à");
            let r2 = ui.add(egui::DragValue::new(&mut fin).speed(0.5));
            if r1.changed() || r2.changed() {
                self.set_domaine(debut, fin);
            }

            ui.separator();

            ui.label("pas :");
            let mut pas = self.pas;
            let resp = ui.add(
                egui::DragValue::new(&mut pas)
                    .speed(0.01)
                    .range(PAS_MIN..=PAS_MAX),
            );
            if resp.changed() {
                self.set_pas(pas);
            }

            ui.separator();

            ui.label("échelle :");
            let mut echelle = self.echelle;
            let resp = ui.add(
                egui::DragValue::new(&mut echelle)
                    .speed(1)
                    .range(ECHELLE_MIN..=ECHELLE_MAX)
                    .suffix(" px"),
            );
            if resp.changed() {
                self.set_echelle(echelle);
            }
        });
    }

    fn ui_trace(&mut self, ui: &mut egui::Ui) {
        let taille = egui::vec2(ui.available_width(), HAUTEUR_TRACE);
        let (resp, painter) = ui.allocate_painter(taille, egui::Sense::hover());
        let rect = resp.rect;

        painter.rect_filled(rect, 0.0, ui.visuals().extreme_bg_color);

        let repere = Repere::new(rect, self.echelle as f32);
        let c = repere.centre;
        let axe = egui::Stroke::new(2.0, ui.visuals().text_color());
        let fin_trait = egui::Stroke::new(1.0, ui.visuals().text_color());

        // Axes + flèches
        painter.line_segment([egui::pos2(rect.left(), c.y), egui::pos2(rect.right(), c.y)], axe);
        painter.line_segment([egui::pos2(c.x, rect.bottom()), egui::pos2(c.x, rect.top())], axe);
        fleche(&painter, egui::pos2(rect.right() - LONGUEUR_FLECHE, c.y), egui::pos2(rect.right(), c.y), axe);
        fleche(&painter, egui::pos2(c.x, rect.top() + LONGUEUR_FLECHE), egui::pos2(c.x, rect.top()), axe);

        // Graduations (chaque unité entière du domaine, partie visible seulement)
        let (x_gauche, y_haut) = repere.vers_math(rect.left_top());
        let (x_droite, y_bas) = repere.vers_math(rect.right_bottom());
        for k in graduations(self.debut.max(x_gauche), self.fin.min(x_droite)) {
            let px = repere.vers_ecran(k, 0.0).x;
            painter.line_segment(
                [egui::pos2(px, c.y - DEMI_GRADUATION), egui::pos2(px, c.y + DEMI_GRADUATION)],
                fin_trait,
            );
        }
        for k in graduations(self.debut.max(y_bas), self.fin.min(y_haut)) {
            let py = repere.vers_ecran(0.0, k).y;
            painter.line_segment(
                [egui::pos2(c.x - DEMI_GRADUATION, py), egui::pos2(c.x + DEMI_GRADUATION, py)],
                fin_trait,
            );
        }

        // Courbe : points + ligne brisée (coupée sur NaN/inf ou hors zone)
        let couleur_ligne = egui::Color32::from_rgb(60, 120, 220);
        let zone_utile = rect.expand(rect.height());
        for morceau in morceaux_visibles(&self.courbe, &repere, zone_utile) {
            for p in &morceau {
                painter.circle_filled(*p, RAYON_POINT, egui::Color32::RED);
            }
            if morceau.len() > 1 {
                painter.add(egui::Shape::line(morceau, egui::Stroke::new(2.0, couleur_ligne)));
            }
        }

        // Survol : coordonnées écran + math
        if let Some(p) = resp.hover_pos() {
            let (mx, my) = repere.vers_math(p);
            let local = p - rect.min;
            resp.on_hover_text(format!(
                "Écran  X: {:.2}, Y: {:.2}\nMath   X: {mx:.2}, Y: {my:.2}",
                local.x, local.y
            ));
        }

        if !self.courbe_source.is_empty() {
            ui.small(format!("y = {}", self.courbe_source));
        }
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
            });
    }

    /// Évalue l’expression une fois, pour la valeur de x saisie.
    fn eval_via_noyau(&mut self) {
        self.focus_entree = true;

        let s = self.entree.trim();
        if s.is_empty() {
            self.set_erreur("Entrée vide");
            return;
        }

        let x = match lire_x(&self.entree_x) {
            Ok(x) => x,
            Err(msg) => {
                self.set_erreur(msg);
                return;
            }
        };

        match compile(s).and_then(|e| Ok((e.evaluate(x)?, e.demarche()))) {
            Ok((v, demarche)) => self.set_resultat(v, demarche),
            Err(err) => {
                debug!(source = s, %err, "évaluation refusée");
                self.set_erreur(err.to_string());
            }
        }
    }

    /// Compile une fois puis échantillonne ; sans variable, on affiche la valeur.
    fn tracer_via_noyau(&mut self) {
        self.focus_entree = true;

        let s = self.entree.trim().to_string();
        if s.is_empty() {
            self.set_erreur("Entrée vide");
            return;
        }

        let expr = match compile(&s) {
            Ok(e) => e,
            Err(err) => {
                debug!(source = %s, %err, "tracé refusé");
                self.set_erreur(err.to_string());
                return;
            }
        };

        if !expr.uses_variable() {
            // déjà compilée : on évalue directement
            let resultat = lire_x(&self.entree_x)
                .and_then(|x| expr.evaluate(x).map_err(|err| err.to_string()));
            match resultat {
                Ok(v) => self.set_resultat(v, expr.demarche()),
                Err(msg) => self.set_erreur(msg),
            }
            return;
        }

        let points = expr.sample(self.debut, self.fin, self.pas_effectif());
        info!(source = %s, points = points.len(), "courbe échantillonnée");
        self.set_courbe(expr.source(), points, expr.demarche());
    }
}

fn bouton(ui: &mut egui::Ui, label: &str, tip: &str) -> bool {
    ui.add_sized([48.0, 28.0], egui::Button::new(label))
        .on_hover_text(tip)
        .clicked()
}

fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
    ui.add_space(4.0);
    ui.label(format!("{titre} :"));
    egui::Frame::group(ui.style())
        .fill(ui.visuals().extreme_bg_color)
        .show(ui, |ui| {
            ui.push_id(id, |ui| {
                ui.set_min_width(ui.available_width());
                ui.monospace(contenu);
            });
        });
}

/// Segment + deux pointes à ±30° (π/6) à l’extrémité `b`.
fn fleche(painter: &egui::Painter, a: egui::Pos2, b: egui::Pos2, trait_: egui::Stroke) {
    painter.line_segment([a, b], trait_);

    let angle = (b.y - a.y).atan2(b.x - a.x);
    for delta in [-std::f32::consts::FRAC_PI_6, std::f32::consts::FRAC_PI_6] {
        let pointe = egui::pos2(
            b.x - LONGUEUR_FLECHE * (angle + delta).cos(),
            b.y - LONGUEUR_FLECHE * (angle + delta).sin(),
        );
        painter.line_segment([b, pointe], trait_);
    }
}

/// Abscisses entières de [début, fin].
fn graduations(debut: f64, fin: f64) -> impl Iterator<Item = f64> {
    let premier = debut.ceil() as i64;
    let dernier = fin.floor() as i64;
    (premier..=dernier).map(|k| k as f64)
}

/// Découpe la courbe en morceaux continus de points écran affichables.
fn morceaux_visibles(
    courbe: &[(f64, f64)],
    repere: &Repere,
    zone: egui::Rect,
) -> Vec<Vec<egui::Pos2>> {
    let mut morceaux = Vec::new();
    let mut courant: Vec<egui::Pos2> = Vec::new();

    for &(x, y) in courbe {
        let p = repere.vers_ecran(x, y);
        if y.is_finite() && p.x.is_finite() && p.y.is_finite() && zone.contains(p) {
            courant.push(p);
        } else if !courant.is_empty() {
            morceaux.push(std::mem::take(&mut courant));
        }
    }
    if !courant.is_empty() {
        morceaux.push(courant);
    }
    morceaux
}
