// src/app/repere.rs
//
// Repère cartésien de la zone de tracé (présentation seulement).
// Origine au centre du rectangle, y vers le haut, `echelle` pixels par unité.
//
//   écran = (cx + x·s, cy − y·s)
//   math  = ((px − cx)/s, (cy − py)/s)

use eframe::egui::{pos2, Pos2, Rect};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Repere {
    pub centre: Pos2,
    pub echelle: f32,
}

impl Repere {
    pub fn new(rect: Rect, echelle: f32) -> Self {
        Self {
            centre: rect.center(),
            echelle,
        }
    }

    pub fn vers_ecran(&self, x: f64, y: f64) -> Pos2 {
        let s = f64::from(self.echelle);
        pos2(
            (f64::from(self.centre.x) + x * s) as f32,
            (f64::from(self.centre.y) - y * s) as f32,
        )
    }

    pub fn vers_math(&self, p: Pos2) -> (f64, f64) {
        let s = f64::from(self.echelle);
        (
            f64::from(p.x - self.centre.x) / s,
            f64::from(self.centre.y - p.y) / s,
        )
    }
}
