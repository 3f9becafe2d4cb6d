use eframe::egui;

use crate::ui::render::ResultTone;

#[derive(Debug, Clone, Copy)]
pub struct TonePalette {
    pub fill: egui::Color32,
    pub stroke: egui::Color32,
    pub text: egui::Color32,
}

pub fn tone_palette(tone: ResultTone) -> TonePalette {
    match tone {
        ResultTone::Pass => TonePalette {
            fill: egui::Color32::from_rgb(32, 74, 45),
            stroke: egui::Color32::from_rgb(87, 171, 110),
            text: egui::Color32::from_rgb(214, 245, 222),
        },
        ResultTone::Fail => TonePalette {
            fill: egui::Color32::from_rgb(94, 40, 40),
            stroke: egui::Color32::from_rgb(196, 96, 96),
            text: egui::Color32::from_rgb(250, 220, 220),
        },
        ResultTone::Error => TonePalette {
            fill: egui::Color32::from_rgb(92, 72, 28),
            stroke: egui::Color32::from_rgb(214, 170, 72),
            text: egui::Color32::from_rgb(252, 238, 204),
        },
        ResultTone::Neutral => TonePalette {
            fill: egui::Color32::from_rgb(48, 50, 56),
            stroke: egui::Color32::from_rgb(110, 114, 124),
            text: egui::Color32::from_rgb(230, 232, 236),
        },
    }
}

pub fn lighten_color(c: egui::Color32, t: f32) -> egui::Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |channel: u8| -> u8 {
        let channel = channel as f32;
        (channel + (255.0 - channel) * t).round().clamp(0.0, 255.0) as u8
    };
    egui::Color32::from_rgba_unmultiplied(mix(c.r()), mix(c.g()), mix(c.b()), c.a())
}
