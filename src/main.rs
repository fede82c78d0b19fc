// src/main.rs
//
// Calculatrice sombre — point d’entrée NATIF + WEB (WASM)
// -------------------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : eframe::run_native + NativeOptions
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>
// - Thème sombre imposé (la calculatrice n’a pas de thème clair)
// - Journalisation (natif) : tracing-subscriber, filtre via RUST_LOG (défaut: info)
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
mod noyau;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice sombre";

fn installer_theme(ctx: &egui::Context) {
    ctx.set_theme(egui::Theme::Dark);
}

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn installer_journal() {
    use tracing_subscriber::EnvFilter;

    let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filtre).init();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    installer_journal();
    tracing::info!(titre = TITRE_APP, "démarrage");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([520.0, 720.0])
            .with_min_inner_size([460.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|cc| {
            installer_theme(&cc.egui_ctx);
            Ok(Box::<AppCalc>::default())
        }),
    )
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{installer_theme, AppCalc, TITRE_APP};

    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Document, HtmlCanvasElement};

    /// Canvas hôte attendu dans la page.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Chargement de la page : titre d’onglet, puis calculatrice dans le canvas.
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| echec("pas de document (hors navigateur ?)"))?;
        document.set_title(TITRE_APP);

        let canvas = canvas_hote(&document)?;
        tracing::info!(titre = TITRE_APP, canvas = CANVAS_ID, "démarrage (web)");

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|cc| {
                    installer_theme(&cc.egui_ctx);
                    Ok(Box::<AppCalc>::default())
                }),
            )
            .await
    }

    fn canvas_hote(document: &Document) -> Result<HtmlCanvasElement, JsValue> {
        document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| echec("canvas hôte absent de la page"))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| echec("l’élément hôte n’est pas un <canvas>"))
    }

    fn echec(msg: &str) -> JsValue {
        tracing::error!(msg, "démarrage web impossible");
        JsValue::from_str(msg)
    }
}
