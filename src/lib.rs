// ============================================================================
// GIVE PROPS - FRONTEND MVVM (RUST PURO + NEAR)
// ============================================================================
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: ViewController (estado + lógica UI, sin DOM)
// - Services: Wallet / contrato / alertas detrás de traits
// - State: Rc<RefCell> + subscribers
// - Models: Estructuras compartidas con el contrato
// ============================================================================

pub mod app;
pub mod config;
pub mod dom;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
pub mod views;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::app::{is_full_render_error, render_fatal, App};
use crate::config::NearConfig;
use crate::dom::on_global_event;
use crate::error::AppError;
use crate::services::{BrowserAlerts, NearContract, RpcClient, WalletSession};
use crate::state::UpdateType;
use crate::viewmodels::ViewController;

// Instancia global de App (una por página)
thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🚀 Give Props - Rust Puro + MVVM");

    spawn_local(async {
        if let Err(e) = bootstrap().await {
            log::error!("❌ [MAIN] No se pudo arrancar: {}", e);
            render_fatal(&format!("Could not start the app: {}", e));
        }
    });

    Ok(())
}

/// Conectar con NEAR, montar la App y lanzar la carga inicial
async fn bootstrap() -> Result<(), AppError> {
    let config = NearConfig::from_env()?;
    log::info!("⚙️ [MAIN] Red {} / contrato {}", config.network_id, config.contract_name);

    let wallet = WalletSession::connect(&config).await?;
    let contract = NearContract::new(&config.contract_name, RpcClient::new(&config.node_url), wallet.clone());
    let controller = ViewController::new(Rc::new(wallet), Rc::new(contract), Rc::new(BrowserAlerts));

    let mut app = App::new(controller.clone()).map_err(|e| AppError::from_dom("mount", &e))?;
    app.render().map_err(|e| AppError::from_dom("render", &e))?;
    APP.with(|cell| *cell.borrow_mut() = Some(app));

    watch_session_changes(&controller).map_err(|e| AppError::from_dom("listeners", &e))?;

    controller.initialize().await;
    Ok(())
}

/// Logout en otra pestaña (evento `storage`): releer la sesión.
/// Se registra UNA sola vez.
fn watch_session_changes(controller: &ViewController) -> Result<(), JsValue> {
    let Some(win) = web_sys::window() else {
        return Ok(());
    };

    let controller = controller.clone();
    on_global_event(&win, "storage", move |_e| {
        let controller = controller.clone();
        spawn_local(async move {
            controller.refresh_session().await;
        });
    })
}

/// Actualizar la app con tipo específico (incremental con fallback a completo)
pub fn rerender_app_with_type(update_type: UpdateType) {
    APP.with(|app_cell| {
        let needs_full_render = match update_type {
            UpdateType::FullRender => true,
            UpdateType::Incremental(update) => match app_cell.borrow().as_ref() {
                Some(app) => match app.update_incremental(update) {
                    Ok(()) => false,
                    Err(e) if is_full_render_error(&e) => {
                        log::debug!("🔄 [UPDATE] {:?} requiere re-render completo", update);
                        true
                    }
                    Err(e) => {
                        log::error!("❌ [UPDATE] Error en actualización incremental: {:?}", e);
                        false
                    }
                },
                None => {
                    log::warn!("⚠️ [UPDATE] App no está inicializada");
                    false
                }
            },
        };

        if needs_full_render {
            if let Some(app) = app_cell.borrow_mut().as_mut() {
                if let Err(e) = app.render() {
                    log::error!("❌ [RERENDER] Error re-renderizando: {:?}", e);
                }
            }
        }
    });
}
