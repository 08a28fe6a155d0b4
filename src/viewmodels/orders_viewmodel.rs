// ============================================================================
// ORDERS VIEWMODEL - Tablero de pedidos con polling
// ============================================================================
// Cada tick pide los pedidos abiertos y reemplaza el tablero entero: no hay
// diffing incremental, la identidad de las cards solo vive en la clave DOM
// de la mesa. Un tick fallido deja el render anterior intacto. El tick y las
// acciones one-shot del usuario se intercalan sin exclusión mutua: marcar
// una línea entregada puede cruzarse con un tick y reaparecer hasta que el
// siguiente tick refleje la verdad del servidor (comportamiento heredado,
// documentado en DESIGN.md).
// ============================================================================

use gloo_timers::callback::Interval;

use crate::dom::{get_element_by_id, remove_all, set_all_visible, set_text_content};
use crate::services::ApiClient;
use crate::state::{BoardState, SessionState};
use crate::views::orders::{render_new_orders, render_served_orders, CLASS_NEW_CARDS, CLASS_SERVED_CARDS};
use crate::views::shared::{alert, loading_hide, loading_show};

#[derive(Clone)]
pub struct OrdersViewModel {
    api: ApiClient,
    session: SessionState,
    state: BoardState,
}

/// Handle del poll: soltar el handle para el Interval.
pub struct PollHandle {
    _interval: Interval,
}

impl OrdersViewModel {
    pub fn new(session: SessionState) -> Self {
        Self {
            api: ApiClient::new(),
            session,
            state: BoardState::new(),
        }
    }

    /// Arrancar el poll a la cadencia dada. El primer fetch no espera al
    /// primer intervalo: se dispara aparte con refresh_now().
    pub fn start_polling(&self, interval_ms: u32) -> PollHandle {
        let vm = self.clone();
        let interval = Interval::new(interval_ms, move || {
            vm.tick();
        });
        log::info!("⏱️ Poll de pedidos arrancado cada {} ms", interval_ms);
        PollHandle {
            _interval: interval,
        }
    }

    /// Fetch inicial de la página, con indicador de carga.
    pub fn refresh_now(&self) {
        let vm = self.clone();
        loading_show();
        wasm_bindgen_futures::spawn_local(async move {
            vm.fetch_and_render().await;
            loading_hide();
        });
    }

    /// Un tick del poll. Si el anterior sigue en vuelo, se salta este.
    pub fn tick(&self) {
        if self.state.tick_in_flight() {
            log::info!("🔄 Tick anterior aún en vuelo, saltando...");
            return;
        }
        let vm = self.clone();
        self.state.set_tick_in_flight(true);
        wasm_bindgen_futures::spawn_local(async move {
            vm.fetch_and_render().await;
            vm.state.set_tick_in_flight(false);
        });
    }

    async fn fetch_and_render(&self) {
        match self
            .api
            .new_orders(&self.session.token, &self.session.restaurant_id)
            .await
        {
            Ok(board) => {
                let count = board.len();
                self.state.replace_board(board);
                if let Err(e) = render_new_orders(&self.state.board(), self.clone()) {
                    log::error!("❌ Error renderizando tablero: {:?}", e);
                    return;
                }
                // Si el usuario está en la vista "servidos", las cards nuevas
                // se renderizan ocultas hasta que vuelva a togglear.
                if !self.state.showing_new() {
                    let _ = set_all_visible(CLASS_NEW_CARDS, false);
                }
                if let Some(counter) = get_element_by_id("order-count") {
                    set_text_content(&counter, &count.to_string());
                }
            }
            Err(e) => {
                // Tick fallido: alert y render anterior intacto. Sin retry.
                log::error!("❌ Error en tick de pedidos: {}", e);
                alert(&e.to_string());
            }
        }
    }

    /// Toggle a la vista de pedidos nuevos: mostrar las cards abiertas y
    /// descartar las de servidos. El poll nunca se detiene.
    pub fn show_new_orders(&self) {
        self.state.set_showing_new(true);
        let _ = set_all_visible(CLASS_NEW_CARDS, true);
        let _ = remove_all(CLASS_SERVED_CARDS);
    }

    /// Toggle a la vista de servidos: ocultar (no borrar) las cards abiertas
    /// y hacer un fetch one-shot del histórico de servidos.
    pub fn show_served_orders(&self) {
        self.state.set_showing_new(false);
        let _ = set_all_visible(CLASS_NEW_CARDS, false);
        let _ = remove_all(CLASS_SERVED_CARDS);

        let vm = self.clone();
        loading_show();
        wasm_bindgen_futures::spawn_local(async move {
            match vm
                .api
                .recent_orders(&vm.session.token, &vm.session.restaurant_id)
                .await
            {
                Ok(served) => {
                    if let Err(e) = render_served_orders(&served) {
                        log::error!("❌ Error renderizando servidos: {:?}", e);
                    }
                }
                Err(e) => alert(&e.to_string()),
            }
            loading_hide();
        });
    }

    /// Marcar una línea como entregada: one-shot, y en éxito se quita SOLO
    /// el nodo de esa línea. El tablero completo no se re-renderiza hasta
    /// el próximo tick.
    pub fn mark_delivered(&self, line_id: u64) {
        let vm = self.clone();
        loading_show();
        wasm_bindgen_futures::spawn_local(async move {
            match vm
                .api
                .mark_delivered(&vm.session.token, &vm.session.restaurant_id, line_id)
                .await
            {
                Ok(()) => {
                    if let Some(node) = get_element_by_id(&format!("item_{}", line_id)) {
                        node.remove();
                    }
                }
                Err(e) => alert(&e.to_string()),
            }
            loading_hide();
        });
    }
}
