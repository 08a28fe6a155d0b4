// ============================================================================
// APP - Arranque por página: gate de sesión primero, inicializador después
// ============================================================================

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use crate::config::POLL_INTERVAL_MS;
use crate::session::{enforce, PageRequirement};
use crate::state::SessionState;
use crate::viewmodels::{OrdersViewModel, PollHandle};
use crate::views;

// El handle del poll tiene que sobrevivir al arranque; vive aquí igual que
// la instancia de App en el patrón de siempre.
thread_local! {
    static POLL: RefCell<Option<PollHandle>> = RefCell::new(None);
}

/// Página del panel, derivada del pathname actual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    SignIn,
    SignUp,
    Selection,
    AddRestaurant,
    Orders,
    Menu,
    Tables,
    History,
    Profile,
}

impl Page {
    /// La página se reconoce por el último segmento del pathname.
    pub fn from_pathname(pathname: &str) -> Option<Page> {
        let file = pathname.rsplit('/').next().unwrap_or(pathname);
        match file {
            "signIn.html" => Some(Page::SignIn),
            "signUp.html" => Some(Page::SignUp),
            "RestroSelection.html" => Some(Page::Selection),
            "AddRestro.html" => Some(Page::AddRestaurant),
            "ManageOrders.html" => Some(Page::Orders),
            "ManageMenu.html" => Some(Page::Menu),
            "ManageTables.html" => Some(Page::Tables),
            "OrderHistory.html" => Some(Page::History),
            "Profile.html" => Some(Page::Profile),
            _ => None,
        }
    }

    /// Qué exige cada página para renderizarse (ver session::gate).
    pub fn requirement(&self) -> PageRequirement {
        match self {
            Page::SignIn | Page::SignUp => PageRequirement::Anonymous,
            Page::Selection | Page::AddRestaurant => PageRequirement::AuthOnly,
            Page::Orders | Page::Menu | Page::Tables | Page::History | Page::Profile => {
                PageRequirement::AuthAndRestaurant
            }
        }
    }
}

/// Arranque de la página actual. El gate corre de forma síncrona ANTES de
/// cualquier fetch: si redirige, no se renderiza nada.
pub fn boot() -> Result<(), JsValue> {
    let pathname = web_sys::window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .location()
        .pathname()?;

    let page = match Page::from_pathname(&pathname) {
        Some(page) => page,
        None => {
            log::warn!("⚠️ Página desconocida: {}", pathname);
            return Ok(());
        }
    };

    log::info!("🎬 Arrancando página {:?}", page);

    if !enforce(page.requirement()) {
        return Ok(());
    }

    init_page(page)
}

fn init_page(page: Page) -> Result<(), JsValue> {
    match page {
        Page::SignIn => views::login::init(),
        Page::SignUp => views::signup::init(),
        Page::Selection => {
            if let Some(session) = SessionState::load_token_only() {
                views::restaurants::init_selection(session);
            }
            Ok(())
        }
        Page::AddRestaurant => {
            if let Some(session) = SessionState::load_token_only() {
                views::restaurants::init_add_restaurant(session)?;
            }
            Ok(())
        }
        Page::Orders => {
            if let Some(session) = SessionState::load() {
                let vm = OrdersViewModel::new(session);
                views::orders::wire_toggle_buttons(vm.clone())?;
                vm.refresh_now();
                let handle = vm.start_polling(POLL_INTERVAL_MS);
                POLL.with(|poll| {
                    *poll.borrow_mut() = Some(handle);
                });
            }
            Ok(())
        }
        Page::Menu => {
            if let Some(session) = SessionState::load() {
                views::menu::init(session)?;
            }
            Ok(())
        }
        Page::Tables => {
            if let Some(session) = SessionState::load() {
                views::tables::init(session)?;
            }
            Ok(())
        }
        Page::History => {
            if let Some(session) = SessionState::load() {
                views::history::init(session);
            }
            Ok(())
        }
        Page::Profile => {
            if let Some(session) = SessionState::load() {
                views::profile::init(session)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_are_recognized_by_last_path_segment() {
        assert_eq!(
            Page::from_pathname("/admin/ManageOrders.html"),
            Some(Page::Orders)
        );
        assert_eq!(Page::from_pathname("signIn.html"), Some(Page::SignIn));
        assert_eq!(
            Page::from_pathname("/deep/nested/Profile.html"),
            Some(Page::Profile)
        );
        assert_eq!(Page::from_pathname("/index.html"), None);
        assert_eq!(Page::from_pathname("/"), None);
    }

    #[test]
    fn operational_pages_require_full_session() {
        for page in [Page::Orders, Page::Menu, Page::Tables, Page::History, Page::Profile] {
            assert_eq!(page.requirement(), PageRequirement::AuthAndRestaurant);
        }
    }

    #[test]
    fn entry_pages_have_lighter_requirements() {
        assert_eq!(Page::SignIn.requirement(), PageRequirement::Anonymous);
        assert_eq!(Page::SignUp.requirement(), PageRequirement::Anonymous);
        assert_eq!(Page::Selection.requirement(), PageRequirement::AuthOnly);
        assert_eq!(Page::AddRestaurant.requirement(), PageRequirement::AuthOnly);
    }
}
