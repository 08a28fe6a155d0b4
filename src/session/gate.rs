// ============================================================================
// SESSION GATE - Decisión de redirección previa al renderizado
// ============================================================================
// Corre de forma síncrona al cargar cada página, ANTES de cualquier fetch,
// para no mostrar contenido no autorizado ni un frame a medio cargar.
// ============================================================================

use crate::config::{COOKIE_JWT, COOKIE_REST_ID, PAGE_ORDERS, PAGE_SELECTION, PAGE_SIGN_IN};
use crate::session::cookies::get_cookie;

/// Qué exige la página actual para poder renderizarse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequirement {
    /// signIn / signUp: si ya hay token, saltar hacia delante.
    Anonymous,
    /// Selección y alta de restaurante: requiere token; si además ya hay
    /// restaurante elegido, saltar directo al tablero de pedidos.
    AuthOnly,
    /// Páginas operativas (pedidos, carta, mesas, historial, perfil).
    AuthAndRestaurant,
}

/// Resultado del gate: seguir renderizando o navegar a una página fija.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    Continue,
    ToSignIn,
    ToSelection,
    ToOrders,
}

/// Decisión pura del gate a partir de los dos identificadores persistidos.
///
/// Invariantes:
/// - token ausente en página no anónima -> siempre ToSignIn, da igual rest_id.
/// - token presente sin restaurante en página operativa -> ToSelection,
///   nunca la vista operativa.
pub fn evaluate_session(
    token: Option<&str>,
    restaurant_id: Option<&str>,
    requirement: PageRequirement,
) -> GateOutcome {
    match requirement {
        PageRequirement::Anonymous => {
            if token.is_some() {
                GateOutcome::ToSelection
            } else {
                GateOutcome::Continue
            }
        }
        PageRequirement::AuthOnly => match (token, restaurant_id) {
            (None, _) => GateOutcome::ToSignIn,
            (Some(_), Some(_)) => GateOutcome::ToOrders,
            (Some(_), None) => GateOutcome::Continue,
        },
        PageRequirement::AuthAndRestaurant => match (token, restaurant_id) {
            (None, _) => GateOutcome::ToSignIn,
            (Some(_), None) => GateOutcome::ToSelection,
            (Some(_), Some(_)) => GateOutcome::Continue,
        },
    }
}

impl GateOutcome {
    /// Página destino de la redirección, si la hay.
    pub fn target(&self) -> Option<&'static str> {
        match self {
            GateOutcome::Continue => None,
            GateOutcome::ToSignIn => Some(PAGE_SIGN_IN),
            GateOutcome::ToSelection => Some(PAGE_SELECTION),
            GateOutcome::ToOrders => Some(PAGE_ORDERS),
        }
    }
}

/// Leer las cookies de sesión y aplicar el gate, navegando si toca.
/// Devuelve true si la página puede seguir renderizando.
pub fn enforce(requirement: PageRequirement) -> bool {
    let token = get_cookie(COOKIE_JWT);
    let rest_id = get_cookie(COOKIE_REST_ID);

    let outcome = evaluate_session(token.as_deref(), rest_id.as_deref(), requirement);

    match outcome.target() {
        None => true,
        Some(page) => {
            log::info!("🚪 [GATE] Redirigiendo a {}", page);
            navigate_to(page);
            false
        }
    }
}

/// Navegación dura (window.location), como hace el gate original.
pub fn navigate_to(page: &str) {
    if let Some(win) = web_sys::window() {
        if let Err(e) = win.location().set_href(page) {
            log::error!("❌ [GATE] Error navegando a {}: {:?}", page, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Token ausente: siempre signIn, da igual el valor del otro identificador.
    #[test]
    fn missing_token_always_goes_to_sign_in() {
        for rest in [None, Some("r1"), Some("")] {
            assert_eq!(
                evaluate_session(None, rest, PageRequirement::AuthAndRestaurant),
                GateOutcome::ToSignIn
            );
            assert_eq!(
                evaluate_session(None, rest, PageRequirement::AuthOnly),
                GateOutcome::ToSignIn
            );
        }
    }

    // Token presente sin restaurante: selección, nunca la vista operativa.
    #[test]
    fn token_without_restaurant_goes_to_selection() {
        assert_eq!(
            evaluate_session(Some("tok"), None, PageRequirement::AuthAndRestaurant),
            GateOutcome::ToSelection
        );
    }

    #[test]
    fn full_session_continues_on_operational_pages() {
        assert_eq!(
            evaluate_session(Some("tok"), Some("r1"), PageRequirement::AuthAndRestaurant),
            GateOutcome::Continue
        );
    }

    // En selección, una sesión completa salta hacia delante al tablero.
    #[test]
    fn full_session_on_selection_jumps_to_orders() {
        assert_eq!(
            evaluate_session(Some("tok"), Some("r1"), PageRequirement::AuthOnly),
            GateOutcome::ToOrders
        );
        assert_eq!(
            evaluate_session(Some("tok"), None, PageRequirement::AuthOnly),
            GateOutcome::Continue
        );
    }

    // signIn/signUp redirigen hacia delante si ya hay token.
    #[test]
    fn anonymous_pages_skip_forward_when_logged_in() {
        assert_eq!(
            evaluate_session(Some("tok"), None, PageRequirement::Anonymous),
            GateOutcome::ToSelection
        );
        assert_eq!(
            evaluate_session(Some("tok"), Some("r1"), PageRequirement::Anonymous),
            GateOutcome::ToSelection
        );
        assert_eq!(
            evaluate_session(None, None, PageRequirement::Anonymous),
            GateOutcome::Continue
        );
    }

    #[test]
    fn redirect_targets_are_the_fixed_pages() {
        assert_eq!(GateOutcome::ToSignIn.target(), Some("signIn.html"));
        assert_eq!(GateOutcome::ToSelection.target(), Some("RestroSelection.html"));
        assert_eq!(GateOutcome::ToOrders.target(), Some("ManageOrders.html"));
        assert_eq!(GateOutcome::Continue.target(), None);
    }
}
