// ============================================================================
// BOARD STATE - Estado del tablero de pedidos
// ============================================================================
// Reemplaza los flags globales mutables del panel original: el toggle
// nuevos/servidos y el tablero del último tick viven en un único objeto
// de estado de página. Solo el viewmodel de pedidos escribe aquí; las
// vistas solo leen.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::order::OrderBoard;

#[derive(Clone)]
pub struct BoardState {
    /// true = vista "nuevos pedidos"; false = vista "servidos".
    showing_new: Rc<RefCell<bool>>,
    /// Último tablero renderizado con éxito. Un tick fallido no lo toca.
    board: Rc<RefCell<OrderBoard>>,
    /// Tick en vuelo: evita solapar fetches si la red va más lenta que
    /// la cadencia del poll.
    tick_in_flight: Rc<RefCell<bool>>,
}

impl BoardState {
    pub fn new() -> Self {
        Self {
            showing_new: Rc::new(RefCell::new(true)),
            board: Rc::new(RefCell::new(OrderBoard::new())),
            tick_in_flight: Rc::new(RefCell::new(false)),
        }
    }

    pub fn showing_new(&self) -> bool {
        *self.showing_new.borrow()
    }

    pub fn set_showing_new(&self, showing: bool) {
        *self.showing_new.borrow_mut() = showing;
    }

    pub fn board(&self) -> OrderBoard {
        self.board.borrow().clone()
    }

    /// Reemplazo total del tablero (un tick exitoso).
    pub fn replace_board(&self, board: OrderBoard) {
        *self.board.borrow_mut() = board;
    }

    pub fn tick_in_flight(&self) -> bool {
        *self.tick_in_flight.borrow()
    }

    pub fn set_tick_in_flight(&self, in_flight: bool) {
        *self.tick_in_flight.borrow_mut() = in_flight;
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::order::{OrderLine, TableOrders};

    fn board_with(table: &str, customer: &str) -> OrderBoard {
        let mut board = OrderBoard::new();
        board.insert(
            table.to_string(),
            TableOrders {
                customer: customer.to_string(),
                orders: vec![OrderLine {
                    id: 1,
                    name: "Soup".into(),
                    quantity: 2,
                }],
            },
        );
        board
    }

    #[test]
    fn replace_is_wholesale_not_merge() {
        let state = BoardState::new();
        state.replace_board(board_with("T2", "Bob"));
        state.replace_board(board_with("T1", "Alice"));

        let board = state.board();
        assert_eq!(board.len(), 1);
        assert!(board.contains_key("T1"));
        assert!(!board.contains_key("T2"));
    }

    #[test]
    fn toggle_flag_flips_independently_of_board() {
        let state = BoardState::new();
        assert!(state.showing_new());
        state.set_showing_new(false);
        assert!(!state.showing_new());
        assert!(state.board().is_empty());
    }

    #[test]
    fn clones_share_the_same_cells() {
        let state = BoardState::new();
        let alias = state.clone();
        alias.set_tick_in_flight(true);
        assert!(state.tick_in_flight());
    }
}
