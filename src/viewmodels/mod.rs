pub mod orders_viewmodel;

pub use orders_viewmodel::{OrdersViewModel, PollHandle};
