pub mod admin;
pub mod menu;
pub mod order;
pub mod restaurant;
pub mod table;

pub use admin::AdminProfile;
pub use menu::MenuItem;
pub use order::{BillLine, HistoryEntry, OrderBoard, OrderLine, PaymentStatus, TableOrders};
pub use restaurant::Restaurant;
pub use table::DiningTable;
