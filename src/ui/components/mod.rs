pub mod category_badge;
pub mod filter_bar;
pub mod service_card;
pub mod service_table;
pub mod status_panel;
pub mod tier_list;
