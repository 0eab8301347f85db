pub mod catalog_presenter;
pub mod sum_presenter;
pub mod swap_presenter;
