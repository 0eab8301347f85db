pub mod catalog_view;
pub mod sum_view;
pub mod swap_view;
