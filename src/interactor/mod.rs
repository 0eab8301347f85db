pub mod catalog_interactor;
pub mod session_store;
pub mod sum_interactor;
pub mod swap_interactor;

pub use catalog_interactor::{CatalogInteractor, CatalogInteractorImpl};
pub use session_store::SessionStore;
pub use sum_interactor::{SumInteractor, SumInteractorImpl};
pub use swap_interactor::{SwapInteractor, SwapInteractorImpl};
