pub mod catalog;
pub mod login;
pub mod requests;

pub use catalog::CatalogPage;
pub use login::LoginPage;
pub use requests::RequestsPage;
