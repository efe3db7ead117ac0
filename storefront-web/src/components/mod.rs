pub mod cart_drawer;
pub mod category_browser;
pub mod footer;
pub mod navbar;
pub mod notice;
pub mod product_card;
pub mod product_modal;
pub mod sell_form;

pub use cart_drawer::CartDrawer;
pub use category_browser::CategoryBrowser;
pub use footer::Footer;
pub use navbar::Navbar;
pub use notice::Notice;
pub use product_card::ProductCard;
pub use product_modal::ProductModal;
pub use sell_form::SellForm;
