pub mod footer;
pub mod header;
pub mod layout;
pub mod pagination;

pub use footer::Footer;
pub use header::Header;
pub use layout::Layout;
pub use pagination::PageLinks;
