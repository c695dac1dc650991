pub mod catalog;
pub mod service_detail;

pub use catalog::CatalogPage;
pub use service_detail::ServiceDetailPage;
