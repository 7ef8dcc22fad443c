//! Dashboard pages, one per navigation entry, plus the 404 fallback

mod ar_tryon;
mod bookmarks;
mod colors;
mod design;
mod design_generator;
mod fabric;
mod fabric_library;
mod home;
mod not_found;
mod pricing;
mod profile;
mod stylist;
mod trends;

pub use ar_tryon::ArTryOnPage;
pub use bookmarks::BookmarksPage;
pub use colors::ColorsPage;
pub use design::QuickDesignPage;
pub use design_generator::DesignGeneratorPage;
pub use fabric::FabricPage;
pub use fabric_library::FabricLibraryPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use pricing::PricingPage;
pub use profile::ProfilePage;
pub use stylist::StylistPage;
pub use trends::TrendsPage;
