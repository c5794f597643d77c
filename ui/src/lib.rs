//! Shared UI crate for Gamescope. The data core, dashboard components and
//! views all live here; the platform crates only provide routing and launch.

pub mod core;
pub mod dashboard;
pub mod views;

pub mod components {
    // Navbar with platform-registered links (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}
