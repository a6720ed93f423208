pub mod dashboard_screen;
pub mod logs_screen;
pub mod payments_screen;
pub mod providers_screen;
