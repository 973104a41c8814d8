pub mod ai;
pub mod credentials;
pub mod factory;
pub mod qr;
pub mod repositories;
