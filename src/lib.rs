pub mod config;
pub mod contact;
pub mod i18n;
pub mod server;
pub mod site;
pub mod sink;
