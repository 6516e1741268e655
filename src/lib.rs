pub mod config;
pub mod contact;
pub mod content;
pub mod net;
pub mod sphere;
pub mod view;
