pub mod app;
pub mod command;
pub mod model;
pub mod report;
pub mod rules;
pub mod session;
