pub mod config;

pub use config::{BalloonConfig, LaunchSite, LiftGas};
