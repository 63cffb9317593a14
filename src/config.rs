use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_DATA_PATH: &str = "data/Airbnb.csv";

/// Pixels per figure unit. Charts are drawn on a 10x5 unit figure.
pub const PX_PER_UNIT: u32 = 100;
pub const CHART_CANVAS: (u32, u32) = (10 * PX_PER_UNIT, 5 * PX_PER_UNIT);

pub const GEO_WIDTH: u32 = 1000;
pub const GEO_HEIGHT: u32 = 500;

/// Process-wide settings, fixed at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_path: PathBuf,
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            bind_addr: SocketAddr::from((Ipv4Addr::LOCALHOST, 3000)),
            max_workers: 8,
        }
    }
}
