// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ESP32 gateway server.
//!
//! # Usage
//!
//! ```bash
//! # Serve on 0.0.0.0:8000, device at its factory address
//! esp32-gateway
//!
//! # Custom device and port, threshold updates relabel readings
//! esp32-gateway --device 192.168.1.40 --port 9000 --sync-thresholds
//! ```

use clap::Parser;
use esp32_gateway::server::build_router;
use esp32_gateway::{Gateway, GatewayConfig, HttpConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// HTTP gateway for an ESP32 sensor board
#[derive(Parser, Debug)]
#[command(name = "esp32-gateway")]
#[command(version)]
struct Args {
    /// HTTP server port
    #[arg(short, long, default_value = "8000")]
    port: u16,

    /// Bind address
    #[arg(short, long, default_value = "0.0.0.0")]
    bind: String,

    /// Device address (host, host:port or URL)
    #[arg(short, long, default_value = GatewayConfig::DEFAULT_DEVICE)]
    device: String,

    /// Log level (trace, debug, info, warn, error), overridden by `RUST_LOG`
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Apply accepted threshold updates to the labels of readings
    #[arg(long)]
    sync_thresholds: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = GatewayConfig::new(HttpConfig::new(args.device))
        .with_sync_thresholds(args.sync_thresholds);
    let gateway = Gateway::new(config)?;

    let addr = format!("{}:{}", args.bind, args.port);
    info!("ESP32 Gateway v{}", env!("CARGO_PKG_VERSION"));
    info!("HTTP server: http://{}", addr);
    info!("Device: {}", gateway.device_url());

    let app = build_router(gateway);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
