//! Capability bridge demonstration.
//!
//! Stands up the core with the simulated desktop telephony provider and
//! issues the `CellModule.getCellInfo` invocation a host shell would make.
//!
//! Run with:
//! ```bash
//! cargo run --example cell_demo
//!
//! # Verbose dispatch logging
//! cargo run --example cell_demo -- "core_host=trace"
//! ```

use std::env;

use anyhow::Result;
use core_host::{HostService, InvocationRequest, CELL_MODULE, GET_CELL_INFO};
use core_runtime::config::CoreConfig;
use core_runtime::logging::{init_logging, LoggingConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let mut logging = LoggingConfig::default();
    if let Some(filter) = env::args().nth(1) {
        logging = logging.with_filter(filter);
    }
    init_logging(logging)?;

    let config = CoreConfig::builder().build()?;
    let service = HostService::new(config)?;

    let handle = service
        .dispatch(InvocationRequest::new(CELL_MODULE, GET_CELL_INFO))
        .await?;

    match handle.wait().await {
        Ok(payload) => println!("{}", payload),
        Err(rejection) => eprintln!("rejected: {}", rejection),
    }

    Ok(())
}
