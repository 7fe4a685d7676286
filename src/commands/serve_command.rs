//! Web server command
//!
//! Runs the HTTP front end. Only functional when built with the `web`
//! feature.

use std::sync::Arc;
use clap::ArgMatches;
use log::info;

use crate::api::PaletteKit;
use crate::color::errors::PaletteResult;
use crate::commands::command_traits::Command;

/// Command for serving the web front end
pub struct ServeCommand {
    bind_addr: String,
    kit: Arc<PaletteKit>,
}

impl ServeCommand {
    /// Create a new serve command; `--bind` overrides the configured address
    pub fn new(args: &ArgMatches, kit: Arc<PaletteKit>) -> PaletteResult<Self> {
        let bind_addr = args.get_one::<String>("bind")
            .cloned()
            .unwrap_or_else(|| kit.config().bind_addr.clone());

        Ok(ServeCommand { bind_addr, kit })
    }
}

impl Command for ServeCommand {
    #[cfg(feature = "web")]
    fn execute(&self) -> PaletteResult<()> {
        info!("Starting web server on {}", self.bind_addr);

        let runtime = tokio::runtime::Runtime::new()?;
        runtime.block_on(crate::web::serve(self.kit.clone(), &self.bind_addr))
    }

    #[cfg(not(feature = "web"))]
    fn execute(&self) -> PaletteResult<()> {
        info!("Web server requested on {} for uploads in {}",
              self.bind_addr, self.kit.uploads().dir().display());
        Err(crate::color::errors::PaletteError::GenericError(
            "palettekit was built without the `web` feature".to_string()
        ))
    }
}
