//! API Documentation Config

use clap::Args;

/// OpenAPI document and Swagger UI settings.
#[derive(Debug, Args)]
pub struct DocsConfig {
    /// Serve the OpenAPI document and Swagger UI
    #[arg(long, env = "DOCS_ENABLED", default_value_t = true)]
    pub docs_enabled: bool,

    /// Development server URL listed in the OpenAPI document
    #[arg(long, env = "API_DEV_URL")]
    pub api_dev_url: Option<String>,

    /// Production server URL listed in the OpenAPI document
    #[arg(long, env = "API_PROD_URL")]
    pub api_prod_url: Option<String>,
}
