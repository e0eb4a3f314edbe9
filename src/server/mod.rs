//! Development file server
//!
//! Serves the output directory over HTTP. Requests that do not match a
//! generated file fall back to the home page, so client-side routes keep
//! working for paths the build did not materialize.

use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use tower_http::services::{ServeDir, ServeFile};

use crate::Site;

/// Start the development server
pub async fn start(site: &Site, host: &str, port: u16, open: bool) -> Result<()> {
    let index = site.output_dir.join("index.html");
    let serve_dir = ServeDir::new(&site.output_dir)
        .append_index_html_on_directories(true)
        .not_found_service(ServeFile::new(index));

    let app = Router::new().fallback_service(serve_dir);

    // "localhost" is not a bindable address
    let bind_ip = if host == "localhost" { "127.0.0.1" } else { host };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    let url = format!("http://{}:{}", host, port);
    println!("Server running at {}", url);
    println!("Serving: {}", site.config.site.title);
    println!("Directory: {:?}", site.output_dir);
    println!("Press Ctrl+C to stop.");

    if open {
        if let Err(e) = open_browser(&url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Resolve the port to listen on: CLI flag, then the PORT environment
/// variable, then the configured default.
pub fn resolve_port(cli_port: Option<u16>, config_port: u16) -> u16 {
    if let Some(port) = cli_port {
        return port;
    }
    if let Ok(value) = std::env::var("PORT") {
        if let Ok(port) = value.parse::<u16>() {
            return port;
        }
        tracing::warn!("Ignoring unparseable PORT value {:?}", value);
    }
    config_port
}

/// Open a URL in the default browser
fn open_browser(url: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(url).spawn()?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(url).spawn()?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/c", "start", url])
            .spawn()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_port_wins() {
        assert_eq!(resolve_port(Some(4000), 3000), 4000);
    }

    #[test]
    fn test_config_port_is_fallback() {
        std::env::remove_var("PORT");
        assert_eq!(resolve_port(None, 3000), 3000);
    }
}
