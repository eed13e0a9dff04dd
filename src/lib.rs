pub mod config;
pub mod content;
pub mod element;
mod mapper;
pub mod node;
pub mod renderer;
pub mod resolver;

pub use config::{Capabilities, Config, ConfigBuilder, Environment, Meta};
pub use content::{Content, FormattedBlock, Range};
pub use element::{Element, Tag};
pub use node::{ContentNode, FormattedNode};
pub use renderer::{render, render_node, render_to_html};
pub use resolver::{resolve, resolve_block};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Resolves a JSON content payload into content nodes.
///
/// Accepts the three shapes the activity API delivers: a structured
/// `{ "text": ..., "ranges": [...] }` block, a bare string, or an
/// already-resolved node array (returned unchanged).
///
/// # Examples
///
/// ```no_run
/// let payload = r#"{
///     "text": "Site Example updated",
///     "ranges": [{ "indices": [5, 12], "type": "site", "id": 987 }]
/// }"#;
/// let nodes = weft::resolve_json(payload).unwrap();
/// assert_eq!(nodes.len(), 3);
/// ```
///
/// # Arguments
///
/// * `input` - The JSON content payload to resolve
pub fn resolve_json(input: &str) -> Result<Vec<ContentNode>, serde_json::Error> {
    #[cfg(debug_assertions)]
    {
        init_logger();
    }

    let content: Content = serde_json::from_str(input)?;
    Ok(resolver::resolve(&content))
}

/// Resolves a JSON content payload and renders it straight to HTML.
///
/// This is the common full pipeline: parse, resolve ranges into nodes, and
/// render the nodes with the given configuration and per-render meta.
///
/// # Arguments
///
/// * `input` - The JSON content payload
/// * `config` - Optional configuration (defaults to the dashboard defaults)
/// * `meta` - Optional per-render defaults for link `data-*` attributes
pub fn render_json(
    input: &str,
    config: Option<Config>,
    meta: Option<Meta>,
) -> Result<String, serde_json::Error> {
    #[cfg(debug_assertions)]
    {
        init_logger();
    }

    let nodes = resolve_json(input)?;
    let config = config.unwrap_or_default();
    let meta = meta.unwrap_or_default();
    Ok(renderer::render_to_html(&nodes, &config, &meta))
}
