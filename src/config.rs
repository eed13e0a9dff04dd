use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// The deployment context the rendered content is shown in.
/// Each environment has a different set of default link capabilities.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Environment {
    /// The hosted dashboard (default): all in-app screens are reachable.
    #[default]
    Dashboard,
    /// Self-hosted admin: content renders inside the site's own admin, where
    /// dashboard-only screens are not reachable.
    SelfHosted,
    /// Embedded widget context: no in-app navigation at all.
    Embedded,
}

/// Link rendering capabilities.
/// Each field gates one family of in-app links; a disabled capability makes
/// the corresponding node type degrade to plain (unlinked) children.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct Capabilities {
    /// Own-domain URLs render as relative in-app links
    pub internal_links: bool,
    /// Site references link to the site screen
    pub site_links: bool,
    /// Post and comment references link into the post screen
    pub post_links: bool,
    /// Person references link to people management
    pub person_links: bool,
    /// Plugin references link to plugin management
    pub plugin_links: bool,
    /// Theme references link to theme screens (external theme URIs always link)
    pub theme_links: bool,
    /// Backup references link into the backup browser
    pub backup_links: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl Capabilities {
    /// Get the default capability set for a given environment.
    pub fn for_environment(environment: Environment) -> Self {
        match environment {
            Environment::Dashboard => Self::dashboard_defaults(),
            Environment::SelfHosted => Self::self_hosted_defaults(),
            Environment::Embedded => Self::embedded_defaults(),
        }
    }

    fn dashboard_defaults() -> Self {
        Self {
            internal_links: true,
            site_links: true,
            post_links: true,
            person_links: true,
            plugin_links: true,
            theme_links: true,
            backup_links: true,
        }
    }

    /// People, plugin, and backup management live in the hosted dashboard
    /// only; those references render plain when self-hosted.
    fn self_hosted_defaults() -> Self {
        let mut caps = Self::dashboard_defaults();

        caps.person_links = false;
        caps.plugin_links = false;
        caps.backup_links = false;

        caps
    }

    /// Embedded contexts render no in-app navigation at all. External links
    /// still render as anchors.
    fn embedded_defaults() -> Self {
        Self {
            internal_links: false,
            site_links: false,
            post_links: false,
            person_links: false,
            plugin_links: false,
            theme_links: false,
            backup_links: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    pub environment: Environment,
    pub capabilities: Capabilities,
    /// Hosts treated as the product's own domain; URLs pointing at them
    /// render as relative in-app links instead of external anchors.
    pub app_hosts: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        let environment = Environment::default();
        Self {
            environment,
            capabilities: Capabilities::for_environment(environment),
            app_hosts: vec!["weft.app".to_string()],
        }
    }
}

impl Config {
    /// A config whose capabilities match the given environment's defaults.
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            environment,
            capabilities: Capabilities::for_environment(environment),
            ..Default::default()
        }
    }

    pub fn is_app_host(&self, host: &str) -> bool {
        self.app_hosts.iter().any(|h| h.eq_ignore_ascii_case(host))
    }
}

#[derive(Default, Clone)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn environment(mut self, environment: Environment) -> Self {
        self.config.environment = environment;
        self.config.capabilities = Capabilities::for_environment(environment);
        self
    }

    pub fn capabilities(mut self, capabilities: Capabilities) -> Self {
        self.config.capabilities = capabilities;
        self
    }

    pub fn app_host(mut self, host: impl Into<String>) -> Self {
        self.config.app_hosts.push(host.into());
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

/// Per-render defaults for `data-*` attribute propagation and for reference
/// nodes whose payload omits the site context.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Meta {
    pub site_id: Option<u64>,
    pub site_slug: Option<String>,
    pub section: Option<String>,
    pub intent: Option<String>,
}

const CANDIDATE_NAMES: &[&str] = &[".weft.toml", "weft.toml"];

fn parse_config_str(s: &str, path: &Path) -> io::Result<Config> {
    toml::from_str::<Config>(s).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("invalid config {}: {e}", path.display()),
        )
    })
}

fn read_config(path: &Path) -> io::Result<Config> {
    log::debug!("Reading config from: {}", path.display());
    let s = fs::read_to_string(path)?;
    let config = parse_config_str(&s, path)?;
    log::info!("Loaded config from: {}", path.display());
    Ok(config)
}

fn find_in_tree(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        for name in CANDIDATE_NAMES {
            let p = dir.join(name);
            if p.is_file() {
                return Some(p);
            }
        }
    }
    None
}

fn xdg_config_path() -> Option<PathBuf> {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        let p = Path::new(&xdg).join("weft").join("config.toml");
        if p.is_file() {
            return Some(p);
        }
    }
    if let Ok(home) = env::var("HOME") {
        let p = Path::new(&home)
            .join(".config")
            .join("weft")
            .join("config.toml");
        if p.is_file() {
            return Some(p);
        }
    }
    None
}

/// Load configuration with precedence:
/// 1) explicit path (error if unreadable/invalid)
/// 2) walk up from start_dir: .weft.toml, weft.toml
/// 3) XDG: $XDG_CONFIG_HOME/weft/config.toml or ~/.config/weft/config.toml
/// 4) default config
pub fn load(explicit: Option<&Path>, start_dir: &Path) -> io::Result<(Config, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let cfg = read_config(path)?;
        return Ok((cfg, Some(path.to_path_buf())));
    }

    if let Some(p) = find_in_tree(start_dir)
        && let Ok(cfg) = read_config(&p)
    {
        return Ok((cfg, Some(p)));
    }

    if let Some(p) = xdg_config_path()
        && let Ok(cfg) = read_config(&p)
    {
        return Ok((cfg, Some(p)));
    }

    log::debug!("No config file found, using defaults");
    Ok((Config::default(), None))
}
