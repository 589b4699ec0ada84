//! Configuration structures and loading logic.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use ini::{Ini, ParseOption, Properties};

use crate::config::timeframe::Timeframe;
use crate::config::validation::{
    parse_bool, parse_limit, parse_port, parse_subreddits, validate_address, DEFAULT_LIMIT,
};
use crate::error::{Error, Result};

/// Section whose keys apply to every other section.
const DEFAULT_SECTION: &str = "DEFAULT";

/// Section holding the SMTP login in the credentials file.
const CREDENTIALS_SECTION: &str = "credentials";

/// One resolved configuration section.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Name of the section this was read from.
    pub name: String,

    /// Subreddits to fetch, in the order they are processed.
    pub subreddits: Vec<String>,

    /// Ranking window for top posts.
    pub timeframe: Timeframe,

    /// Directory downloaded images are written to.
    pub output_directory: PathBuf,

    /// Maximum number of posts requested per subreddit.
    pub limit: u32,

    /// User agent sent to Reddit.
    pub user_agent: String,

    /// Notification settings; `None` when `send_email = False`.
    pub email: Option<EmailConfig>,
}

/// Email notification settings.
#[derive(Debug, Clone, PartialEq)]
pub struct EmailConfig {
    /// Recipient address.
    pub address: String,
    pub subject: String,
    pub body: String,
    pub smtp_server: String,
    pub smtp_port: u16,
}

/// SMTP login, read from a separate file.
#[derive(Clone, PartialEq)]
pub struct Credentials {
    pub address: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("address", &self.address)
            .field("password", &"<redacted>")
            .finish()
    }
}

fn default_user_agent() -> String {
    format!("reddit-top-dl/{}", env!("CARGO_PKG_VERSION"))
}

fn default_smtp_server() -> String {
    "smtp.gmail.com".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

/// Key lookup that falls back to the `[DEFAULT]` section.
struct SectionView<'a> {
    section: &'a Properties,
    defaults: Option<&'a Properties>,
}

impl<'a> SectionView<'a> {
    fn get(&self, key: &str) -> Option<&'a str> {
        self.section
            .get(key)
            .or_else(|| self.defaults.and_then(|d| d.get(key)))
            .map(str::trim)
    }

    fn require(&self, key: &str) -> Result<&'a str> {
        match self.get(key) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(Error::MissingConfig(key.to_string())),
        }
    }
}

impl Config {
    /// Load a section from a config file.
    ///
    /// With no section name, the first section in the file is used.
    pub fn load(path: &Path, section: Option<&str>) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "No config file found at {}; please create it.",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        Self::parse(&content, section)
    }

    /// Parse and validate a section from config file contents.
    pub fn parse(content: &str, section: Option<&str>) -> Result<Self> {
        let ini = read_ini(content)?;

        let name = match section {
            Some(name) => name.to_string(),
            None => first_section(&ini)
                .ok_or_else(|| Error::Config("Config file contains no sections".into()))?,
        };

        let properties = ini
            .section(Some(name.as_str()))
            .ok_or_else(|| Error::MissingSection(name.clone()))?;

        let view = SectionView {
            section: properties,
            defaults: ini.section(Some(DEFAULT_SECTION)),
        };

        Self::from_section(name, &view)
    }

    fn from_section(name: String, view: &SectionView<'_>) -> Result<Self> {
        let subreddits = parse_subreddits(view.require("subreddits")?)?;

        let timeframe = view
            .require("timeframe")?
            .parse::<Timeframe>()
            .map_err(|message| Error::ConfigValidation {
                field: "timeframe".to_string(),
                message,
            })?;

        let output_directory = PathBuf::from(view.require("output_directory")?);

        let limit = match view.get("limit") {
            Some(value) if !value.is_empty() => parse_limit(value)?,
            _ => DEFAULT_LIMIT,
        };

        let user_agent = match view.get("user_agent") {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => default_user_agent(),
        };

        let send_email = match view.get("send_email") {
            Some(value) => parse_bool("send_email", value)?,
            None => false,
        };

        let email = if send_email {
            Some(EmailConfig::from_section(view)?)
        } else {
            None
        };

        Ok(Self {
            name,
            subreddits,
            timeframe,
            output_directory,
            limit,
            user_agent,
            email,
        })
    }

    /// Whether an email should be sent at the end of the run.
    pub fn email_enabled(&self) -> bool {
        self.email.is_some()
    }
}

impl EmailConfig {
    fn from_section(view: &SectionView<'_>) -> Result<Self> {
        let address = view.require("email_address")?.to_string();
        validate_address("email_address", &address)?;

        let smtp_port = match view.get("smtp_port") {
            Some(value) if !value.is_empty() => parse_port(value)?,
            _ => default_smtp_port(),
        };

        Ok(Self {
            address,
            subject: view.require("email_subject")?.to_string(),
            body: view.require("email_body")?.to_string(),
            smtp_server: view
                .get("smtp_server")
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .unwrap_or_else(default_smtp_server),
            smtp_port,
        })
    }
}

impl Credentials {
    /// Load credentials from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "No credentials file found; please create {}.",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        Self::parse(&content)
    }

    /// Parse the `[credentials]` section.
    pub fn parse(content: &str) -> Result<Self> {
        let ini = read_ini(content)?;

        let properties = ini
            .section(Some(CREDENTIALS_SECTION))
            .ok_or_else(|| Error::MissingSection(CREDENTIALS_SECTION.to_string()))?;

        let view = SectionView {
            section: properties,
            defaults: None,
        };

        let address = view.require("address")?.to_string();
        validate_address("address", &address)?;

        Ok(Self {
            address,
            password: view.require("password")?.to_string(),
        })
    }
}

/// Parse INI text, keeping backslashes in values (Windows paths).
fn read_ini(content: &str) -> Result<Ini> {
    let options = ParseOption {
        enabled_escape: false,
        ..ParseOption::default()
    };
    Ok(Ini::load_from_str_opt(content, options)?)
}

/// First named section other than `[DEFAULT]` and `[credentials]`.
fn first_section(ini: &Ini) -> Option<String> {
    ini.sections()
        .flatten()
        .find(|name| *name != DEFAULT_SECTION && *name != CREDENTIALS_SECTION)
        .map(str::to_string)
}
