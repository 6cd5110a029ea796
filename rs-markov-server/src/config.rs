/// Server settings, read from the environment at startup.
///
/// | Variable               | Default     |
/// |------------------------|-------------|
/// | `RS_MARKOV_HOST`       | `127.0.0.1` |
/// | `RS_MARKOV_PORT`       | `5000`      |
/// | `RS_MARKOV_MAX_UPLOAD` | 10 MiB      |
/// | `RS_MARKOV_CORS_ORIGIN`| any origin  |
#[derive(Clone, Debug, PartialEq)]
pub struct ServerConfig {
	pub host: String,
	pub port: u16,
	/// Largest accepted upload, in bytes.
	pub max_upload: usize,
	/// Single allowed browser origin; `None` allows any.
	pub cors_origin: Option<String>,
}

pub const DEFAULT_MAX_UPLOAD: usize = 10 * 1024 * 1024;

impl Default for ServerConfig {
	fn default() -> Self {
		Self {
			host: "127.0.0.1".to_owned(),
			port: 5000,
			max_upload: DEFAULT_MAX_UPLOAD,
			cors_origin: None,
		}
	}
}

impl ServerConfig {
	/// Reads the configuration from process environment variables.
	pub fn from_env() -> Result<Self, String> {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	/// Builds the configuration from any key lookup.
	///
	/// # Errors
	/// Returns an error naming the variable if a value does not parse.
	pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
	where
		F: Fn(&str) -> Option<String>,
	{
		let mut config = Self::default();

		if let Some(host) = lookup("RS_MARKOV_HOST").filter(|h| !h.trim().is_empty()) {
			config.host = host.trim().to_owned();
		}
		if let Some(port) = lookup("RS_MARKOV_PORT") {
			config.port = port
				.trim()
				.parse()
				.map_err(|_| format!("RS_MARKOV_PORT must be a port number, got {port:?}"))?;
		}
		if let Some(limit) = lookup("RS_MARKOV_MAX_UPLOAD") {
			config.max_upload = match limit.trim().parse::<usize>() {
				Ok(n) if n > 0 => n,
				_ => return Err(format!("RS_MARKOV_MAX_UPLOAD must be a positive byte count, got {limit:?}")),
			};
		}
		config.cors_origin = lookup("RS_MARKOV_CORS_ORIGIN").filter(|o| !o.trim().is_empty());

		Ok(config)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashMap;

	fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
		let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
		move |key| vars.get(key).cloned()
	}

	#[test]
	fn defaults_without_variables() {
		assert_eq!(ServerConfig::from_lookup(lookup(&[])), Ok(ServerConfig::default()));
	}

	#[test]
	fn reads_every_variable() {
		let config = ServerConfig::from_lookup(lookup(&[
			("RS_MARKOV_HOST", "0.0.0.0"),
			("RS_MARKOV_PORT", "8080"),
			("RS_MARKOV_MAX_UPLOAD", "2048"),
			("RS_MARKOV_CORS_ORIGIN", "http://localhost:3000"),
		]))
		.expect("valid config");
		assert_eq!(config.host, "0.0.0.0");
		assert_eq!(config.port, 8080);
		assert_eq!(config.max_upload, 2048);
		assert_eq!(config.cors_origin.as_deref(), Some("http://localhost:3000"));
	}

	#[test]
	fn rejects_bad_values() {
		assert!(ServerConfig::from_lookup(lookup(&[("RS_MARKOV_PORT", "http")])).is_err());
		assert!(ServerConfig::from_lookup(lookup(&[("RS_MARKOV_PORT", "70000")])).is_err());
		assert!(ServerConfig::from_lookup(lookup(&[("RS_MARKOV_MAX_UPLOAD", "0")])).is_err());
	}
}
