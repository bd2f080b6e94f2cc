use std::env;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATABASE_PATH: &str = "walmart.db";
pub const DEFAULT_DATA_DIR: &str = "data";

#[derive(Debug, Clone)]
pub struct Config {
	pub database_path: PathBuf,
	pub data_dir: PathBuf,
	pub create_missing_tables: bool,
	pub strict_exit: bool,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
			data_dir: PathBuf::from(DEFAULT_DATA_DIR),
			create_missing_tables: false,
			strict_exit: false,
		}
	}
}

impl Config {
	pub fn from_env() -> Result<Self, ConfigError> {
		// Load .env file if it exists
		let _ = dotenvy::dotenv();

		Ok(Self {
			database_path: env::var("DATABASE_PATH")
				.unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_string())
				.into(),
			data_dir: env::var("DATA_DIR")
				.unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string())
				.into(),
			create_missing_tables: parse_flag(
				"CREATE_MISSING_TABLES",
				env::var("CREATE_MISSING_TABLES").ok(),
			)?,
			strict_exit: parse_flag("STRICT_EXIT", env::var("STRICT_EXIT").ok())?,
		})
	}

	/// Config reading the three spreadsheets from `data_dir` and writing to `database_path`.
	pub fn with_paths(data_dir: impl AsRef<Path>, database_path: impl AsRef<Path>) -> Self {
		Self {
			database_path: database_path.as_ref().to_path_buf(),
			data_dir: data_dir.as_ref().to_path_buf(),
			..Self::default()
		}
	}

	pub fn spreadsheet_path(&self, index: usize) -> PathBuf {
		self.data_dir.join(format!("spreadsheet_{}.csv", index))
	}

	/// Process exit status for a finished run. A reported failure only
	/// turns into a non-zero status in strict mode.
	pub fn exit_status<T, E>(&self, result: &Result<T, E>) -> u8 {
		match result {
			Err(_) if self.strict_exit => 1,
			_ => 0,
		}
	}
}

pub(crate) fn parse_flag(name: &'static str, value: Option<String>) -> Result<bool, ConfigError> {
	let Some(value) = value else {
		return Ok(false);
	};

	match value.trim().to_ascii_lowercase().as_str() {
		"" | "0" | "false" | "no" | "off" => Ok(false),
		"1" | "true" | "yes" | "on" => Ok(true),
		_ => Err(ConfigError::InvalidFlag { name, value }),
	}
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("{name} must be a boolean, got '{value}'")]
	InvalidFlag { name: &'static str, value: String },
}
