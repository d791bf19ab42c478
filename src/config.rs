use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub data_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            data_path: env::var("WEALTHWATCH_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/wealthwatch.json")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_path_from_env() {
        env::set_var("WEALTHWATCH_DATA_PATH", "/tmp/ww-test.json");
        let config = Config::from_env();
        assert_eq!(config.data_path, PathBuf::from("/tmp/ww-test.json"));
        env::remove_var("WEALTHWATCH_DATA_PATH");
    }
}
