use std::path::PathBuf;

use crate::ConfigError;

pub const DEFAULT_GENERATIONS: u64 = 1;

/// command line configuration: `lifecell <pattern-path> [generations]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub path: PathBuf,
    pub generations: u64,
}

impl Config {
    /// parses the arguments following the program name.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let path = args.next().map(PathBuf::from).ok_or(ConfigError::MissingPath)?;
        let generations = match args.next() {
            Some(arg) => arg
                .parse()
                .map_err(|_| ConfigError::InvalidGenerations(arg))?,
            None => DEFAULT_GENERATIONS,
        };
        Ok(Self { path, generations })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(args: &[&str]) -> Vec<String> {
        args.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn path_only() {
        let config = Config::from_args(args(&["glider.txt"])).unwrap();
        assert_eq!(config.path, PathBuf::from("glider.txt"));
        assert_eq!(config.generations, DEFAULT_GENERATIONS);
    }

    #[test]
    fn path_and_generations() {
        let config = Config::from_args(args(&["glider.txt", "12"])).unwrap();
        assert_eq!(config.generations, 12);
    }

    #[test]
    fn missing_path() {
        assert_eq!(Config::from_args(args(&[])), Err(ConfigError::MissingPath));
    }

    #[test]
    fn invalid_generations() {
        assert_eq!(
            Config::from_args(args(&["glider.txt", "-3"])),
            Err(ConfigError::InvalidGenerations("-3".to_string()))
        );
    }
}
