#![doc = include_str!("../README.md")]

mod client;
mod config;
mod error;
mod types;

pub use client::{GeminiClient, TextGenerator, PROMPT_PREFIX};
pub use config::{
    ClientConfig, DEFAULT_TIMEOUT_SECS, ENV_API_KEY, ENV_API_URL, ENV_TIMEOUT_SECS,
};
pub use error::{ClientError, ConfigError};
pub use types::*;
