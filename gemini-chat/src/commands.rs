use anyhow::Result;
use colored::Colorize;
use gemini_client::{ClientConfig, GeminiClient};

use crate::chat;

pub async fn handle_ask(client: &GeminiClient, prompt: &str, json: bool) -> Result<()> {
    let exchange = chat::exchange(client, prompt).await;

    if json {
        let output = serde_json::json!({
            "prompt": exchange.prompt,
            "reply": exchange.reply,
            "fallback": exchange.fallback,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", exchange.reply);
    }
    Ok(())
}

pub async fn handle_chat(client: &GeminiClient) -> Result<()> {
    eprintln!("{}", "Gemini Chat - type a message, /history or /quit".cyan().bold());
    tracing::debug!("Chat session started | Endpoint: {}", client.config().endpoint_url());

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    let transcript = chat::run_chat(client, stdin, &mut stdout).await?;

    if transcript.is_empty() {
        tracing::debug!("Chat closed without any messages");
        return Ok(());
    }
    let fallbacks = transcript.exchanges().iter().filter(|e| e.fallback).count();
    tracing::info!("Chat finished | Messages: {} | Fallbacks: {}", transcript.len(), fallbacks);
    Ok(())
}

pub fn handle_config(config: &ClientConfig, json: bool) -> Result<()> {
    let timeout = match config.timeout() {
        Some(t) => format!("{}s", t.as_secs()),
        None => "none".to_string(),
    };

    if json {
        let output = serde_json::json!({
            "endpoint_url": config.endpoint_url(),
            "api_key": config.masked_api_key(),
            "timeout_secs": config.timeout().map(|t| t.as_secs()),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", "Client Configuration:".cyan().bold());
        println!("  Endpoint: {}", config.endpoint_url());
        println!("  API Key: {}", config.masked_api_key());
        println!("  Timeout: {}", timeout);
    }
    Ok(())
}
