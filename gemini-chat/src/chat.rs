//! Message exchange with fallback replies and the in-memory transcript.

use std::io::Write;

use anyhow::Result;
use colored::Colorize;
use gemini_client::TextGenerator;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Shown in place of a reply when generation fails for any reason.
pub const FALLBACK_REPLY: &str = "Sorry, I couldn't come up with a reply right now. Please try again.";

const CMD_HISTORY: &str = "/history";
const CMD_QUIT: &str = "/quit";

/// One prompt and the reply that was shown for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    pub prompt: String,
    pub reply: String,
    pub fallback: bool,
}

/// Every exchange of this process, in order. Unbounded, never persisted.
#[derive(Debug, Default)]
pub struct Transcript {
    exchanges: Vec<Exchange>,
}

impl Transcript {
    pub fn push(&mut self, exchange: Exchange) {
        self.exchanges.push(exchange);
    }

    pub fn exchanges(&self) -> &[Exchange] {
        &self.exchanges
    }

    pub fn len(&self) -> usize {
        self.exchanges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exchanges.is_empty()
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        if self.exchanges.is_empty() {
            return writeln!(out, "(no messages yet)");
        }
        for (idx, exchange) in self.exchanges.iter().enumerate() {
            writeln!(out, "[{}] {} {}", idx + 1, "you:".bold(), exchange.prompt)?;
            writeln!(out, "    {} {}", "gemini:".cyan().bold(), exchange.reply)?;
        }
        Ok(())
    }
}

/// Asks the generator and substitutes [`FALLBACK_REPLY`] on any error.
pub async fn exchange(generator: &dyn TextGenerator, prompt: &str) -> Exchange {
    match generator.generate(prompt).await {
        Ok(reply) => Exchange {
            prompt: prompt.to_string(),
            reply: reply.into_text(),
            fallback: false,
        },
        Err(e) => {
            tracing::warn!("Generation failed, using fallback reply: {}", e);
            Exchange {
                prompt: prompt.to_string(),
                reply: FALLBACK_REPLY.to_string(),
                fallback: true,
            }
        }
    }
}

/// Reads one message per line until EOF or `/quit`.
///
/// Blank lines are skipped and other lines are sent as typed. `/history`
/// prints the transcript so far.
pub async fn run_chat<R, W>(
    generator: &dyn TextGenerator,
    input: R,
    out: &mut W,
) -> Result<Transcript>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut transcript = Transcript::default();
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "" => continue,
            CMD_QUIT => break,
            CMD_HISTORY => transcript.write_to(out)?,
            _ => {
                let exchange = exchange(generator, &line).await;
                writeln!(out, "{}", exchange.reply)?;
                transcript.push(exchange);
            }
        }
        out.flush()?;
    }

    tracing::debug!("Chat ended after {} messages", transcript.len());
    Ok(transcript)
}
