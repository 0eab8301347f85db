use anyhow::Result;
use async_trait::async_trait;
use teloxide::{prelude::*, Bot};

use crate::entity::{AppError, SumReport};

#[async_trait]
pub trait SumView: Send + Sync {
    async fn display_usage(&self) -> Result<()>;
    async fn display_report(&self, report: &SumReport) -> Result<()>;
    async fn display_error(&self, error: &AppError) -> Result<()>;
}

pub fn report_text(report: &SumReport) -> String {
    let mut text = format!("Sum of 1..={}\n", report.n);

    for warning in &report.warnings {
        text.push_str(&format!("⚠️ {}\n", warning));
    }

    for (index, result) in report.results.iter().enumerate() {
        let label = (b'A' + index as u8) as char;
        let value = match result.result {
            Some(value) => value.to_string(),
            None => "skipped".to_string(),
        };

        text.push_str(&format!(
            "\nMethod {}: {}\nResult: {}\nTime: {:.3}ms\nComplexity: {} ({})\n",
            label,
            result.method,
            value,
            result.elapsed.as_secs_f64() * 1_000.0,
            result.complexity,
            result.description
        ));
    }

    text
}

pub struct TelegramSumView {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramSumView {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }
}

#[async_trait]
impl SumView for TelegramSumView {
    async fn display_usage(&self) -> Result<()> {
        self.bot
            .send_message(
                self.chat_id,
                "Enter a number n to sum 1..=n three ways.\n\nExample: /sum 5",
            )
            .await?;

        Ok(())
    }

    async fn display_report(&self, report: &SumReport) -> Result<()> {
        self.bot
            .send_message(self.chat_id, report_text(report))
            .await?;

        Ok(())
    }

    async fn display_error(&self, error: &AppError) -> Result<()> {
        self.bot
            .send_message(self.chat_id, format!("❌ Invalid Input: {}", error))
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sum::{run_benchmark, SumLimits};

    #[test]
    fn report_labels_methods_by_letter() {
        let limits = SumLimits {
            max_n: 100,
            recursion_limit: 100,
        };
        let text = report_text(&run_benchmark(5, limits));

        assert!(text.contains("Method A: Iterative Loop"));
        assert!(text.contains("Method C: Recursive"));
        assert_eq!(text.matches("Result: 15").count(), 3);
    }
}
