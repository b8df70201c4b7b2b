//! Interactive activation prompt

use colored::Colorize;
use pin_activator::{ActivationOutcome, ActivationRequest, PinActivator, ValidationError};
use serde::Serialize;
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Totals for one interactive session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub attempts: u32,
    pub active: u32,
    pub inactive: u32,
    pub errors: u32,
    pub transport_failures: u32,
    pub rejected_inputs: u32,
}

impl SessionSummary {
    fn record(&mut self, outcome: Option<ActivationOutcome>) {
        self.attempts += 1;
        match outcome {
            Some(ActivationOutcome::Active) => self.active += 1,
            Some(ActivationOutcome::Inactive) => self.inactive += 1,
            Some(ActivationOutcome::Error) => self.errors += 1,
            None => self.transport_failures += 1,
        }
    }
}

enum Answer {
    Value(String),
    Exit,
}

/// Read one line, dropping the `\n` / `\r\n` terminator. Bytes that are not
/// UTF-8 are replaced so the line reaches validation instead of ending the
/// session.
async fn read_line<R: AsyncBufRead + Unpin>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf).await? == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

async fn ask<R, W>(input: &mut R, output: &mut W, label: &str) -> io::Result<Answer>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    output.write_all(label.as_bytes()).await?;
    output.flush().await?;

    match read_line(input).await? {
        Some(line) if line.eq_ignore_ascii_case("exit") => Ok(Answer::Exit),
        Some(line) => Ok(Answer::Value(line)),
        None => Ok(Answer::Exit),
    }
}

async fn reject<W: AsyncWrite + Unpin>(output: &mut W, err: &ValidationError) -> io::Result<()> {
    tracing::debug!(error = %err, "Rejected input");
    let line = format!("{}\n", err.user_message().red());
    output.write_all(line.as_bytes()).await
}

/// Prompt for customer id and MAC address until `exit` or end of input,
/// activating each valid pair.
pub async fn run_session<R, W>(
    activator: &PinActivator,
    mut input: R,
    mut output: W,
) -> io::Result<SessionSummary>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut summary = SessionSummary::default();

    loop {
        output
            .write_all(b"Enter 'exit' to quit the application.\n")
            .await?;

        let customer_id = match ask(&mut input, &mut output, "Enter customer id: ").await? {
            Answer::Exit => break,
            Answer::Value(v) => v,
        };
        if let Err(err) = pin_activator::request::validate_customer_id(customer_id.clone()) {
            summary.rejected_inputs += 1;
            reject(&mut output, &err).await?;
            continue;
        }

        let mac_address = match ask(&mut input, &mut output, "Enter MAC Address: ").await? {
            Answer::Exit => break,
            Answer::Value(v) => v,
        };
        let request = match ActivationRequest::new(customer_id, mac_address) {
            Ok(request) => request,
            Err(err) => {
                summary.rejected_inputs += 1;
                reject(&mut output, &err).await?;
                continue;
            }
        };

        let outcome = activator.activate_pin_terminal(&request).await;
        summary.record(outcome);

        let line = match outcome {
            Some(outcome) => format!(
                "Activation status for customerId {}: {}\n",
                request.customer_id,
                paint(outcome)
            ),
            None => format!(
                "{}\n",
                format!(
                    "Activation failed for customerId {}; the southbound system could not be reached.",
                    request.customer_id
                )
                .red()
            ),
        };
        output.write_all(line.as_bytes()).await?;
    }

    output.flush().await?;
    tracing::info!(
        attempts = summary.attempts,
        active = summary.active,
        inactive = summary.inactive,
        errors = summary.errors,
        transport_failures = summary.transport_failures,
        "Session finished"
    );
    Ok(summary)
}

fn paint(outcome: ActivationOutcome) -> colored::ColoredString {
    match outcome {
        ActivationOutcome::Active => outcome.as_str().green(),
        ActivationOutcome::Inactive => outcome.as_str().yellow(),
        ActivationOutcome::Error => outcome.as_str().red(),
    }
}
