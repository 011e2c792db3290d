//! Confirmation port guarding destructive operations.

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, instrument};

/// Asks the user to approve a destructive operation.
///
/// Only the session's reset path consults the gate; the ledger itself never
/// does. Declining leaves all state untouched.
#[async_trait]
pub trait ConfirmationGate: Send + Sync {
    /// Presents the request and eventually yields approval or rejection.
    async fn confirm(&self, title: &str, message: &str) -> bool;
}

/// Gate that approves every request. For tests and non-interactive use.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoApprove;

#[async_trait]
impl ConfirmationGate for AutoApprove {
    #[instrument(skip(self, _message))]
    async fn confirm(&self, title: &str, _message: &str) -> bool {
        debug!(title, "Auto-approving");
        true
    }
}

/// Gate that rejects every request. For tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoDeny;

#[async_trait]
impl ConfirmationGate for AutoDeny {
    #[instrument(skip(self, _message))]
    async fn confirm(&self, title: &str, _message: &str) -> bool {
        debug!(title, "Auto-denying");
        false
    }
}

/// Gate that prompts on the terminal and reads a y/N answer.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinConfirm;

#[async_trait]
impl ConfirmationGate for StdinConfirm {
    #[instrument(skip(self, message))]
    async fn confirm(&self, title: &str, message: &str) -> bool {
        println!("{title}: {message}");
        println!("Type 'y' to confirm:");

        let mut line = String::new();
        let mut reader = BufReader::new(tokio::io::stdin());
        match reader.read_line(&mut line).await {
            Ok(_) => line.trim().eq_ignore_ascii_case("y"),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_auto_gates_answer_as_named() {
        assert!(AutoApprove.confirm("Reset", "wipe everything?").await);
        assert!(!AutoDeny.confirm("Reset", "wipe everything?").await);
    }
}
