//! Error handling and display for the CLI.

use armkit_resourceids::ResourceIdError;
use armkit_sdk::SdkError;
use colored::Colorize;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Not authenticated. Pass --token or set ARM_ACCESS_TOKEN.")]
    NotAuthenticated,

    #[error("No {0} specified. Pass it as a flag or set a default with `armctl context set`.")]
    MissingDefault(&'static str),

    #[error(transparent)]
    Sdk(#[from] SdkError),

    #[error(transparent)]
    InvalidId(#[from] ResourceIdError),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    // Check for specific error types and provide hints
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        if let Some(hint) = hint(cli_err) {
            eprintln!("\n{}", hint.yellow());
        }
    }
}

fn hint(err: &CliError) -> Option<&'static str> {
    match err {
        CliError::NotAuthenticated => {
            Some("Hint: Obtain a token with `az account get-access-token`.")
        }
        CliError::Sdk(sdk) => match sdk.status() {
            Some(401) => Some("Hint: Your token may have expired."),
            Some(403) => Some("Hint: You may not have permission for this operation."),
            Some(404) => Some("Hint: Check the subscription, resource group, and name."),
            _ if matches!(sdk, SdkError::Http(_)) => {
                Some("Hint: Check your network connection and endpoint.")
            }
            _ => None,
        },
        CliError::InvalidId(_) => {
            Some("Hint: Run `armctl ids example <kind>` to see the expected shape.")
        }
        _ => None,
    }
}
