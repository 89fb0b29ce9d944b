use anyhow::Result;
use gardi::cli::{actions, actions::Action, start};
use std::process::ExitCode;

// Main function
fn main() -> Result<ExitCode> {
    // Start the program
    let action = start()?;

    // Handle the action
    match action {
        Action::Check { .. } => {
            let access = actions::check::handle(action)?;
            if access.is_allowed() {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::from(1))
            }
        }
        Action::Routes { .. } => {
            actions::routes::handle(action)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
