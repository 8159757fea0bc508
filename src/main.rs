use fly_avatar::{RunHostCommand, init_tracing};
use std::error::Error;
use tracing::error;

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let result = RunHostCommand::from_env().and_then(|command| command.execute());
    if let Err(host_error) = result {
        error!(error = %host_error, "host failed");
        return Err(host_error.into());
    }

    Ok(())
}
