use anyhow::Result;
use hello_stack::client::ApiClient;
use hello_stack::config;
use hello_stack::form::HelloForm;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Line-oriented driver for the hello form.
///
/// Each line of stdin becomes the form's input: validation feedback is
/// printed locally before any network call, and a valid line is submitted
/// to the configured backend.
#[tokio::main]
async fn main() -> Result<()> {
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let client = ApiClient::new(config.client)?;
    let mut form = HelloForm::new();

    println!("Type a message and press enter (the server answers \"world\" to \"hello\").");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        form.set_input(line);

        if !form.is_valid() {
            println!("invalid: {}", form.error());
            continue;
        }

        form.submit(&client).await;

        if !form.error().is_empty() {
            println!("error: {}", form.error());
        }
        if let Some(response) = form.response() {
            println!("{} (success: {})", response.message, response.success);
        }
    }

    Ok(())
}
