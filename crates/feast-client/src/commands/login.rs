/*!
 * Password login command
 */

use anyhow::{Context, Result};
use colored::*;

use crate::types::LoginResponse;

pub async fn login(server: &str, acct: &str, pwd: &str) -> Result<()> {
    println!("{}", "=== Password Login ===".bold().cyan());

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/api/v1/login", server.trim_end_matches('/')))
        .form(&[("acct", acct), ("pwd", pwd)])
        .send()
        .await
        .context("Failed to reach server")?;

    if !response.status().is_success() {
        let status = response.status();
        let error_text = response.text().await?;
        anyhow::bail!("Login failed {}: {}", status, error_text.trim());
    }

    let login: LoginResponse = response.json().await?;
    println!("{}", "✓ Login successful!".green().bold());
    println!("\n  Token: {}", login.token);

    Ok(())
}
