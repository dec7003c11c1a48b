//! Text reports over the Notion databases shared with the integration.
//!
//! Each report walks its databases one at a time. A database that is not
//! configured or fails to load gets a `❌` line and the walk moves on.

use std::collections::HashMap;
use std::io::Write;

use colored::Colorize;

use crate::config::{mask_secret, DatabaseTarget, NotionConfig};
use crate::error::{FetchError, Result};
use crate::models::Database;
use crate::notion::NotionClient;

pub const EXPECTED_DATABASES: [&str; 4] = ["Daily Journal", "Health Tracker", "Projects", "Tasks"];

const PROPERTY_PREVIEW: usize = 5;

pub fn render_schema<W: Write>(out: &mut W, name: &str, db: &Database) -> Result<()> {
    let schemas = db.property_schemas()?;

    writeln!(out, "\n{} DATABASE:", name.to_uppercase())?;
    writeln!(out, "Title: {}", db.title_text().unwrap_or("N/A"))?;
    writeln!(out, "Properties:")?;
    for (prop, schema) in schemas {
        writeln!(out, "  - {}: {}", prop, schema.kind)?;
        if let Some(options) = schema.option_names() {
            writeln!(out, "    Options: {}", options.join(", "))?;
        }
    }
    Ok(())
}

pub fn render_access<W: Write>(out: &mut W, name: &str, id: &str, db: &Database) -> Result<()> {
    writeln!(out, "✅ {}: {} ({})", name, db.title_text().unwrap_or("Accessible"), id)?;

    let preview: Vec<_> = db.property_names().take(PROPERTY_PREVIEW).collect();
    let more = if db.properties.len() > preview.len() { "..." } else { "" };
    writeln!(out, "   Properties: {}{}", preview.join(", "), more)?;
    Ok(())
}

fn render_failure<W: Write>(out: &mut W, name: &str, message: &str) -> Result<()> {
    writeln!(out, "❌ {}: {}", name, message)?;
    Ok(())
}

async fn load(
    client: &NotionClient,
    target: &DatabaseTarget,
) -> std::result::Result<(String, Database), String> {
    let id = target.id.as_deref().ok_or_else(|| "No ID configured".to_string())?;
    match client.retrieve_database(id).await {
        Ok(db) => Ok((id.to_string(), db)),
        Err(e) => Err(e.to_string()),
    }
}

/// Prints the property schema of each target database.
pub async fn inspect_schemas<W: Write>(
    client: &NotionClient,
    targets: &[DatabaseTarget],
    out: &mut W,
) -> Result<()> {
    writeln!(out, "📊 Notion Database Schemas:\n")?;

    for target in targets {
        let rendered = match load(client, target).await {
            Ok((_, db)) => render_schema(out, target.name, &db),
            Err(message) => render_failure(out, target.name, &message),
        };
        match rendered {
            Err(FetchError::Decode(e)) => render_failure(out, target.name, &e.to_string())?,
            other => other?,
        }
    }
    Ok(())
}

/// Confirms each configured database can be read.
pub async fn check_databases<W: Write>(
    client: &NotionClient,
    targets: &[DatabaseTarget],
    out: &mut W,
) -> Result<()> {
    writeln!(out, "Testing Notion Database Access:\n")?;

    for target in targets {
        match load(client, target).await {
            Ok((id, db)) => render_access(out, target.name, &id, &db)?,
            Err(message) => render_failure(out, target.name, &message)?,
        }
    }
    Ok(())
}

/// `Daily Journal` -> `DAILY_JOURNAL`
pub fn env_name(db_name: &str) -> String {
    db_name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_uppercase()
}

pub fn render_database_list<W: Write>(out: &mut W, databases: &[Database]) -> Result<()> {
    writeln!(out, "{}", "✅ Successfully connected to Notion!".green())?;
    writeln!(out, "\n{}\n", format!("Found {} database(s):", databases.len()).cyan())?;

    for (index, db) in databases.iter().enumerate() {
        let title = db.title_text().unwrap_or("Untitled");
        writeln!(out, "{}", format!("{}. 📊 {}", index + 1, title).green())?;
        writeln!(out, "   ID: {}", db.id.yellow())?;
        writeln!(out, "   URL: {}", db.url.as_deref().unwrap_or("").blue())?;
        writeln!(out)?;
    }
    Ok(())
}

/// Maps database titles to ids; a repeated title keeps the last id.
pub fn index_by_title(databases: &[Database]) -> HashMap<String, String> {
    databases
        .iter()
        .map(|db| {
            (
                db.title_text().unwrap_or("Untitled").to_string(),
                db.id.clone(),
            )
        })
        .collect()
}

pub fn render_expected<W: Write>(out: &mut W, found: &HashMap<String, String>) -> Result<()> {
    writeln!(out, "{}\n", "Checking for Motus databases:".cyan())?;
    for name in EXPECTED_DATABASES {
        if found.contains_key(name) {
            writeln!(out, "{}", format!("✅ Found: {}", name).green())?;
        } else {
            writeln!(out, "{}", format!("⚠️  Missing: {}", name).yellow())?;
        }
    }
    Ok(())
}

pub fn render_journal_properties<W: Write>(out: &mut W, journal: &Database) -> Result<()> {
    writeln!(out, "{}", "✅ Can access Daily Journal database".green())?;
    writeln!(out, "\n{}", "Database properties:".cyan())?;
    for (name, schema) in journal.property_schemas()? {
        writeln!(out, "  - {} ({})", name, schema.kind)?;
    }
    Ok(())
}

pub fn render_env_suggestions<W: Write>(
    out: &mut W,
    api_key: Option<&str>,
    found: &HashMap<String, String>,
) -> Result<()> {
    writeln!(out, "\n{}", "═".repeat(39).cyan())?;
    writeln!(out, "{}\n", "Suggested .env configuration:".green())?;
    writeln!(out, "# Notion Integration")?;
    writeln!(
        out,
        "NOTION_API_KEY={}",
        api_key.map(mask_secret).unwrap_or_else(|| "your_token_here".to_string())
    )?;
    writeln!(out)?;

    writeln!(out, "# Database Names (for auto-discovery)")?;
    for name in EXPECTED_DATABASES {
        writeln!(out, "NOTION_{}_NAME=\"{}\"", env_name(name), name)?;
    }
    writeln!(out)?;

    writeln!(out, "# Or use explicit IDs:")?;
    for name in EXPECTED_DATABASES {
        let id = found.get(name).map(String::as_str).unwrap_or("not_found");
        writeln!(out, "NOTION_{}_DB={}", env_name(name), id)?;
    }
    Ok(())
}

pub fn render_connection_failure<W: Write>(out: &mut W, error: &FetchError) -> Result<()> {
    writeln!(out, "{}", format!("❌ Connection failed: {}", error).red())?;
    match error.code() {
        Some("unauthorized") => {
            writeln!(out, "\n{}", "Check that your NOTION_API_KEY is correct".yellow())?;
        }
        Some("restricted_resource") => {
            writeln!(
                out,
                "\n{}",
                "The integration doesn't have access to this resource".yellow()
            )?;
        }
        _ => {}
    }
    writeln!(out, "\nFull error: {:?}", error)?;
    Ok(())
}

/// Discovers every database the integration can see and suggests `.env` lines.
///
/// Only a missing API key is returned as an error; a failed search is
/// reported in the output.
pub async fn test_connection<W: Write>(config: &NotionConfig, out: &mut W) -> Result<()> {
    let client = match NotionClient::new(config) {
        Ok(client) => client,
        Err(e @ FetchError::MissingConfig(_)) => {
            writeln!(out, "{}", "❌ Missing NOTION_API_KEY in .env file".red())?;
            writeln!(out, "\nPlease add your Notion integration token to .env:")?;
            writeln!(out, "NOTION_API_KEY=secret_xxxxxxxxxxxx")?;
            return Err(e);
        }
        Err(e) => return Err(e),
    };

    writeln!(out, "{}\n", "🔍 Testing Notion Integration...".cyan())?;
    writeln!(out, "{}", "Searching for databases...".blue())?;

    let databases = match client.search_databases().await {
        Ok(databases) => databases,
        Err(e) => return render_connection_failure(out, &e),
    };

    if databases.is_empty() {
        writeln!(out, "{}", "⚠️  No databases found!".yellow())?;
        writeln!(out, "\nMake sure you've:")?;
        writeln!(out, "1. Created databases in Notion")?;
        writeln!(out, "2. Given your integration access to them")?;
        return Ok(());
    }

    render_database_list(out, &databases)?;
    let found = index_by_title(&databases);
    render_expected(out, &found)?;

    if let Some(journal_id) = found.get("Daily Journal") {
        writeln!(out, "\n{}", "Testing write access to Daily Journal...".cyan())?;
        let rendered = match client.retrieve_database(journal_id).await {
            Ok(journal) => render_journal_properties(out, &journal),
            Err(e) => Err(e),
        };
        match rendered {
            Err(FetchError::Output(e)) => return Err(e.into()),
            Err(e) => writeln!(
                out,
                "{}",
                format!("❌ Cannot access Daily Journal: {}", e).red()
            )?,
            Ok(()) => {}
        }
    }

    render_env_suggestions(out, config.api_key.as_deref(), &found)
}
