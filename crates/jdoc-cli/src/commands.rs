use anyhow::Context;
use colored::Colorize;
use serde_json::{json, Value};
use tracing::debug;

use jdoc_codec::{DocumentCodec, JsonCodec};
use jdoc_store::{Store, StoreOptions};

use crate::cli::*;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    let options = load_options(&cli)?;
    debug!(
        dir = %cli.dir.display(),
        file = %cli.file,
        validating = options.validator().is_some(),
        "running command"
    );
    match &cli.command {
        Command::Read => cmd_read(&cli, options).await,
        Command::Get(args) => cmd_get(&cli, options, args).await,
        Command::Write(args) => cmd_write(&cli, options, args).await,
        Command::Update(args) => cmd_update(&cli, options, args).await,
        Command::Delete(args) => cmd_delete(&cli, options, args).await,
        Command::Rm => cmd_rm(&cli, options).await,
        Command::Check(args) => cmd_check(&cli, &options, args),
    }
}

fn load_options(cli: &Cli) -> anyhow::Result<StoreOptions> {
    match &cli.config {
        Some(path) => StoreOptions::load(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(StoreOptions::default()),
    }
}

async fn open_store(cli: &Cli, options: StoreOptions) -> anyhow::Result<Store> {
    let default = parse_document(&cli.default).context("parsing --default")?;
    let store = Store::open(&cli.dir, &cli.file, default, options)
        .await
        .with_context(|| format!("opening {}", cli.dir.join(&cli.file).display()))?;
    Ok(store)
}

async fn cmd_read(cli: &Cli, options: StoreOptions) -> anyhow::Result<()> {
    let store = open_store(cli, options).await?;
    print_value(&store.read().await?)
}

async fn cmd_get(cli: &Cli, options: StoreOptions, args: &GetArgs) -> anyhow::Result<()> {
    let store = open_store(cli, options).await?;
    print_value(&store.get(&args.path).await?)
}

async fn cmd_write(cli: &Cli, options: StoreOptions, args: &WriteArgs) -> anyhow::Result<()> {
    let document = parse_document(&args.document)?;
    let store = open_store(cli, options).await?;
    store.write(document).await?;
    report(cli, "write", None, &format!("Wrote {}", store.path().display()));
    Ok(())
}

async fn cmd_update(cli: &Cli, options: StoreOptions, args: &UpdateArgs) -> anyhow::Result<()> {
    let value = parse_value(&args.value);
    let store = open_store(cli, options).await?;
    store.update(&args.path, value).await?;
    report(cli, "update", Some(&args.path), &format!("Updated {}", args.path.yellow()));
    Ok(())
}

async fn cmd_delete(cli: &Cli, options: StoreOptions, args: &DeleteArgs) -> anyhow::Result<()> {
    let store = open_store(cli, options).await?;
    store.delete(&args.path).await?;
    report(cli, "delete", Some(&args.path), &format!("Deleted {}", args.path.yellow()));
    Ok(())
}

async fn cmd_rm(cli: &Cli, options: StoreOptions) -> anyhow::Result<()> {
    let store = open_store(cli, options).await?;
    store.delete_file().await?;
    report(cli, "rm", None, &format!("Removed {}", store.path().display()));
    Ok(())
}

fn cmd_check(cli: &Cli, options: &StoreOptions, args: &CheckArgs) -> anyhow::Result<()> {
    let document = parse_document(&args.document)?;
    let Some(validator) = options.validator() else {
        report(cli, "check", None, "Validation disabled; document accepted");
        return Ok(());
    };
    match validator.check(&document) {
        Ok(()) => {
            report(cli, "check", None, "Document matches the model");
            Ok(())
        }
        Err(violation) => anyhow::bail!("document does not match the model: {violation}"),
    }
}

fn report(cli: &Cli, operation: &str, path: Option<&str>, message: &str) {
    match cli.format {
        OutputFormat::Text => println!("{} {}", "✓".green().bold(), message),
        OutputFormat::Json => {
            println!("{}", json!({"ok": true, "operation": operation, "path": path}))
        }
    }
}

fn print_value(value: &Value) -> anyhow::Result<()> {
    println!("{}", JsonCodec::new().encode(value)?);
    Ok(())
}

/// Parse a document argument: JSON text, or `@FILE`.
fn parse_document(arg: &str) -> anyhow::Result<Value> {
    let text = match arg.strip_prefix('@') {
        Some(file) => std::fs::read_to_string(file).with_context(|| format!("reading {file}"))?,
        None => arg.to_string(),
    };
    serde_json::from_str(&text).context("document is not valid JSON")
}

/// Parse a value argument, falling back to a plain string.
fn parse_value(arg: &str) -> Value {
    serde_json::from_str(arg).unwrap_or_else(|_| Value::String(arg.to_string()))
}
