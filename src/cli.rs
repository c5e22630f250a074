use std::io::IsTerminal;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::nitro::catalog;
use crate::nitro::{ConfigObjectClient, Fields, NitroClient, NitroConfig};

#[derive(Parser)]
#[command(
    name = "nitro-config",
    about = "Manage NetScaler configuration objects through the NITRO API",
    version = "0.1.0"
)]
pub struct Cli {
    /// JSON file with connection settings (host, username, password, use_ssl, verify_ssl, timeout_secs).
    #[arg(long, global = true, env = "NITRO_CONFIG")]
    pub config: Option<String>,

    /// Appliance address. Overrides NITRO_HOST and the config file.
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// API user. Overrides NITRO_USER and the config file.
    #[arg(long, global = true)]
    pub user: Option<String>,

    /// API password. Overrides NITRO_PASS and the config file.
    #[arg(long, global = true)]
    pub password: Option<String>,

    /// Talk plain HTTP instead of HTTPS.
    #[arg(long, global = true)]
    pub no_ssl: bool,

    /// Verify the appliance TLS certificate.
    #[arg(long, global = true)]
    pub verify_ssl: bool,

    /// Extra request header as NAME:VALUE. Repeatable.
    #[arg(long = "header", value_name = "NAME:VALUE", global = true)]
    pub headers: Vec<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new object to the running configuration.
    Add {
        type_name: String,
        /// Fields as key=value; values are read as JSON when they parse, else as text.
        #[arg(value_name = "FIELD=VALUE")]
        fields: Vec<String>,
        /// Save the running configuration afterwards.
        #[arg(long)]
        save: bool,
    },
    /// Update fields of an existing object.
    Update {
        type_name: String,
        #[arg(value_name = "FIELD=VALUE")]
        fields: Vec<String>,
        #[arg(long)]
        save: bool,
    },
    /// Reset fields of an object to their defaults.
    Unset {
        type_name: String,
        #[arg(value_name = "FIELD")]
        fields: Vec<String>,
        #[arg(long)]
        save: bool,
    },
    /// Query objects, optionally filtered by exact field values.
    Get {
        type_name: String,
        #[arg(value_name = "FIELD=VALUE")]
        filters: Vec<String>,
    },
    /// Enable an object by its key field.
    Enable {
        type_name: String,
        key: String,
        #[arg(long)]
        save: bool,
    },
    /// Disable an object by its key field.
    Disable {
        type_name: String,
        key: String,
        #[arg(long)]
        save: bool,
    },
    /// Save the running configuration.
    Save,
    /// List the known object types and their operations.
    Types,
}

/// Parses `key=value` arguments into a field map.
pub fn parse_assignments(args: &[String]) -> Result<Fields> {
    let mut fields = Fields::new();
    for arg in args {
        let (key, raw) = arg
            .split_once('=')
            .with_context(|| format!("expected FIELD=VALUE, got '{}'", arg))?;
        let value = serde_json::from_str::<Value>(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
        fields.insert(key.to_string(), value);
    }
    Ok(fields)
}

/// Parses `NAME:VALUE` header arguments.
pub fn parse_headers(args: &[String]) -> Result<Vec<(String, String)>> {
    args.iter()
        .map(|arg| {
            let (name, value) = arg
                .split_once(':')
                .with_context(|| format!("expected NAME:VALUE, got '{}'", arg))?;
            Ok((name.trim().to_string(), value.trim().to_string()))
        })
        .collect()
}

/// Turns bare field names into unset sentinels.
pub fn unset_fields(names: &[String]) -> Fields {
    names
        .iter()
        .map(|name| (name.clone(), Value::Bool(true)))
        .collect()
}

fn resolve_config(cli: &Cli) -> Result<NitroConfig> {
    let mut config = match &cli.config {
        Some(path) => NitroConfig::from_file(path)
            .with_context(|| format!("failed to load config file {}", path))?,
        None => NitroConfig::default(),
    }
    .with_env_overrides();

    if let Some(host) = &cli.host {
        config.host = host.clone();
    }
    if let Some(user) = &cli.user {
        config.username = user.clone();
    }
    if let Some(password) = &cli.password {
        config.password = password.clone();
    }
    if cli.no_ssl {
        config.use_ssl = false;
    }
    if cli.verify_ssl {
        config.verify_ssl = true;
    }

    if config.password.is_empty() && std::io::stdin().is_terminal() {
        config.password = dialoguer::Password::new()
            .with_prompt(format!("NITRO password for {}", config.username))
            .interact()?;
    }
    Ok(config)
}

fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    if let Commands::Types = cli.command {
        for schema in catalog::registry().iter() {
            let ops: Vec<&str> = schema.operations.iter().map(|op| op.as_str()).collect();
            println!("{:<48} {}", schema.type_name, ops.join(","));
        }
        return Ok(());
    }

    let config = resolve_config(&cli)?;
    info!("Connecting to NITRO at {}", config.base_url());
    let mut nitro = NitroClient::new(&config)?;
    for (name, value) in parse_headers(&cli.headers)? {
        debug!("Adding request header {}", name);
        nitro.add_header(&name, &value);
    }
    let client = ConfigObjectClient::from_nitro(nitro);

    let output = match &cli.command {
        Commands::Add {
            type_name,
            fields,
            save,
        } => {
            let schema = catalog::schema(type_name)?;
            let fields = parse_assignments(fields)?;
            debug!("add {} {:?}", type_name, fields);
            client.create(schema, &fields, *save).await?.to_legacy()
        }
        Commands::Update {
            type_name,
            fields,
            save,
        } => {
            let schema = catalog::schema(type_name)?;
            let fields = parse_assignments(fields)?;
            client.update(schema, &fields, *save).await?.to_legacy()
        }
        Commands::Unset {
            type_name,
            fields,
            save,
        } => {
            let schema = catalog::schema(type_name)?;
            client
                .unset(schema, &unset_fields(fields), *save)
                .await?
                .to_legacy()
        }
        Commands::Get { type_name, filters } => {
            let schema = catalog::schema(type_name)?;
            let filters = parse_assignments(filters)?;
            client.query(schema, &filters).await?
        }
        Commands::Enable {
            type_name,
            key,
            save,
        } => {
            let schema = catalog::schema(type_name)?;
            client.enable(schema, &json!(key), *save).await?.to_legacy()
        }
        Commands::Disable {
            type_name,
            key,
            save,
        } => {
            let schema = catalog::schema(type_name)?;
            client.disable(schema, &json!(key), *save).await?.to_legacy()
        }
        Commands::Save => client.save_config().await,
        Commands::Types => unreachable!("handled before connecting"),
    };

    print_json(&output)
}
