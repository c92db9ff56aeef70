use clap::{Parser, Subcommand};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use code_formatter::infrastructure::config::Config;
use code_formatter::plugins::code_formatter::PLUGIN_NAME;
use code_formatter::plugins::{CodeFormatterPlugin, PluginManager, PluginManifest};
use code_formatter::PluginError;

#[derive(Parser)]
#[command(name = "code-formatter")]
#[command(about = "Format code snippets through the code-formatter plugin", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "code-formatter.yaml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Format a snippet read from a file or stdin
    Format {
        /// Language of the snippet (javascript, typescript, python, json)
        #[arg(short, long)]
        language: String,

        /// Spaces of indentation (defaults to the configured value)
        #[arg(short, long, allow_hyphen_values = true)]
        indent_size: Option<i64>,

        /// Read the snippet from this file instead of stdin
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Print only the formatted text
        #[arg(long)]
        raw: bool,
    },
    /// Run a raw JSON request object through the plugin
    Exec {
        /// Read the request from this file instead of stdin
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Print the plugin input schema
    Schema,
    /// Print the plugin manifest
    Manifest,
    /// List registered plugins
    List,
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() {
    // Initialize logging; stdout is reserved for results
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    let code = execute(cli, &mut io::stdin().lock(), &mut io::stdout().lock(), &mut io::stderr());
    std::process::exit(code);
}

/// Run a parsed command line and return the process exit code
fn execute(cli: Cli, input: &mut impl Read, out: &mut impl Write, err: &mut impl Write) -> i32 {
    match run(cli, input, out) {
        Ok(()) => 0,
        Err(e) => {
            let _ = writeln!(err, "Error: {}", e);
            1
        }
    }
}

fn run(cli: Cli, input: &mut impl Read, out: &mut impl Write) -> Result<(), CliError> {
    match cli.command {
        Commands::Version => {
            writeln!(out, "code-formatter v{}", env!("CARGO_PKG_VERSION"))?;
            Ok(())
        }
        Commands::InitConfig => init_config(out),
        command => {
            let config = load_config(&cli.config)?;
            let manager = build_manager(&config)?;
            dispatch(command, &manager, input, out)
        }
    }
}

fn dispatch(
    command: Commands,
    manager: &PluginManager,
    input: &mut impl Read,
    out: &mut impl Write,
) -> Result<(), CliError> {
    match command {
        Commands::Format { language, indent_size, file, raw } => {
            let code = read_input(file.as_deref(), input)?;
            let mut request = serde_json::json!({ "code": code, "language": language });
            if let Some(size) = indent_size {
                request["indentSize"] = serde_json::json!(size);
            }
            let output = manager.invoke(PLUGIN_NAME, request)?;
            if raw {
                writeln!(out, "{}", output["formatted"].as_str().unwrap_or_default())?;
            } else {
                write_json(out, &output)?;
            }
        }
        Commands::Exec { file } => {
            let text = read_input(file.as_deref(), input)?;
            let request: serde_json::Value = serde_json::from_str(&text)
                .map_err(|e| CliError::Input(format!("request is not valid JSON: {}", e)))?;
            let output = manager.invoke(PLUGIN_NAME, request)?;
            write_json(out, &output)?;
        }
        Commands::Schema => {
            let schema = manager
                .schema(PLUGIN_NAME)
                .ok_or_else(|| PluginError::NotFound(PLUGIN_NAME.to_string()))?;
            write_json(out, &schema)?;
        }
        Commands::Manifest => {
            let plugin = manager
                .get(PLUGIN_NAME)
                .ok_or_else(|| PluginError::NotFound(PLUGIN_NAME.to_string()))?;
            write!(out, "{}", PluginManifest::from_plugin(plugin.as_ref()).to_yaml()?)?;
        }
        Commands::List => {
            for info in manager.list_plugins() {
                writeln!(out, "{} v{} - {}", info.name, info.version, info.description)?;
            }
        }
        Commands::Version | Commands::InitConfig => {}
    }
    Ok(())
}

fn load_config(path: &str) -> Result<Config, CliError> {
    if Path::new(path).exists() {
        tracing::info!("Loading config from {}", path);
        Ok(Config::load(path)?)
    } else {
        let config = Config::load_env();
        config.validate()?;
        Ok(config)
    }
}

fn build_manager(config: &Config) -> Result<PluginManager, CliError> {
    let mut manager = PluginManager::new(config.plugins.clone());
    manager.register(CodeFormatterPlugin::new(config.formatter.clone()))?;
    Ok(manager)
}

fn read_input(file: Option<&Path>, input: &mut impl Read) -> Result<String, CliError> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| CliError::Input(format!("Failed to read {}: {}", path.display(), e))),
        None => {
            let mut buf = String::new();
            input
                .read_to_string(&mut buf)
                .map_err(|e| CliError::Input(format!("Failed to read stdin: {}", e)))?;
            Ok(buf)
        }
    }
}

fn write_json(out: &mut impl Write, value: &serde_json::Value) -> Result<(), CliError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| PluginError::Serialization(e.to_string()))?;
    writeln!(out, "{}", text)?;
    Ok(())
}

fn init_config(out: &mut impl Write) -> Result<(), CliError> {
    let yaml = serde_yaml::to_string(&Config::default())
        .map_err(|e| CliError::Input(format!("Failed to render config: {}", e)))?;
    writeln!(out, "{}", yaml)?;
    writeln!(out, "\nSave this to code-formatter.yaml and adjust as needed.")?;
    Ok(())
}

/// Errors surfaced by the command line
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Plugin(#[from] PluginError),

    #[error(transparent)]
    Config(#[from] code_formatter::ConfigError),

    #[error("{0}")]
    Input(String),

    #[error("Output error: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Run the CLI against in-memory stdin, returning (exit code, stdout, stderr)
    fn run_cli(args: &[&str], stdin: &str) -> (i32, String, String) {
        let mut argv = vec!["code-formatter", "--config", "/nonexistent/code-formatter.yaml"];
        argv.extend_from_slice(args);
        let cli = Cli::try_parse_from(argv).unwrap();

        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = execute(cli, &mut stdin.as_bytes(), &mut out, &mut err);
        (code, String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn test_format_prints_result_json() {
        let (code, out, err) = run_cli(&["format", "-l", "python"], "foo\n  bar\nbaz");
        assert_eq!(code, 0, "stderr: {}", err);

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["formatted"], "foo\n  bar\n  baz");
        assert_eq!(value["lineCount"], 3);
        assert_eq!(value["message"], "Successfully formatted python code");
    }

    #[test]
    fn test_format_raw_prints_text_only() {
        let (code, out, _) = run_cli(&["format", "--language", "json", "--raw"], "{\"a\":1}");
        assert_eq!(code, 0);
        assert_eq!(out, "{\n  \"a\": 1\n}\n");
    }

    #[test]
    fn test_format_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "  x\n      y").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let (code, out, _) = run_cli(&["format", "-l", "javascript", "-i", "4", "-f", &path, "--raw"], "");
        assert_eq!(code, 0);
        assert_eq!(out, "x\n    y\n");
    }

    #[test]
    fn test_negative_indent_reaches_validation() {
        let cli = Cli::try_parse_from(["code-formatter", "format", "-l", "json", "--indent-size", "-2"]).unwrap();
        match &cli.command {
            Commands::Format { indent_size, .. } => assert_eq!(*indent_size, Some(-2)),
            _ => panic!("expected format command"),
        }

        let (code, out, err) = run_cli(&["format", "-l", "json", "--indent-size", "-2"], "{}");
        assert_eq!(code, 1);
        assert!(out.is_empty());
        assert!(err.contains("must not be negative"), "stderr: {}", err);
    }

    #[test]
    fn test_invalid_json_snippet_exits_with_failure() {
        let (code, out, err) = run_cli(&["format", "-l", "json"], "{bad json");
        assert_eq!(code, 1);
        assert!(out.is_empty());
        assert_eq!(err, "Error: Invalid JSON syntax\n");
    }

    #[test]
    fn test_unsupported_language_exits_with_failure() {
        let (code, _, err) = run_cli(&["format", "-l", "ruby"], "x");
        assert_eq!(code, 1);
        assert!(err.contains("unsupported language 'ruby'"));
    }

    #[test]
    fn test_exec_runs_request_object() {
        let request = r#"{"code": "  {\"a\":1}", "language": "json", "indentSize": 2}"#;
        let (code, out, _) = run_cli(&["exec"], request);
        assert_eq!(code, 0);

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["formatted"], "{\n  \"a\": 1\n}");
        assert_eq!(value["lineCount"], 3);
    }

    #[test]
    fn test_exec_rejects_malformed_request() {
        let (code, out, err) = run_cli(&["exec"], "{not json");
        assert_eq!(code, 1);
        assert!(out.is_empty());
        assert!(err.starts_with("Error: request is not valid JSON"), "stderr: {}", err);
    }

    #[test]
    fn test_schema_and_list() {
        let (code, out, _) = run_cli(&["schema"], "");
        assert_eq!(code, 0);
        let schema: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(schema["properties"]["indentSize"]["default"], 2);

        let (code, out, _) = run_cli(&["list"], "");
        assert_eq!(code, 0);
        assert!(out.starts_with("code-formatter v"));
    }
}
