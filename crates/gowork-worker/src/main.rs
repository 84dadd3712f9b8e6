use gowork_core::Value;
use gowork_worker::{TaskRegistry, Worker, WorkerConfig};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "gowork")]
#[command(about = "Run a task through a named worker", long_about = None)]
struct Args {
    /// Task to run
    #[arg(required_unless_present = "list")]
    task: Option<String>,

    /// Task arguments, parsed as JSON (plain text becomes a string)
    #[arg(allow_hyphen_values = true)]
    args: Vec<String>,

    /// Worker name (overrides the config file)
    #[arg(short, long)]
    name: Option<String>,

    /// Path to configuration file
    #[arg(long)]
    config: Option<String>,

    /// List registered tasks and exit
    #[arg(long)]
    list: bool,
}

fn parse_arg(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Build the worker from the config file, then apply CLI overrides
fn build_worker(args: &Args) -> anyhow::Result<Worker> {
    // Load configuration
    let mut config = if let Some(config_path) = &args.config {
        WorkerConfig::from_file(config_path)?
    } else {
        WorkerConfig::default()
    };

    // Override with CLI args
    if let Some(name) = &args.name {
        config.name = name.clone();
    }

    Ok(config.into_worker())
}

/// Run the requested task and return its result
fn run(args: &Args, registry: &TaskRegistry) -> anyhow::Result<Value> {
    let worker = build_worker(args)?;

    let task_name = args
        .task
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("No task given"))?;
    let task = registry
        .get(task_name)
        .ok_or_else(|| anyhow::anyhow!("Unknown task: {}", task_name))?;

    let task_args: Vec<Value> = args.args.iter().map(|raw| parse_arg(raw)).collect();

    tracing::info!(
        "Worker {} running task {} with {} args",
        worker.name,
        task_name,
        task_args.len()
    );

    worker.process(task.as_ref(), task_args).map_err(|e| {
        tracing::error!("Task {} failed: {}", task_name, e);
        e.into()
    })
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let registry = TaskRegistry::with_builtins();

    if args.list {
        for name in registry.task_names() {
            println!("{}", name);
        }
        return Ok(());
    }

    // Run task; a task error exits non-zero
    let value = run(&args, &registry)?;
    println!("{}", serde_json::to_string(&value)?);

    Ok(())
}
