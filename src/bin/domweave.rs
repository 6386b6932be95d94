use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(name = "domweave", version)]
struct Cli {
    /// Log level written to stderr.
    #[arg(long, value_enum, global = true, default_value_t = LogLevel::Warn)]
    log: LogLevel,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a document, apply its interactions and print every node's chain.
    Compose(ComposeArgs),
}

#[derive(Parser, Debug)]
struct ComposeArgs {
    /// Input document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Run queued UI tasks after the interactions.
    #[arg(long)]
    flush: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Self::ERROR,
            LogLevel::Warn => Self::WARN,
            LogLevel::Info => Self::INFO,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Trace => Self::TRACE,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct Document {
    opts: domweave::TreeOpts,
    theme: domweave::StaticTheme,
    nodes: Vec<NodeDoc>,
    interactions: Vec<InteractionDoc>,
    methods: Vec<MethodDoc>,
}

#[derive(Deserialize, Debug)]
struct NodeDoc {
    id: i32,
    tag: String,
    #[serde(default)]
    parent: Option<i32>,
    #[serde(default)]
    slot: Option<usize>,
    #[serde(default)]
    page: i32,
    #[serde(default)]
    attrs: Vec<(String, String)>,
    #[serde(default)]
    styles: Vec<(String, String)>,
    #[serde(default)]
    events: Vec<String>,
    #[serde(default)]
    keyframes: Vec<BTreeMap<String, String>>,
    #[serde(default)]
    transition_enter: Vec<BTreeMap<String, String>>,
    #[serde(default)]
    transition_exit: Vec<BTreeMap<String, String>>,
}

#[derive(Deserialize, Debug, Clone, Copy)]
#[serde(rename_all = "snake_case")]
enum InteractionKind {
    Active,
    Focus,
    Checked,
    Disabled,
    Waiting,
}

#[derive(Deserialize, Debug)]
struct InteractionDoc {
    node: i32,
    kind: InteractionKind,
    value: bool,
}

#[derive(Deserialize, Debug)]
struct MethodDoc {
    node: i32,
    method: String,
    #[serde(default)]
    args: serde_json::Value,
}

#[derive(Serialize)]
struct NodeReport<'a> {
    id: i32,
    tag: &'a str,
    chain: domweave::ChainSnapshot,
    state: domweave::InteractionState,
    style: &'a domweave::NodeStyle,
    leaf: &'a BTreeMap<String, serde_json::Value>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::from(cli.log))
        .init();

    match cli.cmd {
        Command::Compose(args) => cmd_compose(args),
    }
}

fn read_document(path: &Path) -> anyhow::Result<Document> {
    let f = File::open(path).with_context(|| format!("open document '{}'", path.display()))?;
    let doc: Document =
        serde_json::from_reader(BufReader::new(f)).with_context(|| "parse document JSON")?;
    Ok(doc)
}

fn handle_of(tree: &domweave::DomTree, id: i32) -> anyhow::Result<domweave::NodeHandle> {
    tree.find(domweave::NodeId(id))
        .with_context(|| format!("unknown node {id}"))
}

fn build_tree(doc: Document) -> anyhow::Result<(domweave::DomTree, bool)> {
    let mut tree = domweave::DomTree::new(doc.opts).with_theme(Arc::new(doc.theme));

    for n in &doc.nodes {
        let h = tree.create_node(domweave::NodeId(n.id), &n.tag)?;
        tree.set_attrs(h, &n.attrs)?;
        tree.set_styles(h, &n.styles)?;
        tree.add_events(h, domweave::PageId(n.page), &n.events)?;
        if !n.keyframes.is_empty() {
            tree.set_animation_style(h, &n.keyframes)?;
        }
        if !n.transition_enter.is_empty() {
            tree.set_transition_style(h, domweave::TransitionDirection::Enter, &n.transition_enter)?;
        }
        if !n.transition_exit.is_empty() {
            tree.set_transition_style(h, domweave::TransitionDirection::Exit, &n.transition_exit)?;
        }
    }

    let mut has_root = false;
    for n in &doc.nodes {
        let h = handle_of(&tree, n.id)?;
        match n.parent {
            Some(parent) => {
                let p = handle_of(&tree, parent)?;
                tree.mount(h, p, n.slot)?;
            }
            None if !has_root => {
                tree.set_root(h)?;
                has_root = true;
            }
            None => anyhow::bail!("node {} has no parent and a root is already set", n.id),
        }
    }

    for i in &doc.interactions {
        let h = handle_of(&tree, i.node)?;
        match i.kind {
            InteractionKind::Active => tree.on_active(h, i.value)?,
            InteractionKind::Focus => tree.on_focus(h, i.value)?,
            InteractionKind::Checked => tree.on_checked(h, i.value)?,
            InteractionKind::Disabled => tree.set_disabled(h, i.value)?,
            InteractionKind::Waiting => tree.set_waiting(h, i.value)?,
        }
    }

    for m in &doc.methods {
        let h = handle_of(&tree, m.node)?;
        tree.call_method(h, &m.method, &m.args.to_string())?;
    }

    Ok((tree, has_root))
}

fn cmd_compose(args: ComposeArgs) -> anyhow::Result<()> {
    let doc = read_document(&args.in_path)?;
    let (mut tree, has_root) = build_tree(doc)?;
    if !has_root {
        anyhow::bail!("document has no root node");
    }

    if args.flush {
        let ran = tree.flush_tasks();
        tracing::info!(ran, "flushed ui tasks");
    } else if tree.pending_tasks() > 0 {
        eprintln!("{} ui task(s) left pending", tree.pending_tasks());
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for (id, h) in tree.handles().collect::<Vec<_>>() {
        let node = tree
            .node(h)
            .with_context(|| format!("node {} vanished", id.0))?;
        let report = NodeReport {
            id: id.0,
            tag: node.tag(),
            chain: node.composition().snapshot(),
            state: node.state(),
            style: node.style(),
            leaf: &node.composition().leaf().props,
        };
        serde_json::to_writer(&mut out, &report).with_context(|| "write snapshot")?;
        writeln!(out)?;
    }
    Ok(())
}
