mod config;
mod metrics;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use config::AppConfig;
use extract::TripleStore;
use metrics::{RunMetrics, TimedOperation};
use report::{
    AnalysisReport, ArtifactWriter, Artifacts, ChecklistReport, ChecklistScope, load_triples,
};
use visualize::{RenderInput, Renderer};

#[derive(Parser, Debug)]
#[command(name = "kgraph", version, about = "Dictionary and rule based knowledge graph builder")]
struct Cli {
    /// JSON config file; built-in vocabulary when absent
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Extract triples from text files or directories and write every artifact.
    Build {
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
        #[arg(long)]
        focus: Option<String>,
        #[arg(long, short)]
        output: Option<PathBuf>,
        #[arg(long)]
        no_plots: bool,
        #[arg(long)]
        no_html: bool,
    },
    /// Re-run the knowledge checklist against a saved triples.json or triples.csv.
    Check {
        triples: PathBuf,
        #[arg(long)]
        focus: Option<String>,
        /// Check against every triple instead of the focus subset
        #[arg(long)]
        all: bool,
    },
    /// Print the effective configuration as JSON.
    Config,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    match cli.command {
        Commands::Build {
            inputs,
            focus,
            output,
            no_plots,
            no_html,
        } => {
            if let Some(focus) = focus {
                config.focus = focus;
            }
            if let Some(output) = output {
                config.output_dir = output;
            }
            config.render.plots &= !no_plots;
            config.render.html &= !no_html;

            let outcome = run_build(&config, &inputs).await?;
            print_summary(&outcome);
        }
        Commands::Check { triples, focus, all } => {
            if let Some(focus) = focus {
                config.focus = focus;
            }
            if all {
                config.checklist_scope = ChecklistScope::All;
            }

            let checklist = run_check(&config, &triples)?;
            print_checklist(&checklist);
        }
        Commands::Config => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

struct BuildOutcome {
    report: AnalysisReport,
    written: Vec<PathBuf>,
}

async fn run_build(config: &AppConfig, inputs: &[PathBuf]) -> Result<BuildOutcome> {
    let mut metrics = RunMetrics::new();

    // Rules are compiled before anything is read so a bad config writes nothing
    let extractor = config.extractor()?;

    let timer = TimedOperation::start();
    let corpus = ingest::ingest_paths(inputs).await.context("ingesting inputs")?;
    let text = corpus.combined_text();
    timer.finish(&mut metrics, "ingest", corpus.len());

    let timer = TimedOperation::start();
    let extraction = extractor.extract_from_text(&text);
    timer.finish(&mut metrics, "extract", extraction.entities.len() + extraction.relations.len());

    let timer = TimedOperation::start();
    let store = extractor.build_store(&extraction);
    let focus_triples = store.focus_subset(&config.focus);
    timer.finish(&mut metrics, "assemble", store.len());

    let timer = TimedOperation::start();
    let report = config
        .report_generator()
        .generate(&text, &extraction.entities, &extraction.relations, &store);
    timer.finish(&mut metrics, "report", report.checklist.total);

    let timer = TimedOperation::start();
    let mut written = ArtifactWriter::new(&config.output_dir)
        .write_all(&Artifacts {
            entities: &extraction.entities,
            relations: &extraction.relations,
            triples: store.triples(),
            focus_triples: &focus_triples,
            report: &report,
        })
        .with_context(|| format!("writing artifacts to {}", config.output_dir.display()))?;
    timer.finish(&mut metrics, "write", written.len());

    let timer = TimedOperation::start();
    let figures = Renderer::new(&config.output_dir, config.render).render(&RenderInput {
        text: &text,
        entities: &extraction.entities,
        store: &store,
        report: &report,
        primary_category: config.primary_category(),
    })?;
    timer.finish(&mut metrics, "render", figures.len());
    written.extend(figures);

    let snapshot = metrics.snapshot();
    info!(
        total_ms = snapshot.total_ms,
        stages = %serde_json::to_string(&snapshot.stages)?,
        "Build finished"
    );

    Ok(BuildOutcome { report, written })
}

fn run_check(config: &AppConfig, path: &Path) -> Result<ChecklistReport> {
    let triples = load_triples(path).with_context(|| format!("loading {}", path.display()))?;
    let store = TripleStore::from_triples(triples);
    info!(triples = store.len(), path = %path.display(), "Loaded triples");

    Ok(config.report_generator().check(&store))
}

fn print_summary(outcome: &BuildOutcome) {
    let stats = &outcome.report.statistics;

    println!("\n{} 知识图谱构建完成", outcome.report.focus.entity);
    println!("  实体数量: {}", stats.total_entities);
    println!("  关系数量: {}", stats.total_relations);
    println!("  三元组数量: {}", stats.total_triples);
    println!("  {}相关三元组: {}", outcome.report.focus.entity, stats.focus_triples);
    print_checklist(&outcome.report.checklist);

    println!("\n生成的文件:");
    for path in &outcome.written {
        println!("  {}", path.display());
    }
}

fn print_checklist(checklist: &ChecklistReport) {
    for result in &checklist.results {
        let mark = if result.found { "✓" } else { "○" };
        println!(
            "  {} {} --[{}]--> {}",
            mark, result.item.subject, result.item.predicate, result.item.object
        );
    }
    println!(
        "  知识发现率: {}/{} ({:.1}%)",
        checklist.found,
        checklist.total,
        checklist.rate * 100.0
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use visualize::RenderOptions;

    const NEZHA_TEXT: &str = "哪吒是李靖的儿子，敖丙是哪吒的朋友。\n太乙真人是哪吒的师父。";

    fn test_config(output_dir: &Path) -> AppConfig {
        AppConfig {
            output_dir: output_dir.to_path_buf(),
            render: RenderOptions {
                plots: false,
                html: true,
                dot: true,
            },
            ..AppConfig::default()
        }
    }

    #[tokio::test]
    async fn test_build_writes_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("all_text.txt");
        std::fs::write(&input, NEZHA_TEXT).unwrap();
        let output = dir.path().join("out");

        let outcome = run_build(&test_config(&output), &[input]).await.unwrap();

        // 9 report artifacts plus 2 html pages and the dot file
        assert_eq!(outcome.written.len(), 12);
        assert!(output.join("triples.csv").exists());
        assert!(output.join("relation_graph.dot").exists());
        assert!(outcome.report.statistics.total_entities > 0);
        assert_eq!(outcome.report.focus.entity, "哪吒");
    }

    #[tokio::test]
    async fn test_build_missing_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out");

        let result = run_build(&test_config(&output), &[dir.path().join("missing.txt")]).await;
        assert!(result.is_err());
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn test_check_reloads_csv() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("all_text.txt");
        std::fs::write(&input, NEZHA_TEXT).unwrap();
        let output = dir.path().join("out");
        let config = test_config(&output);

        let outcome = run_build(&config, &[input]).await.unwrap();
        let checklist = run_check(&config, &output.join("triples.csv")).unwrap();

        assert_eq!(checklist.total, outcome.report.checklist.total);
        assert_eq!(checklist.found, outcome.report.checklist.found);
    }

    #[tokio::test]
    async fn test_check_empty_checklist_scores_zero() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("all_text.txt");
        std::fs::write(&input, NEZHA_TEXT).unwrap();
        let output = dir.path().join("out");
        let config = AppConfig {
            checklist: Vec::new(),
            ..test_config(&output)
        };

        run_build(&config, &[input]).await.unwrap();
        let checklist = run_check(&config, &output.join("triples.json")).unwrap();

        assert_eq!(checklist.found, 0);
        assert_eq!(checklist.total, 0);
        assert_eq!(checklist.rate, 0.0);
    }

    #[test]
    fn test_check_missing_file() {
        let config = AppConfig::default();
        assert!(run_check(&config, Path::new("/nonexistent/triples.json")).is_err());
    }
}
