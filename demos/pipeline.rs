/// Example: extraction -> normalization -> chunking -> concepts
///
/// Reads a source file (or stdin), chunks it, extracts concepts and shows
/// the requests that would go to a summarization service.
///
/// Run with:
///   cargo run --example pipeline -- notes.md --chunk-size 800 --overlap 100
///   RUST_LOG=noteweave=debug cargo run --example pipeline -- lecture.txt --json
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use noteweave::{
    ChunkingConfig, ChunkingMode, Chunker, ExtractorRegistry, GenerationRequest, extract_concepts,
    normalize,
};
use std::io::Read;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Chunk a document and extract its key concepts")]
struct Args {
    /// Source file; reads stdin when omitted
    path: Option<PathBuf>,

    /// JSON chunking config; flags below override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Maximum chunk length in characters
    #[arg(long)]
    chunk_size: Option<usize>,

    /// Characters repeated from the end of one chunk into the next
    #[arg(long)]
    overlap: Option<usize>,

    /// Chunking strategy
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Print chunks as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum ModeArg {
    /// Prefer blank lines, headings, chapter labels and timestamps
    Boundary,
    /// Plain fixed-size windows
    Fixed,
}

impl From<ModeArg> for ChunkingMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Boundary => ChunkingMode::Boundary,
            ModeArg::Fixed => ChunkingMode::Fixed,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = build_config(&args)?;
    let start_time = Instant::now();

    // Step 1: Extract text
    let step_start = Instant::now();
    let (name, bytes) = read_source(args.path.as_ref())?;
    let registry = ExtractorRegistry::new();
    let extracted = registry
        .extract(&name, &bytes)
        .with_context(|| format!("Failed to extract text from {}", name))?;
    eprintln!(
        "✓ Extracted {} [{:?}] - {} lines, {} pages [{:.3}s]",
        extracted.metadata.name,
        extracted.metadata.kind,
        extracted.metadata.line_count,
        extracted.page_breaks.len() + 1,
        step_start.elapsed().as_secs_f64()
    );

    // Step 2: Normalize
    let step_start = Instant::now();
    let normalized = normalize(extracted.text.as_str());
    eprintln!(
        "✓ Normalized {} -> {} bytes [{:.3}s]",
        extracted.text.len(),
        normalized.len(),
        step_start.elapsed().as_secs_f64()
    );

    // Step 3: Chunk
    let step_start = Instant::now();
    let chunker = Chunker::new(config);
    let chunks = chunker.chunk(&normalized);
    let resolved = config.resolve();
    eprintln!(
        "✓ {} chunks (size {}, overlap {}, {:?}) [{:.3}s]",
        chunks.len(),
        resolved.chunk_size,
        resolved.overlap,
        resolved.mode,
        step_start.elapsed().as_secs_f64()
    );

    // Step 4: Concepts
    let step_start = Instant::now();
    let concepts = extract_concepts(normalized.as_str());
    eprintln!(
        "✓ {} concepts [{:.3}s]",
        concepts.len(),
        step_start.elapsed().as_secs_f64()
    );

    // Step 5: Requests for the downstream consumer
    let texts: Vec<String> = chunks.iter().map(|c| c.text.clone()).collect();
    let requests = GenerationRequest::for_chunks(&texts, Some("Summarize this section"));

    if args.json {
        let output = serde_json::json!({
            "chunks": chunks,
            "concepts": concepts,
            "requests": requests.len(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("=== Chunks ===");
        for chunk in chunks.iter().take(5) {
            let preview: String = chunk.text.chars().take(60).collect();
            println!(
                "  #{} [{:?}] {} chars, {} words: {:?}...",
                chunk.index, chunk.origin, chunk.char_count, chunk.word_count, preview
            );
        }
        if chunks.len() > 5 {
            println!("  ... {} more", chunks.len() - 5);
        }

        println!("\n=== Concepts ===");
        println!("  {}", concepts.join(", "));

        println!("\n=== Requests ===");
        println!("  {} text requests ready for the summarizer", requests.len());
    }

    eprintln!("\nTotal: {:.3}s", start_time.elapsed().as_secs_f64());
    Ok(())
}

fn build_config(args: &Args) -> Result<ChunkingConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            ChunkingConfig::from_json_str(&json)?
        }
        None => ChunkingConfig::default(),
    };

    if let Some(size) = args.chunk_size {
        config.chunk_size = size;
    }
    if let Some(overlap) = args.overlap {
        config.overlap = overlap;
    }
    if let Some(mode) = args.mode {
        config.mode = mode.into();
    }

    Ok(config)
}

fn read_source(path: Option<&PathBuf>) -> Result<(String, Vec<u8>)> {
    match path {
        Some(path) => {
            let bytes = std::fs::read(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Ok((path.display().to_string(), bytes))
        }
        None => {
            let mut bytes = Vec::new();
            std::io::stdin()
                .read_to_end(&mut bytes)
                .context("Failed to read stdin")?;
            Ok(("stdin.txt".to_string(), bytes))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_flag_parses_known_values() {
        let args = Args::try_parse_from(["pipeline", "notes.md", "--mode", "fixed"]).unwrap();
        assert_eq!(args.mode, Some(ModeArg::Fixed));
        assert_eq!(build_config(&args).unwrap().mode, ChunkingMode::Fixed);
    }

    #[test]
    fn test_mode_flag_rejects_unknown_value() {
        assert!(Args::try_parse_from(["pipeline", "--mode", "sideways"]).is_err());
    }

    #[test]
    fn test_flags_override_defaults() {
        let args =
            Args::try_parse_from(["pipeline", "--chunk-size", "800", "--overlap", "50"]).unwrap();
        let config = build_config(&args).unwrap();
        assert_eq!(config.chunk_size, 800);
        assert_eq!(config.overlap, 50);
        assert_eq!(config.mode, ChunkingMode::Boundary);
    }
}
