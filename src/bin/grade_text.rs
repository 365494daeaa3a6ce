use std::io::Read;

use essaylens::models::{AnalysisResult, SentenceReport, UsageStats};
use essaylens::services::analytics_store::AnalyticsStore;
use essaylens::services::detection::analyze;
use essaylens::services::humanizer::sentence_reports;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report {
    analysis: AnalysisResult,
    sentences: Vec<SentenceReport>,
}

fn preview(s: &str, max_chars: usize) -> String {
    let mut out: String = s.chars().take(max_chars).collect();
    if s.chars().count() > max_chars {
        out.push_str("...");
    }
    out.replace('\n', " ")
}

fn parse_arg_value(args: &[String], key: &str) -> Option<String> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn has_flag(args: &[String], key: &str) -> bool {
    args.iter().any(|a| a == key)
}

fn main() -> Result<(), String> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!(
            "Usage:\n  cargo run --bin grade_text -- <path.txt|-> [--sentences <n>] [--out <json_path>] [--no-stats]\n\nNotes:\n  - Pass `-` to read the text from stdin.\n  - `--out` writes the full report as JSON next to the console summary.\n  - `--no-stats` skips updating the local usage counters."
        );
        return Ok(());
    }

    essaylens::init_logging();

    let path = args[1].clone();
    let sentences_n: usize = parse_arg_value(&args, "--sentences")
        .and_then(|s| s.parse().ok())
        .unwrap_or(50);
    let out_path = parse_arg_value(&args, "--out");
    let skip_stats = has_flag(&args, "--no-stats");

    let text = if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("read stdin failed: {}", e))?;
        buf
    } else {
        std::fs::read_to_string(&path).map_err(|e| format!("read file failed: {}", e))?
    };

    let analysis = analyze(&text).map_err(|e| e.to_string())?;
    let sentences = sentence_reports(&text);

    println!("Input: {}", if path == "-" { "(stdin)" } else { &path });
    println!(
        "Verdict: {} ({}% confidence)",
        if analysis.is_ai { "likely AI" } else { "likely human" },
        analysis.confidence
    );
    println!(
        "Words: {}  Sentences: {}  Paragraphs: {}",
        analysis.metrics.word_count,
        analysis.metrics.sentence_count,
        analysis.metrics.paragraph_count
    );
    println!();
    println!("{}", analysis.details);
    println!();

    let suspect_count = sentences.iter().filter(|s| s.suspect).count();
    println!("Suspect sentences: {}/{}", suspect_count, sentences.len());
    for report in sentences.iter().take(sentences_n) {
        let marker = if report.suspect { "!" } else { " " };
        println!(
            "[{}{:04}] human={:>3}  {}",
            marker,
            report.index,
            report.human_likeness,
            preview(&report.text, 100)
        );
        if let Some(ref rewrite) = report.rewrite {
            println!("        suggest: {}", preview(rewrite, 100));
        }
    }
    if sentences.len() > sentences_n {
        println!("... ({} more sentences)", sentences.len() - sentences_n);
    }

    if !skip_stats {
        if let Some(dir) = AnalyticsStore::default_stats_dir() {
            let store = AnalyticsStore::new(dir);
            let delta = UsageStats {
                total_analyses: 1,
                total_words_analyzed: analysis.metrics.word_count as u64,
                total_suspect_sentences: suspect_count as u64,
                total_rewrite_suggestions: sentences.iter().filter(|s| s.rewrite.is_some()).count()
                    as u64,
            };
            match store.increment(&delta) {
                Ok(totals) => println!(
                    "\nLifetime: {} analyses, {} words",
                    totals.total_analyses, totals.total_words_analyzed
                ),
                Err(e) => eprintln!("stats update failed: {}", e),
            }
        }
    }

    if let Some(out) = out_path {
        let report = Report {
            analysis,
            sentences,
        };
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("serialize report failed: {}", e))?;
        std::fs::write(&out, json).map_err(|e| format!("write report failed: {}", e))?;
        println!("\nReport written to {}", out);
    }

    Ok(())
}
