//! Analyze a page of recognized words stored as JSON.
//!
//! Usage: cargo run --example analyze_words -- words.json [--repair-spacing]
//!
//! The input is a JSON array of `{text, x, y, width, height, confidence}`
//! objects. The detected structure is printed as JSON on stdout.

use ocr_layout::layout::{read_words_file, LayoutAnalyzer, OcrResult};
use ocr_layout::text::repair_spacing;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    let Some(path) = args.get(1) else {
        eprintln!("Usage: {} <words.json> [--repair-spacing]", args[0]);
        std::process::exit(1);
    };
    let repair = args.iter().any(|a| a == "--repair-spacing");

    let words = read_words_file(path)?;
    let page = OcrResult::from_words(words);
    log::info!(
        "Loaded {} words from {} (confidence {:.1}%)",
        page.words.len(),
        path,
        page.confidence * 100.0
    );

    let mut structure = LayoutAnalyzer::new().analyze_ocr_result(&page);
    if repair {
        structure = structure.map_content(repair_spacing);
    }

    for kind in ["heading", "paragraph", "list", "table"] {
        log::info!("{:>9}: {}", kind, structure.count_kind(kind));
    }

    println!("{}", serde_json::to_string_pretty(&structure)?);
    Ok(())
}
