//! Subcommand implementations. Output goes to the supplied writer.

use std::io::Write;

use chromatag_core::generate::{Gradient, random_color, seeded_rng};
use chromatag_core::{CatalogItem, Hsv, LabelSet, Rgb, TAXONOMY_VERSION, classify_rgb};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cli::ClassifyArgs;
use crate::config::{GeneratorConfig, GeneratorMode};
use crate::error::CliError;

/// JSON shape of one `classify --json` line.
#[derive(Serialize)]
struct Classified<'a> {
    color: Rgb,
    hsv: Hsv,
    taxonomy_version: u32,
    labels: &'a LabelSet,
}

/// Classify every color, skipping (and counting) the ones that fail to parse.
pub fn classify<W: Write>(args: &ClassifyArgs, out: &mut W) -> Result<(), CliError> {
    let mut first_error = None;
    let mut rejected = 0;

    for input in &args.colors {
        let color: Rgb = match input.parse() {
            Ok(color) => color,
            Err(e) => {
                tracing::warn!("skipping {input:?}: {e}");
                rejected += 1;
                if first_error.is_none() {
                    first_error = Some(e);
                }
                continue;
            }
        };

        let labels = classify_rgb(color);
        if args.json {
            let line = Classified {
                color,
                hsv: Hsv::from(color),
                taxonomy_version: TAXONOMY_VERSION,
                labels: &labels,
            };
            serde_json::to_writer(&mut *out, &line)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{color} {labels}")?;
        }
    }

    tracing::debug!(total = args.colors.len(), rejected, "classify finished");

    match first_error {
        Some(first) => Err(CliError::Rejected {
            rejected,
            total: args.colors.len(),
            first,
        }),
        None => Ok(()),
    }
}

/// Emit `config.count` catalog items as JSON lines.
pub fn generate<W, F>(config: &GeneratorConfig, now: F, out: &mut W) -> Result<(), CliError>
where
    W: Write,
    F: Fn() -> DateTime<Utc>,
{
    tracing::info!(
        count = config.count,
        mode = ?config.mode,
        "generating catalog items (taxonomy v{TAXONOMY_VERSION})"
    );

    let colors: Box<dyn Iterator<Item = Rgb>> = match config.mode {
        GeneratorMode::Gradient => Box::new(Gradient::new(config.count)),
        GeneratorMode::Random => {
            let seed = config.seed.unwrap_or_else(rand::random);
            tracing::info!("random seed {seed}");
            let mut rng = seeded_rng(seed);
            Box::new((0..config.count).map(move |_| random_color(&mut rng)))
        }
    };

    for (i, color) in colors.enumerate() {
        let item = CatalogItem::for_color(color, &config.category, &config.comment, now());
        serde_json::to_writer(&mut *out, &item)?;
        writeln!(out)?;
        tracing::trace!(index = i, item = %item.item_id, "item written");
    }

    out.flush()?;
    tracing::info!(count = config.count, "done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    fn lines(buf: &[u8]) -> Vec<String> {
        String::from_utf8(buf.to_vec())
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn test_classify_plain_output() {
        let args = ClassifyArgs {
            colors: vec!["#000000".into(), "FFFFFF".into()],
            json: false,
        };
        let mut buf = Vec::new();
        classify(&args, &mut buf).unwrap();
        let out = lines(&buf);
        assert_eq!(out.len(), 2);
        assert!(out[0].starts_with("#000000 red very_dark grayscale"));
        assert!(out[1].starts_with("#ffffff red very_light grayscale"));
    }

    #[test]
    fn test_classify_json_output() {
        let args = ClassifyArgs {
            colors: vec!["#404040".into()],
            json: true,
        };
        let mut buf = Vec::new();
        classify(&args, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["color"], "#404040");
        assert_eq!(value["taxonomy_version"], 1);
        assert_eq!(value["labels"]["brightness"], "dark");
        assert_eq!(value["labels"]["tone"], "charcoal");
        assert_eq!(value["hsv"]["hue"], 0.0);
        assert_eq!(value["hsv"]["saturation"], 0.0);
        let v = value["hsv"]["value"].as_f64().unwrap();
        assert!((v - 64.0 / 255.0).abs() < 1e-9, "value {v}");
    }

    #[test]
    fn test_classify_continues_past_bad_input() {
        let args = ClassifyArgs {
            colors: vec!["#12".into(), "#ff0000".into(), "zzzzzz".into()],
            json: false,
        };
        let mut buf = Vec::new();
        let err = classify(&args, &mut buf).unwrap_err();
        assert_eq!(lines(&buf).len(), 1);
        match err {
            CliError::Rejected {
                rejected, total, ..
            } => {
                assert_eq!(rejected, 2);
                assert_eq!(total, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_generate_gradient_items() {
        let config = GeneratorConfig {
            count: 3,
            ..GeneratorConfig::default()
        };
        let mut buf = Vec::new();
        generate(&config, fixed_now, &mut buf).unwrap();

        let items: Vec<CatalogItem> = lines(&buf)
            .iter()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].item_id, "#000000");
        assert_eq!(items[1].item_id, "#7fffff");
        assert_eq!(items[2].item_id, "#ffffff");
        assert!(items.iter().all(|i| i.categories == ["color"]));
        assert!(items.iter().all(|i| i.timestamp == fixed_now()));
    }

    #[test]
    fn test_generate_random_is_seeded() {
        let config = GeneratorConfig {
            count: 20,
            mode: GeneratorMode::Random,
            seed: Some(11),
            ..GeneratorConfig::default()
        };
        let mut first = Vec::new();
        let mut second = Vec::new();
        generate(&config, fixed_now, &mut first).unwrap();
        generate(&config, fixed_now, &mut second).unwrap();
        assert_eq!(lines(&first).len(), 20);
        assert_eq!(first, second);
    }
}
