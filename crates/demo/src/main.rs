// File: crates/demo/src/main.rs
// Summary: Demo loads readings (and optional style attributes) from CSV and renders reveal-animation frames to PNGs.

use anyhow::{Context, Result};
use gauge_core::{Density, Gauge, GaugeConfig, Insets, Surface};
use gauge_render_skia::{render_to_png, RenderOptions, SkiaTextMetrics};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Frames sampled from each reveal.
const FRAMES: u32 = 6;

fn main() -> Result<()> {
    env_logger::init();

    // Args: [readings.csv] [attributes.csv]
    let mut args = std::env::args().skip(1);
    let readings_path = args.next().map(PathBuf::from);
    let attrs_path = args.next().map(PathBuf::from);

    let config = match &attrs_path {
        Some(p) => load_config(p).with_context(|| format!("failed to load attributes '{}'", p.display()))?,
        None => demo_config()?,
    };
    println!("Gauge '{}' range [{}, {}] {}", config.title, config.min, config.max, config.data_unit);

    let readings = match &readings_path {
        Some(p) => load_readings(p).with_context(|| format!("failed to load CSV '{}'", p.display()))?,
        None => vec![12.0, 48.0, 95.0, 140.0, 180.0],
    };
    println!("Loaded {} readings", readings.len());
    if readings.is_empty() {
        anyhow::bail!("no readings loaded; expected a `value` column");
    }

    let surface = Surface::new(480, 320, Insets::uniform(16));
    let metrics = SkiaTextMetrics::new();
    let opts = RenderOptions::default();

    let mut gauge = Gauge::new(config);
    let t0 = Instant::now();
    gauge.attach(t0);

    let out_dir = PathBuf::from("target/out");
    for (n, &value) in readings.iter().enumerate() {
        let start = t0 + Duration::from_secs(n as u64 * 2);
        gauge.update_data_value(value, start);
        let reveal = gauge_core::REVEAL_DURATION;
        for f in 0..=FRAMES {
            let now = start + reveal * f / FRAMES;
            if !gauge.tick(now) && f > 0 {
                continue;
            }
            gauge.take_dirty();
            let pct = (gauge.state().animated_fraction * 100.0).round() as u32;
            let out = out_dir.join(format!("gauge_{n}_{pct:03}.png"));
            let list = gauge.render(&surface, &metrics);
            render_to_png(&list, &opts, &out)?;
            log::debug!("frame {f}/{FRAMES} of reading {value}: {} commands", list.len());
        }
        println!("Rendered reading {value} ({} frames)", FRAMES + 1);
    }
    gauge.detach();
    println!("Wrote frames to {}", out_dir.display());
    Ok(())
}

/// PM2.5 style with AQI-like bands, animated and auto-colored.
fn demo_config() -> Result<GaugeConfig> {
    let attrs = [
        ("max", "180"),
        ("title", "PM2.5"),
        ("dataUnit", "µg/m³"),
        ("enableAutoColor", "true"),
        ("enableAnimator", "true"),
        ("axisLineWidth", "6dp"),
        ("detailSize", "22sp"),
        ("extBtnWidth", "72dp"),
    ];
    Ok(GaugeConfig::from_attributes(attrs, Density::new(1.5, 1.5))?)
}

/// `key,value` rows; an optional `density` row scales dp/sp sizes.
fn load_config(path: &Path) -> Result<GaugeConfig> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut pairs = Vec::new();
    let mut density = Density::default();
    for rec in rdr.records() {
        let rec = rec?;
        let (Some(key), Some(value)) = (rec.get(0), rec.get(1)) else { continue };
        if key.eq_ignore_ascii_case("density") {
            let d: f32 = value.parse().with_context(|| format!("density {value:?}"))?;
            density = Density::new(d, d);
        } else {
            pairs.push((key.to_string(), value.to_string()));
        }
    }
    let config = GaugeConfig::from_attributes(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())), density)?;
    Ok(config)
}

/// Readings from the `value` column (or the first column when absent).
fn load_readings(path: &Path) -> Result<Vec<f32>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    let col = match value_column(&headers) {
        Some(col) => col,
        None => {
            println!("Warning: no `value` column in {:?}; using the first column.", headers);
            0
        }
    };

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        match rec.get(col).and_then(|s| s.parse::<f32>().ok()) {
            Some(v) => out.push(v),
            None => log::warn!("skipping row {:?}", rec.position().map(|p| p.line())),
        }
    }
    Ok(out)
}

/// Index of the `value` (or `reading`) column, matched case-insensitively.
fn value_column<S: AsRef<str>>(headers: &[S]) -> Option<usize> {
    headers.iter().position(|h| {
        let h = h.as_ref();
        h.eq_ignore_ascii_case("value") || h.eq_ignore_ascii_case("reading")
    })
}

#[cfg(test)]
mod tests {
    use super::value_column;

    #[test]
    fn value_column_finds_named_columns() {
        assert_eq!(value_column(["reading", "time"].as_slice()), Some(0));
        assert_eq!(value_column(["time", "Value"].as_slice()), Some(1));
        assert_eq!(value_column(["time", "pm25"].as_slice()), None);
        assert_eq!(value_column::<&str>(&[]), None);
    }
}
