//! Pika Metrics Dashboard
//!
//! Shows CPU usage for a single agent, reduced per minute by the aggregation
//! kind picked in the header selector.
//!
//! Data flow:
//! 1. `include_str!` embeds a small `timestamp_ms,value` CSV into the WASM binary.
//! 2. On startup: the page query string (`?aggregation=max&theme=dark`) seeds
//!    the selected aggregation and the theme.
//! 3. On mount: parse the CSV into samples.
//! 4. On aggregation change: re-bucket the samples and re-render the table.

use dioxus::prelude::*;
use pika_ui::components::{AggregationSelector, ErrorDisplay, PanelHeader};
use pika_ui::metrics::{default_options, AggregationKind};
use pika_ui::state::AppState;
use pika_ui::theme::Variant;
use serde::Deserialize;
use std::collections::BTreeMap;

const SAMPLES_CSV: &str = include_str!("../fixtures/cpu_samples.csv");

/// Width of one aggregation bucket.
const BUCKET_MS: i64 = 60_000;

/// A single raw metric sample.
#[derive(Debug, Clone, PartialEq, Deserialize)]
struct Sample {
    timestamp_ms: i64,
    value: f64,
}

/// One reduced chart point.
#[derive(Debug, Clone, PartialEq)]
struct Bucket {
    start_ms: i64,
    value: f64,
}

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus_logger::tracing::info!("Starting Pika metrics dashboard");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("metrics-dashboard-root"))
        .launch(App);
}

/// Parse the embedded samples CSV. Rows that fail to parse are skipped.
fn parse_samples_csv(csv_data: &str) -> anyhow::Result<Vec<Sample>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(csv_data.as_bytes());

    let headers = rdr.headers()?.clone();
    for required in ["timestamp_ms", "value"] {
        if !headers.iter().any(|h| h == required) {
            anyhow::bail!("samples CSV is missing the `{}` column", required);
        }
    }

    let mut samples = Vec::new();
    for result in rdr.deserialize::<Sample>() {
        match result {
            Ok(sample) => samples.push(sample),
            Err(e) => log::warn!("skipping sample row: {}", e),
        }
    }

    Ok(samples)
}

/// Group samples into `bucket_ms`-wide buckets and reduce each with `kind`.
/// Buckets are returned in time order; a bucket that reduces to nothing is dropped,
/// as is a sample whose bucket start does not fit in an `i64`.
fn bucket_samples(samples: &[Sample], bucket_ms: i64, kind: AggregationKind) -> Vec<Bucket> {
    let mut groups: BTreeMap<i64, Vec<f64>> = BTreeMap::new();
    for sample in samples {
        let Some(start) = sample.timestamp_ms.div_euclid(bucket_ms).checked_mul(bucket_ms) else {
            log::warn!("skipping sample at {} ms: bucket start out of range", sample.timestamp_ms);
            continue;
        };
        groups.entry(start).or_default().push(sample.value);
    }

    groups
        .into_iter()
        .filter_map(|(start_ms, values)| {
            kind.apply(&values).map(|value| Bucket { start_ms, value })
        })
        .collect()
}

/// Decode a `application/x-www-form-urlencoded` component: `+` is a space and
/// `%XX` is a byte. Malformed escapes are kept as-is.
fn form_decode(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => out.push(b' '),
            b'%' => {
                let escaped = raw
                    .get(i + 1..i + 3)
                    .filter(|hex| hex.bytes().all(|b| b.is_ascii_hexdigit()))
                    .and_then(|hex| u8::from_str_radix(hex, 16).ok());
                match escaped {
                    Some(byte) => {
                        out.push(byte);
                        i += 2;
                    }
                    None => out.push(b'%'),
                }
            }
            b => out.push(b),
        }
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Look up `key` in a `?a=b&c=d` query string, decoding keys and values.
/// The first occurrence wins.
fn query_param(search: &str, key: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            (form_decode(k), form_decode(v))
        })
        .find(|(k, _)| k == key)
        .map(|(_, v)| v)
}

/// Initial aggregation and theme from the page query string.
fn initial_selection(search: &str) -> (AggregationKind, Variant) {
    let aggregation = query_param(search, "aggregation")
        .map(|raw| AggregationKind::normalize(&raw))
        .unwrap_or_default();
    let variant = query_param(search, "theme")
        .map(|raw| Variant::from_query(&raw))
        .unwrap_or_default();
    (aggregation, variant)
}

/// Query string of the current page, empty if unavailable.
fn read_query_string() -> String {
    web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default()
}

/// Offset from `origin_ms` as `mm:ss`.
fn format_offset(origin_ms: i64, at_ms: i64) -> String {
    let secs = (at_ms - origin_ms).max(0) / 1000;
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(|| {
        let (aggregation, variant) = initial_selection(&read_query_string());
        AppState::with_initial(aggregation, variant)
    });
    let mut all_samples: Signal<Vec<Sample>> = use_signal(Vec::new);

    // ─── Effect: Parse CSV once on mount ───
    use_effect(move || {
        match parse_samples_csv(SAMPLES_CSV) {
            Ok(samples) if samples.is_empty() => {
                state.error_msg.set(Some("No metric samples available.".to_string()));
            }
            Ok(samples) => {
                log::info!("loaded {} metric samples", samples.len());
                all_samples.set(samples);
            }
            Err(e) => {
                state.error_msg.set(Some(format!("Failed to load samples: {}", e)));
            }
        }
        state.loading.set(false);
    });

    // Re-runs whenever the samples or the selected aggregation change.
    let buckets = use_memo(move || {
        bucket_samples(&all_samples.read(), BUCKET_MS, (state.aggregation)())
    });

    let variant = (state.variant)();
    let aggregation = (state.aggregation)();
    let page_style = format!(
        "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif; {}",
        variant.page_style()
    );
    let unit_description = format!("Percent (%), {} per minute", aggregation.label());
    let origin_ms = buckets.read().first().map(|b| b.start_ms).unwrap_or_default();
    let rows: Vec<(String, String)> = buckets
        .read()
        .iter()
        .map(|b| (format_offset(origin_ms, b.start_ms), format!("{:.1}", b.value)))
        .collect();

    // ─── Render ───
    rsx! {
        div {
            style: "{page_style}",

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone(), variant }
            }

            if *state.loading.read() {
                p { style: "text-align: center; padding: 40px; opacity: 0.7;", "Loading data..." }
            } else {
                PanelHeader {
                    title: "CPU Usage".to_string(),
                    unit_description,
                    AggregationSelector {
                        value: aggregation,
                        on_change: move |kind: AggregationKind| state.aggregation.set(kind),
                        options: default_options(),
                        variant,
                    }
                }

                table {
                    style: "width: 100%; border-collapse: collapse; font-family: monospace; font-size: 12px;",
                    thead {
                        tr {
                            th { style: "text-align: left; padding: 4px;", "Minute" }
                            th { style: "text-align: right; padding: 4px;", "CPU % ({aggregation})" }
                        }
                    }
                    tbody {
                        for (minute, value) in rows.into_iter() {
                            tr {
                                key: "{minute}",
                                td { style: "padding: 4px;", "{minute}" }
                                td { style: "text-align: right; padding: 4px;", "{value}" }
                            }
                        }
                    }
                }

                ThemeToggle {}
            }
        }
    }
}

/// Button that flips between the light and dark variants.
#[component]
fn ThemeToggle() -> Element {
    let mut state = use_context::<AppState>();
    let next = (state.variant)().toggled();
    let label = if next.is_dark() { "Dark mode" } else { "Light mode" };

    rsx! {
        div {
            style: "margin-top: 12px; padding-top: 8px; border-top: 1px solid #e0e0e0; text-align: right;",
            button {
                r#type: "button",
                onclick: move |_| state.variant.set(next),
                "{label}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(timestamp_ms: i64, value: f64) -> Sample {
        Sample { timestamp_ms, value }
    }

    #[test]
    fn test_parse_embedded_csv() {
        let samples = parse_samples_csv(SAMPLES_CSV).unwrap();
        assert_eq!(samples.len(), 60);
        assert_eq!(samples[0], sample(1735689600000, 35.0));
    }

    #[test]
    fn test_parse_skips_bad_rows() {
        let csv_data = "timestamp_ms,value\n1000,1.5\nnot-a-number,2.0\n2000,\n3000, 4.25\n";
        let samples = parse_samples_csv(csv_data).unwrap();
        assert_eq!(samples, vec![sample(1000, 1.5), sample(3000, 4.25)]);
    }

    #[test]
    fn test_parse_missing_column() {
        let err = parse_samples_csv("ts,value\n1000,1.0\n").unwrap_err();
        assert!(err.to_string().contains("timestamp_ms"));
    }

    #[test]
    fn test_bucket_avg_and_max() {
        let samples = vec![
            sample(0, 1.0),
            sample(30_000, 3.0),
            sample(60_000, 10.0),
            sample(90_000, 6.0),
            sample(150_000, 2.0),
        ];
        let avg = bucket_samples(&samples, BUCKET_MS, AggregationKind::Avg);
        assert_eq!(
            avg,
            vec![
                Bucket { start_ms: 0, value: 2.0 },
                Bucket { start_ms: 60_000, value: 8.0 },
                Bucket { start_ms: 120_000, value: 2.0 },
            ]
        );

        let max = bucket_samples(&samples, BUCKET_MS, AggregationKind::Max);
        let values: Vec<f64> = max.iter().map(|b| b.value).collect();
        assert_eq!(values, vec![3.0, 10.0, 2.0]);
    }

    #[test]
    fn test_bucket_unordered_input() {
        let samples = vec![sample(61_000, 5.0), sample(1_000, 1.0), sample(59_999, 3.0)];
        let buckets = bucket_samples(&samples, BUCKET_MS, AggregationKind::Max);
        assert_eq!(
            buckets,
            vec![Bucket { start_ms: 0, value: 3.0 }, Bucket { start_ms: 60_000, value: 5.0 }]
        );
    }

    #[test]
    fn test_bucket_empty() {
        assert!(bucket_samples(&[], BUCKET_MS, AggregationKind::Avg).is_empty());
    }

    #[test]
    fn test_query_param() {
        let search = "?aggregation=max&theme=dark&aggregation=avg";
        assert_eq!(query_param(search, "aggregation"), Some("max".to_string()));
        assert_eq!(query_param(search, "theme"), Some("dark".to_string()));
        assert_eq!(query_param(search, "range"), None);
        assert_eq!(query_param("", "theme"), None);
    }

    #[test]
    fn test_query_param_decodes_escapes() {
        let search = "?aggregation=%6Dax&theme=dark%20&%74ag=cpu+usage&bad=100%&z=%zz&sign=%+1";
        assert_eq!(query_param(search, "aggregation"), Some("max".to_string()));
        assert_eq!(query_param(search, "theme"), Some("dark ".to_string()));
        assert_eq!(query_param(search, "tag"), Some("cpu usage".to_string()));
        assert_eq!(query_param(search, "bad"), Some("100%".to_string()));
        assert_eq!(query_param(search, "z"), Some("%zz".to_string()));
        assert_eq!(query_param(search, "sign"), Some("% 1".to_string()));
        assert_eq!(query_param("?flag", "flag"), Some(String::new()));
    }

    #[test]
    fn test_initial_selection_with_encoded_values() {
        assert_eq!(
            initial_selection("?aggregation=%6Dax&theme=dark%20"),
            (AggregationKind::Max, Variant::Dark)
        );
        assert_eq!(
            initial_selection("?aggregation=+MAX+&theme=%44ARK"),
            (AggregationKind::Max, Variant::Dark)
        );
    }

    #[test]
    fn test_bucket_skips_out_of_range_timestamps() {
        let samples = vec![sample(i64::MIN, 9.0), sample(i64::MIN + 1, 9.0), sample(30_000, 4.0)];
        let buckets = bucket_samples(&samples, BUCKET_MS, AggregationKind::Max);
        assert_eq!(buckets, vec![Bucket { start_ms: 0, value: 4.0 }]);
    }

    #[test]
    fn test_initial_selection() {
        assert_eq!(initial_selection(""), (AggregationKind::Avg, Variant::Light));
        assert_eq!(
            initial_selection("?aggregation=MAX&theme=dark"),
            (AggregationKind::Max, Variant::Dark)
        );
        assert_eq!(
            initial_selection("?aggregation=median&theme=sepia"),
            (AggregationKind::Avg, Variant::Light)
        );
    }

    #[test]
    fn test_format_offset() {
        assert_eq!(format_offset(0, 0), "00:00");
        assert_eq!(format_offset(0, 90_000), "01:30");
        assert_eq!(format_offset(10_000, 0), "00:00");
    }
}
