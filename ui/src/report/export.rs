use std::future::Future;

use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;
use serde::Serialize;

use crate::core::filter::WeatherFilter;
use crate::i18n::use_language;
use crate::t;

use super::{figures, report_state, scene::stack_svg, ReportSnapshot};

const SNAPSHOT_GAP: f64 = 24.0;

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Working(String),
    Done(String),
    Error(String),
}

#[component]
pub fn ReportExportPanel(filter: WeatherFilter) -> Element {
    use_language();
    let status = use_signal(|| ExportStatus::Idle);
    let busy = use_signal(|| false);

    let snapshot = ReportSnapshot::compute(report_state().records(), &filter);
    let has_rows = !report_state().dataset.is_empty();

    let feedback = match &status() {
        ExportStatus::Idle => None,
        ExportStatus::Working(label) => {
            Some(("report-card__meta".to_string(), format!("{label}…")))
        }
        ExportStatus::Done(message) => Some((
            "report-card__meta report-card__meta--success".to_string(),
            format!("✅ {message}"),
        )),
        ExportStatus::Error(err) => Some((
            "report-card__meta report-card__meta--error".to_string(),
            format!("⚠️ {err}"),
        )),
    };

    let json_handler = {
        let snapshot = snapshot.clone();
        move |_| {
            run_export(
                status,
                busy,
                t!("export-working-json"),
                perform_json_export(snapshot.clone()),
            )
        }
    };

    let csv_handler = {
        let snapshot = snapshot.clone();
        move |_| {
            run_export(
                status,
                busy,
                t!("export-working-csv"),
                perform_csv_export(snapshot.clone()),
            )
        }
    };

    let image_handler = {
        let snapshot = snapshot.clone();
        move |_| {
            let svg = snapshot_svg(&snapshot, &filter);
            run_export(
                status,
                busy,
                t!("export-working-image"),
                perform_image_export(svg),
            )
        }
    };

    rsx! {
        section { class: "report-card report-export",
            div { class: "report-card__header",
                h2 { {t!("export-title")} }
            }

            p { {t!("export-intro")} }

            div { class: "report-export__actions",
                button {
                    r#type: "button",
                    class: "button button--primary",
                    disabled: busy() || !has_rows,
                    onclick: csv_handler,
                    {t!("export-csv")}
                }
                button {
                    r#type: "button",
                    class: "button",
                    disabled: busy() || !has_rows,
                    onclick: json_handler,
                    {t!("export-json")}
                }
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    disabled: busy() || !has_rows,
                    onclick: image_handler,
                    {t!("export-image")}
                }
            }

            if let Some((class_name, message)) = feedback {
                p { class: "{class_name}", "{message}" }
            }
        }
    }
}

fn run_export<F>(
    mut status: Signal<ExportStatus>,
    mut busy: Signal<bool>,
    working_label: String,
    job: F,
) where
    F: Future<Output = Result<String, String>> + 'static,
{
    if busy() {
        return;
    }
    busy.set(true);
    status.set(ExportStatus::Working(working_label));

    #[cfg(target_arch = "wasm32")]
    {
        spawn(async move {
            let outcome = job.await;
            finish_export(status, busy, outcome);
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let outcome = futures::executor::block_on(job);
        finish_export(status, busy, outcome);
    }
}

fn finish_export(
    mut status: Signal<ExportStatus>,
    mut busy: Signal<bool>,
    outcome: Result<String, String>,
) {
    match outcome {
        Ok(message) => {
            info!("export finished: {message}");
            status.set(ExportStatus::Done(message));
        }
        Err(err) => {
            warn!("export failed: {err}");
            status.set(ExportStatus::Error(err));
        }
    }
    busy.set(false);
}

async fn perform_json_export(snapshot: ReportSnapshot) -> Result<String, String> {
    let json = serde_json::to_string_pretty(&snapshot).map_err(|err| err.to_string())?;
    let filename = format!("bike-rentals-{}.json", timestamp_slug());
    let delivery = download_bytes(&filename, "application/json", json.clone().into_bytes()).await?;

    // The file is the export; the clipboard copy is a convenience on top.
    let copied = match copy_to_clipboard(json).await {
        Ok(()) => true,
        Err(err) => {
            warn!("JSON export: clipboard unavailable: {err}");
            false
        }
    };
    Ok(json_export_message(delivery.as_deref(), copied))
}

fn json_export_message(saved_to: Option<&str>, copied: bool) -> String {
    let saved = match saved_to {
        Some(path) => format!("JSON saved to {path}"),
        None => "JSON download started".to_string(),
    };
    if copied {
        format!("{saved} and copied to clipboard")
    } else {
        format!("{saved} (clipboard unavailable)")
    }
}

async fn perform_csv_export(snapshot: ReportSnapshot) -> Result<String, String> {
    let csv = build_csv(&snapshot)?;
    let filename = format!("bike-rentals-{}.csv", timestamp_slug());
    let delivery = download_bytes(&filename, "text/csv", csv.into_bytes()).await?;
    Ok(match delivery {
        Some(path) => format!("CSV saved to {path}"),
        None => "CSV download started".to_string(),
    })
}

async fn perform_image_export(svg: String) -> Result<String, String> {
    #[cfg(target_arch = "wasm32")]
    {
        let filename = format!("bike-rentals-{}.svg", timestamp_slug());
        download_bytes(&filename, "image/svg+xml", svg.into_bytes()).await?;
        Ok("SVG download started".to_string())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let png = rasterize_png(&svg)?;
        let filename = format!("bike-rentals-{}.png", timestamp_slug());
        let delivery = download_bytes(&filename, "image/png", png).await?;
        Ok(match delivery {
            Some(path) => format!("PNG snapshot saved to {path}"),
            None => "PNG download started".to_string(),
        })
    }
}

/// All three charts stacked into one document, weather chart using `filter`.
fn snapshot_svg(snapshot: &ReportSnapshot, filter: &WeatherFilter) -> String {
    let bars = filter.apply(&snapshot.weather);
    let scenes = [
        figures::weather_chart(&bars).scene(),
        figures::weekday_chart(&snapshot.weekday).scene(),
        figures::split_chart(&snapshot.split).scene(),
    ];
    stack_svg(&scenes, SNAPSHOT_GAP)
}

#[derive(Serialize)]
struct CsvRow<'a> {
    section: &'a str,
    key: String,
    value: f64,
}

fn build_csv(snapshot: &ReportSnapshot) -> Result<String, String> {
    let mut rows = Vec::new();
    for total in &snapshot.weather {
        rows.push(CsvRow {
            section: "weather",
            key: total.situation.code().to_string(),
            value: total.cnt_sum,
        });
    }
    for mean in &snapshot.weekday {
        rows.push(CsvRow {
            section: "weekday",
            key: mean.weekday.to_string(),
            value: mean.mean,
        });
    }
    rows.push(CsvRow {
        section: "split",
        key: "working_day".to_string(),
        value: snapshot.split.working_day,
    });
    rows.push(CsvRow {
        section: "split",
        key: "holiday".to_string(),
        value: snapshot.split.holiday,
    });

    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row).map_err(|err| err.to_string())?;
    }
    let bytes = writer.into_inner().map_err(|err| err.to_string())?;
    String::from_utf8(bytes).map_err(|err| err.to_string())
}

fn timestamp_slug() -> String {
    use time::{macros::format_description, OffsetDateTime};

    OffsetDateTime::now_utc()
        .format(&format_description!(
            "[year][month][day]_[hour][minute][second]"
        ))
        .unwrap_or_else(|_| "export".into())
}

#[cfg(not(target_arch = "wasm32"))]
fn rasterize_png(svg: &str) -> Result<Vec<u8>, String> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &options).map_err(|err| err.to_string())?;
    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or("Unable to allocate snapshot canvas")?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());
    pixmap.encode_png().map_err(|err| err.to_string())
}

async fn copy_to_clipboard(payload: String) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let window = web_sys::window().ok_or("window unavailable")?;
        let document = window.document().ok_or("document unavailable")?;
        let body = document.body().ok_or("missing body")?;

        let textarea = document
            .create_element("textarea")
            .map_err(|_| "Unable to create textarea")?
            .dyn_into::<web_sys::HtmlTextAreaElement>()
            .map_err(|_| "Textarea cast failed")?;
        textarea.set_value(&payload);
        let style = textarea.style();
        style.set_property("position", "fixed").ok();
        style.set_property("top", "0").ok();
        style.set_property("left", "0").ok();
        style.set_property("opacity", "0").ok();

        body.append_child(&textarea).ok();
        textarea.select();
        let copied = document.exec_command("copy").unwrap_or(false);
        textarea.remove();
        if copied {
            Ok(())
        } else {
            Err("Clipboard copy blocked".into())
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use arboard::Clipboard;

        let mut clipboard = Clipboard::new().map_err(|err| err.to_string())?;
        clipboard.set_text(payload).map_err(|err| err.to_string())
    }
}

async fn download_bytes(
    filename: &str,
    mime: &str,
    bytes: Vec<u8>,
) -> Result<Option<String>, String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let opts = BlobPropertyBag::new();
        opts.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| "Failed to create blob".to_string())?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| "Unable to create download".to_string())?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("Document unavailable")?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| "Unable to create anchor")?
            .dyn_into()
            .map_err(|_| "Anchor cast failed")?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or("Missing body")?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::fs;
        use std::io::Write;

        let _ = mime;
        let dir = desktop_export_dir()?;
        fs::create_dir_all(&dir).map_err(|err| err.to_string())?;
        let path = dir.join(filename);
        let mut file = fs::File::create(&path).map_err(|err| err.to_string())?;
        file.write_all(&bytes).map_err(|err| err.to_string())?;
        Ok(Some(path.to_string_lossy().to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn desktop_export_dir() -> Result<std::path::PathBuf, String> {
    let dirs = directories::ProjectDirs::from("org", "Bikeshare", "Bike Rental Report")
        .ok_or("Unable to determine export directory")?;
    Ok(dirs.data_dir().join("exports"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dataset::{Dataset, DatasetSource, WeatherSituation};

    fn snapshot() -> ReportSnapshot {
        let dataset = Dataset::load(&DatasetSource::Embedded).unwrap();
        ReportSnapshot::compute(dataset.records(), &WeatherFilter::default())
    }

    #[test]
    fn csv_has_one_row_per_aggregate_value() {
        let csv = build_csv(&snapshot()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "section,key,value");
        // 4 weather codes, 7 weekdays, 2 split totals.
        assert_eq!(lines.len(), 1 + 4 + 7 + 2);
        assert!(lines[1].starts_with("weather,1,"));
        assert!(lines[4].starts_with("weather,4,0"));
        assert!(lines.last().unwrap().starts_with("split,holiday,"));
    }

    #[test]
    fn snapshot_svg_stacks_three_charts() {
        crate::i18n::init();
        let mut filter = WeatherFilter::default();
        filter.set(WeatherSituation::HeavyPrecipitation, false);
        let svg = snapshot_svg(&snapshot(), &filter);
        assert_eq!(svg.matches("<g transform=").count(), 3);
        assert!(svg.contains("%</text>"));
    }

    #[test]
    fn json_export_reports_missing_clipboard_without_failing() {
        assert_eq!(
            json_export_message(Some("/tmp/out.json"), false),
            "JSON saved to /tmp/out.json (clipboard unavailable)"
        );
        assert_eq!(
            json_export_message(None, true),
            "JSON download started and copied to clipboard"
        );
    }

    #[test]
    fn snapshot_json_uses_numeric_weather_codes() {
        let json = serde_json::to_value(snapshot()).unwrap();
        assert_eq!(json["weather"][0]["weathersit"], 1);
        assert_eq!(json["selected_weather"].as_array().map(|a| a.len()), Some(4));
    }
}
