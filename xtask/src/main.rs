use camino::{Utf8Path, Utf8PathBuf};
use miette::{IntoDiagnostic, Result, WrapErr};
use rayon::prelude::*;
use stepladder::export::{SvgOptions, render_svg, render_views_svg};
use stepladder::extents::extents;
use stepladder::layout::{FrameParams, StepParams, layout_steps};
use stepladder::views::derive_views;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo xtask <command>");
        eprintln!("Commands:");
        eprintln!("  render-html [out.html]    Render every preset into one HTML preview page");
        std::process::exit(1);
    }

    match args[1].as_str() {
        "render-html" => {
            let output = args
                .get(2)
                .map(|s| Utf8PathBuf::from(s.as_str()))
                .unwrap_or_else(default_output_path);
            render_html(&output)
        }
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            std::process::exit(1);
        }
    }
}

fn default_output_path() -> Utf8PathBuf {
    Utf8Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap_or(Utf8Path::new("."))
        .join("preview.html")
}

enum Preset {
    Frame(FrameParams),
    Steps(StepParams),
}

fn presets() -> Vec<(&'static str, Preset)> {
    let base = FrameParams::default();
    vec![
        ("default", Preset::Frame(base)),
        (
            "wide",
            Preset::Frame(FrameParams { top_width: 900.0, bottom_width: 850.0, ..base }),
        ),
        (
            "deep",
            Preset::Frame(FrameParams { depth: 450.0, depth_rod_width: 50.0, ..base }),
        ),
        ("upright-legs", Preset::Frame(FrameParams { leg_angle_deg: 90.0, ..base })),
        ("splayed-legs", Preset::Frame(FrameParams { leg_angle_deg: 70.0, ..base })),
        ("ladder-4", Preset::Steps(StepParams::default())),
        (
            "ladder-6",
            Preset::Steps(StepParams { number_of_steps: 6, ..StepParams::default() }),
        ),
    ]
}

struct Rendered {
    name: &'static str,
    summary: String,
    body: Result<String, String>,
}

fn render_preset(name: &'static str, preset: &Preset) -> Rendered {
    let options = SvgOptions { scale: 0.5, stroke_width: 1.0, ..SvgOptions::default() };
    let (summary, body) = match preset {
        Preset::Frame(params) => {
            let summary = format!(
                "top {} × {}, rods {} × {}, depth {}, legs {}°",
                params.top_width,
                params.top_height,
                params.rod_width,
                params.rod_height,
                params.depth,
                params.leg_angle_deg
            );
            let body = derive_views(params).and_then(|views| {
                let bounds = extents(&views.front);
                tracing::debug!(name, %bounds, "front extents");
                render_views_svg(&views, &options)
            });
            (summary, body)
        }
        Preset::Steps(params) => {
            let summary = format!(
                "{} steps of {} × {}, top step {}",
                params.number_of_steps, params.step_width, params.step_height, params.top_step_width
            );
            let body = layout_steps(params).and_then(|model| render_svg(&model, &options));
            (summary, body)
        }
    };
    Rendered { name, summary, body: body.map_err(|e| e.to_string()) }
}

fn render_html(output: &Utf8Path) -> Result<()> {
    let presets = presets();
    let rendered: Vec<Rendered> = presets
        .par_iter()
        .map(|(name, preset)| render_preset(*name, preset))
        .collect();

    let failed = rendered.iter().filter(|r| r.body.is_err()).count();

    let mut html = String::new();
    html.push_str(&format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>stepladder presets</title>
    <style>
        body {{
            font-family: system-ui, sans-serif;
            margin: 0;
            background: #eee;
            color: #333;
        }}
        .page {{
            max-width: 1400px;
            margin: 0 auto;
            padding: 24px;
        }}
        .card {{
            background: #fff;
            border-radius: 6px;
            margin-bottom: 24px;
            padding: 16px;
        }}
        .card h2 {{
            font-size: 16px;
            margin: 0 0 4px 0;
        }}
        .summary {{
            color: #777;
            font-size: 13px;
            margin-bottom: 12px;
        }}
        .svg-container svg {{
            max-width: 100%;
            height: auto;
        }}
        .error {{
            color: #b00;
            font-family: monospace;
            white-space: pre-wrap;
        }}
    </style>
</head>
<body>
<div class="page">
<h1>{} presets, {} failed</h1>
"#,
        rendered.len(),
        failed
    ));

    for r in &rendered {
        let content = match &r.body {
            Ok(svg) => format!(r#"<div class="svg-container">{svg}</div>"#),
            Err(e) => format!(r#"<div class="error">{}</div>"#, html_escape(e)),
        };
        html.push_str(&format!(
            r#"
<div class="card" id="{name}">
    <h2>{name}</h2>
    <div class="summary">{summary}</div>
    {content}
</div>
"#,
            name = r.name,
            summary = html_escape(&r.summary),
        ));
    }

    html.push_str("</div>\n</body></html>\n");

    std::fs::write(output, html)
        .into_diagnostic()
        .wrap_err_with(|| format!("writing {output}"))?;
    println!("Generated preview at: {output}");
    Ok(())
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
