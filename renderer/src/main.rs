use anyhow::Context;
use clap::Parser;
use client::sample::SampleConfig;
use page::server::MapServer;
use quakecore::feed::earthquake::EarthquakeFeed;
use quakecore::feed::plates::PlateFeed;
use std::fs;
use std::path::PathBuf;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use workflow::config::RenderConfig;
use workflow::runner::Runner;

mod client;
mod page;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Earthquake map fetch-and-render driver")]
struct Args {
    /// Load a render config from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    /// Where to write the rendered page
    #[arg(long, default_value = "quakemap.html")]
    output: PathBuf,
    /// Render from a local GeoJSON file instead of the USGS feed
    #[arg(long)]
    input: Option<PathBuf>,
    /// Use a deterministic synthetic feed (no network)
    #[arg(long, default_value_t = false)]
    sample: bool,
    /// Include the tectonic-plate boundary overlay
    #[arg(long, default_value_t = false)]
    plates: bool,
    /// Override the marker radius scale factor
    #[arg(long)]
    scale_factor: Option<f64>,
    /// Keep serving the rendered page over HTTP after the render pass
    #[arg(long, default_value_t = false)]
    serve: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => RenderConfig::load(path)?,
        None => RenderConfig::default(),
    };
    if args.plates {
        config.include_plates = true;
    }
    if let Some(factor) = args.scale_factor {
        config.scale_factor = factor;
    }

    let (quakes, plates) = match acquire_feeds(&args, &config) {
        Ok(feeds) => feeds,
        Err(err) => {
            log::error!("data acquisition failed: {:#}", err);
            fs::write(&args.output, page::html::render_unavailable(&format!("{:#}", err)))
                .with_context(|| format!("writing {}", args.output.display()))?;
            return Err(err);
        }
    };

    let runner = Runner::new(config);
    let document = runner.compose(&quakes, plates.as_ref());
    let rendered = page::html::render_page(&document)?;
    fs::write(&args.output, &rendered)
        .with_context(|| format!("writing {}", args.output.display()))?;

    let (projected, skipped) = runner.metrics_snapshot();
    println!(
        "Render pass -> {} markers, {} skipped, plates {} -> {}",
        projected,
        skipped,
        if document.plates.is_some() { "on" } else { "off" },
        args.output.display()
    );

    if args.serve {
        let server = MapServer::new(rendered, document);
        server.publish_status(&format!(
            "Map available at http://{} (Ctrl+C to stop)...",
            server.address()
        ));
        let runtime = TokioBuilder::new_current_thread()
            .enable_all()
            .build()
            .context("creating runtime for signal handling")?;
        runtime.block_on(async {
            signal::ctrl_c().await.context("awaiting Ctrl+C to exit")?;
            Ok::<(), anyhow::Error>(())
        })?;
    }

    Ok(())
}

/// Acquires the earthquake feed and, when enabled, the plate feed. The two
/// network fetches are strictly sequential: the plate request is only
/// issued after the earthquake body has resolved.
fn acquire_feeds(
    args: &Args,
    config: &RenderConfig,
) -> anyhow::Result<(EarthquakeFeed, Option<PlateFeed>)> {
    if args.sample {
        return Ok((client::sample::build_sample_feed(&SampleConfig::default()), None));
    }

    if let Some(path) = &args.input {
        let body = fs::read_to_string(path)
            .with_context(|| format!("reading local feed {}", path.display()))?;
        let quakes = EarthquakeFeed::from_json(&body).context("parsing local feed")?;
        return Ok((quakes, None));
    }

    let runtime = TokioBuilder::new_current_thread()
        .enable_all()
        .build()
        .context("creating runtime for feed fetches")?;
    runtime.block_on(async {
        let body = client::usgs::fetch_geojson(&config.earthquakes_url).await?;
        let quakes = EarthquakeFeed::from_json(&body).context("parsing earthquake feed")?;

        let plates = if config.include_plates {
            let body = client::usgs::fetch_geojson(&config.plates_url).await?;
            Some(PlateFeed::from_json(&body).context("parsing plate feed")?)
        } else {
            None
        };

        Ok((quakes, plates))
    })
}
