use botwatch::application::client::MonitorClient;
use botwatch::application::monitor_app::MonitorApp;
use botwatch::application::system::Application;
use botwatch::config::Config;

use tracing::{Level, info};
use tracing_subscriber::prelude::*;

// A writer that mirrors log lines into the UI via a crossbeam channel
struct ChannelWriter {
    sender: crossbeam_channel::Sender<String>,
}

impl std::io::Write for ChannelWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let msg = String::from_utf8_lossy(buf).trim_end().to_string();
        let _ = self.sender.try_send(msg);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[derive(Clone)]
struct ChannelWriterFactory {
    sender: crossbeam_channel::Sender<String>,
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for ChannelWriterFactory {
    type Writer = ChannelWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ChannelWriter {
            sender: self.sender.clone(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logging goes to stdout and, through a channel layer, to the UI log
    // panel.
    let (log_tx, log_rx) = crossbeam_channel::unbounded();

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false).pretty();

    let ui_layer = tracing_subscriber::fmt::layer()
        .with_writer(ChannelWriterFactory { sender: log_tx })
        .with_ansi(false)
        .with_target(false);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .with(ui_layer)
        .init();

    info!("Initializing Botwatch dashboard...");

    // The pollers live on a background tokio runtime; the main thread is
    // reserved for eframe.
    let (handle_tx, handle_rx) = crossbeam_channel::bounded(1);

    std::thread::spawn(move || {
        let rt = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
            Ok(rt) => rt,
            Err(e) => {
                tracing::error!("Failed to build Tokio runtime: {}", e);
                return;
            }
        };

        rt.block_on(async move {
            let config = match Config::from_env() {
                Ok(c) => c,
                Err(e) => {
                    tracing::error!("Failed to load config: {}", e);
                    return;
                }
            };

            let app = match Application::build(config).await {
                Ok(app) => app,
                Err(e) => {
                    tracing::error!("Failed to build application: {}", e);
                    return;
                }
            };

            match app.start().await {
                Ok(handle) => {
                    let _ = handle_tx.send(handle);
                    info!("Pollers running.");
                    // Spawned tasks are detached; keep the runtime alive.
                    std::future::pending::<()>().await;
                }
                Err(e) => {
                    tracing::error!("Failed to start pollers: {}", e);
                }
            }
        });
    });

    info!("Waiting for pollers to boot...");
    let handle = handle_rx
        .recv()
        .map_err(|_| anyhow::anyhow!("Background runtime exited before handing over"))?;
    info!("Connected. Launching UI.");

    let client = MonitorClient::new(handle, log_rx);
    let monitor_app = MonitorApp::new(client);

    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 820.0])
            .with_title("Botwatch"),
        ..Default::default()
    };

    eframe::run_native(
        "Botwatch",
        native_options,
        Box::new(|cc| {
            botwatch::interfaces::ui::configure_style(&cc.egui_ctx);
            Ok(Box::new(monitor_app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    Ok(())
}
