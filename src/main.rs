//! # Boleta CLI
//!
//! Command-line interface for the virtual ESC/POS printer.
//!
//! ## Usage
//!
//! ```bash
//! # Listen on port 9100 and serve the HTTP API on 127.0.0.1:8080
//! boleta serve
//!
//! # 58mm paper, raw listener only, fresh page per connection
//! boleta serve --paper 58mm --no-http --reset-on-connect
//!
//! # Decode a captured print stream and dump its bitmaps
//! boleta decode capture.bin --png-dir out/
//!
//! # Send the built-in demo receipt to a printer (virtual or real)
//! boleta send --addr 127.0.0.1:9100
//! ```

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use boleta::{
    BoletaError, PrinterConfig, VirtualPrinter,
    document::Element,
    receipt,
    render,
    server::{self, ServerConfig},
    transport,
};

/// Boleta - Virtual ESC/POS receipt printer
#[derive(Parser, Debug)]
#[command(name = "boleta")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the virtual printer
    Serve {
        /// Raw print stream listener address
        #[arg(long, default_value = "0.0.0.0:9100")]
        listen: String,

        /// HTTP API address
        #[arg(long, default_value = "127.0.0.1:8080")]
        http: String,

        /// Disable the HTTP API
        #[arg(long)]
        no_http: bool,

        /// Paper profile (80mm or 58mm)
        #[arg(long, default_value = "80mm")]
        paper: String,

        /// Characters per line (defaults to the paper's)
        #[arg(long)]
        max_columns: Option<usize>,

        /// Start a fresh document for every connection
        #[arg(long)]
        reset_on_connect: bool,
    },

    /// Decode a captured print stream and print it as text
    Decode {
        /// Capture file
        file: PathBuf,

        /// Feed the file in chunks of this many bytes
        #[arg(long)]
        chunk_size: Option<usize>,

        /// Write every bitmap element as a PNG into this directory
        #[arg(long, value_name = "DIR")]
        png_dir: Option<PathBuf>,

        /// Paper profile (80mm or 58mm)
        #[arg(long, default_value = "80mm")]
        paper: String,

        /// Characters per line (defaults to the paper's)
        #[arg(long)]
        max_columns: Option<usize>,
    },

    /// Send a print stream over raw TCP
    Send {
        /// Printer address
        #[arg(long, default_value = "127.0.0.1:9100")]
        addr: String,

        /// File to send (omit for the demo receipt)
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("boleta=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), BoletaError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            listen,
            http,
            no_http,
            paper,
            max_columns,
            reset_on_connect,
        } => {
            let printer = Arc::new(make_printer(&paper, max_columns)?);
            info!(
                paper = printer.config().name,
                max_columns = printer.max_columns(),
                "virtual printer ready"
            );
            let config = ServerConfig {
                listen_addr: listen,
                http_addr: (!no_http).then_some(http),
                reset_on_connect,
            };
            server::serve(config, printer).await
        }

        Commands::Decode {
            file,
            chunk_size,
            png_dir,
            paper,
            max_columns,
        } => {
            let data = std::fs::read(&file)?;
            let printer = make_printer(&paper, max_columns)?;

            match chunk_size {
                Some(0) => {
                    return Err(BoletaError::InvalidArgument(
                        "--chunk-size must be at least 1".to_string(),
                    ));
                }
                Some(n) => data.chunks(n).for_each(|chunk| printer.feed(chunk)),
                None => printer.feed(&data),
            }

            let elements = printer.snapshot();
            info!(
                bytes = data.len(),
                elements = elements.len(),
                "decoded {}",
                file.display()
            );
            print!("{}", render::text::render(&elements, printer.max_columns()));

            if let Some(dir) = png_dir {
                save_bitmaps(&dir, &elements)?;
            }
            Ok(())
        }

        Commands::Send { addr, file } => {
            let data = match &file {
                Some(path) => std::fs::read(path)?,
                None => receipt::demo_receipt(),
            };
            let sent = transport::send_raw(&addr, &data).await?;
            println!("Sent {} bytes to {}", sent, addr);
            Ok(())
        }
    }
}

fn make_printer(paper: &str, max_columns: Option<usize>) -> Result<VirtualPrinter, BoletaError> {
    let printer = VirtualPrinter::with_config(PrinterConfig::by_name(paper)?);
    if let Some(columns) = max_columns {
        printer.set_max_columns(columns);
    }
    Ok(printer)
}

/// Write each bitmap element as `bitmap_<index>.png`.
fn save_bitmaps(dir: &Path, elements: &[Element]) -> Result<(), BoletaError> {
    std::fs::create_dir_all(dir)?;
    for (index, bitmap) in elements
        .iter()
        .enumerate()
        .filter_map(|(i, e)| e.as_bitmap().map(|b| (i, b)))
    {
        let path = dir.join(format!("bitmap_{}.png", index));
        std::fs::write(&path, render::png::bitmap_to_png(bitmap)?)?;
        println!("Saved {}", path.display());
    }
    Ok(())
}
