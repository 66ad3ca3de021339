use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use ionexpert_rs::constants::PAYLOAD_LEN;
use ionexpert_rs::{
    connect_with_config, decode_payload, init_logger, log_info, ClockMode, SerialConfig,
};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "ionexpert-cli")]
#[command(about = "CLI tool for reading Expert-001 ion meter telemetry")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Stream readings from a serial port and print them as JSON
    Read {
        port: String,
        #[arg(short, long, default_value = "9600")]
        baudrate: u32,
        /// Read timeout in seconds; an idle line ends the stream
        #[arg(short, long, default_value = "5")]
        timeout: u64,
        /// Take minute/second from the device clock instead of the system clock
        #[arg(long)]
        device_clock: bool,
    },
    /// Decode a single 16-byte payload given as hex
    Decode { payload: String },
}

fn main() -> anyhow::Result<()> {
    init_logger();

    let cli = Cli::parse();

    match cli.command {
        Commands::Read {
            port,
            baudrate,
            timeout,
            device_clock,
        } => {
            let config = SerialConfig {
                baudrate,
                timeout: Duration::from_secs(timeout),
            };
            let handle = connect_with_config(&port, config)?;
            log_info(&format!("Connected to Expert-001 device on {port}"));

            let clock = if device_clock {
                ClockMode::Device
            } else {
                ClockMode::System
            };
            for reading in handle.into_stream(clock) {
                println!("{}", reading?);
            }
            log_info("End of stream");
        }
        Commands::Decode { payload } => {
            let bytes = hex::decode(payload.trim()).context("invalid hex payload")?;
            if bytes.len() != PAYLOAD_LEN {
                bail!("expected {PAYLOAD_LEN} payload bytes, got {}", bytes.len());
            }
            let mut buf = [0u8; PAYLOAD_LEN];
            buf.copy_from_slice(&bytes);
            println!("{}", decode_payload(&buf, ClockMode::System)?);
        }
    }

    Ok(())
}
