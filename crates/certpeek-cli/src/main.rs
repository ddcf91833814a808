use std::io::Read;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

use certpeek_x509::{format_time, Certificate};

/// Decode a PEM-encoded X.509 certificate and print its fields.
#[derive(Parser)]
#[command(name = "certpeek")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Input PEM file (use - for stdin).
    input: String,
    /// Print the full text report instead of the summary.
    #[arg(short, long)]
    text: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let pem = if cli.input == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(&cli.input)?
    };

    let cert = Certificate::from_pem(&pem).map_err(|e| format!("{}: {e}", cli.input))?;
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default();

    if cli.text {
        print!("{}", cert.to_text_at(now));
    } else {
        println!("subject= {}", cert.subject);
        println!("issuer= {}", cert.issuer);
        println!("serial= {}", cert.serial_hex());
        println!("notBefore= {}", format_time(cert.not_before));
        println!("notAfter= {}", format_time(cert.not_after));
        println!("status= {}", cert.validity_status(now));
    }

    Ok(())
}
